pub mod divider;
