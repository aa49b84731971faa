pub mod components;
pub mod types;

pub use components::divider::Divider;
pub use types::{ContentPosition, Direction, DividerConfig, InvalidConfigurationValue};
