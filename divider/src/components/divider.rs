use leptos::*;

use crate::types::{ContentPosition, Direction, DividerConfig};

/// Divider line component, optionally labeled.
///
/// The label is rendered only for horizontal dividers with content; a
/// vertical divider drops its content instead of mis-rendering it.
#[component]
pub fn Divider(
    #[prop(optional)] direction: Direction,
    #[prop(optional)] content_position: ContentPosition,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let config = DividerConfig::new(direction, content_position);

    let label = children
        .filter(|_| config.shows_label(true))
        .map(|children| {
            view! {
                <div class=config.label_class()>{children()}</div>
            }
        });

    view! {
        <div class=config.root_class()>
            {label}
        </div>
    }
}
