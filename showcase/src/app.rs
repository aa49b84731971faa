use leptos::*;

use divider::{ContentPosition, Direction, Divider};

/// Showcase page exercising every supported divider configuration.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="container">
            <h1>"Divider showcase"</h1>

            <section>
                <h2>"Plain"</h2>
                <p>"Text above the divider."</p>
                <Divider />
                <p>"Text below the divider."</p>
            </section>

            <section>
                <h2>"Labeled"</h2>
                <p>"The label position only affects where the text sits along the line."</p>
                <Divider content_position=ContentPosition::Left>"Left"</Divider>
                <Divider>"Center"</Divider>
                <Divider content_position=ContentPosition::Right>"Right"</Divider>
            </section>

            <section>
                <h2>"Vertical"</h2>
                <p>
                    "Apples"
                    <Divider direction=Direction::Vertical />
                    "Oranges"
                    <Divider direction=Direction::Vertical />
                    // Content on a vertical divider is dropped, not rendered.
                    <Divider direction=Direction::Vertical>"Ignored"</Divider>
                    "Pears"
                </p>
            </section>
        </main>
    }
}
