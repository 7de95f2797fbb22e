//! Floating info bubble for wardrobe keywords.

use dioxus::prelude::*;

/// Clicking the bubble closes it; `closing` plays the exit animation.
#[component]
pub fn InfoBubble(
    title: String,
    description: String,
    closing: bool,
    on_close: EventHandler<()>,
) -> Element {
    let class = if closing {
        "info-bubble closing"
    } else {
        "info-bubble"
    };

    rsx! {
        div {
            class: "{class}",
            role: "dialog",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                on_close.call(());
            },
            h3 { "{title}" }
            p { "{description}" }
        }
    }
}
