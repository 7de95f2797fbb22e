//! Slide-in panel showing a research topic or policy.

use dioxus::prelude::*;
use panorama_core::Detail;

use super::CloseButton;

/// Detail panel; hidden when `detail` is `None`.
#[component]
pub fn DetailPanel(detail: Option<Detail>, on_close: EventHandler<()>) -> Element {
    let class = if detail.is_some() {
        "detail-panel active"
    } else {
        "detail-panel"
    };

    rsx! {
        aside { id: "detailPanel", class: "{class}",
            CloseButton { onclick: move |_| on_close.call(()) }
            if let Some(detail) = detail {
                div { class: "detail-body",
                    h2 { "{detail.title}" }
                    p { "{detail.description}" }
                    h3 { "{detail.kind.items_heading()}" }
                    ul {
                        for item in detail.items.iter() {
                            li { "{item}" }
                        }
                    }
                }
            }
        }
    }
}
