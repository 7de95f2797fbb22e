//! Custom cursor dot that replaces the system pointer.

use dioxus::prelude::*;
use panorama_core::CursorState;

/// Renders the cursor at the tracked position.
///
/// Pointer tracking happens on the page root (`onmousemove`,
/// `onmouseleave`, `onmouseenter`); this component only draws.
#[component]
pub fn CustomCursor(state: CursorState) -> Element {
    rsx! {
        div {
            id: "custom-cursor",
            class: "custom-cursor",
            style: "{state.style()}",
            "aria-hidden": "true",
        }
    }
}
