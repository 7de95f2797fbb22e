//! Modal message dialog for short confirmations (route submitted, door
//! opened). Multi-line messages keep their line breaks.

use dioxus::prelude::*;

use super::{Button, ButtonVariant};

#[component]
pub fn MessageDialog(message: Option<String>, on_dismiss: EventHandler<()>) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "dialog-backdrop",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                on_dismiss.call(());
            },
            div {
                class: "message-dialog",
                role: "alertdialog",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                for line in message.lines() {
                    p { "{line}" }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| on_dismiss.call(()),
                    "OK"
                }
            }
        }
    }
}
