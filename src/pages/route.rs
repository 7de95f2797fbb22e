//! Route page - choose a destination for the journey.

use dioxus::prelude::*;
use panorama_core::submit_route;
use panorama_ui::{Button, MessageDialog};

use crate::app::Route;

#[component]
pub fn JourneyRoute() -> Element {
    let mut destination = use_signal(String::new);
    let mut message: Signal<Option<String>> = use_signal(|| None);

    let mut submit = move || {
        let outcome = submit_route(&destination.read());
        if outcome.clears_input() {
            destination.set(String::new());
        }
        message.set(Some(outcome.message().to_string()));
    };

    rsx! {
        main { class: "route-page",
            Link { class: "back-link", to: Route::Showcase {}, "\u{2190} Back" }

            h1 { class: "page-title", "Chart your route" }
            div { class: "route-form",
                input {
                    id: "routeInput",
                    r#type: "text",
                    placeholder: "Enter a destination",
                    value: "{destination}",
                    oninput: move |evt: FormEvent| destination.set(evt.value()),
                    onkeypress: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            submit();
                        }
                    },
                }
                Button { onclick: move |_| submit(), "Begin Journey" }
            }

            MessageDialog {
                message: message(),
                on_dismiss: move |_| message.set(None),
            }
        }
    }
}
