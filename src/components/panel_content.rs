//! Panel content for the showcase.
//!
//! Each panel id maps to its own block. Everything here is local to the
//! panel: prompts open a [`MessageDialog`], clicks are logged, and only the
//! "back to start" button touches navigation (through `on_home`).

use std::time::Instant;

use dioxus::prelude::*;
use panorama_core::showcase::{
    record_click, ProgressAnimation, ShowcaseClick, CONTACT_LINKS, EXPERIMENTS, GALLERY_SIZE,
    PROGRESS_FILL_DELAY, SKILLS,
};
use panorama_core::wardrobe::{mouse_percent, mouse_style, select_mode, Rect, MODES};
use panorama_core::{submit_route, Threshold, WardrobeMode};
use panorama_ui::{Button, ButtonVariant, MessageDialog};

use crate::app::Route;

#[derive(Props, Clone, PartialEq)]
pub struct PanelContentProps {
    /// Panel fragment id
    pub id: String,
    pub title: String,
    /// Whether this panel is the current one
    pub active: bool,
    /// Return to the first panel
    pub on_home: EventHandler<()>,
}

#[component]
pub fn PanelContent(props: PanelContentProps) -> Element {
    let mut message: Signal<Option<String>> = use_signal(|| None);
    let show = use_callback(move |text: String| message.set(Some(text)));

    let body = match props.id.as_str() {
        "intro" => rsx! { IntroPanel {} },
        "route" => rsx! { RoutePanel { on_message: show } },
        "wardrobe" => rsx! { WardrobePanel { on_message: show } },
        "door-mirror" => rsx! { ThresholdPanel { on_message: show } },
        "progress" => rsx! { SkillBars { active: props.active } },
        "gallery" => rsx! { GalleryPanel {} },
        "experimental" => rsx! { ExperimentPanel {} },
        "journey" => rsx! { JourneyPanel {} },
        "contact" => rsx! { ContactPanel { on_home: props.on_home } },
        _ => rsx! {},
    };

    rsx! {
        h2 { class: "panel-title", "{props.title}" }
        {body}
        MessageDialog {
            message: message(),
            on_dismiss: move |_| message.set(None),
        }
    }
}

#[component]
fn IntroPanel() -> Element {
    rsx! {
        p { class: "panel-lead",
            "Scroll, swipe or use the arrow keys to travel through the work."
        }
        Link { class: "panel-link", to: Route::Intro {}, "Begin the narrative" }
    }
}

#[component]
fn RoutePanel(on_message: EventHandler<String>) -> Element {
    let mut destination = use_signal(String::new);

    let mut submit = move || {
        let outcome = submit_route(&destination.read());
        if outcome.clears_input() {
            destination.set(String::new());
        }
        on_message.call(outcome.message().to_string());
    };

    rsx! {
        div { class: "route-form",
            input {
                id: "routeInput",
                r#type: "text",
                placeholder: "Where does your journey lead?",
                value: "{destination}",
                oninput: move |evt: FormEvent| destination.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    evt.stop_propagation();
                    if evt.key() == Key::Enter {
                        submit();
                    }
                },
            }
            Button { onclick: move |_| submit(), "Set Route" }
        }
    }
}

#[component]
fn WardrobePanel(on_message: EventHandler<String>) -> Element {
    rsx! {
        div { class: "wardrobe-grid",
            for mode in MODES.iter() {
                WardrobeItem { key: "{mode.key}", mode: *mode, on_message }
            }
        }
        Link { class: "panel-link", to: Route::Wardrobe {}, "Open the wardrobe" }
    }
}

/// Wardrobe tile with a highlight that follows the pointer.
#[component]
fn WardrobeItem(mode: WardrobeMode, on_message: EventHandler<String>) -> Element {
    let mut rect: Signal<Option<Rect>> = use_signal(|| None);
    let mut pointer = use_signal(|| (50.0, 50.0));

    rsx! {
        div {
            class: "wardrobe-item",
            "data-mode": mode.key,
            style: "{mouse_style(pointer())}",
            onmounted: move |evt: MountedEvent| async move {
                if let Ok(r) = evt.get_client_rect().await {
                    rect.set(Some(Rect {
                        left: r.origin.x,
                        top: r.origin.y,
                        width: r.size.width,
                        height: r.size.height,
                    }));
                }
            },
            onmousemove: move |evt: MouseEvent| {
                if let Some(r) = rect() {
                    let point = evt.client_coordinates();
                    pointer.set(mouse_percent(point.x, point.y, r));
                }
            },
            onclick: move |_| {
                if let Some(selected) = select_mode(mode.key) {
                    on_message.call(format!("{}\n\n{}", selected.title, selected.details));
                }
            },
            h3 { "{mode.title}" }
            p { "{mode.description}" }
        }
    }
}

#[component]
fn ThresholdPanel(on_message: EventHandler<String>) -> Element {
    rsx! {
        div { class: "threshold",
            Button {
                variant: ButtonVariant::Threshold,
                class: Some("door".to_string()),
                onclick: move |_| on_message.call(Threshold::Door.message().to_string()),
                "Door"
            }
            Button {
                variant: ButtonVariant::Threshold,
                class: Some("mirror".to_string()),
                onclick: move |_| on_message.call(Threshold::Mirror.message().to_string()),
                "Mirror"
            }
        }
    }
}

/// Skill bars refill every time the progress panel becomes current.
#[component]
fn SkillBars(active: bool) -> Element {
    let mut animation = use_signal(ProgressAnimation::default);
    let mut refresh = use_signal(|| 0u32);

    use_effect(use_reactive((&active,), move |(active,)| {
        if !active {
            return;
        }
        animation.write().restart(Instant::now());
        spawn(async move {
            tokio::time::sleep(PROGRESS_FILL_DELAY).await;
            refresh += 1;
        });
    }));

    // re-render once the fill delay has passed
    let _ = refresh();
    let now = Instant::now();
    let animation = animation.read();

    rsx! {
        div { class: "skills",
            for bar in SKILLS.iter() {
                div { key: "{bar.label}", class: "skill",
                    span { class: "skill-label", "{bar.label}" }
                    div { class: "progress-bar",
                        div {
                            class: "progress-fill",
                            style: "width: {animation.width(bar, now)}%;",
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn GalleryPanel() -> Element {
    rsx! {
        div { class: "gallery-grid",
            for index in 0..GALLERY_SIZE {
                div {
                    key: "{index}",
                    class: "gallery-item",
                    onclick: move |_| record_click(ShowcaseClick::Artwork(index)),
                    span { "Artwork {index + 1}" }
                }
            }
        }
    }
}

#[component]
fn ExperimentPanel() -> Element {
    rsx! {
        div { class: "experiments",
            for (index, name) in EXPERIMENTS.iter().enumerate() {
                Button {
                    key: "{index}",
                    variant: ButtonVariant::Ghost,
                    class: Some("experiment-btn".to_string()),
                    onclick: move |_| record_click(ShowcaseClick::Experiment(index)),
                    "{name}"
                }
            }
        }
    }
}

#[component]
fn JourneyPanel() -> Element {
    rsx! {
        nav { class: "journey-links",
            Link { class: "panel-link", to: Route::Intro {}, "Intro" }
            Link { class: "panel-link", to: Route::Research {}, "Research" }
            Link { class: "panel-link", to: Route::Wardrobe {}, "Wardrobe" }
            Link { class: "panel-link", to: Route::JourneyRoute {}, "Route" }
        }
    }
}

#[component]
fn ContactPanel(on_home: EventHandler<()>) -> Element {
    rsx! {
        div { class: "contact-links",
            for label in CONTACT_LINKS {
                a {
                    key: "{label}",
                    class: "contact-link",
                    href: "#",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        record_click(ShowcaseClick::ContactLink(label));
                    },
                    "{label}"
                }
            }
        }
        Button {
            variant: ButtonVariant::Ghost,
            class: Some("scroll-top".to_string()),
            onclick: move |_| on_home.call(()),
            "Back to start"
        }
    }
}
