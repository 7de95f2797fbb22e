//! Showcase - the horizontally paneled main page.
//!
//! Wheel, keyboard and touch input on the page, clicks on the progress dots
//! and changes of the `/panel/:id` route all become [`InputEvent`]s for the
//! shared navigator. After every applied transition a history entry for the
//! current panel is pushed and the content reveal is scheduled as a
//! cancelable task.

use std::time::Instant;

use dioxus::prelude::*;
use panorama_core::{InputAdapter, InputEvent, NavKey, PendingReveal, Transition};
use panorama_ui::ProgressDots;

use crate::app::Route;
use crate::components::PanelContent;
use crate::context::{use_config, use_fragments, use_panels};

/// Showcase at `/`.
#[component]
pub fn Showcase() -> Element {
    rsx! {
        PanelShowcase { fragment: None }
    }
}

/// Showcase at `/panel/:id`.
#[component]
pub fn ShowcasePanel(id: String) -> Element {
    rsx! {
        PanelShowcase { fragment: Some(id) }
    }
}

#[component]
fn PanelShowcase(fragment: Option<String>) -> Element {
    let config = use_config();
    let mut panels = use_panels();
    let fragments = use_fragments();
    let router = use_navigator();
    let mut input = use_signal({
        let config = config.clone();
        move || InputAdapter::new(&config)
    });
    let mut reveal_task: Signal<Option<Task>> = use_signal(|| None);

    // A new reveal supersedes the pending one; the navigator also drops
    // stale generations, so a late timer can never reveal the wrong panel.
    let schedule_reveal = use_callback(move |reveal: PendingReveal| {
        if let Some(task) = reveal_task.take() {
            task.cancel();
        }
        let task = spawn(async move {
            tokio::time::sleep(reveal.delay).await;
            panels.write().complete_reveal(&reveal);
            reveal_task.set(None);
        });
        reveal_task.set(Some(task));
    });

    let on_transition = use_callback(move |transition: Option<Transition>| {
        let Some(transition) = transition else {
            return;
        };
        if let Some(reveal) = transition.reveal {
            schedule_reveal.call(reveal);
        }
        let fragment = fragments.borrow().current_fragment().map(str::to_string);
        if let Some(id) = fragment {
            router.push(Route::ShowcasePanel { id });
        }
    });

    let mut dispatch = move |event: InputEvent| {
        let transition = input
            .write()
            .dispatch(&mut panels.write(), &event, Instant::now());
        on_transition.call(transition);
    };

    // Follow the route when it changes from outside (back button, links).
    use_effect(use_reactive((&fragment,), move |(fragment,)| {
        let target = fragment.and_then(|id| input.peek().hash().resolve(&id));
        let current = panels.peek().current_index();

        match target {
            Some(index) if index != current => {
                let transition = panels.write().go_to_panel(index);
                if let Some(reveal) = transition.and_then(|t| t.reveal) {
                    schedule_reveal.call(reveal);
                }
            }
            _ => {
                if reveal_task.peek().is_none() {
                    if let Some(reveal) = panels.peek().pending_reveal() {
                        schedule_reveal.call(reveal);
                    }
                }
            }
        }
    }));

    let go_home = move |_: ()| {
        let transition = panels.write().go_to_panel(0);
        on_transition.call(transition);
    };

    let frame = panels.read().frame();
    let titles: Vec<String> = config.panels.iter().map(|p| p.title.clone()).collect();

    rsx! {
        main {
            class: "showcase",
            tabindex: "0",
            style: "background: {frame.background};",
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.set_focus(true).await;
            },
            onwheel: move |evt: WheelEvent| {
                let delta_y = evt.delta().strip_units().y;
                dispatch(InputEvent::Wheel { delta_y });
            },
            onkeydown: move |evt: KeyboardEvent| {
                if let Some(key) = NavKey::from_key_name(&evt.key().to_string()) {
                    evt.prevent_default();
                    dispatch(InputEvent::Key { key });
                }
            },
            ontouchstart: move |evt: TouchEvent| {
                if let Some(touch) = evt.touches_changed().first() {
                    dispatch(InputEvent::TouchStart { screen_y: touch.screen_coordinates().y });
                }
            },
            ontouchend: move |evt: TouchEvent| {
                if let Some(touch) = evt.touches_changed().first() {
                    dispatch(InputEvent::TouchEnd { screen_y: touch.screen_coordinates().y });
                }
            },

            div {
                id: "container",
                class: "panel-container",
                style: "transform: {frame.offset};",
                for (panel, visibility) in config.panels.iter().zip(frame.panels.iter()) {
                    section {
                        key: "{panel.id}",
                        id: "{panel.id}",
                        class: "panel",
                        style: "{visibility.panel_style()}",
                        div {
                            class: "content",
                            style: "{visibility.content_style()}",
                            PanelContent {
                                id: panel.id.clone(),
                                title: panel.title.clone(),
                                active: visibility.is_active(),
                                on_home: go_home,
                            }
                        }
                    }
                }
            }

            ProgressDots {
                count: frame.panels.len(),
                current: frame.current,
                labels: titles,
                onselect: move |index| dispatch(InputEvent::Dot { index }),
            }
        }
    }
}
