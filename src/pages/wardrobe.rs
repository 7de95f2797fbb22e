//! Wardrobe page - floating keywords for the six design modes.
//!
//! Keywords drift every few seconds unless hovered. Clicking one spins it
//! and opens an info bubble that closes itself after a while.

use std::time::{Duration, Instant};

use dioxus::prelude::*;
use panorama_core::wardrobe::{
    BUBBLE_EXIT, BUBBLE_LIFETIME, DRIFT_INTERVAL, RIPPLE_DURATION, SPIN_DURATION,
};
use panorama_core::{FloatingKeywords, Viewport};
use panorama_ui::InfoBubble;

use crate::app::Route;

/// Re-run the keyword timers after `delays`, one tick per delay.
fn schedule_ticks(mut keywords: Signal<FloatingKeywords>, delays: Vec<Duration>) {
    spawn(async move {
        for delay in delays {
            tokio::time::sleep(delay).await;
            keywords.write().tick(Instant::now());
        }
    });
}

#[component]
pub fn Wardrobe() -> Element {
    let mut keywords = use_signal(FloatingKeywords::new);
    let mut viewport: Signal<Option<Viewport>> = use_signal(|| None);

    let mut place = move |width: f64, height: f64| {
        let size = Viewport { width, height };
        viewport.set(Some(size));
        keywords.write().scatter(size, &mut rand::rng());
    };

    use_future(move || async move {
        loop {
            tokio::time::sleep(DRIFT_INTERVAL).await;
            let Some(size) = viewport() else {
                continue;
            };
            let mut keywords = keywords.write();
            keywords.drift(size, &mut rand::rng());
            keywords.tick(Instant::now());
        }
    });

    let now = Instant::now();
    let state = keywords.read();

    rsx! {
        main {
            class: "wardrobe-container",
            onmounted: move |evt: MountedEvent| async move {
                if let Ok(rect) = evt.get_client_rect().await {
                    place(rect.size.width, rect.size.height);
                }
            },
            onresize: move |evt: ResizeEvent| {
                if let Ok(size) = evt.get_content_box_size() {
                    place(size.width, size.height);
                }
            },

            Link { class: "back-link", to: Route::Showcase {}, "\u{2190} Back" }

            for (index, keyword) in state.keywords().iter().enumerate() {
                div {
                    key: "{keyword.mode.key}",
                    class: if keyword.active { "keyword active" } else { "keyword" },
                    "data-keyword": keyword.mode.title,
                    style: keyword.style(now),
                    onmouseenter: move |_| {
                        keywords.write().hover(index, Instant::now());
                        schedule_ticks(keywords, vec![RIPPLE_DURATION]);
                    },
                    onmouseleave: move |_| keywords.write().unhover(index),
                    onclick: move |_| {
                        keywords.write().click(index, Instant::now());
                        schedule_ticks(
                            keywords,
                            vec![SPIN_DURATION, BUBBLE_LIFETIME - SPIN_DURATION, BUBBLE_EXIT],
                        );
                    },
                    "{keyword.mode.title}"
                    if keyword.is_rippling(now) {
                        div { class: "ripple" }
                    }
                }
            }

            if let Some(bubble) = state.bubble() {
                InfoBubble {
                    title: bubble.title.to_string(),
                    description: bubble.description.to_string(),
                    closing: bubble.is_closing(),
                    on_close: move |_| {
                        keywords.write().close_bubble(Instant::now());
                        schedule_ticks(keywords, vec![BUBBLE_EXIT]);
                    },
                }
            }
        }
    }
}
