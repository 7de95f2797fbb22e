//! Intro page - the three-stage body/space narrative.
//!
//! Click anywhere to advance, use the dots to jump, scroll to turn the scene.
//! Every stage change locks input for the configured stage lock.

use std::time::Instant;

use dioxus::prelude::*;
use panorama_core::{IntroNarrative, ScenePose, Stage};
use panorama_ui::ProgressDots;

use crate::app::Route;
use crate::components::{EnvironmentScene, GarmentScene};
use crate::context::use_config;

fn stage_class(stage: Stage, current: Stage) -> &'static str {
    if stage == current {
        "stage active"
    } else {
        "stage"
    }
}

#[component]
pub fn Intro() -> Element {
    let config = use_config();
    let mut narrative = use_signal(|| IntroNarrative::new(&config.timing));

    let current = narrative.read().stage();
    let pose = narrative.read().pose();
    let (environment, garment) = match pose {
        ScenePose::Environment(env) => (Some(env), None),
        ScenePose::Garment(garment) => (None, Some(garment)),
        ScenePose::Still => (None, None),
    };

    rsx! {
        main {
            class: "intro",
            onclick: move |_| {
                narrative.write().advance(Instant::now());
            },
            onwheel: move |evt: WheelEvent| {
                evt.prevent_default();
                let delta_y = evt.delta().strip_units().y;
                narrative.write().scroll(delta_y, Instant::now());
            },

            Link { class: "back-link", to: Route::Showcase {}, "\u{2190} Back" }

            section { class: stage_class(Stage::Question, current),
                h1 { class: "question", "What does the body carry into the space around it?" }
                div { class: "silhouette" }
            }

            section { class: stage_class(Stage::Environment, current),
                div { class: "environment-container",
                    if let Some(pose) = environment {
                        EnvironmentScene { pose }
                    }
                }
                p { class: "stage-caption", "The body in its environment" }
            }

            section { class: stage_class(Stage::Garment, current),
                if let Some(pose) = garment {
                    GarmentScene { pose }
                }
                p { class: "stage-caption", "The garment as a second skin" }
            }

            ProgressDots {
                count: Stage::ALL.len(),
                current: usize::from(current.number() - 1),
                onselect: move |index: usize| {
                    if let Some(stage) = Stage::ALL.get(index) {
                        narrative.write().go_to_stage(*stage, Instant::now());
                    }
                },
            }
        }
    }
}
