//! 3D scenes of the intro narrative.

use dioxus::prelude::*;
use panorama_core::intro::{EnvironmentPose, GarmentPose};

/// Resting depth of each building, in px.
const BUILDING_DEPTHS: [f64; 4] = [-100.0, -150.0, -80.0, -120.0];
const TREE_DEPTHS: [f64; 3] = [-60.0, -90.0, -40.0];

/// Stage 2: buildings and trees orbit the figure.
#[component]
pub fn EnvironmentScene(pose: EnvironmentPose) -> Element {
    rsx! {
        div { class: "environment-scene",
            for (index, depth) in BUILDING_DEPTHS.iter().enumerate() {
                div {
                    key: "building-{index}",
                    class: "building",
                    style: "transform: {pose.building_transform(index, *depth)};",
                }
            }
            for (index, depth) in TREE_DEPTHS.iter().enumerate() {
                div {
                    key: "tree-{index}",
                    class: "tree",
                    style: "transform: {pose.tree_transform(index, *depth)};",
                }
            }
            div {
                class: "person-overlay",
                style: "transform: {pose.person_transform()};",
            }
        }
    }
}

/// Stage 3: the dressed figure turns in place.
#[component]
pub fn GarmentScene(pose: GarmentPose) -> Element {
    rsx! {
        div {
            class: "garment-container",
            style: "transform: {pose.container_transform()};",
            div {
                class: "person-detailed",
                style: "transform: {pose.figure_transform()};",
                div { class: "garment-layer outer" }
                div { class: "garment-layer inner" }
            }
        }
    }
}
