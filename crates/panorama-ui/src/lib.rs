//! Panorama UI Components
//!
//! Dioxus components shared by the showcase and its sub-pages.
//!
//! ## Design Language
//!
//! Soft lilac surfaces over diagonal gradients:
//! - **Plum (#855a9d)**: buttons, active dots, links
//! - **Glass (rgba(255, 255, 255, 0.55))**: panel and card surfaces
//! - **Lilac glow (rgba(235, 188, 247, 0.6))**: highlights and ripples
//!
//! Components are stateless; page state lives in `panorama-core` models held
//! in signals by the application.

pub mod components;

pub use components::*;
