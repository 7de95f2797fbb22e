//! App-level components for Panorama.
//!
//! Shared building blocks live in `panorama-ui`; this module holds the
//! pieces that know about routes and the showcase panel ids.

mod panel_content;
mod scene;

pub use panel_content::PanelContent;
pub use scene::{EnvironmentScene, GarmentScene};
