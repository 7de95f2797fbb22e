//! Panorama Core Library
//!
//! Scroll-driven panel navigation and page models for the Panorama portfolio.
//!
//! ## Overview
//!
//! The showcase is a horizontal strip of full-viewport panels. Wheel, keyboard,
//! touch, progress-dot and URL-fragment input are normalized by
//! [`InputAdapter`] and applied by a single [`PanelNavigator`], which owns the
//! current index, enforces the cooldown between directional moves and
//! describes each visual transition. Rendering is left to the UI crates.
//!
//! The sub-pages have their own small models:
//!
//! - [`intro`]: the three-stage narrative cycle
//! - [`research`]: sections, question cards, topic and policy details
//! - [`wardrobe`]: floating keywords and design modes
//! - [`route`]: destination prompt and threshold messages
//!
//! ## Quick Start
//!
//! ```
//! use std::time::{Duration, Instant};
//! use panorama_core::{InputAdapter, InputEvent, PanelNavigator, PanoramaConfig};
//!
//! let config = PanoramaConfig::default();
//! let mut navigator = PanelNavigator::new(&config);
//! let mut input = InputAdapter::new(&config);
//!
//! let t0 = Instant::now();
//! let wheel = InputEvent::Wheel { delta_y: 50.0 };
//!
//! assert!(input.dispatch(&mut navigator, &wheel, t0).is_some());
//! // Inside the cooldown window: ignored.
//! assert!(input.dispatch(&mut navigator, &wheel, t0 + Duration::from_millis(200)).is_none());
//! assert_eq!(navigator.current_index(), 1);
//! ```

pub mod config;
pub mod cursor;
pub mod error;
pub mod hash;
pub mod input;
pub mod intro;
pub mod navigation;
pub mod research;
pub mod route;
pub mod showcase;
pub mod wardrobe;

// Re-exports
pub use config::{NavigationTiming, Palette, PanelSpec, PanoramaConfig, DEFAULT_PANEL_IDS};
pub use cursor::CursorState;
pub use error::{PanoramaError, PanoramaResult};
pub use hash::HashSync;
pub use input::{InputAdapter, InputEvent, NavCommand, NavKey};
pub use intro::{IntroNarrative, ScenePose, Stage, StageChange};
pub use navigation::{
    Direction, NavigationObserver, NavigationState, PanelFrame, PanelNavigator, PanelOffset,
    PanelVisibility, PendingReveal, Transition, TransitionCause, TransitionCooldown,
};
pub use research::{Connection, Detail, DetailKind, ResearchPage, ResearchSection};
pub use route::{submit_route, RouteOutcome, Threshold};
pub use wardrobe::{FloatingKeywords, Viewport, WardrobeMode};
