//! Shared state providers for Panorama.
//!
//! The navigator is owned by the root component and handed to pages through
//! context, so moving between `/` and `/panel/:id` keeps the current panel,
//! cooldown and pending reveal intact.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let config = use_config();
//! let mut panels = use_panels();
//! panels.write().go_to_panel(0);
//! let fragment = use_fragments().borrow().current_fragment().map(str::to_string);
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use panorama_core::{HashSync, PanelNavigator, PanoramaConfig};

/// Configuration shared by every page.
pub type SharedConfig = Arc<PanoramaConfig>;

/// Fragment tracker subscribed to the navigator.
pub type SharedFragments = Rc<RefCell<HashSync>>;

/// Get the configuration chosen at startup.
pub fn get_config() -> SharedConfig {
    crate::get_config()
}

/// Hook to access the site configuration.
pub fn use_config() -> SharedConfig {
    use_context::<SharedConfig>()
}

/// Hook to access the panel navigator.
///
/// All navigation goes through this signal; nothing else writes the current
/// panel index.
pub fn use_panels() -> Signal<PanelNavigator> {
    use_context::<Signal<PanelNavigator>>()
}

/// Hook to access the fragment of the current panel, as last reported by
/// the navigator.
pub fn use_fragments() -> SharedFragments {
    use_context::<SharedFragments>()
}
