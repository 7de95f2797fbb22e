//! URL fragment synchronization.
//!
//! Each panel is addressable by a fragment (`#gallery`). After a transition the
//! fragment follows the current panel; when the fragment changes from outside
//! (back button, pasted link) it is resolved back to a panel index.

use crate::config::{PanoramaConfig, DEFAULT_PANEL_IDS};
use crate::error::{PanoramaError, PanoramaResult};
use crate::navigation::{NavigationObserver, Transition};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashSync {
    ids: Vec<String>,
    current: Option<String>,
}

impl Default for HashSync {
    fn default() -> Self {
        Self::new(DEFAULT_PANEL_IDS.iter().map(|s| s.to_string()).collect())
    }
}

impl HashSync {
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids, current: None }
    }

    pub fn from_config(config: &PanoramaConfig) -> Self {
        Self::new(config.panel_ids())
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Fragment identifier for the panel at `index`.
    pub fn fragment_for(&self, index: usize) -> Option<&str> {
        self.ids.get(index).map(String::as_str)
    }

    /// Panel index for a fragment. A leading `#` is accepted; unknown
    /// fragments resolve to `None`.
    pub fn resolve(&self, fragment: &str) -> Option<usize> {
        let id = fragment.strip_prefix('#').unwrap_or(fragment);
        self.ids.iter().position(|candidate| candidate == id)
    }

    /// Like [`resolve`](Self::resolve), for callers that name a panel
    /// explicitly and must not silently fall back.
    pub fn index_of(&self, fragment: &str) -> PanoramaResult<usize> {
        self.resolve(fragment)
            .ok_or_else(|| PanoramaError::UnknownPanel(fragment.to_string()))
    }

    /// Fragment of the most recent transition seen as an observer.
    pub fn current_fragment(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

impl NavigationObserver for HashSync {
    fn on_transition(&mut self, transition: &Transition) {
        self.current = self.fragment_for(transition.to).map(str::to_string);
    }
}
