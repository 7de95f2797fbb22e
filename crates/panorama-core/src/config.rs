//! Panel configuration.
//!
//! The ordered panel list carries each panel's fragment id, display title and
//! background gradient together, so the gradient list can never disagree with
//! the panel count. Timing constants live alongside and default to the values
//! the site has always used.

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PanoramaError, PanoramaResult};

/// Fragment ids of the ten showcase panels, in display order.
pub const DEFAULT_PANEL_IDS: [&str; 10] = [
    "intro",
    "route",
    "wardrobe",
    "door-mirror",
    "progress",
    "gallery",
    "technical",
    "experimental",
    "journey",
    "contact",
];

const PANEL_TITLES: [&str; 10] = [
    "Intro",
    "Route",
    "Wardrobe",
    "Door / Mirror",
    "Progress",
    "Gallery",
    "Technical",
    "Experimental",
    "Journey",
    "Contact",
];

const LILAC_STOPS: [&str; 12] = [
    "#fdf2ff", "#f8e6ff", "#f0d4ff", "#ebbcf7", "#d4a5e8", "#c896d9", "#b887ca", "#a778bb",
    "#9669ac", "#855a9d", "#744b8e", "#633c7f",
];

const DUSK_STOPS: [&str; 12] = [
    "#fff1e6", "#fde2d4", "#f9cfc4", "#f0b8b8", "#dca1b4", "#c38aae", "#a675a6", "#88639c",
    "#6b5490", "#504781", "#3a3b6f", "#29305c",
];

/// Built-in gradient palettes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    /// Soft lilac fading to deep violet
    #[default]
    Lilac,
    /// Peach dusk fading to night blue
    Dusk,
}

impl Palette {
    /// Three-stop diagonal gradient for the panel at `index`.
    ///
    /// Each panel shifts the window of stops by one, so adjacent panels share
    /// two colours and the background flows between them.
    pub fn gradient(&self, index: usize) -> String {
        let stops = match self {
            Palette::Lilac => &LILAC_STOPS,
            Palette::Dusk => &DUSK_STOPS,
        };
        let base = index.min(stops.len() - 3);
        format!(
            "linear-gradient(135deg, {} 0%, {} 50%, {} 100%)",
            stops[base],
            stops[base + 1],
            stops[base + 2]
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Palette::Lilac => "lilac",
            Palette::Dusk => "dusk",
        }
    }
}

impl std::str::FromStr for Palette {
    type Err = PanoramaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lilac" => Ok(Palette::Lilac),
            "dusk" => Ok(Palette::Dusk),
            other => Err(PanoramaError::Config(format!("unknown palette '{}'", other))),
        }
    }
}

/// One showcase panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSpec {
    /// URL fragment identifier (e.g. `gallery`)
    pub id: String,
    /// Human readable heading
    pub title: String,
    /// CSS background applied while this panel is active
    pub gradient: String,
}

/// Timing and threshold constants for the navigator and intro narrative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationTiming {
    /// Minimum time between accepted directional requests
    pub cooldown_ms: u64,
    /// Delay before an activated panel's content fades in
    pub reveal_delay_ms: u64,
    /// Wheel delta magnitude that must be exceeded to navigate
    pub wheel_threshold: f64,
    /// Vertical swipe distance that must be exceeded to navigate
    pub swipe_threshold: f64,
    /// Interaction lock after an intro stage change
    pub stage_lock_ms: u64,
}

impl Default for NavigationTiming {
    fn default() -> Self {
        Self {
            cooldown_ms: 800,
            reveal_delay_ms: 100,
            wheel_threshold: 30.0,
            swipe_threshold: 50.0,
            stage_lock_ms: 1200,
        }
    }
}

impl NavigationTiming {
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub fn stage_lock(&self) -> Duration {
        Duration::from_millis(self.stage_lock_ms)
    }
}

/// Complete site configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PanoramaConfig {
    pub panels: Vec<PanelSpec>,
    #[serde(default)]
    pub timing: NavigationTiming,
}

impl Default for PanoramaConfig {
    fn default() -> Self {
        Self::with_palette(Palette::default())
    }
}

impl PanoramaConfig {
    /// The standard ten panels coloured with `palette`.
    pub fn with_palette(palette: Palette) -> Self {
        let panels = DEFAULT_PANEL_IDS
            .iter()
            .zip(PANEL_TITLES.iter())
            .enumerate()
            .map(|(i, (id, title))| PanelSpec {
                id: (*id).to_string(),
                title: (*title).to_string(),
                gradient: palette.gradient(i),
            })
            .collect();

        Self {
            panels,
            timing: NavigationTiming::default(),
        }
    }

    /// Load and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> PanoramaResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: PanoramaConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(
            "Loaded {} panels from {}",
            config.panels.len(),
            path.as_ref().display()
        );
        Ok(config)
    }

    /// Check structural rules the navigator relies on.
    pub fn validate(&self) -> PanoramaResult<()> {
        if self.panels.is_empty() {
            return Err(PanoramaError::EmptyPanels);
        }

        let mut seen = HashSet::new();
        for (i, panel) in self.panels.iter().enumerate() {
            if panel.id.trim().is_empty() {
                return Err(PanoramaError::Config(format!("panel {} has an empty id", i)));
            }
            if panel.gradient.trim().is_empty() {
                return Err(PanoramaError::Config(format!(
                    "panel '{}' has an empty gradient",
                    panel.id
                )));
            }
            if !seen.insert(panel.id.as_str()) {
                return Err(PanoramaError::DuplicatePanelId(panel.id.clone()));
            }
        }

        let usable = |threshold: f64| threshold.is_finite() && threshold >= 0.0;
        if !usable(self.timing.wheel_threshold) || !usable(self.timing.swipe_threshold) {
            return Err(PanoramaError::Config(
                "thresholds must be finite and not negative".to_string(),
            ));
        }

        Ok(())
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn panel_ids(&self) -> Vec<String> {
        self.panels.iter().map(|p| p.id.clone()).collect()
    }

    pub fn gradients(&self) -> Vec<String> {
        self.panels.iter().map(|p| p.gradient.clone()).collect()
    }
}
