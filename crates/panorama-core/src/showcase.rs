//! Panel content and interactions of the main showcase that do not affect
//! navigation: skill bars, gallery, experiments and contact links.

use std::fmt;
use std::time::{Duration, Instant};

/// Delay before skill bars grow from zero to their target width.
pub const PROGRESS_FILL_DELAY: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillBar {
    pub label: &'static str,
    pub percent: u8,
}

pub const SKILLS: [SkillBar; 5] = [
    SkillBar { label: "Creative Coding", percent: 90 },
    SkillBar { label: "Interaction Design", percent: 85 },
    SkillBar { label: "Physical Computing", percent: 75 },
    SkillBar { label: "Textile Prototyping", percent: 70 },
    SkillBar { label: "Spatial Computing", percent: 60 },
];

pub const GALLERY_SIZE: usize = 6;

pub const EXPERIMENTS: [&str; 4] = [
    "Reactive Fabric",
    "Weather Loom",
    "Gesture Mirror",
    "Signal Garden",
];

pub const CONTACT_LINKS: [&str; 3] = ["Email", "Instagram", "GitHub"];

/// Restartable fill animation for the skill bars.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressAnimation {
    started_at: Option<Instant>,
}

impl ProgressAnimation {
    /// Collapse every bar to zero and schedule the fill.
    pub fn restart(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    /// Rendered width of `bar` at `now`.
    pub fn width(&self, bar: &SkillBar, now: Instant) -> u8 {
        match self.started_at {
            Some(start) if now >= start + PROGRESS_FILL_DELAY => bar.percent,
            Some(_) => 0,
            None => bar.percent,
        }
    }
}

/// Clickable showcase element that only reports the click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowcaseClick {
    /// Zero-based gallery tile
    Artwork(usize),
    /// Zero-based experiment button
    Experiment(usize),
    ContactLink(&'static str),
}

impl fmt::Display for ShowcaseClick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShowcaseClick::Artwork(i) => write!(f, "Viewing Artwork {}", i + 1),
            ShowcaseClick::Experiment(i) => write!(f, "Experiment {} clicked", i + 1),
            ShowcaseClick::ContactLink(label) => write!(f, "Contact link clicked: {}", label),
        }
    }
}

pub fn record_click(click: ShowcaseClick) {
    tracing::info!("{}", click);
}
