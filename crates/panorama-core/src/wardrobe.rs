//! Wardrobe page model: floating keywords and the design modes behind them.

use std::time::{Duration, Instant};

use rand::Rng;

/// One of the six practice areas shown in the wardrobe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WardrobeMode {
    /// Key used by `data-mode` attributes (e.g. `wearable`)
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
}

pub static MODES: [WardrobeMode; 6] = [
    WardrobeMode {
        key: "computational",
        title: "Computational Design",
        description: "Algorithm-driven creativity and generative systems",
        details: "Exploring parametric design, generative art, and computational creativity through code and algorithms.",
    },
    WardrobeMode {
        key: "environmental",
        title: "Environmental Adaptation",
        description: "Responsive systems that adapt to surroundings",
        details: "Creating interfaces and systems that respond to environmental changes and user context.",
    },
    WardrobeMode {
        key: "wearable",
        title: "Wearable Systems",
        description: "Technology integrated into clothing and accessories",
        details: "Developing smart textiles, embedded sensors, and interactive clothing systems.",
    },
    WardrobeMode {
        key: "geospatial",
        title: "Geospatial Interfaces",
        description: "Location-based interactions and spatial computing",
        details: "Building location-aware applications and spatial computing experiences.",
    },
    WardrobeMode {
        key: "responsive",
        title: "Responsive Fashion",
        description: "Dynamic clothing that responds to environment",
        details: "Creating fashion that adapts to environmental conditions and user needs.",
    },
    WardrobeMode {
        key: "data",
        title: "Data-Driven Aesthetics",
        description: "Visual design informed by data and analytics",
        details: "Using data visualization and analytics to inform creative design decisions.",
    },
];

pub fn mode(key: &str) -> Option<&'static WardrobeMode> {
    MODES.iter().find(|m| m.key == key)
}

/// Look up a mode by key and log the selection.
pub fn select_mode(key: &str) -> Option<&'static WardrobeMode> {
    let selected = mode(key)?;
    tracing::info!(
        title = selected.title,
        description = selected.description,
        "Wardrobe mode selected"
    );
    Some(selected)
}

pub const DRIFT_INTERVAL: Duration = Duration::from_secs(3);
pub const RIPPLE_DURATION: Duration = Duration::from_secs(1);
pub const SPIN_DURATION: Duration = Duration::from_millis(800);
pub const BUBBLE_LIFETIME: Duration = Duration::from_secs(3);
pub const BUBBLE_EXIT: Duration = Duration::from_millis(500);

/// Approximate rendered size of a keyword label, used to keep drift on screen.
const KEYWORD_BOX: (f64, f64) = (240.0, 48.0);
const SCATTER_MARGIN_X: f64 = 150.0;
const SCATTER_MARGIN_Y: f64 = 50.0;
const DRIFT_STEP: f64 = 20.0;
const MAX_TILT: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Pointer position inside `rect` as percentages, for the radial highlight
/// that follows the cursor over a wardrobe item.
pub fn mouse_percent(client_x: f64, client_y: f64, rect: Rect) -> (f64, f64) {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return (50.0, 50.0);
    }
    (
        (client_x - rect.left) / rect.width * 100.0,
        (client_y - rect.top) / rect.height * 100.0,
    )
}

pub fn mouse_style(percent: (f64, f64)) -> String {
    format!("--mouse-x: {}%; --mouse-y: {}%;", percent.0, percent.1)
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatingKeyword {
    pub mode: &'static WardrobeMode,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub active: bool,
    ripple_until: Option<Instant>,
    spin_until: Option<Instant>,
}

impl FloatingKeyword {
    fn new(mode: &'static WardrobeMode) -> Self {
        Self {
            mode,
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            active: false,
            ripple_until: None,
            spin_until: None,
        }
    }

    pub fn is_rippling(&self, now: Instant) -> bool {
        matches!(self.ripple_until, Some(until) if now < until)
    }

    pub fn is_spinning(&self, now: Instant) -> bool {
        matches!(self.spin_until, Some(until) if now < until)
    }

    pub fn style(&self, now: Instant) -> String {
        let position = format!("left: {}px; top: {}px;", self.x, self.y);
        if self.is_spinning(now) {
            format!("{} transform: scale(1.5) rotate(360deg); transition: all 0.8s ease;", position)
        } else {
            format!("{} transform: rotate({}deg);", position, self.rotation)
        }
    }
}

/// Floating description shown after a keyword click.
#[derive(Clone, Debug, PartialEq)]
pub struct InfoBubble {
    pub title: &'static str,
    pub description: &'static str,
    closing_since: Option<Instant>,
    expires_at: Instant,
}

impl InfoBubble {
    pub fn is_closing(&self) -> bool {
        self.closing_since.is_some()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatingKeywords {
    keywords: Vec<FloatingKeyword>,
    bubble: Option<InfoBubble>,
}

impl Default for FloatingKeywords {
    fn default() -> Self {
        Self::new()
    }
}

impl FloatingKeywords {
    pub fn new() -> Self {
        Self {
            keywords: MODES.iter().map(FloatingKeyword::new).collect(),
            bubble: None,
        }
    }

    pub fn keywords(&self) -> &[FloatingKeyword] {
        &self.keywords
    }

    pub fn bubble(&self) -> Option<&InfoBubble> {
        self.bubble.as_ref()
    }

    /// Place every keyword at a random spot away from the edges with a
    /// slight tilt. Called on load and whenever the viewport resizes.
    pub fn scatter<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        let span_x = (viewport.width - 2.0 * SCATTER_MARGIN_X).max(0.0);
        let span_y = (viewport.height - 2.0 * SCATTER_MARGIN_Y).max(0.0);
        for keyword in &mut self.keywords {
            keyword.x = SCATTER_MARGIN_X + span_x * rng.random::<f64>();
            keyword.y = SCATTER_MARGIN_Y + span_y * rng.random::<f64>();
            keyword.rotation = (rng.random::<f64>() - 0.5) * MAX_TILT;
        }
    }

    /// Nudge every inactive keyword by up to half a drift step in each axis,
    /// keeping it inside the viewport.
    pub fn drift<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        let max_x = (viewport.width - KEYWORD_BOX.0).max(0.0);
        let max_y = (viewport.height - KEYWORD_BOX.1).max(0.0);
        for keyword in self.keywords.iter_mut().filter(|k| !k.active) {
            let dx = (rng.random::<f64>() - 0.5) * DRIFT_STEP;
            let dy = (rng.random::<f64>() - 0.5) * DRIFT_STEP;
            keyword.x = (keyword.x + dx).clamp(0.0, max_x);
            keyword.y = (keyword.y + dy).clamp(0.0, max_y);
        }
    }

    pub fn hover(&mut self, index: usize, now: Instant) {
        if let Some(keyword) = self.keywords.get_mut(index) {
            keyword.active = true;
            keyword.ripple_until = Some(now + RIPPLE_DURATION);
        }
    }

    pub fn unhover(&mut self, index: usize) {
        if let Some(keyword) = self.keywords.get_mut(index) {
            keyword.active = false;
        }
    }

    /// Spin the keyword and open its info bubble.
    pub fn click(&mut self, index: usize, now: Instant) -> Option<&InfoBubble> {
        let keyword = self.keywords.get_mut(index)?;
        keyword.spin_until = Some(now + SPIN_DURATION);
        let mode = keyword.mode;
        tracing::info!("Selected: {}", mode.title);

        self.bubble = Some(InfoBubble {
            title: mode.title,
            description: mode.description,
            closing_since: None,
            expires_at: now + BUBBLE_LIFETIME,
        });
        self.bubble.as_ref()
    }

    /// Start the bubble's exit animation.
    pub fn close_bubble(&mut self, now: Instant) {
        if let Some(bubble) = self.bubble.as_mut() {
            bubble.closing_since.get_or_insert(now);
        }
    }

    /// Advance timers: expire spins and ripples, start closing a bubble that
    /// outlived its lifetime and drop it once the exit animation finished.
    pub fn tick(&mut self, now: Instant) {
        for keyword in &mut self.keywords {
            if !keyword.is_spinning(now) {
                keyword.spin_until = None;
            }
            if !keyword.is_rippling(now) {
                keyword.ripple_until = None;
            }
        }

        if let Some(bubble) = self.bubble.as_mut() {
            if bubble.closing_since.is_none() && now >= bubble.expires_at {
                bubble.closing_since = Some(now);
            }
            if matches!(bubble.closing_since, Some(since) if now >= since + BUBBLE_EXIT) {
                self.bubble = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SCREEN: Viewport = Viewport {
        width: 1280.0,
        height: 800.0,
    };

    #[test]
    fn modes_lookup() {
        assert_eq!(mode("wearable").unwrap().title, "Wearable Systems");
        assert!(mode("unknown").is_none());
        assert_eq!(select_mode("data").unwrap().key, "data");
    }

    #[test]
    fn scatter_keeps_margins() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut kw = FloatingKeywords::new();
        kw.scatter(SCREEN, &mut rng);
        for k in kw.keywords() {
            assert!(k.x >= 150.0 && k.x <= 1130.0, "x={}", k.x);
            assert!(k.y >= 50.0 && k.y <= 750.0, "y={}", k.y);
            assert!(k.rotation.abs() <= 5.0);
        }
    }

    #[test]
    fn scatter_on_tiny_viewport_pins_to_margin() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut kw = FloatingKeywords::new();
        kw.scatter(
            Viewport {
                width: 100.0,
                height: 60.0,
            },
            &mut rng,
        );
        for k in kw.keywords() {
            assert_eq!(k.x, 150.0);
            assert_eq!(k.y, 50.0);
        }
    }

    #[test]
    fn drift_skips_active_and_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut kw = FloatingKeywords::new();
        kw.scatter(SCREEN, &mut rng);
        let now = Instant::now();
        kw.hover(0, now);
        let pinned = (kw.keywords()[0].x, kw.keywords()[0].y);

        for _ in 0..200 {
            kw.drift(SCREEN, &mut rng);
        }

        assert_eq!((kw.keywords()[0].x, kw.keywords()[0].y), pinned);
        for k in &kw.keywords()[1..] {
            assert!(k.x >= 0.0 && k.x <= SCREEN.width - 240.0);
            assert!(k.y >= 0.0 && k.y <= SCREEN.height - 48.0);
        }
    }

    #[test]
    fn hover_ripples_for_one_second() {
        let mut kw = FloatingKeywords::new();
        let t0 = Instant::now();
        kw.hover(2, t0);
        assert!(kw.keywords()[2].active);
        assert!(kw.keywords()[2].is_rippling(t0 + Duration::from_millis(999)));
        assert!(!kw.keywords()[2].is_rippling(t0 + RIPPLE_DURATION));
        kw.unhover(2);
        assert!(!kw.keywords()[2].active);
    }

    #[test]
    fn click_opens_bubble_that_expires() {
        let mut kw = FloatingKeywords::new();
        let t0 = Instant::now();
        let bubble = kw.click(1, t0).unwrap();
        assert_eq!(bubble.title, "Environmental Adaptation");
        assert!(kw.keywords()[1].is_spinning(t0));
        assert!(kw.keywords()[1].style(t0).contains("scale(1.5)"));

        kw.tick(t0 + Duration::from_millis(2999));
        assert!(!kw.bubble().unwrap().is_closing());

        kw.tick(t0 + BUBBLE_LIFETIME);
        assert!(kw.bubble().unwrap().is_closing());

        kw.tick(t0 + BUBBLE_LIFETIME + BUBBLE_EXIT);
        assert!(kw.bubble().is_none());
        assert!(!kw.keywords()[1].is_spinning(t0 + BUBBLE_LIFETIME));
    }

    #[test]
    fn bubble_closes_on_click() {
        let mut kw = FloatingKeywords::new();
        let t0 = Instant::now();
        kw.click(4, t0);
        kw.close_bubble(t0 + Duration::from_millis(100));
        kw.tick(t0 + Duration::from_millis(600));
        assert!(kw.bubble().is_none());
    }

    #[test]
    fn click_out_of_range_does_nothing() {
        let mut kw = FloatingKeywords::new();
        assert!(kw.click(6, Instant::now()).is_none());
        assert!(kw.bubble().is_none());
    }

    #[test]
    fn pointer_percentages() {
        let rect = Rect {
            left: 100.0,
            top: 50.0,
            width: 200.0,
            height: 100.0,
        };
        assert_eq!(mouse_percent(200.0, 75.0, rect), (50.0, 25.0));
        assert_eq!(mouse_style((50.0, 25.0)), "--mouse-x: 50%; --mouse-y: 25%;");
        let empty = Rect {
            width: 0.0,
            ..rect
        };
        assert_eq!(mouse_percent(10.0, 10.0, empty), (50.0, 50.0));
    }
}
