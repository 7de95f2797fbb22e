//! Panel navigation state machine.
//!
//! [`PanelNavigator`] owns the single authoritative [`NavigationState`] for the
//! showcase. Every input source funnels into one of three entry points:
//!
//! | Entry point | Rate limited | Stamps cooldown | Used by |
//! |-------------|--------------|-----------------|---------|
//! | [`PanelNavigator::request_navigate`] | yes | yes | wheel, arrow/page keys, swipes |
//! | [`PanelNavigator::jump_to`] | no | yes | Home/End keys, progress dots |
//! | [`PanelNavigator::go_to_panel`] | no | no | URL fragment changes, scroll-to-top |
//!
//! Applying a transition is synchronous. The only deferred work is the content
//! reveal of the newly active panel, which the caller schedules from the
//! returned [`PendingReveal`] and hands back via
//! [`PanelNavigator::complete_reveal`]. Each transition bumps the reveal
//! generation, so a reveal that was superseded by a later navigation is
//! discarded instead of flashing stale content.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::config::{NavigationTiming, PanoramaConfig};

/// Direction of a relative navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Target index one step from `current`, or `None` when that would leave
    /// `[0, panel_count)`. Navigation never wraps around.
    pub fn step(self, current: usize, panel_count: usize) -> Option<usize> {
        match self {
            Direction::Forward => current.checked_add(1).filter(|t| *t < panel_count),
            Direction::Backward => current.checked_sub(1),
        }
    }
}

/// What caused a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionCause {
    /// Rate-limited relative move
    Step(Direction),
    /// Absolute jump (Home/End, progress dots)
    Jump,
    /// Direct display request (fragment change, scroll-to-top)
    Direct,
}

/// Horizontal offset of the panel strip, in whole viewport widths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelOffset {
    index: usize,
}

impl PanelOffset {
    pub fn for_index(index: usize) -> Self {
        Self { index }
    }

    /// Offset in `vw` units.
    pub fn viewport_widths(&self) -> usize {
        self.index * 100
    }

    /// CSS transform for the panel container.
    pub fn css(&self) -> String {
        format!("translateX(-{}vw)", self.viewport_widths())
    }
}

impl fmt::Display for PanelOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

/// How a single panel should be presented.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelVisibility {
    pub opacity: f32,
    /// Whether the panel receives pointer events
    pub interactive: bool,
    /// Whether the inner content has faded in
    pub content_revealed: bool,
}

impl PanelVisibility {
    pub const HIDDEN: PanelVisibility = PanelVisibility {
        opacity: 0.0,
        interactive: false,
        content_revealed: false,
    };

    pub fn active(content_revealed: bool) -> Self {
        Self {
            opacity: 1.0,
            interactive: true,
            content_revealed,
        }
    }

    pub fn is_active(&self) -> bool {
        self.interactive
    }

    /// Inline style for the panel element.
    pub fn panel_style(&self) -> String {
        let pointer = if self.interactive { "auto" } else { "none" };
        format!("opacity: {}; pointer-events: {};", self.opacity, pointer)
    }

    /// Inline style for the panel's `.content` element.
    pub fn content_style(&self) -> &'static str {
        if self.content_revealed {
            "opacity: 1; transform: translateY(0);"
        } else {
            "opacity: 0; transform: translateY(20px);"
        }
    }
}

/// A content reveal waiting for its delay to elapse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingReveal {
    pub panel: usize,
    pub generation: u64,
    pub delay: Duration,
}

/// Description of one applied panel change.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub offset: PanelOffset,
    pub background: String,
    /// `None` when the target panel's content is already showing
    pub reveal: Option<PendingReveal>,
    pub cause: TransitionCause,
}

/// Snapshot of everything a renderer needs.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelFrame {
    pub current: usize,
    pub offset: PanelOffset,
    pub background: String,
    pub panels: Vec<PanelVisibility>,
}

/// Observer invoked synchronously after every applied transition.
pub trait NavigationObserver {
    fn on_transition(&mut self, transition: &Transition);
}

/// Shared observers stay readable by their owner after being subscribed.
impl<T: NavigationObserver> NavigationObserver for Rc<RefCell<T>> {
    fn on_transition(&mut self, transition: &Transition) {
        self.borrow_mut().on_transition(transition);
    }
}

/// The navigator's mutable core.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    current_index: usize,
    last_transition: Option<Instant>,
    panel_count: usize,
}

impl NavigationState {
    fn new(panel_count: usize) -> Self {
        Self {
            current_index: 0,
            last_transition: None,
            panel_count,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn last_transition(&self) -> Option<Instant> {
        self.last_transition
    }

    pub fn panel_count(&self) -> usize {
        self.panel_count
    }

    fn stamp(&mut self, now: Instant) {
        // Keep the timestamp monotonic even if callers hand us an older instant.
        self.last_transition = Some(match self.last_transition {
            Some(prev) if prev > now => prev,
            _ => now,
        });
    }
}

/// Time since the last accepted directional transition, measured against the
/// cooldown window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionCooldown {
    pub elapsed: Option<Duration>,
    pub window: Duration,
}

impl TransitionCooldown {
    /// True when a new directional transition may begin.
    pub fn is_open(&self) -> bool {
        match self.elapsed {
            None => true,
            Some(elapsed) => elapsed >= self.window,
        }
    }

    pub fn remaining(&self) -> Duration {
        match self.elapsed {
            None => Duration::ZERO,
            Some(elapsed) => self.window.saturating_sub(elapsed),
        }
    }
}

/// Owner of the showcase's panel index.
pub struct PanelNavigator {
    state: NavigationState,
    gradients: Vec<String>,
    timing: NavigationTiming,
    reveal_generation: u64,
    content_revealed: bool,
    observers: Vec<Box<dyn NavigationObserver>>,
}

impl fmt::Debug for PanelNavigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelNavigator")
            .field("state", &self.state)
            .field("reveal_generation", &self.reveal_generation)
            .field("content_revealed", &self.content_revealed)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl PanelNavigator {
    /// Build a navigator from validated configuration. Starts at panel 0 with
    /// no transition recorded and no content revealed yet.
    pub fn new(config: &PanoramaConfig) -> Self {
        Self::from_parts(config.gradients(), config.timing.clone())
    }

    /// Build from a raw gradient list; the panel count is the list length.
    ///
    /// # Panics
    ///
    /// Panics if `gradients` is empty, since a navigator must always have a
    /// valid current panel.
    pub fn from_parts(gradients: Vec<String>, timing: NavigationTiming) -> Self {
        assert!(!gradients.is_empty(), "navigator needs at least one panel");
        Self {
            state: NavigationState::new(gradients.len()),
            gradients,
            timing,
            reveal_generation: 0,
            content_revealed: false,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn NavigationObserver>) {
        self.observers.push(observer);
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn panel_count(&self) -> usize {
        self.state.panel_count
    }

    pub fn timing(&self) -> &NavigationTiming {
        &self.timing
    }

    pub fn content_revealed(&self) -> bool {
        self.content_revealed
    }

    pub fn background(&self) -> &str {
        &self.gradients[self.state.current_index]
    }

    pub fn cooldown(&self, now: Instant) -> TransitionCooldown {
        TransitionCooldown {
            elapsed: self
                .state
                .last_transition
                .map(|last| now.saturating_duration_since(last)),
            window: self.timing.cooldown(),
        }
    }

    /// Show the panel at `target`. Out-of-range targets are ignored.
    ///
    /// Bypasses the cooldown and does not stamp it.
    pub fn go_to_panel(&mut self, target: usize) -> Option<Transition> {
        self.apply(target, TransitionCause::Direct)
    }

    /// Move one panel in `direction`, subject to the cooldown window.
    ///
    /// Rejected requests (cooldown still running, or already at the edge)
    /// leave the state untouched, including the cooldown timestamp.
    pub fn request_navigate(&mut self, direction: Direction, now: Instant) -> Option<Transition> {
        let cooldown = self.cooldown(now);
        if !cooldown.is_open() {
            tracing::trace!(
                ?direction,
                remaining_ms = cooldown.remaining().as_millis() as u64,
                "Navigation request inside cooldown, ignored"
            );
            return None;
        }

        let Some(target) = direction.step(self.state.current_index, self.state.panel_count) else {
            tracing::trace!(
                ?direction,
                index = self.state.current_index,
                "Navigation request at boundary, ignored"
            );
            return None;
        };

        let transition = self.apply(target, TransitionCause::Step(direction))?;
        self.state.stamp(now);
        Some(transition)
    }

    /// Absolute jump that ignores the cooldown but restarts it, so a wheel
    /// gesture right after a jump does not immediately move again.
    pub fn jump_to(&mut self, target: usize, now: Instant) -> Option<Transition> {
        let transition = self.apply(target, TransitionCause::Jump)?;
        self.state.stamp(now);
        Some(transition)
    }

    pub fn jump_to_first(&mut self, now: Instant) -> Option<Transition> {
        self.jump_to(0, now)
    }

    pub fn jump_to_last(&mut self, now: Instant) -> Option<Transition> {
        self.jump_to(self.state.panel_count - 1, now)
    }

    /// Apply a scheduled content reveal. Returns false for reveals that were
    /// superseded by a later transition.
    pub fn complete_reveal(&mut self, reveal: &PendingReveal) -> bool {
        let current = reveal.generation == self.reveal_generation
            && reveal.panel == self.state.current_index;
        if !current {
            tracing::trace!(
                panel = reveal.panel,
                generation = reveal.generation,
                latest = self.reveal_generation,
                "Dropping stale content reveal"
            );
            return false;
        }
        self.content_revealed = true;
        true
    }

    /// The reveal still outstanding for the current panel, if any. Lets a
    /// renderer that mounted after the transition pick the timer back up.
    pub fn pending_reveal(&self) -> Option<PendingReveal> {
        (!self.content_revealed).then(|| PendingReveal {
            panel: self.state.current_index,
            generation: self.reveal_generation,
            delay: self.timing.reveal_delay(),
        })
    }

    pub fn frame(&self) -> PanelFrame {
        let current = self.state.current_index;
        let panels = (0..self.state.panel_count)
            .map(|i| {
                if i == current {
                    PanelVisibility::active(self.content_revealed)
                } else {
                    PanelVisibility::HIDDEN
                }
            })
            .collect();

        PanelFrame {
            current,
            offset: PanelOffset::for_index(current),
            background: self.background().to_string(),
            panels,
        }
    }

    fn apply(&mut self, target: usize, cause: TransitionCause) -> Option<Transition> {
        if target >= self.state.panel_count {
            tracing::trace!(
                index = target,
                count = self.state.panel_count,
                "Panel index out of range, ignored"
            );
            return None;
        }

        let from = self.state.current_index;
        self.state.current_index = target;

        // Re-showing the active panel keeps its content as is.
        let reveal = if from == target && self.content_revealed {
            None
        } else {
            self.reveal_generation += 1;
            self.content_revealed = false;
            Some(PendingReveal {
                panel: target,
                generation: self.reveal_generation,
                delay: self.timing.reveal_delay(),
            })
        };

        let transition = Transition {
            from,
            to: target,
            offset: PanelOffset::for_index(target),
            background: self.gradients[target].clone(),
            reveal,
            cause,
        };

        tracing::debug!(from, to = target, ?cause, "Panel transition");

        for observer in self.observers.iter_mut() {
            observer.on_transition(&transition);
        }

        Some(transition)
    }
}
