//! Input adapters.
//!
//! Each raw input source (wheel, keyboard, touch, progress dots, URL fragment)
//! is normalized into a [`NavCommand`]. Adapters only classify input; the
//! cooldown lives in the navigator so it is applied exactly once regardless of
//! which source produced the command.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::config::PanoramaConfig;
use crate::hash::HashSync;
use crate::navigation::{Direction, PanelNavigator, Transition};

/// Keys the showcase reacts to. Names match DOM `KeyboardEvent.key` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    PageDown,
    PageUp,
    Home,
    End,
}

impl NavKey {
    /// Map a DOM key name; unrelated keys yield `None`.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowDown" => Some(NavKey::ArrowDown),
            "ArrowUp" => Some(NavKey::ArrowUp),
            "PageDown" => Some(NavKey::PageDown),
            "PageUp" => Some(NavKey::PageUp),
            "Home" => Some(NavKey::Home),
            "End" => Some(NavKey::End),
            _ => None,
        }
    }
}

/// Raw input as delivered by the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    Wheel { delta_y: f64 },
    Key { key: NavKey },
    TouchStart { screen_y: f64 },
    TouchEnd { screen_y: f64 },
    /// Click on a progress indicator dot
    Dot { index: usize },
    /// URL fragment changed outside the navigator
    Fragment { id: String },
}

/// Normalized navigation intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCommand {
    /// Rate-limited move by one panel
    Step(Direction),
    /// Absolute jump that restarts the cooldown
    Jump(usize),
    JumpFirst,
    JumpLast,
    /// Show a panel without touching the cooldown
    Show(usize),
}

impl NavCommand {
    pub fn apply(self, navigator: &mut PanelNavigator, now: Instant) -> Option<Transition> {
        match self {
            NavCommand::Step(direction) => navigator.request_navigate(direction, now),
            NavCommand::Jump(index) => navigator.jump_to(index, now),
            NavCommand::JumpFirst => navigator.jump_to_first(now),
            NavCommand::JumpLast => navigator.jump_to_last(now),
            NavCommand::Show(index) => navigator.go_to_panel(index),
        }
    }
}

/// Turns [`InputEvent`]s into [`NavCommand`]s.
#[derive(Clone, Debug)]
pub struct InputAdapter {
    hash: HashSync,
    wheel_threshold: f64,
    swipe_threshold: f64,
    touch_start: Option<f64>,
}

impl InputAdapter {
    pub fn new(config: &PanoramaConfig) -> Self {
        Self {
            hash: HashSync::from_config(config),
            wheel_threshold: config.timing.wheel_threshold,
            swipe_threshold: config.timing.swipe_threshold,
            touch_start: None,
        }
    }

    pub fn hash(&self) -> &HashSync {
        &self.hash
    }

    pub fn translate(&mut self, event: &InputEvent) -> Option<NavCommand> {
        match event {
            InputEvent::Wheel { delta_y } => self.wheel(*delta_y),
            InputEvent::Key { key } => Some(Self::key(*key)),
            InputEvent::TouchStart { screen_y } => {
                self.touch_start = Some(*screen_y);
                None
            }
            InputEvent::TouchEnd { screen_y } => self.touch_end(*screen_y),
            InputEvent::Dot { index } => Some(NavCommand::Jump(*index)),
            InputEvent::Fragment { id } => match self.hash.resolve(id) {
                Some(index) => Some(NavCommand::Show(index)),
                None => {
                    tracing::debug!(fragment = %id, "Unknown fragment, ignored");
                    None
                }
            },
        }
    }

    /// Translate and apply in one step.
    pub fn dispatch(
        &mut self,
        navigator: &mut PanelNavigator,
        event: &InputEvent,
        now: Instant,
    ) -> Option<Transition> {
        self.translate(event)?.apply(navigator, now)
    }

    fn wheel(&self, delta_y: f64) -> Option<NavCommand> {
        if delta_y > self.wheel_threshold {
            Some(NavCommand::Step(Direction::Forward))
        } else if delta_y < -self.wheel_threshold {
            Some(NavCommand::Step(Direction::Backward))
        } else {
            None
        }
    }

    fn key(key: NavKey) -> NavCommand {
        match key {
            NavKey::ArrowDown | NavKey::PageDown => NavCommand::Step(Direction::Forward),
            NavKey::ArrowUp | NavKey::PageUp => NavCommand::Step(Direction::Backward),
            NavKey::Home => NavCommand::JumpFirst,
            NavKey::End => NavCommand::JumpLast,
        }
    }

    fn touch_end(&mut self, end_y: f64) -> Option<NavCommand> {
        let start_y = self.touch_start.take()?;
        // Finger moving up the screen means "next panel".
        let diff = start_y - end_y;
        if diff.abs() <= self.swipe_threshold {
            return None;
        }
        if diff > 0.0 {
            Some(NavCommand::Step(Direction::Forward))
        } else {
            Some(NavCommand::Step(Direction::Backward))
        }
    }
}
