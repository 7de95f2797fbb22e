//! Intro narrative: a three-stage cycle inside the intro page.
//!
//! Stage 1 poses the question, stage 2 places the body in its environment,
//! stage 3 turns to the garment. Clicking advances 1 → 2 → 3 → 1. Each change
//! locks interaction for the transition duration; while locked, clicks, dots
//! and scrolling are ignored. Scrolling within stages 2 and 3 rotates the
//! scene.

use std::time::{Duration, Instant};

use crate::config::NavigationTiming;

/// One of the three intro stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    Question,
    Environment,
    Garment,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Question, Stage::Environment, Stage::Garment];

    /// 1-based stage number as shown by the progress dots.
    pub fn number(self) -> u8 {
        match self {
            Stage::Question => 1,
            Stage::Environment => 2,
            Stage::Garment => 3,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Stage::Question),
            2 => Some(Stage::Environment),
            3 => Some(Stage::Garment),
            _ => None,
        }
    }

    /// Next stage, looping back to the start after the last.
    pub fn next(self) -> Self {
        match self {
            Stage::Question => Stage::Environment,
            Stage::Environment => Stage::Garment,
            Stage::Garment => Stage::Question,
        }
    }
}

/// Result of a stage change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageChange {
    pub from: Stage,
    pub to: Stage,
    /// Interaction resumes at this instant
    pub unlocks_at: Instant,
}

/// Scene pose produced by scrolling.
#[derive(Clone, Debug, PartialEq)]
pub enum ScenePose {
    /// Stage 1 does not react to scrolling
    Still,
    Environment(EnvironmentPose),
    Garment(GarmentPose),
}

/// Stage 2: environment turns around the figure.
#[derive(Clone, Debug, PartialEq)]
pub struct EnvironmentPose {
    /// Base rotation in degrees, `(-360, 360)`
    pub rotation: f64,
}

impl EnvironmentPose {
    pub fn building_rotation(&self, index: usize) -> f64 {
        self.rotation + index as f64 * 20.0
    }

    pub fn tree_rotation(&self, index: usize) -> f64 {
        self.rotation + index as f64 * 15.0
    }

    pub fn person_rotation(&self) -> f64 {
        self.rotation * 0.1
    }

    pub fn building_transform(&self, index: usize, depth_px: f64) -> String {
        format!(
            "translateZ({}px) rotateY({}deg)",
            depth_px,
            self.building_rotation(index)
        )
    }

    pub fn tree_transform(&self, index: usize, depth_px: f64) -> String {
        format!(
            "translateZ({}px) rotateY({}deg)",
            depth_px,
            self.tree_rotation(index)
        )
    }

    pub fn person_transform(&self) -> String {
        format!("translate(-50%, -50%) rotateY({}deg)", self.person_rotation())
    }
}

/// Stage 3: the figure turns, breathing slightly in scale.
#[derive(Clone, Debug, PartialEq)]
pub struct GarmentPose {
    pub rotation: f64,
}

impl GarmentPose {
    pub fn scale(&self) -> f64 {
        1.0 + self.rotation.to_radians().sin() * 0.1
    }

    pub fn container_transform(&self) -> String {
        format!("rotateY({}deg)", self.rotation)
    }

    pub fn figure_transform(&self) -> String {
        format!("scale({})", self.scale())
    }
}

#[derive(Clone, Debug)]
pub struct IntroNarrative {
    stage: Stage,
    scroll_y: f64,
    locked_until: Option<Instant>,
    lock: Duration,
}

impl Default for IntroNarrative {
    fn default() -> Self {
        Self::new(&NavigationTiming::default())
    }
}

impl IntroNarrative {
    pub fn new(timing: &NavigationTiming) -> Self {
        Self {
            stage: Stage::Question,
            scroll_y: 0.0,
            locked_until: None,
            lock: timing.stage_lock(),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn is_transitioning(&self, now: Instant) -> bool {
        matches!(self.locked_until, Some(until) if now < until)
    }

    /// Click anywhere: advance to the next stage.
    pub fn advance(&mut self, now: Instant) -> Option<StageChange> {
        if self.is_transitioning(now) {
            return None;
        }
        self.go_to_stage(self.stage.next(), now)
    }

    pub fn go_to_stage(&mut self, stage: Stage, now: Instant) -> Option<StageChange> {
        if self.is_transitioning(now) || stage == self.stage {
            return None;
        }

        let from = self.stage;
        self.stage = stage;
        self.scroll_y = 0.0;
        let unlocks_at = now + self.lock;
        self.locked_until = Some(unlocks_at);

        tracing::debug!(from = from.number(), to = stage.number(), "Intro stage change");

        Some(StageChange {
            from,
            to: stage,
            unlocks_at,
        })
    }

    /// Feed a wheel delta. Returns `None` while locked.
    pub fn scroll(&mut self, delta_y: f64, now: Instant) -> Option<ScenePose> {
        if self.is_transitioning(now) {
            return None;
        }
        self.scroll_y += delta_y * 0.5;
        Some(self.pose())
    }

    pub fn pose(&self) -> ScenePose {
        match self.stage {
            Stage::Question => ScenePose::Still,
            Stage::Environment => ScenePose::Environment(EnvironmentPose {
                rotation: (self.scroll_y * 0.1) % 360.0,
            }),
            Stage::Garment => ScenePose::Garment(GarmentPose {
                rotation: (self.scroll_y * 0.2) % 360.0,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn stage_cycle_loops() {
        assert_eq!(Stage::Question.next(), Stage::Environment);
        assert_eq!(Stage::Environment.next(), Stage::Garment);
        assert_eq!(Stage::Garment.next(), Stage::Question);
    }

    #[test]
    fn stage_numbers_round_trip() {
        for stage in Stage::ALL {
            assert_eq!(Stage::from_number(stage.number()), Some(stage));
        }
        assert_eq!(Stage::from_number(0), None);
        assert_eq!(Stage::from_number(4), None);
    }

    #[test]
    fn advance_respects_lock() {
        let mut intro = IntroNarrative::default();
        let t0 = Instant::now();

        let change = intro.advance(t0).unwrap();
        assert_eq!(change.to, Stage::Environment);
        assert_eq!(change.unlocks_at, t0 + ms(1200));

        assert!(intro.advance(t0 + ms(500)).is_none());
        assert_eq!(intro.stage(), Stage::Environment);

        assert_eq!(intro.advance(t0 + ms(1200)).unwrap().to, Stage::Garment);
        assert_eq!(intro.advance(t0 + ms(2400)).unwrap().to, Stage::Question);
    }

    #[test]
    fn go_to_same_stage_is_ignored() {
        let mut intro = IntroNarrative::default();
        let t0 = Instant::now();
        assert!(intro.go_to_stage(Stage::Question, t0).is_none());
        assert!(!intro.is_transitioning(t0));
    }

    #[test]
    fn dots_jump_directly() {
        let mut intro = IntroNarrative::default();
        let change = intro.go_to_stage(Stage::Garment, Instant::now()).unwrap();
        assert_eq!(change.from, Stage::Question);
        assert_eq!(change.to, Stage::Garment);
    }

    #[test]
    fn scrolling_rotates_environment() {
        let mut intro = IntroNarrative::default();
        let t0 = Instant::now();
        intro.go_to_stage(Stage::Environment, t0);

        assert!(intro.scroll(100.0, t0 + ms(10)).is_none());

        let pose = intro.scroll(100.0, t0 + ms(1300)).unwrap();
        let ScenePose::Environment(env) = pose else {
            panic!("expected environment pose");
        };
        assert_eq!(env.rotation, 5.0);
        assert_eq!(env.building_rotation(2), 45.0);
        assert_eq!(env.tree_rotation(1), 20.0);
        assert_eq!(env.person_rotation(), 0.5);
        assert_eq!(env.building_transform(0, -100.0), "translateZ(-100px) rotateY(5deg)");
    }

    #[test]
    fn scrolling_turns_garment() {
        let mut intro = IntroNarrative::default();
        let t0 = Instant::now();
        intro.go_to_stage(Stage::Garment, t0);

        let pose = intro.scroll(900.0, t0 + ms(1200)).unwrap();
        let ScenePose::Garment(garment) = pose else {
            panic!("expected garment pose");
        };
        assert_eq!(garment.rotation, 90.0);
        assert!((garment.scale() - 1.1).abs() < 1e-9);
    }

    #[test]
    fn stage_change_resets_scroll() {
        let mut intro = IntroNarrative::default();
        let t0 = Instant::now();
        intro.scroll(40.0, t0);
        assert_eq!(intro.scroll_y(), 20.0);
        intro.advance(t0);
        assert_eq!(intro.scroll_y(), 0.0);
    }

    #[test]
    fn question_stage_is_still() {
        let mut intro = IntroNarrative::default();
        assert_eq!(intro.scroll(300.0, Instant::now()), Some(ScenePose::Still));
    }
}
