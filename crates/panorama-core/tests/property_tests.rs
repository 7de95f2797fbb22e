//! Property-based tests for PanelNavigator
//!
//! Uses proptest to check the navigation invariants over arbitrary input
//! sequences.

use std::time::{Duration, Instant};

use panorama_core::{Direction, InputAdapter, InputEvent, NavKey, PanelNavigator, PanoramaConfig};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn key_strategy() -> impl Strategy<Value = NavKey> {
    prop_oneof![
        Just(NavKey::ArrowDown),
        Just(NavKey::ArrowUp),
        Just(NavKey::PageDown),
        Just(NavKey::PageUp),
        Just(NavKey::Home),
        Just(NavKey::End),
    ]
}

fn event_strategy() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        3 => (-200.0f64..200.0).prop_map(|delta_y| InputEvent::Wheel { delta_y }),
        2 => key_strategy().prop_map(|key| InputEvent::Key { key }),
        1 => (0.0f64..1000.0).prop_map(|screen_y| InputEvent::TouchStart { screen_y }),
        1 => (0.0f64..1000.0).prop_map(|screen_y| InputEvent::TouchEnd { screen_y }),
        1 => (0usize..15).prop_map(|index| InputEvent::Dot { index }),
        1 => "[a-z-]{0,12}".prop_map(|id| InputEvent::Fragment { id }),
    ]
}

/// Events paired with the gap (ms) since the previous event.
fn timeline_strategy() -> impl Strategy<Value = Vec<(u64, InputEvent)>> {
    prop::collection::vec((0u64..1500, event_strategy()), 0..60)
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Forward), Just(Direction::Backward)]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The current index stays in range whatever the input
    #[test]
    fn index_always_in_range(timeline in timeline_strategy()) {
        let config = PanoramaConfig::default();
        let mut nav = PanelNavigator::new(&config);
        let mut input = InputAdapter::new(&config);
        let mut now = Instant::now();

        for (gap, event) in &timeline {
            now += Duration::from_millis(*gap);
            input.dispatch(&mut nav, event, now);
            prop_assert!(nav.current_index() < nav.panel_count());
        }
    }

    /// The cooldown timestamp never moves backwards
    #[test]
    fn last_transition_is_monotonic(timeline in timeline_strategy()) {
        let config = PanoramaConfig::default();
        let mut nav = PanelNavigator::new(&config);
        let mut input = InputAdapter::new(&config);
        let mut now = Instant::now();
        let mut previous = None;

        for (gap, event) in &timeline {
            now += Duration::from_millis(*gap);
            input.dispatch(&mut nav, event, now);
            let current = nav.state().last_transition();
            if let (Some(prev), Some(cur)) = (previous, current) {
                prop_assert!(cur >= prev);
            }
            if current.is_some() {
                previous = current;
            }
        }
    }

    /// Out-of-range targets never change the index
    #[test]
    fn out_of_range_go_to_is_noop(start in 0usize..10, target in 10usize..10_000) {
        let mut nav = PanelNavigator::new(&PanoramaConfig::default());
        nav.go_to_panel(start);
        prop_assert!(nav.go_to_panel(target).is_none());
        prop_assert_eq!(nav.current_index(), start);
    }

    /// Within one cooldown window at most one directional request is accepted
    #[test]
    fn one_step_per_cooldown_window(
        directions in prop::collection::vec(direction_strategy(), 1..30),
        gaps in prop::collection::vec(0u64..100, 30),
    ) {
        let mut nav = PanelNavigator::new(&PanoramaConfig::default());
        nav.go_to_panel(5);
        let t0 = Instant::now();
        let mut elapsed = 0u64;
        let mut accepted = 0;

        for (direction, gap) in directions.iter().zip(gaps.iter()) {
            elapsed += gap;
            if elapsed >= 800 {
                break;
            }
            if nav.request_navigate(*direction, t0 + Duration::from_millis(elapsed)).is_some() {
                accepted += 1;
            }
        }

        prop_assert!(accepted <= 1);
    }

    /// Re-showing the active panel leaves the rendered frame untouched
    #[test]
    fn go_to_current_is_idempotent(target in 0usize..10) {
        let mut nav = PanelNavigator::new(&PanoramaConfig::default());
        if let Some(reveal) = nav.go_to_panel(target).and_then(|t| t.reveal) {
            nav.complete_reveal(&reveal);
        }
        let before = nav.frame();
        nav.go_to_panel(target);
        prop_assert_eq!(nav.frame(), before);
    }
}
