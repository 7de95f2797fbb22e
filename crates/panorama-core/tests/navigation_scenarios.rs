//! End-to-end navigation scenarios
//!
//! Drive the navigator through the input adapter the way the desktop app
//! does and check the resulting panel index, fragment and visibility.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use panorama_core::{HashSync, InputAdapter, InputEvent, NavKey, PanelNavigator, PanoramaConfig};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn setup() -> (PanelNavigator, InputAdapter) {
    let config = PanoramaConfig::default();
    (PanelNavigator::new(&config), InputAdapter::new(&config))
}

// ============================================================================
// Wheel
// ============================================================================

#[test]
fn test_wheel_sequence_respects_cooldown() {
    let (mut nav, mut input) = setup();
    let t0 = Instant::now();
    let wheel = InputEvent::Wheel { delta_y: 50.0 };

    input.dispatch(&mut nav, &wheel, t0);
    assert_eq!(nav.current_index(), 1);

    input.dispatch(&mut nav, &wheel, t0 + ms(200));
    assert_eq!(nav.current_index(), 1);

    input.dispatch(&mut nav, &wheel, t0 + ms(900));
    assert_eq!(nav.current_index(), 2);
}

#[test]
fn test_small_wheel_deltas_never_navigate() {
    let (mut nav, mut input) = setup();
    let t0 = Instant::now();
    for i in 0..20 {
        let event = InputEvent::Wheel { delta_y: 10.0 };
        assert!(input.dispatch(&mut nav, &event, t0 + ms(i * 1000)).is_none());
    }
    assert_eq!(nav.current_index(), 0);
    assert!(nav.state().last_transition().is_none());
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_end_key_jumps_during_cooldown() {
    let (mut nav, mut input) = setup();
    let t0 = Instant::now();

    nav.go_to_panel(2);
    input.dispatch(&mut nav, &InputEvent::Key { key: NavKey::ArrowDown }, t0);
    assert_eq!(nav.current_index(), 3);

    // Still inside the cooldown started by the arrow key.
    input.dispatch(&mut nav, &InputEvent::Key { key: NavKey::End }, t0 + ms(50));
    assert_eq!(nav.current_index(), 9);
}

#[test]
fn test_home_key_returns_to_start() {
    let (mut nav, mut input) = setup();
    nav.go_to_panel(6);
    input.dispatch(&mut nav, &InputEvent::Key { key: NavKey::Home }, Instant::now());
    assert_eq!(nav.current_index(), 0);
}

#[test]
fn test_page_keys_walk_panels() {
    let (mut nav, mut input) = setup();
    let t0 = Instant::now();
    for step in 0..3u64 {
        input.dispatch(
            &mut nav,
            &InputEvent::Key { key: NavKey::PageDown },
            t0 + ms(step * 800),
        );
    }
    assert_eq!(nav.current_index(), 3);
    input.dispatch(&mut nav, &InputEvent::Key { key: NavKey::PageUp }, t0 + ms(2400));
    assert_eq!(nav.current_index(), 2);
}

// ============================================================================
// Touch
// ============================================================================

#[test]
fn test_swipe_gestures() {
    let (mut nav, mut input) = setup();
    let t0 = Instant::now();

    input.dispatch(&mut nav, &InputEvent::TouchStart { screen_y: 600.0 }, t0);
    input.dispatch(&mut nav, &InputEvent::TouchEnd { screen_y: 400.0 }, t0);
    assert_eq!(nav.current_index(), 1);

    // A second swipe inside the cooldown is swallowed.
    input.dispatch(&mut nav, &InputEvent::TouchStart { screen_y: 600.0 }, t0 + ms(100));
    input.dispatch(&mut nav, &InputEvent::TouchEnd { screen_y: 400.0 }, t0 + ms(300));
    assert_eq!(nav.current_index(), 1);

    input.dispatch(&mut nav, &InputEvent::TouchStart { screen_y: 300.0 }, t0 + ms(1000));
    input.dispatch(&mut nav, &InputEvent::TouchEnd { screen_y: 500.0 }, t0 + ms(1100));
    assert_eq!(nav.current_index(), 0);
}

// ============================================================================
// Fragments and dots
// ============================================================================

#[test]
fn test_external_fragment_shows_panel() {
    let (mut nav, mut input) = setup();
    let t = input
        .dispatch(
            &mut nav,
            &InputEvent::Fragment {
                id: "gallery".to_string(),
            },
            Instant::now(),
        )
        .unwrap();

    assert_eq!(nav.current_index(), 5);
    let reveal = t.reveal.unwrap();
    assert!(nav.complete_reveal(&reveal));

    let frame = nav.frame();
    assert!(frame.panels[5].is_active());
    assert!(frame.panels[5].content_revealed);
    assert_eq!(frame.offset.css(), "translateX(-500vw)");
}

#[test]
fn test_unknown_fragment_is_ignored() {
    let (mut nav, mut input) = setup();
    nav.go_to_panel(4);
    let event = InputEvent::Fragment {
        id: "basement".to_string(),
    };
    assert!(input.dispatch(&mut nav, &event, Instant::now()).is_none());
    assert_eq!(nav.current_index(), 4);
}

#[test]
fn test_dot_jump_ignores_cooldown() {
    let (mut nav, mut input) = setup();
    let t0 = Instant::now();
    input.dispatch(&mut nav, &InputEvent::Wheel { delta_y: 80.0 }, t0);
    input.dispatch(&mut nav, &InputEvent::Dot { index: 7 }, t0 + ms(10));
    assert_eq!(nav.current_index(), 7);

    input.dispatch(&mut nav, &InputEvent::Dot { index: 12 }, t0 + ms(20));
    assert_eq!(nav.current_index(), 7);
}

#[test]
fn test_hash_observer_tracks_fragment() {
    let (mut nav, mut input) = setup();
    let hash = Rc::new(RefCell::new(HashSync::default()));
    nav.subscribe(Box::new(hash.clone()));
    assert_eq!(hash.borrow().current_fragment(), None);

    let t0 = Instant::now();
    input.dispatch(&mut nav, &InputEvent::Wheel { delta_y: 40.0 }, t0);
    assert_eq!(hash.borrow().current_fragment(), Some("route"));

    input.dispatch(&mut nav, &InputEvent::Key { key: NavKey::End }, t0 + ms(5));
    assert_eq!(hash.borrow().current_fragment(), Some("contact"));

    // fragment-driven moves are reported too
    input.dispatch(&mut nav, &InputEvent::Fragment { id: "gallery".to_string() }, t0 + ms(10));
    assert_eq!(hash.borrow().current_fragment(), Some("gallery"));
}

#[test]
fn test_history_back_restores_earlier_panels() {
    let (mut nav, mut input) = setup();
    let hash = Rc::new(RefCell::new(HashSync::default()));
    nav.subscribe(Box::new(hash.clone()));

    // every accepted move leaves a fragment behind, like history entries
    let t0 = Instant::now();
    let mut history = Vec::new();
    for step in 0..3u64 {
        let wheel = InputEvent::Wheel { delta_y: 120.0 };
        input.dispatch(&mut nav, &wheel, t0 + ms(step * 900));
        history.push(hash.borrow().current_fragment().unwrap().to_string());
    }
    assert_eq!(history, vec!["route", "wardrobe", "door-mirror"]);
    assert_eq!(nav.current_index(), 3);

    // walk back through the entries while the last wheel is still cooling down
    let back = t0 + ms(1900);
    for (fragment, index) in [("wardrobe", 2), ("route", 1)] {
        let event = InputEvent::Fragment { id: fragment.to_string() };
        let transition = input.dispatch(&mut nav, &event, back).unwrap();
        assert_eq!(transition.to, index);
        assert_eq!(hash.borrow().current_fragment(), Some(fragment));
    }
    assert_eq!(nav.current_index(), 1);

    // going back does not restart the cooldown of the last wheel move
    let wheel = InputEvent::Wheel { delta_y: 120.0 };
    assert!(input.dispatch(&mut nav, &wheel, t0 + ms(2000)).is_none());
    assert!(input.dispatch(&mut nav, &wheel, t0 + ms(2700)).is_some());
    assert_eq!(nav.current_index(), 2);
}

// ============================================================================
// Reveal timers
// ============================================================================

#[test]
fn test_rapid_jumps_only_reveal_latest_panel() {
    let (mut nav, _) = setup();
    let t0 = Instant::now();
    let reveals: Vec<_> = [3, 6, 8]
        .into_iter()
        .enumerate()
        .filter_map(|(i, target)| nav.jump_to(target, t0 + ms(i as u64 * 30)))
        .filter_map(|t| t.reveal)
        .collect();

    // Timers fire in scheduling order; only the last one still applies.
    let applied: Vec<bool> = reveals.iter().map(|r| nav.complete_reveal(r)).collect();
    assert_eq!(applied, vec![false, false, true]);
    assert!(nav.frame().panels[8].content_revealed);
}
