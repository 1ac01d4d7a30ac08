// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn drag_reports_deltas_for_the_active_pointer() {
    let mut drag = DragState::default();
    assert_eq!(drag.advance(1, Vec2::new(5.0, 5.0)), None);

    drag.begin(1, Vec2::new(10.0, 20.0));
    assert_eq!(drag.advance(1, Vec2::new(15.0, 18.0)), Some(Vec2::new(5.0, -2.0)));
    assert_eq!(drag.advance(1, Vec2::new(15.0, 18.0)), Some(Vec2::ZERO));
}

#[test]
fn drag_ignores_other_pointers() {
    let mut drag = DragState::default();
    drag.begin(7, Vec2::ZERO);
    assert_eq!(drag.advance(8, Vec2::new(3.0, 3.0)), None);

    // ending a different pointer leaves the drag running
    drag.end(8);
    assert!(drag.active);
    drag.end(7);
    assert!(!drag.active);
    assert_eq!(drag.advance(7, Vec2::new(1.0, 1.0)), None);
}

#[test]
fn wheel_delta_is_normalized_to_pixels() {
    assert_eq!(wheel_delta_px(-53.0, 0), -53.0);
    assert_eq!(wheel_delta_px(3.0, 1), 48.0);
    assert_eq!(wheel_delta_px(-1.0, 2), -800.0);
    assert_eq!(wheel_delta_px(4.0, 99), 4.0);
}

#[test]
fn keys_map_to_actions() {
    assert_eq!(action_for_key("f"), Some(KeyAction::Fullscreen));
    assert_eq!(action_for_key("F"), Some(KeyAction::Fullscreen));
    assert_eq!(action_for_key("r"), Some(KeyAction::ResetCamera));
    assert_eq!(action_for_key("R"), Some(KeyAction::ResetCamera));
    assert_eq!(action_for_key("Escape"), None);
    assert_eq!(action_for_key(""), None);
}
