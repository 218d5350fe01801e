// Host-side tests for the input mode tracker.
// The web crate is wasm-only, so these exercise `camera-core` directly.

use camera_core::constants::{DRAG_SENSITIVITY, PHI_CLAMP};
use camera_core::{normalize_pointer, InputMode, InputTracker, PointerInput, PointerState};
use glam::Vec2;
use std::f32::consts::FRAC_PI_4;

const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

fn tracker() -> InputTracker {
    InputTracker::new(true, DRAG_SENSITIVITY, PHI_CLAMP)
}

fn down(x: f32, y: f32) -> PointerInput {
    PointerInput::Down {
        client: Vec2::new(x, y),
    }
}

fn mv(x: f32, y: f32) -> PointerInput {
    PointerInput::Move {
        client: Vec2::new(x, y),
        viewport: VIEWPORT,
    }
}

#[test]
fn horizontal_drag_adds_theta() {
    let mut t = tracker();
    t.handle(down(100.0, 100.0));
    assert_eq!(t.mode(), InputMode::Dragging);
    t.handle(mv(200.0, 100.0));
    let r = t.rotation();
    assert!((r.theta - 0.3).abs() < 1e-6, "theta = {}", r.theta);
    assert_eq!(r.phi, 0.0);
}

#[test]
fn extreme_vertical_drag_clamps_phi_exactly() {
    let mut t = tracker();
    t.handle(down(100.0, 100.0));
    t.handle(mv(100.0, 100_000.0));
    assert_eq!(t.rotation().phi, FRAC_PI_4);
    t.handle(mv(100.0, -100_000.0));
    assert_eq!(t.rotation().phi, -FRAC_PI_4);
}

#[test]
fn phi_clamp_holds_under_sign_flips() {
    let mut t = tracker();
    for session in 0..20 {
        t.handle(down(0.0, 0.0));
        for i in 0..50 {
            let sign = if (i + session) % 2 == 0 { 1.0 } else { -1.0 };
            let y = sign * (i as f32 + 1.0) * 1e4;
            t.handle(mv(i as f32 * 3.0, y));
            let phi = t.rotation().phi;
            assert!((-FRAC_PI_4..=FRAC_PI_4).contains(&phi), "phi = {phi}");
        }
        t.handle(PointerInput::Up);
    }
}

#[test]
fn release_without_press_is_noop() {
    let mut t = tracker();
    t.handle(mv(200.0, 150.0));
    let before = t.snapshot();
    t.handle(PointerInput::Up);
    assert_eq!(t.snapshot(), before);
    assert_eq!(t.mode(), InputMode::ParallaxOrIdle);
}

#[test]
fn second_press_keeps_first_session() {
    let mut t = tracker();
    t.handle(down(0.0, 0.0));
    t.handle(mv(100.0, 0.0));
    t.handle(down(500.0, 500.0));

    let session = t.drag_session().copied().expect("still dragging");
    assert_eq!(session.start, Vec2::ZERO);
    assert_eq!(session.base_rotation.theta, 0.0);

    // delta is still measured from the first press
    t.handle(mv(200.0, 0.0));
    assert!((t.rotation().theta - 0.6).abs() < 1e-6);
}

#[test]
fn rotation_is_remembered_between_drags() {
    let mut t = tracker();
    t.handle(down(0.0, 0.0));
    t.handle(mv(100.0, 50.0));
    t.handle(PointerInput::Up);
    let after_first = t.rotation();
    assert_eq!(t.mode(), InputMode::ParallaxOrIdle);

    t.handle(down(400.0, 400.0));
    assert_eq!(t.drag_session().map(|s| s.base_rotation), Some(after_first));
    t.handle(mv(500.0, 400.0));
    assert!((t.rotation().theta - (after_first.theta + 0.3)).abs() < 1e-6);
    assert_eq!(t.rotation().phi, after_first.phi);
}

#[test]
fn pointer_is_normalized_to_ndc() {
    let mut t = tracker();
    t.handle(mv(400.0, 300.0));
    assert_eq!(t.pointer(), PointerState { x: 0.0, y: 0.0 });
    t.handle(mv(0.0, 0.0));
    assert_eq!(t.pointer(), PointerState { x: -1.0, y: 1.0 });
    t.handle(mv(800.0, 600.0));
    assert_eq!(t.pointer(), PointerState { x: 1.0, y: -1.0 });
}

#[test]
fn moves_while_dragging_leave_pointer_alone() {
    let mut t = tracker();
    t.handle(mv(600.0, 150.0));
    let pointer = t.pointer();
    t.handle(down(600.0, 150.0));
    t.handle(mv(10.0, 10.0));
    assert_eq!(t.pointer(), pointer);
}

#[test]
fn empty_viewport_is_ignored() {
    assert_eq!(normalize_pointer(Vec2::new(5.0, 5.0), Vec2::ZERO), None);
    let mut t = tracker();
    t.handle(mv(600.0, 150.0));
    let pointer = t.pointer();
    t.handle(PointerInput::Move {
        client: Vec2::new(1.0, 1.0),
        viewport: Vec2::new(0.0, 600.0),
    });
    assert_eq!(t.pointer(), pointer);
}

#[test]
fn non_finite_drag_is_ignored() {
    let mut t = tracker();
    t.handle(down(0.0, 0.0));
    t.handle(mv(30.0, 0.0));
    let r = t.rotation();
    t.handle(mv(f32::NAN, 0.0));
    t.handle(mv(f32::INFINITY, 0.0));
    assert_eq!(t.rotation(), r);
}

#[test]
fn disabled_tracker_ignores_everything() {
    let mut t = InputTracker::disabled();
    t.handle(mv(10.0, 10.0));
    t.handle(down(10.0, 10.0));
    t.handle(mv(500.0, 500.0));
    assert_eq!(t.mode(), InputMode::ParallaxOrIdle);
    assert_eq!(t.pointer(), PointerState::default());
    assert_eq!(t.rotation().theta, 0.0);
    assert!(!t.is_enabled());
}

#[test]
fn reset_restores_mount_defaults() {
    let mut t = tracker();
    t.handle(mv(10.0, 10.0));
    t.handle(down(0.0, 0.0));
    t.handle(mv(100.0, 100.0));
    t.reset();
    assert_eq!(t.mode(), InputMode::ParallaxOrIdle);
    assert_eq!(t.pointer(), PointerState::default());
    assert_eq!(t.rotation(), Default::default());
}

#[test]
fn cancel_ends_drag_and_keeps_rotation() {
    let mut t = tracker();
    t.handle(down(100.0, 100.0));
    t.handle(mv(200.0, 100.0));
    assert!(t.is_dragging());
    let rotated = t.rotation();

    t.handle(PointerInput::Cancel);
    assert!(!t.is_dragging());
    assert_eq!(t.rotation(), rotated);

    // plain moves go back to the parallax pointer
    t.handle(mv(400.0, 300.0));
    assert_eq!(t.pointer(), PointerState { x: 0.0, y: 0.0 });
    assert_eq!(t.rotation(), rotated);

    // and the next press opens a fresh session
    t.handle(down(10.0, 20.0));
    let session = t.drag_session().copied().unwrap();
    assert_eq!(session.start, Vec2::new(10.0, 20.0));
    assert_eq!(session.base_rotation, rotated);
}

#[test]
fn cancel_without_drag_is_noop() {
    let mut t = tracker();
    t.handle(mv(200.0, 150.0));
    let before = t.snapshot();
    t.handle(PointerInput::Cancel);
    assert_eq!(t.snapshot(), before);
}
