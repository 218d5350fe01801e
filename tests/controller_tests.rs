// Host-side tests for the camera controller driving a `SceneCamera`.

use camera_core::constants::TIME_SCALE;
use camera_core::orbit::look_at_target;
use camera_core::{
    CameraConfig, CameraController, CameraError, CameraHandle, InputMode, InputSnapshot,
    ManualPointerSource, PointerInput, PointerState, Rotation, SceneCamera,
};
use glam::{Vec2, Vec3};

const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

fn approx(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a - b).abs().max_element() <= eps
}

fn mounted() -> (CameraController, ManualPointerSource) {
    let source = ManualPointerSource::new();
    let controller = CameraController::mount(CameraConfig::default(), &source).unwrap();
    (controller, source)
}

fn mv(x: f32, y: f32) -> PointerInput {
    PointerInput::Move {
        client: Vec2::new(x, y),
        viewport: VIEWPORT,
    }
}

/// Records writes so skipped frames can be told apart from no-op updates.
#[derive(Default)]
struct RecordingCamera {
    position: Vec3,
    writes: usize,
    look_ats: Vec<Vec3>,
}

impl CameraHandle for RecordingCamera {
    fn position(&self) -> Vec3 {
        self.position
    }
    fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.writes += 1;
    }
    fn look_at(&mut self, target: Vec3) {
        self.look_ats.push(target);
    }
}

#[test]
fn idle_target_at_time_zero_is_orbit_start() {
    let (controller, _source) = mounted();
    let pose = controller.target_at(0.0).unwrap();
    assert!(approx(pose.position, Vec3::new(0.0, 0.625, 4.0), 1e-5));
    assert!(approx(pose.look_at, Vec3::new(0.0, 0.5, 0.0), 1e-6));
}

#[test]
fn update_moves_a_filter_step_toward_target() {
    let (controller, _source) = mounted();
    let mut camera = SceneCamera::default();
    let start = camera.position();
    let target = controller.target_at(2.0).unwrap();

    let next = controller.update(2.0, &mut camera).unwrap();
    assert_eq!(camera.position(), next);
    assert!(approx(next, start + (target.position - start) * 0.02, 1e-5));
    assert_eq!(camera.target, target.look_at);
}

#[test]
fn look_at_uses_the_scaled_clock() {
    let (controller, _source) = mounted();
    let elapsed = 37.0;
    let pose = controller.target_at(elapsed).unwrap();
    let expected = look_at_target((elapsed * TIME_SCALE as f64) as f32);
    assert!(approx(pose.look_at, expected, 1e-6));
}

#[test]
fn look_at_ignores_input() {
    let (controller, source) = mounted();
    let before = controller.target_at(5.0).unwrap().look_at;
    source.emit(mv(700.0, 20.0));
    source.emit(PointerInput::Down {
        client: Vec2::new(10.0, 10.0),
    });
    source.emit(mv(400.0, 300.0));
    assert_eq!(controller.target_at(5.0).unwrap().look_at, before);
}

#[test]
fn drag_through_source_rotates_theta() {
    let (controller, source) = mounted();
    source.emit(PointerInput::Down {
        client: Vec2::new(100.0, 100.0),
    });
    source.emit(mv(200.0, 100.0));
    assert_eq!(controller.mode(), InputMode::Dragging);
    assert!((controller.rotation().theta - 0.3).abs() < 1e-6);
    source.emit(PointerInput::Up);
    assert_eq!(controller.mode(), InputMode::ParallaxOrIdle);
    assert!((controller.rotation().theta - 0.3).abs() < 1e-6);
}

#[test]
fn dragging_target_has_no_parallax_term() {
    let (controller, source) = mounted();
    source.emit(mv(800.0, 0.0));
    assert_eq!(controller.input_snapshot().pointer, PointerState { x: 1.0, y: 1.0 });
    let with_parallax = controller.target_at(3.0).unwrap();

    source.emit(PointerInput::Down {
        client: Vec2::new(800.0, 0.0),
    });
    let dragging = controller.target_at(3.0).unwrap();
    assert_ne!(dragging.position, with_parallax.position);

    let centered = InputSnapshot {
        mode: InputMode::ParallaxOrIdle,
        pointer: PointerState::default(),
        rotation: Rotation::default(),
    };
    assert_eq!(Some(dragging), controller.pose_for(3.0, &centered));
}

#[test]
fn disabled_mouse_attaches_nothing() {
    let source = ManualPointerSource::new();
    let config = CameraConfig::default().with_mouse_controlled(false);
    let controller = CameraController::mount(config, &source).unwrap();
    assert_eq!(source.listener_count(), 0);
    assert!(!controller.is_attached());

    let idle = controller.target_at(4.0).unwrap();
    controller.handle_pointer(mv(10.0, 10.0));
    controller.handle_pointer(PointerInput::Down {
        client: Vec2::ZERO,
    });
    assert_eq!(controller.mode(), InputMode::ParallaxOrIdle);
    assert_eq!(controller.input_snapshot().pointer, PointerState::default());
    assert_eq!(controller.target_at(4.0).unwrap(), idle);
}

#[test]
fn non_finite_camera_position_skips_frame() {
    let (controller, _source) = mounted();
    let mut camera = RecordingCamera {
        position: Vec3::new(f32::NAN, 0.0, 0.0),
        ..Default::default()
    };
    assert_eq!(controller.update(1.0, &mut camera), None);
    assert_eq!(camera.writes, 0);
    assert!(camera.look_ats.is_empty());
}

#[test]
fn update_writes_once_and_orients_once() {
    let (controller, _source) = mounted();
    let mut camera = RecordingCamera {
        position: Vec3::new(10.0, 0.0, 8.0),
        ..Default::default()
    };
    controller.update(1.0, &mut camera).unwrap();
    assert_eq!(camera.writes, 1);
    assert_eq!(camera.look_ats.len(), 1);
}

#[test]
fn mode_switch_does_not_teleport() {
    let (controller, source) = mounted();
    let mut camera = SceneCamera::default();
    source.emit(mv(800.0, 600.0));
    let mut elapsed = 0.0;
    for frame in 0..240 {
        if frame == 120 {
            source.emit(PointerInput::Down {
                client: Vec2::new(400.0, 300.0),
            });
            source.emit(mv(900.0, 50.0));
        }
        let before = camera.position();
        let target = controller.target_at(elapsed).unwrap().position;
        let after = controller.update(elapsed, &mut camera).unwrap();
        let bound = 0.02 * (target - before).length();
        assert!((after - before).length() <= bound + 1e-5, "frame {frame}");
        elapsed += 1.0 / 60.0;
    }
}

#[test]
fn invalid_config_is_rejected() {
    let err = CameraController::new(CameraConfig::default().with_filter_factor(0.0)).unwrap_err();
    assert!(matches!(
        err,
        CameraError::InvalidConfig {
            field: "filterFactor",
            ..
        }
    ));
}

#[test]
fn targets_keep_moving_after_long_uptime() {
    let (controller, _source) = mounted();
    let ten_days = 10.0 * 24.0 * 3600.0;
    let mut prev = controller.target_at(ten_days).unwrap();
    for frame in 1..=10 {
        let pose = controller.target_at(ten_days + frame as f64 / 60.0).unwrap();
        assert_ne!(pose.position, prev.position, "frame {frame} repeated");
        prev = pose;
    }
}

#[test]
fn controller_keeps_the_validated_config() {
    let config = CameraConfig::default().with_time_scale(0.1);
    let controller = CameraController::new(config.clone()).unwrap();
    assert_eq!(controller.config(), &config);
}

#[test]
fn cancelled_drag_restores_parallax() {
    let (controller, source) = mounted();
    source.emit(PointerInput::Down {
        client: Vec2::new(100.0, 100.0),
    });
    source.emit(mv(250.0, 100.0));
    assert_eq!(controller.mode(), InputMode::Dragging);

    source.emit(PointerInput::Cancel);
    assert_eq!(controller.mode(), InputMode::ParallaxOrIdle);
    source.emit(mv(800.0, 0.0));
    assert_eq!(
        controller.input_snapshot().pointer,
        PointerState { x: 1.0, y: 1.0 }
    );
}
