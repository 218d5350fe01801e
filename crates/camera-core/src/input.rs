//! Pointer input: parallax pointer state, drag sessions and accumulated rotation.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

/// Spherical-angle rotation contributed by drag gestures (radians).
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    pub theta: f32,
    pub phi: f32,
}

/// Last known pointer position in normalized device coordinates.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Present only while a pointer button is held.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Raw pixel coordinates of the press.
    pub start: Vec2,
    /// Accumulated rotation at the moment of the press.
    pub base_rotation: Rotation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    ParallaxOrIdle,
    Dragging,
}

/// Raw window-level pointer event, coordinates in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Down { client: Vec2 },
    Move { client: Vec2, viewport: Vec2 },
    Up,
    /// The platform took the pointer away (e.g. a touch gesture); ends a drag like `Up`.
    Cancel,
}

/// Copy of the tracker state taken once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputSnapshot {
    pub mode: InputMode,
    pub pointer: PointerState,
    pub rotation: Rotation,
}

/// Map a pixel position to normalized device coordinates, `y` pointing up.
///
/// Returns `None` for an empty viewport or a non-finite position.
#[inline]
pub fn normalize_pointer(client: Vec2, viewport: Vec2) -> Option<PointerState> {
    if !client.is_finite() || !(viewport.x > 0.0 && viewport.y > 0.0) {
        return None;
    }
    Some(PointerState {
        x: (client.x / viewport.x) * 2.0 - 1.0,
        y: -(client.y / viewport.y) * 2.0 + 1.0,
    })
}

/// Two-state machine fed by press/move/release events.
///
/// Handlers only assign fields, so they are safe to run between any two frames.
#[derive(Clone, Debug)]
pub struct InputTracker {
    enabled: bool,
    sensitivity: f32,
    phi_clamp: f32,
    pointer: PointerState,
    drag: Option<DragSession>,
    rotation: Rotation,
}

impl InputTracker {
    pub fn new(enabled: bool, sensitivity: f32, phi_clamp: f32) -> Self {
        Self {
            enabled,
            sensitivity,
            // NaN falls back to the widest meaningful limit
            phi_clamp: phi_clamp.abs().min(FRAC_PI_2),
            pointer: PointerState::default(),
            drag: None,
            rotation: Rotation::default(),
        }
    }

    /// A tracker that ignores every event: permanently idle, pointer at the origin.
    pub fn disabled() -> Self {
        Self::new(false, 0.0, 0.0)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn mode(&self) -> InputMode {
        if self.drag.is_some() {
            InputMode::Dragging
        } else {
            InputMode::ParallaxOrIdle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            mode: self.mode(),
            pointer: self.pointer,
            rotation: self.rotation,
        }
    }

    pub fn handle(&mut self, event: PointerInput) {
        if !self.enabled {
            return;
        }
        match event {
            PointerInput::Down { client } => self.press(client),
            PointerInput::Move { client, viewport } => self.move_to(client, viewport),
            PointerInput::Up => self.release(),
            PointerInput::Cancel => self.cancel(),
        }
    }

    /// Start a drag session. A press while already dragging keeps the first session.
    pub fn press(&mut self, client: Vec2) {
        if !self.enabled || self.drag.is_some() {
            return;
        }
        log::debug!("[drag] begin at ({:.0}, {:.0})", client.x, client.y);
        self.drag = Some(DragSession {
            start: client,
            base_rotation: self.rotation,
        });
    }

    pub fn move_to(&mut self, client: Vec2, viewport: Vec2) {
        if !self.enabled {
            return;
        }
        match self.drag {
            Some(session) => {
                let delta = client - session.start;
                if !delta.is_finite() {
                    return;
                }
                let base = session.base_rotation;
                self.rotation = Rotation {
                    theta: base.theta + delta.x * self.sensitivity,
                    phi: (base.phi + delta.y * self.sensitivity)
                        .clamp(-self.phi_clamp, self.phi_clamp),
                };
            }
            None => {
                if let Some(pointer) = normalize_pointer(client, viewport) {
                    self.pointer = pointer;
                }
            }
        }
    }

    /// End the drag session; the accumulated rotation is kept as is.
    pub fn release(&mut self) {
        if let Some(session) = self.drag.take() {
            log::debug!(
                "[drag] end: start=({:.0}, {:.0}) theta={:.3} phi={:.3}",
                session.start.x,
                session.start.y,
                self.rotation.theta,
                self.rotation.phi
            );
        }
    }

    /// Drop the drag session without a release; rotation reached so far is kept.
    pub fn cancel(&mut self) {
        if self.drag.take().is_some() {
            log::debug!("[drag] cancelled");
        }
    }

    /// Back to mount defaults: idle, pointer centered, no rotation.
    pub fn reset(&mut self) {
        self.pointer = PointerState::default();
        self.drag = None;
        self.rotation = Rotation::default();
    }
}
