//! Pose composition: parallax, spherical rotation and the per-frame low-pass filter.

use glam::Vec3;

use crate::input::{InputMode, InputSnapshot, PointerState, Rotation};

/// Offset contributed by the pointer in parallax mode.
///
/// `x`/`y` follow the pointer, `z` grows with the pointer's distance from the
/// viewport center.
#[inline]
pub fn parallax_offset(pointer: PointerState, strength: f32, depth_strength: f32) -> Vec3 {
    Vec3::new(
        pointer.x * strength,
        pointer.y * strength,
        pointer.as_vec2().length() * depth_strength,
    )
}

/// `theta` is the azimuth around +Y measured from +Z toward +X, `phi` the
/// elevation above the XZ plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,
}

impl Spherical {
    /// Returns `None` for the origin or any non-finite component.
    pub fn from_cartesian(v: Vec3) -> Option<Self> {
        if !v.is_finite() {
            return None;
        }
        let radius = v.length();
        if radius <= 0.0 || !radius.is_finite() {
            return None;
        }
        let spherical = Self {
            radius,
            theta: v.x.atan2(v.z),
            // rounding can push |y| / radius marginally past 1
            phi: (v.y / radius).clamp(-1.0, 1.0).asin(),
        };
        spherical.is_finite().then_some(spherical)
    }

    pub fn to_cartesian(&self) -> Vec3 {
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        Vec3::new(
            self.radius * cos_phi * sin_theta,
            self.radius * sin_phi,
            self.radius * cos_phi * cos_theta,
        )
    }

    pub fn rotated(&self, rotation: Rotation) -> Self {
        Self {
            radius: self.radius,
            theta: self.theta + rotation.theta,
            phi: self.phi + rotation.phi,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.radius.is_finite() && self.theta.is_finite() && self.phi.is_finite()
    }
}

/// Strengths applied while the pointer is in parallax mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxSettings {
    pub enabled: bool,
    pub strength: f32,
    pub depth_strength: f32,
}

/// Target camera position for one frame.
///
/// Parallax is added only outside a drag; the drag contributes through the
/// accumulated rotation instead. Returns `None` when the offset is degenerate.
pub fn compose_target(
    base: Vec3,
    input: &InputSnapshot,
    parallax: ParallaxSettings,
) -> Option<Vec3> {
    let offset = match input.mode {
        InputMode::ParallaxOrIdle if parallax.enabled => {
            base + parallax_offset(input.pointer, parallax.strength, parallax.depth_strength)
        }
        _ => base,
    };
    let target = Spherical::from_cartesian(offset)?
        .rotated(input.rotation)
        .to_cartesian();
    target.is_finite().then_some(target)
}

/// One step of the exponential smoothing toward `target`.
///
/// The step length is exactly `factor * |target - current|`.
#[inline]
pub fn low_pass(current: Vec3, target: Vec3, factor: f32) -> Vec3 {
    current + (target - current) * factor
}
