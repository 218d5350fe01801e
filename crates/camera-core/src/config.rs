//! Configuration surface of the camera controller.
//!
//! Options arrive either from Rust (builder-style `with_*` setters) or as a
//! JSON object from the embedding page, using the camelCase names below.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{CameraError, Result};

/// Per-axis radii of the autonomous orbit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitRadii {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for OrbitRadii {
    fn default() -> Self {
        Self {
            x: ORBIT_RADIUS_X,
            y: ORBIT_RADIUS_Y,
            z: ORBIT_RADIUS_Z,
        }
    }
}

impl OrbitRadii {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn as_vec3(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Recognized camera options. Missing JSON fields take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CameraConfig {
    /// Enables pointer parallax and drag rotation. When false no listeners are
    /// attached and the camera follows the autonomous orbit only.
    pub mouse_controlled: bool,
    pub parallax_strength: f32,
    pub depth_strength: f32,
    /// Radians of rotation per raw pixel of drag.
    pub drag_sensitivity: f32,
    /// Symmetric limit applied to the accumulated vertical angle.
    pub phi_clamp_radians: f32,
    /// Per-frame lerp weight in `(0, 1]`.
    pub filter_factor: f32,
    pub orbit_radii: OrbitRadii,
    /// Slow-motion factor applied once to the frame clock.
    pub time_scale: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            mouse_controlled: true,
            parallax_strength: PARALLAX_STRENGTH,
            depth_strength: DEPTH_STRENGTH,
            drag_sensitivity: DRAG_SENSITIVITY,
            phi_clamp_radians: PHI_CLAMP,
            filter_factor: FILTER_FACTOR,
            orbit_radii: OrbitRadii::default(),
            time_scale: TIME_SCALE,
        }
    }
}

impl CameraConfig {
    /// Parse options from a JSON object and validate them.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CameraConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_mouse_controlled(mut self, enabled: bool) -> Self {
        self.mouse_controlled = enabled;
        self
    }

    pub fn with_parallax(mut self, strength: f32, depth_strength: f32) -> Self {
        self.parallax_strength = strength;
        self.depth_strength = depth_strength;
        self
    }

    pub fn with_drag_sensitivity(mut self, sensitivity: f32) -> Self {
        self.drag_sensitivity = sensitivity;
        self
    }

    pub fn with_phi_clamp(mut self, radians: f32) -> Self {
        self.phi_clamp_radians = radians;
        self
    }

    pub fn with_filter_factor(mut self, factor: f32) -> Self {
        self.filter_factor = factor;
        self
    }

    pub fn with_orbit_radii(mut self, radii: OrbitRadii) -> Self {
        self.orbit_radii = radii;
        self
    }

    pub fn with_time_scale(mut self, scale: f32) -> Self {
        self.time_scale = scale;
        self
    }

    /// Reject option values that would make the per-frame math diverge or
    /// produce non-finite positions.
    pub fn validate(&self) -> Result<()> {
        check(
            "filterFactor",
            self.filter_factor,
            self.filter_factor > 0.0 && self.filter_factor <= 1.0,
            "must be in (0, 1]",
        )?;
        check(
            "dragSensitivity",
            self.drag_sensitivity,
            self.drag_sensitivity.is_finite() && self.drag_sensitivity >= 0.0,
            "must be finite and non-negative",
        )?;
        check(
            "phiClampRadians",
            self.phi_clamp_radians,
            (0.0..=FRAC_PI_2).contains(&self.phi_clamp_radians),
            "must be within [0, pi/2]",
        )?;
        check(
            "parallaxStrength",
            self.parallax_strength,
            self.parallax_strength.is_finite(),
            "must be finite",
        )?;
        check(
            "depthStrength",
            self.depth_strength,
            self.depth_strength.is_finite(),
            "must be finite",
        )?;
        check(
            "timeScale",
            self.time_scale,
            self.time_scale.is_finite() && self.time_scale > 0.0,
            "must be finite and positive",
        )?;
        let r = self.orbit_radii;
        for (field, value) in [
            ("orbitRadii.x", r.x),
            ("orbitRadii.y", r.y),
            ("orbitRadii.z", r.z),
        ] {
            check(field, value, value.is_finite(), "must be finite")?;
        }
        // x/z share the horizontal plane; with both zero the orbit collapses
        // onto the vertical axis and passes through the origin.
        check(
            "orbitRadii",
            r.x.abs().max(r.z.abs()),
            r.x != 0.0 || r.z != 0.0,
            "x and z radii cannot both be zero",
        )
    }
}

#[inline]
fn check(field: &'static str, value: f32, ok: bool, reason: &'static str) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(CameraError::InvalidConfig {
            field,
            value,
            reason,
        })
    }
}
