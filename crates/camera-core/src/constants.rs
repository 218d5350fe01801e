//! Default tuning constants for the dynamic camera.
//!
//! These express intended behavior (rates, clamp limits, amplitudes) and keep
//! magic numbers out of the controller. Every configurable value in
//! [`CameraConfig`](crate::CameraConfig) defaults to one of these.
use std::f32::consts::FRAC_PI_4;
use std::f64::consts::PI;

// Clock
pub const TIME_SCALE: f32 = 0.05; // slow-motion factor applied once to the frame clock
pub const CLOCK_PERIOD: f64 = 20.0 * PI; // shared period of every orbit and look-at term (scaled time)

// Orbit radii (world units)
pub const ORBIT_RADIUS_X: f32 = 4.0;
pub const ORBIT_RADIUS_Y: f32 = 2.5;
pub const ORBIT_RADIUS_Z: f32 = 4.0;

// Orbit harmonics: primary and secondary angular frequencies (rad per scaled second).
// The 1:2 ratio between the two terms, combined with distinct per-axis phases and the
// 0.6 vertical frequency, keeps the path from closing on short timescales.
pub const ORBIT_PRIMARY_FREQ: f32 = 0.8;
pub const ORBIT_SECONDARY_FREQ: f32 = 1.6;
pub const ORBIT_VERTICAL_FREQ: f32 = 0.6;
pub const ORBIT_SECONDARY_WEIGHT: f32 = 0.25; // secondary amplitude as a fraction of the radius

// Look-at drift amplitudes and frequencies
pub const LOOK_AT_AMPLITUDE: [f32; 3] = [0.8, 0.5, 0.4];
pub const LOOK_AT_FREQ: [f32; 3] = [0.5, 0.3, 0.4];

// Input
pub const DRAG_SENSITIVITY: f32 = 0.003; // radians per raw pixel
pub const PHI_CLAMP: f32 = FRAC_PI_4; // vertical rotation limit (radians, symmetric)
pub const PARALLAX_STRENGTH: f32 = 0.8; // world units per unit of normalized pointer
pub const DEPTH_STRENGTH: f32 = 0.5; // world units of Z per unit of pointer distance

// Smoothing
pub const FILTER_FACTOR: f32 = 0.02; // per-frame lerp weight toward the target

// Projection defaults for embedders without their own camera
pub const DEFAULT_FOV_Y_DEGREES: f32 = 75.0;
pub const DEFAULT_Z_NEAR: f32 = 0.1;
pub const DEFAULT_Z_FAR: f32 = 1000.0;
pub const DEFAULT_CAMERA_POSITION: [f32; 3] = [10.0, 0.0, 8.0];
