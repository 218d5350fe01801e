//! Time-driven generators: the autonomous orbit offset and the look-at drift.
//!
//! Both are pure functions of the already time-scaled clock, so the same `t`
//! always yields the same point and playback can restart at any time.

use glam::Vec3;

use crate::config::OrbitRadii;
use crate::constants::{
    CLOCK_PERIOD, LOOK_AT_AMPLITUDE, LOOK_AT_FREQ, ORBIT_PRIMARY_FREQ, ORBIT_SECONDARY_FREQ,
    ORBIT_SECONDARY_WEIGHT, ORBIT_VERTICAL_FREQ,
};

/// Scale wall-clock seconds and fold them into one generator period.
///
/// All frequencies are multiples of 0.1, so the motion repeats every `20π` of
/// scaled time. Folding in `f64` keeps the `f32` argument small after long
/// uptimes instead of letting consecutive frames collapse onto the same value.
#[inline]
pub fn scaled_clock(elapsed: f64, time_scale: f32) -> f32 {
    (elapsed * time_scale as f64).rem_euclid(CLOCK_PERIOD) as f32
}

/// Offset of the camera from the origin at scaled time `t`.
///
/// Each axis sums a primary and a secondary sinusoid:
///
/// - `x = rx * (sin(0.8t) + 0.25 * sin(1.6t))`
/// - `y = ry * (sin(0.6t) + 0.25 * cos(1.6t))`
/// - `z = rz * (cos(0.8t) + 0.25 * sin(1.6t))`
///
/// At `t = 0` this gives `(0, 0.25 * ry, rz)`.
#[inline]
pub fn orbit_offset(t: f32, radii: &OrbitRadii) -> Vec3 {
    let (s1, c1) = (t * ORBIT_PRIMARY_FREQ).sin_cos();
    let (s2, c2) = (t * ORBIT_SECONDARY_FREQ).sin_cos();
    let sv = (t * ORBIT_VERTICAL_FREQ).sin();
    let w = ORBIT_SECONDARY_WEIGHT;
    radii.as_vec3() * Vec3::new(s1 + w * s2, sv + w * c2, c1 + w * s2)
}

/// Point the camera looks at during scaled time `t`.
///
/// Independent of input mode and accumulated rotation. The drift stays within
/// `LOOK_AT_AMPLITUDE` on each axis.
#[inline]
pub fn look_at_target(t: f32) -> Vec3 {
    let [ax, ay, az] = LOOK_AT_AMPLITUDE;
    let [fx, fy, fz] = LOOK_AT_FREQ;
    Vec3::new(
        (t * fx).sin() * ax,
        (t * fy).cos() * ay,
        (t * fz).sin() * az,
    )
}
