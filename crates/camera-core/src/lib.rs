//! Platform-free core of the dynamic camera.
//!
//! A time-driven orbit is combined with pointer parallax or drag rotation and
//! smoothed every frame before being written to an external camera. Nothing
//! here touches web APIs; browser wiring lives in the front-end crate.

pub mod camera;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod input;
pub mod lifecycle;
pub mod orbit;
pub mod pose;
pub mod rig;

pub use camera::*;
pub use config::*;
pub use controller::*;
pub use error::{CameraError, Result};
pub use input::*;
pub use lifecycle::*;
pub use rig::*;
