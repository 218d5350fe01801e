//! The camera capability the controller writes to, and a glam-backed camera
//! for hosts that do not bring their own.

use glam::{Mat4, Vec3};

use crate::constants::{
    DEFAULT_CAMERA_POSITION, DEFAULT_FOV_Y_DEGREES, DEFAULT_Z_FAR, DEFAULT_Z_NEAR,
};

/// Write access to an externally owned camera.
///
/// The render engine owns the camera; the controller only touches it inside
/// its own update call and never concurrently with another writer.
pub trait CameraHandle {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
    /// Reorient toward `target` from the current position.
    fn look_at(&mut self, target: Vec3);
}

/// Perspective projection parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub fovy_radians: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fovy_radians: DEFAULT_FOV_Y_DEGREES.to_radians(),
            aspect: 1.0,
            znear: DEFAULT_Z_NEAR,
            zfar: DEFAULT_Z_FAR,
        }
    }
}

impl Projection {
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy_radians,
            self.aspect.max(f32::EPSILON),
            self.znear,
            self.zfar,
        )
    }
}

/// Simple right-handed camera with perspective projection.
#[derive(Clone, Debug)]
pub struct SceneCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub projection: Projection,
}

impl Default for SceneCamera {
    fn default() -> Self {
        Self::new(Vec3::from_array(DEFAULT_CAMERA_POSITION), Projection::default())
    }
}

impl SceneCamera {
    pub fn new(eye: Vec3, projection: Projection) -> Self {
        Self {
            eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            projection,
        }
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.projection.aspect = width / height;
        }
    }

    /// World to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection.matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        let mut uniform = CameraUniform::new();
        uniform.update(self);
        uniform
    }
}

impl CameraHandle for SceneCamera {
    fn position(&self) -> Vec3 {
        self.eye
    }

    fn set_position(&mut self, position: Vec3) {
        self.eye = position;
    }

    fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }
}

/// GPU-ready camera block: view-projection matrix plus eye position.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            eye: [0.0, 0.0, 0.0, 1.0],
        }
    }

    pub fn update(&mut self, camera: &SceneCamera) {
        self.view_proj = camera.view_projection().to_cols_array_2d();
        self.eye = camera.eye.extend(1.0).to_array();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}
