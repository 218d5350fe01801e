use crate::constants::{JS_LOOK_AT, JS_POSITION, JS_SET, JS_UPDATE_MATRIX_WORLD};
use camera_core::CameraHandle;
use glam::Vec3;
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// Adapts a JS camera object (`position.{x,y,z}`, `position.set`, `lookAt`)
/// to [`CameraHandle`].
///
/// Missing members are tolerated: reads fall back to the last written value
/// and writes become no-ops, so a half torn down camera never throws.
pub struct JsCameraHandle {
    object: JsValue,
    last_position: Vec3,
    warned: bool,
}

impl JsCameraHandle {
    pub fn new(object: JsValue) -> Self {
        let mut handle = Self {
            object,
            last_position: Vec3::ZERO,
            warned: false,
        };
        if let Some(p) = handle.read_position() {
            handle.last_position = p;
        }
        handle
    }

    fn member(target: &JsValue, name: &str) -> Option<JsValue> {
        Reflect::get(target, &JsValue::from_str(name))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
    }

    fn method(target: &JsValue, name: &str) -> Option<Function> {
        Self::member(target, name).and_then(|v| v.dyn_into::<Function>().ok())
    }

    fn read_position(&self) -> Option<Vec3> {
        let position = Self::member(&self.object, JS_POSITION)?;
        let axis = |name: &str| Self::member(&position, name).and_then(|v| v.as_f64());
        let p = Vec3::new(axis("x")? as f32, axis("y")? as f32, axis("z")? as f32);
        p.is_finite().then_some(p)
    }

    fn call3(&mut self, target: &JsValue, name: &str, v: Vec3) {
        match Self::method(target, name) {
            Some(f) => {
                let r = f.call3(
                    target,
                    &JsValue::from_f64(v.x as f64),
                    &JsValue::from_f64(v.y as f64),
                    &JsValue::from_f64(v.z as f64),
                );
                if let Err(e) = r {
                    log::warn!("[camera] {name} threw: {e:?}");
                }
            }
            None if !self.warned => {
                log::warn!("[camera] JS camera has no `{name}`; ignoring");
                self.warned = true;
            }
            None => {}
        }
    }
}

impl CameraHandle for JsCameraHandle {
    fn position(&self) -> Vec3 {
        self.read_position().unwrap_or(self.last_position)
    }

    fn set_position(&mut self, position: Vec3) {
        self.last_position = position;
        if let Some(target) = Self::member(&self.object, JS_POSITION) {
            self.call3(&target, JS_SET, position);
        }
    }

    fn look_at(&mut self, target: Vec3) {
        let object = self.object.clone();
        self.call3(&object, JS_LOOK_AT, target);
        if let Some(f) = Self::method(&object, JS_UPDATE_MATRIX_WORLD) {
            _ = f.call0(&object);
        }
    }
}
