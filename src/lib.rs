#![cfg(target_arch = "wasm32")]
use camera_core::{
    CameraConfig, CameraController, CameraHandle, CameraRig, FrameReport, InputMode,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod camera;
mod constants;
mod dom;
mod events;
mod frame;

use camera::JsCameraHandle;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dynamic-camera loaded");
    Ok(())
}

#[inline]
fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_options(options: Option<String>) -> anyhow::Result<CameraConfig> {
    let config = match options.as_deref().map(str::trim) {
        None | Some("") => CameraConfig::default(),
        Some(json) => CameraConfig::from_json(json)?,
    };
    Ok(config)
}

fn mount(
    camera: &Rc<RefCell<JsCameraHandle>>,
    config: CameraConfig,
) -> anyhow::Result<CameraRig<JsCameraHandle>> {
    let controller = if config.mouse_controlled {
        let source = events::WindowPointerSource::new()?;
        CameraController::mount(config, &source)?
    } else {
        CameraController::new(config)?
    };
    Ok(CameraRig::new(controller, camera))
}

/// Dynamic orbit camera bound to a JS camera object.
///
/// ```js
/// const cam = new DynamicCamera(threeCamera, JSON.stringify({ parallaxStrength: 0.6 }));
/// cam.start();          // drive from requestAnimationFrame
/// // or: renderer.setAnimationLoop(t => cam.update(t / 1000));
/// cam.dispose();
/// ```
#[wasm_bindgen]
pub struct DynamicCamera {
    // the rig only holds a weak reference; this keeps the handle alive
    camera: Rc<RefCell<JsCameraHandle>>,
    rig: Option<CameraRig<JsCameraHandle>>,
    cursor: Option<web::HtmlElement>,
}

#[wasm_bindgen]
impl DynamicCamera {
    /// `options` is a JSON object using the camelCase option names; omitted
    /// fields take their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(
        camera: JsValue,
        options: Option<String>,
        cursor_element_id: Option<String>,
    ) -> Result<DynamicCamera, JsValue> {
        let config = parse_options(options).map_err(js_err)?;
        let mouse_controlled = config.mouse_controlled;
        let camera = Rc::new(RefCell::new(JsCameraHandle::new(camera)));
        let mut rig = mount(&camera, config).map_err(js_err)?;

        let cursor = if mouse_controlled {
            let id = cursor_element_id
                .unwrap_or_else(|| constants::DEFAULT_CANVAS_ID.to_string());
            dom::cursor_target(&id)
        } else {
            None
        };
        if let Some(el) = cursor.clone() {
            dom::set_cursor(&el, InputMode::ParallaxOrIdle);
            let mut last = InputMode::ParallaxOrIdle;
            rig.observe(move |report: &FrameReport| {
                if report.mode != last {
                    dom::set_cursor(&el, report.mode);
                    last = report.mode;
                }
            });
        }
        log::info!("[camera] mounted (mouse control: {})", mouse_controlled);
        Ok(DynamicCamera {
            camera,
            rig: Some(rig),
            cursor,
        })
    }

    /// Drive the camera from `requestAnimationFrame` until `stop` or `dispose`.
    pub fn start(&mut self) -> Result<(), JsValue> {
        let rig = self.rig.as_mut().ok_or_else(|| js_err("camera disposed"))?;
        let scheduler = frame::AnimationFrameScheduler::new().map_err(js_err)?;
        rig.start(&scheduler).map_err(js_err)
    }

    pub fn stop(&mut self) {
        if let Some(rig) = self.rig.as_mut() {
            rig.stop();
        }
    }

    /// Advance one frame at `elapsed` seconds. Returns `[x, y, z]` of the new
    /// position, or an empty array when the frame was skipped.
    pub fn update(&self, elapsed: f64) -> Vec<f32> {
        self.rig
            .as_ref()
            .and_then(|rig| rig.tick(elapsed).position)
            .map(|p| p.to_array().to_vec())
            .unwrap_or_default()
    }

    /// Current camera position as `[x, y, z]`.
    pub fn position(&self) -> Vec<f32> {
        self.camera.borrow().position().to_array().to_vec()
    }

    /// `"dragging"` or `"parallax"`.
    pub fn mode(&self) -> String {
        let mode = self
            .rig
            .as_ref()
            .map(|rig| rig.with_controller(|c| c.mode()))
            .unwrap_or(InputMode::ParallaxOrIdle);
        match mode {
            InputMode::Dragging => "dragging".into(),
            InputMode::ParallaxOrIdle => "parallax".into(),
        }
    }

    /// Accumulated drag rotation as `[theta, phi]` in radians.
    pub fn rotation(&self) -> Vec<f32> {
        self.rig
            .as_ref()
            .map(|rig| rig.with_controller(|c| c.rotation()))
            .map(|r| vec![r.theta, r.phi])
            .unwrap_or_else(|| vec![0.0, 0.0])
    }

    /// Detach every listener and frame callback. Safe to call more than once.
    pub fn dispose(&mut self) {
        if let Some(mut rig) = self.rig.take() {
            rig.unmount();
            log::info!("[camera] disposed");
        }
        if let Some(el) = self.cursor.take() {
            dom::clear_cursor(&el);
        }
    }
}
