use camera_core::{FrameCallback, FrameScheduler, Subscription};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` loop; elapsed time counts from registration.
pub struct AnimationFrameScheduler {
    window: web::Window,
}

impl AnimationFrameScheduler {
    pub fn new() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        Ok(Self { window })
    }
}

fn request(window: &web::Window, tick: &Tick) -> Option<i32> {
    let tick = tick.borrow();
    let closure = tick.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

impl FrameScheduler for AnimationFrameScheduler {
    fn register(&self, mut callback: FrameCallback) -> camera_core::Result<Subscription> {
        let tick: Tick = Rc::new(RefCell::new(None));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let start = Instant::now();

        let tick_clone = tick.clone();
        let pending_tick = pending.clone();
        let window = self.window.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            callback(start.elapsed().as_secs_f64());
            pending_tick.set(request(&window, &tick_clone));
        }) as Box<dyn FnMut()>));

        let Some(id) = request(&self.window, &tick) else {
            // nothing was scheduled; release the closure and its self-reference
            tick.borrow_mut().take();
            return Err(camera_core::CameraError::Scheduler(
                "requestAnimationFrame failed".into(),
            ));
        };
        pending.set(Some(id));
        log::info!("[frame] animation loop started");

        let window = self.window.clone();
        Ok(Subscription::new(move || {
            if let Some(id) = pending.take() {
                _ = window.cancel_animation_frame(id);
            }
            // breaks the closure's reference cycle through `tick_clone`
            tick.borrow_mut().take();
            log::info!("[frame] animation loop stopped");
        }))
    }
}
