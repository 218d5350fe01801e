use crate::constants::{POINTER_CANCEL, POINTER_DOWN, POINTER_MOVE, POINTER_UP};
use crate::dom;
use camera_core::{PointerHandler, PointerInput, PointerSource, Subscription};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type PointerClosure = Closure<dyn FnMut(web::PointerEvent)>;

/// Window-level pointer events, viewport taken from the window's inner size.
#[derive(Clone)]
pub struct WindowPointerSource {
    window: web::Window,
}

impl WindowPointerSource {
    pub fn new() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        Ok(Self { window })
    }
}

#[inline]
fn client_px(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn listen(
    window: &web::Window,
    event: &'static str,
    closure: PointerClosure,
) -> camera_core::Result<(&'static str, PointerClosure)> {
    window
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| camera_core::CameraError::PointerSource(format!("{event}: {e:?}")))?;
    Ok((event, closure))
}

impl PointerSource for WindowPointerSource {
    fn subscribe(&self, handler: PointerHandler) -> camera_core::Result<Subscription> {
        let handler = Rc::new(RefCell::new(handler));
        let mut attached: Vec<(&'static str, PointerClosure)> = Vec::with_capacity(4);

        let on_move = {
            let handler = handler.clone();
            let window = self.window.clone();
            Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                let viewport = dom::viewport_size(&window);
                (&mut *handler.borrow_mut())(PointerInput::Move {
                    client: client_px(&ev),
                    viewport,
                });
            }) as Box<dyn FnMut(_)>)
        };
        let on_down = {
            let handler = handler.clone();
            Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                (&mut *handler.borrow_mut())(PointerInput::Down {
                    client: client_px(&ev),
                });
            }) as Box<dyn FnMut(_)>)
        };
        let on_up = {
            let handler = handler.clone();
            Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
                (&mut *handler.borrow_mut())(PointerInput::Up);
            }) as Box<dyn FnMut(_)>)
        };
        let on_cancel = {
            let handler = handler.clone();
            Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
                (&mut *handler.borrow_mut())(PointerInput::Cancel);
            }) as Box<dyn FnMut(_)>)
        };

        for (event, closure) in [
            (POINTER_MOVE, on_move),
            (POINTER_DOWN, on_down),
            (POINTER_UP, on_up),
            (POINTER_CANCEL, on_cancel),
        ] {
            match listen(&self.window, event, closure) {
                Ok(pair) => attached.push(pair),
                Err(e) => {
                    remove_all(&self.window, &attached);
                    return Err(e);
                }
            }
        }
        log::info!("[pointer] window listeners attached");

        let window = self.window.clone();
        Ok(Subscription::new(move || {
            remove_all(&window, &attached);
            // closures are dropped here, after JS no longer references them
            drop(attached);
            log::info!("[pointer] window listeners removed");
        }))
    }
}

fn remove_all(window: &web::Window, attached: &[(&'static str, PointerClosure)]) {
    for (event, closure) in attached {
        _ = window.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
}
