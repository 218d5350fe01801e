use crate::constants::{CURSOR_DRAGGING, CURSOR_IDLE};
use camera_core::InputMode;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Element to show the cursor affordance on: the element with `id`, else `<body>`.
pub fn cursor_target(id: &str) -> Option<web::HtmlElement> {
    let document = window_document()?;
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .or_else(|| document.body())
}

#[inline]
pub fn viewport_size(window: &web::Window) -> Vec2 {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Vec2::new(w as f32, h as f32)
}

pub fn set_cursor(el: &web::HtmlElement, mode: InputMode) {
    let cursor = match mode {
        InputMode::Dragging => CURSOR_DRAGGING,
        InputMode::ParallaxOrIdle => CURSOR_IDLE,
    };
    _ = el.style().set_property("cursor", cursor);
}

pub fn clear_cursor(el: &web::HtmlElement) {
    _ = el.style().remove_property("cursor");
}
