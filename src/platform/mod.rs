//! Browser bootstrap helpers
//!
//! Window, document, canvas element, and 2D context are fatal startup
//! preconditions: initialization aborts loudly rather than proceeding with a
//! missing drawing surface. Nothing here is reachable after startup except
//! [`viewport`], which is re-read each frame.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::Viewport;

/// Id of the canvas element the game renders into
pub const CANVAS_ID: &str = "game-canvas";

pub fn window() -> Window {
    web_sys::window().expect("no window")
}

pub fn document() -> Document {
    window().document().expect("no document")
}

/// Look up the game canvas element
pub fn canvas() -> HtmlCanvasElement {
    document()
        .get_element_by_id(CANVAS_ID)
        .unwrap_or_else(|| panic!("no #{CANVAS_ID} element"))
        .dyn_into()
        .expect("element is not a canvas")
}

/// Acquire the 2D drawing context
pub fn context_2d(canvas: &HtmlCanvasElement) -> CanvasRenderingContext2d {
    canvas
        .get_context("2d")
        .expect("get_context failed")
        .expect("2d context unavailable")
        .dyn_into()
        .expect("context is not 2d")
}

/// Match the canvas backing store to its CSS size and device pixel ratio
pub fn size_backing_store(canvas: &HtmlCanvasElement) {
    let dpr = window().device_pixel_ratio();
    let width = (canvas.client_width() as f64 * dpr) as u32;
    let height = (canvas.client_height() as f64 * dpr) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
}

/// Current viewport: backing-store size plus the canvas client rect
pub fn viewport(canvas: &HtmlCanvasElement) -> Viewport {
    let rect = canvas.get_bounding_client_rect();
    Viewport::with_client_rect(
        canvas.width() as f32,
        canvas.height() as f32,
        rect.left() as f32,
        rect.width() as f32,
    )
}

/// Optional JSON config override from the canvas `data-config` attribute
pub fn config_override(canvas: &HtmlCanvasElement) -> Option<String> {
    canvas.get_attribute("data-config")
}
