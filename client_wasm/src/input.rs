//! Pointer input handling

use web_sys::{HtmlCanvasElement, MouseEvent};

/// Pointer y relative to the canvas top edge
pub fn pointer_y(canvas: &HtmlCanvasElement, event: &MouseEvent) -> f32 {
    let rect = canvas.get_bounding_client_rect();
    (event.client_y() as f64 - rect.top()) as f32
}
