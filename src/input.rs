use glam::Vec2;
use room_core::{pixel_to_ndc, Camera};
use web_sys as web;

/// Pointer position in canvas backing-store pixels.
#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w <= 0.0 || h <= 0.0 {
        return Vec2::ZERO;
    }
    let sx = (x_css / w) * canvas.width() as f32;
    let sy = (y_css / h) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

#[inline]
pub fn canvas_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let px = pointer_canvas_px(ev, canvas);
    pixel_to_ndc(
        px,
        canvas.width().max(1) as f32,
        canvas.height().max(1) as f32,
    )
}

#[inline]
pub fn canvas_aspect(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.width().max(1) as f32 / canvas.height().max(1) as f32
}

/// The fixed room camera fitted to the canvas' current aspect.
pub fn room_camera(canvas: &web::HtmlCanvasElement) -> Camera {
    let mut camera = Camera::default();
    camera.set_aspect(canvas_aspect(canvas));
    camera
}
