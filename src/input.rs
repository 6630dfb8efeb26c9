use glam::Vec2;
use web_sys as web;

/// Position of `point` inside a rect, normalised by the rect size.
///
/// The result is not clamped: a pointer outside the rect yields values
/// below 0 or above 1. Degenerate rects give `None`.
#[inline]
pub fn normalized_in_rect(point: Vec2, origin: Vec2, size: Vec2) -> Option<Vec2> {
    if size.x > 0.0 && size.y > 0.0 {
        let uv = (point - origin) / size;
        (uv.x.is_finite() && uv.y.is_finite()).then_some(uv)
    } else {
        None
    }
}

/// Horizontal fraction of a click within `el`'s bounding box.
#[inline]
pub fn click_fraction_x(ev: &web::MouseEvent, el: &web::Element) -> Option<f64> {
    let rect = el.get_bounding_client_rect();
    let point = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
    let origin = Vec2::new(rect.left() as f32, rect.top() as f32);
    // Height only guards against collapsed tracks; the y result is unused.
    let size = Vec2::new(rect.width() as f32, (rect.height() as f32).max(1.0));
    normalized_in_rect(point, origin, size).map(|uv| uv.x as f64)
}
