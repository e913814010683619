//! Rendering: draws the doughnut to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! All fallible `Canvas2D` calls propagate errors as `JsValue`;
//! the caller in `widgets` logs them.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::dataset::StatusCounts;
use crate::doughnut::{Ring, Segment, Viewport, segments};

/// Current CSS box and pixel ratio of `canvas`.
#[must_use]
pub fn measure(canvas: &HtmlCanvasElement) -> Viewport {
    let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
    Viewport::new(f64::from(canvas.client_width()), f64::from(canvas.client_height()), dpr)
}

/// Size the canvas backing store to its CSS box and draw `counts`.
///
/// Returns the viewport drawn at, so callers can tell when a resize needs
/// another pass.
///
/// # Errors
///
/// Returns `Err` if the canvas has no 2D context or a `Canvas2D` call fails.
pub fn draw_on(canvas: &HtmlCanvasElement, counts: &StatusCounts) -> Result<Viewport, JsValue> {
    let viewport = measure(canvas);
    let (width, height) = viewport.backing_size();
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)?;

    draw(&ctx, counts, viewport.width, viewport.height, viewport.dpr)?;
    Ok(viewport)
}

/// Draw the full chart into a `viewport_w` × `viewport_h` CSS-pixel area.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    counts: &StatusCounts,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);

    let ring = Ring::fit(viewport_w, viewport_h);
    if ring.outer <= 0.0 {
        return Ok(());
    }

    for seg in segments(counts) {
        draw_segment(ctx, &ring, &seg)?;
    }
    Ok(())
}

fn draw_segment(ctx: &CanvasRenderingContext2d, ring: &Ring, seg: &Segment) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(ring.cx, ring.cy, ring.outer, seg.start, seg.end)?;
    ctx.arc_with_anticlockwise(ring.cx, ring.cy, ring.inner, seg.end, seg.start, true)?;
    ctx.close_path();
    ctx.set_fill_style_str(seg.color);
    ctx.fill();
    Ok(())
}
