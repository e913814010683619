//! Ring geometry: segment angles and radii.

#[cfg(test)]
#[path = "doughnut_test.rs"]
mod doughnut_test;

use std::f64::consts::TAU;

use crate::consts::{COLORS, CUTOUT_RATIO, LABELS, START_ANGLE};
use crate::dataset::StatusCounts;

/// One arc of the ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub label: &'static str,
    pub color: &'static str,
    pub value: u32,
    /// Leading edge in radians, canvas convention (clockwise from +x).
    pub start: f64,
    /// Trailing edge in radians; always `>= start`.
    pub end: f64,
}

impl Segment {
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }
}

/// Center and radii of the ring inside a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    pub cx: f64,
    pub cy: f64,
    pub outer: f64,
    pub inner: f64,
}

impl Ring {
    /// Largest ring centered in a `width` × `height` box.
    #[must_use]
    pub fn fit(width: f64, height: f64) -> Self {
        let outer = (width.min(height) * 0.5).max(0.0);
        Self { cx: width * 0.5, cy: height * 0.5, outer, inner: outer * CUTOUT_RATIO }
    }
}

/// CSS box of the canvas and the device-pixel ratio it is drawn at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Viewport {
    /// Negative sizes collapse to zero; an unusable ratio falls back to 1.
    #[must_use]
    pub fn new(width: f64, height: f64, dpr: f64) -> Self {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        Self { width: width.max(0.0), height: height.max(0.0), dpr }
    }

    /// Backing-store size in device pixels.
    #[must_use]
    pub fn backing_size(&self) -> (u32, u32) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let scale = |css: f64| (css * self.dpr).round() as u32;
        (scale(self.width), scale(self.height))
    }
}

/// Segments for non-zero counts, laid end to end from 12 o'clock.
///
/// Returns an empty list when every count is zero.
#[must_use]
pub fn segments(counts: &StatusCounts) -> Vec<Segment> {
    let total = counts.total();
    if total == 0 {
        return Vec::new();
    }

    #[allow(clippy::cast_precision_loss)]
    let total = total as f64;
    let mut cursor = START_ANGLE;
    let mut out = Vec::with_capacity(LABELS.len());
    for ((label, color), value) in LABELS.into_iter().zip(COLORS).zip(counts.values()) {
        if value == 0 {
            continue;
        }
        let sweep = f64::from(value) / total * TAU;
        out.push(Segment { label, color, value, start: cursor, end: cursor + sweep });
        cursor += sweep;
    }
    out
}
