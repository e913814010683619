//! Shared constants for the status chart.

// ── Series ──────────────────────────────────────────────────────

/// Segment labels, in drawing order.
pub const LABELS: [&str; 3] = ["Cerradas", "Abiertas", "Vencidas"];

/// Segment fill colors, matching [`LABELS`].
pub const COLORS: [&str; 3] = ["#22c55e", "#fbbf24", "#ef4444"];

/// Data attribute names on the canvas element, matching [`LABELS`].
pub const DATA_ATTRS: [&str; 3] = ["data-cerradas", "data-abiertas", "data-vencidas"];

// ── Defaults ────────────────────────────────────────────────────

/// Closed count used when the attribute is absent.
pub const DEFAULT_CERRADAS: u32 = 142;

/// Open count used when the attribute is absent.
pub const DEFAULT_ABIERTAS: u32 = 15;

/// Overdue count used when the attribute is absent.
pub const DEFAULT_VENCIDAS: u32 = 6;

// ── Geometry ────────────────────────────────────────────────────

/// Inner radius as a fraction of the outer radius (70% cutout).
pub const CUTOUT_RATIO: f64 = 0.70;

/// Angle of the first segment's leading edge: 12 o'clock.
pub const START_ANGLE: f64 = -std::f64::consts::FRAC_PI_2;
