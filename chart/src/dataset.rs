//! Counter values read from the canvas data attributes.

#[cfg(test)]
#[path = "dataset_test.rs"]
mod dataset_test;

use crate::consts::{DEFAULT_ABIERTAS, DEFAULT_CERRADAS, DEFAULT_VENCIDAS};

/// Incident totals shown by the chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusCounts {
    pub cerradas: u32,
    pub abiertas: u32,
    pub vencidas: u32,
}

impl Default for StatusCounts {
    fn default() -> Self {
        Self { cerradas: DEFAULT_CERRADAS, abiertas: DEFAULT_ABIERTAS, vencidas: DEFAULT_VENCIDAS }
    }
}

impl StatusCounts {
    /// Build counts from raw attribute values.
    ///
    /// An absent, empty, or non-numeric attribute falls back to its default.
    /// Trailing junk after leading digits is ignored (`"12 abiertas"` → 12).
    #[must_use]
    pub fn from_attrs(cerradas: Option<&str>, abiertas: Option<&str>, vencidas: Option<&str>) -> Self {
        Self {
            cerradas: cerradas.and_then(leading_int).unwrap_or(DEFAULT_CERRADAS),
            abiertas: abiertas.and_then(leading_int).unwrap_or(DEFAULT_ABIERTAS),
            vencidas: vencidas.and_then(leading_int).unwrap_or(DEFAULT_VENCIDAS),
        }
    }

    /// Values in drawing order.
    #[must_use]
    pub fn values(&self) -> [u32; 3] {
        [self.cerradas, self.abiertas, self.vencidas]
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.values().iter().map(|v| u64::from(*v)).sum()
    }
}

fn leading_int(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let end = trimmed
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(trimmed.len(), |(i, _)| i);
    match trimmed[..end].parse::<u32>() {
        Ok(value) => Some(value),
        Err(_) => None,
    }
}
