//! Count-up animation for dashboard metric tiles.

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;

use std::collections::BTreeMap;

/// Steps a displayed integer from `start` to `end` in fixed frames.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    current: f64,
    end: f64,
    increment: f64,
    done: bool,
}

impl CounterAnimation {
    /// Animation spanning `duration_ms` at one frame every `frame_ms`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(start: i64, end: i64, duration_ms: u32, frame_ms: u32) -> Self {
        let frames = (f64::from(duration_ms) / f64::from(frame_ms.max(1))).max(1.0);
        let (start, end) = (start as f64, end as f64);
        Self { current: start, end, increment: (end - start) / frames, done: false }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance one frame and return the value to display, or `None` once finished.
    ///
    /// The last frame always yields exactly `end`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn tick(&mut self) -> Option<i64> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        let reached = self.increment.abs() < f64::EPSILON
            || (self.increment > 0.0 && self.current >= self.end)
            || (self.increment < 0.0 && self.current <= self.end);
        if reached {
            self.current = self.end;
            self.done = true;
        }
        Some(self.current.floor() as i64)
    }
}

/// Starting value from a tile's current text; non-numeric text counts as 0.
#[must_use]
pub fn parse_metric(text: &str) -> i64 {
    let trimmed = text.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    digits[..end].parse::<i64>().map_or(0, |n| sign * n)
}

/// Decode an `updateMetrics` payload (`{"key": number, ...}`) into targets.
///
/// Non-numeric values are skipped; fractional values are floored.
///
/// # Errors
///
/// Returns the JSON error if the payload is not an object.
#[allow(clippy::cast_possible_truncation)]
pub fn parse_metric_targets(json: &str) -> Result<Vec<(String, i64)>, serde_json::Error> {
    let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(json)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| {
            let target = value.as_i64().or_else(|| value.as_f64().map(|f| f.floor() as i64))?;
            Some((key, target))
        })
        .collect())
}
