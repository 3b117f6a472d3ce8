//! Scattered measurement samples.

use serde::{Deserialize, Serialize};

/// One scattered measurement: a scalar `value` observed at `(x, y)`.
///
/// Duplicate or near-duplicate coordinates are legal; nothing here enforces
/// uniqueness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64, value: f64) -> Self {
        Self { x, y, value }
    }

    /// True when both coordinates are comparable (not NaN).
    #[inline]
    pub fn has_ordered_coords(&self) -> bool {
        !self.x.is_nan() && !self.y.is_nan()
    }
}

impl From<(f64, f64, f64)> for Sample {
    fn from((x, y, value): (f64, f64, f64)) -> Self {
        Self::new(x, y, value)
    }
}
