//! Bounding box types and operations.

use serde::{Deserialize, Serialize};

use crate::Sample;

/// Axis-aligned extent of a sample set in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Componentwise min/max over a sequence of samples.
    ///
    /// Returns `None` for an empty sequence. NaN coordinates are ignored by
    /// `f64::min`/`f64::max`, so they only show up if every sample has one.
    pub fn from_samples<'a, I>(samples: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Sample>,
    {
        let mut iter = samples.into_iter();
        let first = iter.next()?;
        let seed = Self::new(first.x, first.y, first.x, first.y);

        Some(iter.fold(seed, |bbox, s| Self {
            min_x: bbox.min_x.min(s.x),
            min_y: bbox.min_y.min(s.y),
            max_x: bbox.max_x.max(s.x),
            max_y: bbox.max_y.max(s.y),
        }))
    }

    /// Width of the bounding box in coordinate units.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bounding box in coordinate units.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// The box collapses to a line or a point.
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// Extents ordered as `(min_x, max_x, min_y, max_y)`.
    pub fn extents(&self) -> (f64, f64, f64, f64) {
        (self.min_x, self.max_x, self.min_y, self.max_y)
    }
}
