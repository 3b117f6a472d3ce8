//! Dense 2-D output arrays.

use std::ops::Index;
use std::slice::ChunksExact;

use field_common::{FieldError, Result};
use serde::{Deserialize, Serialize};

/// A dense `width × height` array stored column-major: cell `(i, j)` lives
/// at `data[i * height + j]`, so every X index owns one contiguous column.
///
/// Deserialization goes through [`Grid2D::from_columns`], so a document whose
/// cell count disagrees with its shape is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid2D<T>")]
pub struct Grid2D<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

/// Unchecked wire form of [`Grid2D`].
#[derive(Deserialize)]
struct RawGrid2D<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T> TryFrom<RawGrid2D<T>> for Grid2D<T> {
    type Error = FieldError;

    fn try_from(raw: RawGrid2D<T>) -> Result<Self> {
        Self::from_columns(raw.width, raw.height, raw.data)
    }
}

impl<T: Clone> Grid2D<T> {
    /// A grid with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Copy out as one `Vec` per column.
    pub fn to_columns(&self) -> Vec<Vec<T>> {
        self.columns().map(|c| c.to_vec()).collect()
    }
}

impl<T> Grid2D<T> {
    /// Wrap column-major data. Fails if the length does not match the shape.
    pub fn from_columns(width: usize, height: usize, data: Vec<T>) -> Result<Self> {
        if width.checked_mul(height) != Some(data.len()) {
            return Err(FieldError::invalid_argument(format!(
                "grid data has {} cells, expected {}x{}",
                data.len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap data whose length is already known to match the shape.
    pub(crate) fn from_parts(width: usize, height: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            data,
        }
    }

    /// Number of cells along X (`resolution_x`).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of cells along Y (`resolution_y`).
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        if i >= self.width || j >= self.height {
            return None;
        }
        self.data.get(i * self.height + j)
    }

    /// All Y cells for one X index.
    pub fn column(&self, i: usize) -> Option<&[T]> {
        if i >= self.width {
            return None;
        }
        let start = i * self.height;
        Some(&self.data[start..start + self.height])
    }

    pub fn columns(&self) -> ChunksExact<'_, T> {
        // chunks_exact panics on a zero chunk size; an empty grid has no columns.
        self.data.chunks_exact(self.height.max(1))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl Grid2D<f64> {
    /// Min and max over finite cells, `None` if no cell is finite.
    pub fn finite_range(&self) -> Option<(f64, f64)> {
        self.data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

impl<T> Index<(usize, usize)> for Grid2D<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.width && j < self.height,
            "grid index ({}, {}) out of bounds for {}x{}",
            i,
            j,
            self.width,
            self.height
        );
        &self.data[i * self.height + j]
    }
}
