//! Scalar-field interpolation of scattered samples onto dense grids.
//!
//! Every cell of a `resolution_x × resolution_y` grid spanning the sample
//! bounding box is filled with a bilinear blend of four quadrant anchors:
//! the closest sample (by x, then y) to the south-west, south-east,
//! north-west and north-east of the cell coordinate.
//!
//! # Architecture
//!
//! ```text
//! Vec<Sample>
//!      │
//!      ▼
//! PointSet (immutable, bbox cached)
//!      │
//!      ▼
//! InterpolationGrid::builder().points(..).resolution(..).build()
//!      │
//!      ├─► QuadrantSearch (LinearScan | SortedIndex)
//!      │
//!      └─► evaluate(): one rayon task per X column
//!               │
//!               ▼
//!          Grid2D<f64>
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use field_common::Sample;
//! use interpolation::{InterpolationGrid, PointSet};
//!
//! let points = Arc::new(PointSet::new(vec![
//!     Sample::new(0.0, 0.0, 1.0),
//!     Sample::new(1.0, 0.0, 2.0),
//!     Sample::new(0.0, 1.0, 3.0),
//!     Sample::new(1.0, 1.0, 4.0),
//! ]));
//!
//! let grid = InterpolationGrid::new(points, 3, 3).unwrap();
//! let values = grid.evaluate();
//! assert_eq!(values.shape(), (3, 3));
//! assert_eq!(values[(1, 1)], 2.5);
//! ```

pub mod cancel;
pub mod config;
pub mod engine;
pub mod grid;
pub mod point_set;
pub mod search;

pub use cancel::CancelFlag;
pub use config::{InterpolationConfig, SearchStrategy};
pub use engine::{InterpolationGrid, InterpolationGridBuilder};
pub use grid::Grid2D;
pub use point_set::PointSet;
pub use search::{Anchors, LinearScan, Quadrant, QuadrantSearch, SortedIndex};
