//! Contour level generation for interpolated scalar fields.
//!
//! Levels are plain thresholds; drawing the isolines is left to the
//! rendering collaborator that consumes them.

pub mod levels;

pub use levels::{
    generate_contour_levels, levels_by_interval, ContourLevelGenerator, MAX_INTERVAL_LEVELS,
};
