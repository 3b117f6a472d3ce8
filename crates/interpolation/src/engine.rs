//! Grid evaluation over a scattered point set.

use std::sync::Arc;
use std::time::Instant;

use field_common::{BoundingBox, FieldError, Result};
use rayon::prelude::*;
use tracing::debug;

use crate::cancel::CancelFlag;
use crate::config::{InterpolationConfig, SearchStrategy};
use crate::grid::Grid2D;
use crate::point_set::PointSet;
use crate::search::{LinearScan, QuadrantSearch, SortedIndex};

/// A `resolution_x × resolution_y` grid spanning the bounding box of a point
/// set, filled by quadrant-anchored bilinear interpolation.
///
/// Construction validates the inputs and builds the search structure;
/// [`evaluate`](Self::evaluate) is a pure function of them and may be called
/// any number of times.
#[derive(Debug)]
pub struct InterpolationGrid {
    points: Arc<PointSet>,
    resolution_x: usize,
    resolution_y: usize,
    bbox: BoundingBox,
    step_x: f64,
    step_y: f64,
    search: Box<dyn QuadrantSearch>,
}

impl InterpolationGrid {
    /// Create a grid using the default search strategy.
    pub fn new(points: Arc<PointSet>, resolution_x: usize, resolution_y: usize) -> Result<Self> {
        Self::builder()
            .points(points)
            .resolution(resolution_x, resolution_y)
            .build()
    }

    pub fn builder() -> InterpolationGridBuilder {
        InterpolationGridBuilder::default()
    }

    /// `(resolution_x, resolution_y)`
    pub fn resolution(&self) -> (usize, usize) {
        (self.resolution_x, self.resolution_y)
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    pub fn points(&self) -> &Arc<PointSet> {
        &self.points
    }

    /// Name of the quadrant search in use.
    pub fn search_name(&self) -> &'static str {
        self.search.name()
    }

    /// Data coordinate sampled by cell `(i, j)`.
    #[inline]
    pub fn coordinate(&self, i: usize, j: usize) -> (f64, f64) {
        (
            self.bbox.min_x + i as f64 * self.step_x,
            self.bbox.min_y + j as f64 * self.step_y,
        )
    }

    /// Interpolated value at an arbitrary coordinate.
    pub fn value_at(&self, x: f64, y: f64) -> f64 {
        self.search.anchors(x, y).blend(x, y)
    }

    /// Evaluate every cell, one rayon task per X column.
    pub fn evaluate(&self) -> Grid2D<f64> {
        let started = Instant::now();
        let mut data = vec![0.0; self.resolution_x * self.resolution_y];

        data.par_chunks_mut(self.resolution_y)
            .enumerate()
            .for_each(|(i, column)| self.fill_column(i, column));

        self.finish(data, started)
    }

    /// Like [`evaluate`](Self::evaluate), but checks `cancel` before each
    /// column and returns `Cancelled` once it is set.
    pub fn evaluate_with_cancel(&self, cancel: &CancelFlag) -> Result<Grid2D<f64>> {
        let started = Instant::now();
        let mut data = vec![0.0; self.resolution_x * self.resolution_y];

        data.par_chunks_mut(self.resolution_y)
            .enumerate()
            .try_for_each(|(i, column)| {
                if cancel.is_cancelled() {
                    return Err(FieldError::Cancelled);
                }
                self.fill_column(i, column);
                Ok(())
            })?;

        Ok(self.finish(data, started))
    }

    fn fill_column(&self, i: usize, column: &mut [f64]) {
        for (j, cell) in column.iter_mut().enumerate() {
            let (x, y) = self.coordinate(i, j);
            *cell = self.value_at(x, y);
        }
    }

    fn finish(&self, data: Vec<f64>, started: Instant) -> Grid2D<f64> {
        debug!(
            resolution_x = self.resolution_x,
            resolution_y = self.resolution_y,
            points = self.points.len(),
            search = self.search.name(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Evaluated interpolation grid"
        );
        Grid2D::from_parts(self.resolution_x, self.resolution_y, data)
    }
}

/// Step between sampled coordinates; a single cell has no step.
fn step(min: f64, max: f64, resolution: usize) -> f64 {
    if resolution > 1 {
        (max - min) / (resolution - 1) as f64
    } else {
        0.0
    }
}

/// Builder for [`InterpolationGrid`].
#[derive(Debug, Default)]
pub struct InterpolationGridBuilder {
    points: Option<Arc<PointSet>>,
    resolution: Option<(usize, usize)>,
    search: SearchStrategy,
}

impl InterpolationGridBuilder {
    pub fn points(mut self, points: impl Into<Arc<PointSet>>) -> Self {
        self.points = Some(points.into());
        self
    }

    pub fn resolution(mut self, resolution_x: usize, resolution_y: usize) -> Self {
        self.resolution = Some((resolution_x, resolution_y));
        self
    }

    pub fn search(mut self, search: SearchStrategy) -> Self {
        self.search = search;
        self
    }

    /// Apply the engine configuration (currently the search strategy).
    pub fn config(self, config: &InterpolationConfig) -> Self {
        self.search(config.search)
    }

    /// Validate and build.
    ///
    /// Fails with `InvalidArgument` when the point set is absent or a
    /// resolution is missing or zero, and with `EmptyInput` when the point
    /// set has no samples.
    pub fn build(self) -> Result<InterpolationGrid> {
        let points = self
            .points
            .ok_or_else(|| FieldError::invalid_argument("point set is absent"))?;

        let (resolution_x, resolution_y) = self
            .resolution
            .ok_or_else(|| FieldError::invalid_argument("resolution is not set"))?;
        if resolution_x == 0 {
            return Err(FieldError::invalid_argument("resolution_x must be >= 1"));
        }
        if resolution_y == 0 {
            return Err(FieldError::invalid_argument("resolution_y must be >= 1"));
        }

        let bbox = points.bounding_box()?;
        if bbox.is_degenerate() {
            debug!(
                width = bbox.width(),
                height = bbox.height(),
                "Point set spans a line or a single point"
            );
        }

        let search: Box<dyn QuadrantSearch> = match self.search {
            SearchStrategy::LinearScan => Box::new(LinearScan::new(&points)),
            SearchStrategy::SortedIndex => Box::new(SortedIndex::new(&points)),
        };

        debug!(
            points = points.len(),
            resolution_x,
            resolution_y,
            search = search.name(),
            "Built interpolation grid"
        );

        Ok(InterpolationGrid {
            step_x: step(bbox.min_x, bbox.max_x, resolution_x),
            step_y: step(bbox.min_y, bbox.max_y, resolution_y),
            points,
            resolution_x,
            resolution_y,
            bbox,
            search,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use field_common::Sample;

    fn unit_square() -> Arc<PointSet> {
        Arc::new(PointSet::new(vec![
            Sample::new(0.0, 0.0, 1.0),
            Sample::new(1.0, 0.0, 2.0),
            Sample::new(0.0, 1.0, 3.0),
            Sample::new(1.0, 1.0, 4.0),
        ]))
    }

    #[test]
    fn test_step_single_cell() {
        assert_eq!(step(0.0, 10.0, 1), 0.0);
        assert_eq!(step(0.0, 10.0, 2), 10.0);
        assert_eq!(step(0.0, 10.0, 11), 1.0);
    }

    #[test]
    fn test_coordinates_span_bbox() {
        let grid = InterpolationGrid::new(unit_square(), 5, 3).unwrap();
        assert_eq!(grid.coordinate(0, 0), (0.0, 0.0));
        assert_eq!(grid.coordinate(4, 2), (1.0, 1.0));
        assert_eq!(grid.coordinate(2, 1), (0.5, 0.5));
    }

    #[test]
    fn test_zero_resolution_rejected() {
        let err = InterpolationGrid::new(unit_square(), 0, 4).unwrap_err();
        assert!(matches!(err, FieldError::InvalidArgument(_)));

        let err = InterpolationGrid::new(unit_square(), 4, 0).unwrap_err();
        assert!(matches!(err, FieldError::InvalidArgument(_)));
    }

    #[test]
    fn test_missing_resolution_rejected() {
        let err = InterpolationGrid::builder()
            .points(unit_square())
            .build()
            .unwrap_err();
        assert!(matches!(err, FieldError::InvalidArgument(_)));
    }

    #[test]
    fn test_empty_point_set_rejected() {
        let err = InterpolationGrid::new(Arc::new(PointSet::default()), 2, 2).unwrap_err();
        assert!(matches!(err, FieldError::EmptyInput(_)));
    }

    #[test]
    fn test_degenerate_bbox_accepted() {
        let points = Arc::new(PointSet::new(vec![
            Sample::new(0.0, 3.0, 10.0),
            Sample::new(2.0, 3.0, 20.0),
        ]));
        let grid = InterpolationGrid::new(points, 3, 2).unwrap();
        assert!(grid.bounding_box().is_degenerate());
        assert_eq!(grid.coordinate(2, 1), (2.0, 3.0));

        let values = grid.evaluate();
        assert_eq!(values[(0, 1)], 10.0);
        assert_eq!(values[(2, 0)], 20.0);
    }

    #[test]
    fn test_corners_reproduce_samples() {
        let grid = InterpolationGrid::new(unit_square(), 2, 2).unwrap();
        let values = grid.evaluate();
        assert_eq!(values[(0, 0)], 1.0);
        assert_eq!(values[(1, 0)], 2.0);
        assert_eq!(values[(0, 1)], 3.0);
        assert_eq!(values[(1, 1)], 4.0);
    }

    #[test]
    fn test_cancelled_evaluation() {
        let grid = InterpolationGrid::new(unit_square(), 8, 8).unwrap();
        let cancel = CancelFlag::new();
        cancel.cancel();

        let err = grid.evaluate_with_cancel(&cancel).unwrap_err();
        assert!(matches!(err, FieldError::Cancelled));

        cancel.reset();
        let values = grid.evaluate_with_cancel(&cancel).unwrap();
        assert_eq!(values.shape(), (8, 8));
    }
}
