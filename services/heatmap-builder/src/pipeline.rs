//! Point set → grid → levels → document.

use std::sync::Arc;
use std::time::Instant;

use contour::{levels_by_interval, ContourLevelGenerator};
use field_common::Result;
use ingestion::IngestReport;
use interpolation::{InterpolationConfig, InterpolationGrid, PointSet};
use tracing::info;

use crate::output::HeatmapDocument;

/// Options for one heatmap build.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub resolution_x: usize,
    pub resolution_y: usize,
    /// Number of evenly spaced contour levels
    pub level_count: usize,
    /// Level spacing; overrides `level_count` when set
    pub interval: Option<f64>,
    pub interpolation: InterpolationConfig,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            resolution_x: 400,
            resolution_y: 400,
            level_count: 25,
            interval: None,
            interpolation: InterpolationConfig::default(),
        }
    }
}

/// Evaluate the grid for `points` and assemble the renderer document.
pub fn build_document(
    points: PointSet,
    report: IngestReport,
    options: &BuildOptions,
) -> Result<HeatmapDocument> {
    let started = Instant::now();

    let grid = InterpolationGrid::builder()
        .points(Arc::new(points))
        .resolution(options.resolution_x, options.resolution_y)
        .config(&options.interpolation)
        .build()?;

    let values = match options.interpolation.build_thread_pool()? {
        Some(pool) => pool.install(|| grid.evaluate()),
        None => grid.evaluate(),
    };

    let levels = match (options.interval, values.finite_range()) {
        (Some(interval), Some((min, max))) => levels_by_interval(min, max, interval),
        (None, range) => ContourLevelGenerator::new(options.level_count).generate_for(range),
        (Some(_), None) => vec![],
    };

    info!(
        resolution_x = options.resolution_x,
        resolution_y = options.resolution_y,
        search = grid.search_name(),
        levels = levels.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Built heatmap"
    );

    Ok(HeatmapDocument::new(
        grid.bounding_box(),
        &values,
        levels,
        report,
    ))
}
