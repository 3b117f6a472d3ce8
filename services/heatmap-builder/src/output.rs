//! JSON document handed to the external renderer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use field_common::BoundingBox;
use ingestion::IngestReport;
use interpolation::Grid2D;
use serde::{Deserialize, Serialize};

/// Min and max over the finite grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

/// Everything a renderer needs to draw the heatmap and its isolines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapDocument {
    pub bbox: BoundingBox,
    pub resolution_x: usize,
    pub resolution_y: usize,
    /// One entry per X index, each holding `resolution_y` cells.
    /// Non-finite cells are `null`.
    pub columns: Vec<Vec<Option<f64>>>,
    pub value_range: Option<ValueRange>,
    pub levels: Vec<f64>,
    pub samples: IngestReport,
}

impl HeatmapDocument {
    pub fn new(
        bbox: BoundingBox,
        values: &Grid2D<f64>,
        levels: Vec<f64>,
        samples: IngestReport,
    ) -> Self {
        let columns = values
            .columns()
            .map(|column| {
                column
                    .iter()
                    .map(|&v| if v.is_finite() { Some(v) } else { None })
                    .collect()
            })
            .collect();

        Self {
            bbox,
            resolution_x: values.width(),
            resolution_y: values.height(),
            columns,
            value_range: values
                .finite_range()
                .map(|(min, max)| ValueRange { min, max }),
            levels,
            samples,
        }
    }
}

/// Write the document as JSON to `path`, or to stdout when `None`.
pub fn write_document(document: &HeatmapDocument, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer(&mut writer, document)
                .context("Failed to serialize heatmap document")?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            serde_json::to_writer(&mut writer, document)
                .context("Failed to serialize heatmap document")?;
            writeln!(writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}
