//! Scattered-sample ingestion.
//!
//! Reads delimited text with a header row into a [`PointSet`](interpolation::PointSet).
//!
//! # Format
//!
//! - The header names the `X`, `Y` and `Value` columns in any order and case.
//! - Extra columns are ignored.
//! - Numbers are parsed locale-invariantly (`1.5`, `-2e3`, `NaN`).
//! - Malformed rows are skipped with a warning; see [`IngestReport`].

pub mod config;
mod reader;

pub use config::{parse_delimiter, IngestConfig};
pub use reader::{read_points, read_points_from_path, IngestReport};
