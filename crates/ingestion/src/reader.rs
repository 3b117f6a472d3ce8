//! Delimited-text reader producing a [`PointSet`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use field_common::{FieldError, Result, Sample};
use interpolation::PointSet;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::IngestConfig;

/// Row counts from one ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestReport {
    /// Rows turned into samples
    pub accepted: usize,
    /// Rows dropped because they failed to parse
    pub skipped: usize,
}

/// Positions of the required columns within a record.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    x: usize,
    y: usize,
    value: usize,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord, config: &IngestConfig) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name.trim()))
                .ok_or_else(|| {
                    FieldError::invalid_argument(format!("missing required column '{}'", name))
                })
        };

        Ok(Self {
            x: find(&config.x_column)?,
            y: find(&config.y_column)?,
            value: find(&config.value_column)?,
        })
    }

    fn parse(&self, record: &StringRecord, config: &IngestConfig) -> std::result::Result<Sample, String> {
        let x = parse_field(record, self.x, &config.x_column)?;
        let y = parse_field(record, self.y, &config.y_column)?;
        let value = parse_field(record, self.value, &config.value_column)?;
        Ok(Sample::new(x, y, value))
    }
}

fn parse_field(record: &StringRecord, index: usize, name: &str) -> std::result::Result<f64, String> {
    let raw = record
        .get(index)
        .ok_or_else(|| format!("missing field '{}'", name))?;
    raw.trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid number '{}' in column '{}'", raw, name))
}

/// Read samples from any delimited text source.
///
/// The first row is the header. Rows that fail to parse are logged and
/// counted in the report, never fatal. Empty or header-only input yields an
/// empty point set.
pub fn read_points<R: Read>(source: R, config: &IngestConfig) -> Result<(PointSet, IngestReport)> {
    config.validate()?;

    let mut reader = ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(source);

    let headers = reader.headers().map_err(csv_error)?.clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        info!("Input has no header row, returning empty point set");
        return Ok((PointSet::default(), IngestReport::default()));
    }
    let columns = ColumnMap::from_headers(&headers, config)?;

    let mut samples = Vec::new();
    let mut report = IngestReport::default();

    for (index, result) in reader.records().enumerate() {
        // Data rows start after the header on line 2.
        let fallback_line = index + 2;

        let parsed = match result {
            Ok(record) => {
                let line = record
                    .position()
                    .map(|p| p.line() as usize)
                    .unwrap_or(fallback_line);
                columns
                    .parse(&record, config)
                    .map_err(|message| FieldError::parse_failure(line, message))
            }
            Err(e) if e.is_io_error() => return Err(csv_error(e)),
            Err(e) => {
                let line = e
                    .position()
                    .map(|p| p.line() as usize)
                    .unwrap_or(fallback_line);
                Err(FieldError::parse_failure(line, e.to_string()))
            }
        };

        match parsed {
            Ok(sample) => {
                samples.push(sample);
                report.accepted += 1;
            }
            Err(e) => {
                if let FieldError::ParseFailure { line, .. } = &e {
                    warn!(line = *line, error = %e, "Skipping malformed row");
                }
                report.skipped += 1;
            }
        }
    }

    info!(
        accepted = report.accepted,
        skipped = report.skipped,
        "Ingested point set"
    );

    Ok((PointSet::new(samples), report))
}

/// Read samples from a file on disk.
pub fn read_points_from_path(
    path: impl AsRef<Path>,
    config: &IngestConfig,
) -> Result<(PointSet, IngestReport)> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| FieldError::Io(format!("{}: {}", path.display(), e)))?;
    info!(path = %path.display(), "Reading point set");
    read_points(file, config)
}

fn csv_error(e: csv::Error) -> FieldError {
    if e.is_io_error() {
        return FieldError::Io(e.to_string());
    }
    let line = e.position().map(|p| p.line() as usize).unwrap_or(1);
    FieldError::parse_failure(line, e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> Result<(PointSet, IngestReport)> {
        read_points(text.as_bytes(), &IngestConfig::default())
    }

    #[test]
    fn test_reads_well_formed_rows() {
        let (points, report) = read("X,Y,Value\n0,0,1\n2.5,-1,3e2\n").unwrap();
        assert_eq!(report, IngestReport { accepted: 2, skipped: 0 });
        assert_eq!(points.samples()[1], Sample::new(2.5, -1.0, 300.0));
    }

    #[test]
    fn test_header_case_and_whitespace() {
        let (points, _) = read(" x , Y ,VALUE\n 1 , 2 , 3 \n").unwrap();
        assert_eq!(points.samples(), &[Sample::new(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn test_missing_column_is_invalid_argument() {
        let err = read("X,Z,Value\n0,0,1\n").unwrap_err();
        assert!(matches!(err, FieldError::InvalidArgument(_)));
    }

    #[test]
    fn test_empty_input() {
        let (points, report) = read("").unwrap();
        assert!(points.is_empty());
        assert_eq!(report, IngestReport::default());
    }

    #[test]
    fn test_extra_columns_ignored() {
        let (points, report) = read("id,X,Y,Value,note\n7,1,2,3,hello\n").unwrap();
        assert_eq!(report.accepted, 1);
        assert_eq!(points.samples(), &[Sample::new(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn test_parse_field_messages() {
        let record = StringRecord::from(vec!["1", "oops"]);
        assert_eq!(parse_field(&record, 0, "X"), Ok(1.0));
        assert!(parse_field(&record, 1, "Y").unwrap_err().contains("oops"));
        assert!(parse_field(&record, 2, "Value")
            .unwrap_err()
            .contains("missing field"));
    }
}
