//! Heatmap builder.
//!
//! Reads scattered `(x, y, value)` samples from delimited text, interpolates
//! them onto a regular grid and writes a JSON document with the grid, its
//! bounding box and contour levels for an external renderer.

mod output;
mod pipeline;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ingestion::{read_points_from_path, IngestConfig};
use interpolation::{InterpolationConfig, SearchStrategy};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use output::write_document;
use pipeline::{build_document, BuildOptions};

#[derive(Parser, Debug)]
#[command(name = "heatmap-builder")]
#[command(about = "Interpolate scattered samples into a heatmap grid")]
struct Args {
    /// Delimited text file with X, Y and Value columns
    input: PathBuf,

    /// Grid cells along X
    #[arg(long, env = "HEATMAP_RESOLUTION_X", default_value_t = 400)]
    resolution_x: usize,

    /// Grid cells along Y
    #[arg(long, env = "HEATMAP_RESOLUTION_Y", default_value_t = 400)]
    resolution_y: usize,

    /// Number of evenly spaced contour levels
    #[arg(long, env = "HEATMAP_LEVELS", default_value_t = 25)]
    levels: usize,

    /// Contour level spacing (overrides --levels)
    #[arg(long, env = "HEATMAP_LEVEL_INTERVAL")]
    interval: Option<f64>,

    /// Field delimiter: ",", ";" or "tab"
    #[arg(long, env = "FIELD_CSV_DELIMITER")]
    delimiter: Option<String>,

    /// Quadrant search: "sorted_index" or "linear_scan"
    #[arg(long, env = "FIELD_SEARCH_STRATEGY")]
    search: Option<String>,

    /// Worker threads (default: one per core)
    #[arg(long, env = "FIELD_THREADS")]
    threads: Option<usize>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    init_tracing(&args)?;

    info!(input = %args.input.display(), "Starting heatmap builder");

    let mut ingest = IngestConfig::from_env();
    if let Some(delimiter) = &args.delimiter {
        ingest = ingest
            .with_delimiter(delimiter)
            .context("Invalid --delimiter")?;
    }

    let mut interpolation = InterpolationConfig::from_env();
    if let Some(search) = &args.search {
        interpolation.search = SearchStrategy::from_str(search);
    }
    if args.threads.is_some() {
        interpolation.threads = args.threads;
    }
    interpolation
        .validate()
        .context("Invalid interpolation configuration")?;

    let (points, report) = read_points_from_path(&args.input, &ingest)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    info!(
        accepted = report.accepted,
        skipped = report.skipped,
        "Loaded samples"
    );

    let options = BuildOptions {
        resolution_x: args.resolution_x,
        resolution_y: args.resolution_y,
        level_count: args.levels,
        interval: args.interval,
        interpolation,
    };
    let document =
        build_document(points, report, &options).context("Failed to build heatmap")?;

    write_document(&document, args.output.as_deref())?;

    if let Some(path) = &args.output {
        info!(output = %path.display(), "Wrote heatmap document");
    }

    Ok(())
}

/// Logs go to stderr so the document can be written to stdout.
fn init_tracing(args: &Args) -> Result<()> {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr);

    if args.json_logs {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    Ok(())
}
