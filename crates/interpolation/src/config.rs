//! Configuration for the interpolation engine.

use field_common::{FieldError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for grid evaluation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterpolationConfig {
    /// How quadrant anchors are located.
    pub search: SearchStrategy,

    /// Worker threads for evaluation. `None` uses rayon's global pool.
    pub threads: Option<usize>,
}

impl InterpolationConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("FIELD_SEARCH_STRATEGY") {
            config.search = SearchStrategy::from_str(&val);
        }

        if let Ok(val) = std::env::var("FIELD_THREADS") {
            if let Ok(threads) = val.parse() {
                config.threads = Some(threads);
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.threads == Some(0) {
            return Err(FieldError::invalid_argument("threads must be > 0"));
        }
        Ok(())
    }

    /// Build a dedicated pool when `threads` is set.
    pub fn build_thread_pool(&self) -> Result<Option<rayon::ThreadPool>> {
        self.validate()?;
        match self.threads {
            None => Ok(None),
            Some(threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|i| format!("field-interp-{}", i))
                .build()
                .map(Some)
                .map_err(|e| FieldError::invalid_argument(format!("thread pool: {}", e))),
        }
    }
}

/// Quadrant search implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Scan every sample for every cell.
    LinearScan,
    /// Binary searches over samples sorted by x, then y.
    #[default]
    SortedIndex,
}

impl SearchStrategy {
    /// Parse from string (case-insensitive). Unknown names fall back to the
    /// sorted index.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "linear" | "linear_scan" | "scan" => Self::LinearScan,
            _ => Self::SortedIndex,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LinearScan => "linear_scan",
            Self::SortedIndex => "sorted_index",
        }
    }
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
