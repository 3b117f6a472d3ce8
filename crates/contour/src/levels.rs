//! Evenly spaced and interval-aligned contour thresholds.

use serde::{Deserialize, Serialize};

/// `level_count` evenly spaced thresholds from `min` to `max` inclusive.
///
/// `level[k] = min + k·(max - min)/(level_count - 1)`. A single level is
/// `[min]`; zero levels is an empty vector. NaN and infinite bounds are not
/// checked and propagate through the arithmetic.
pub fn generate_contour_levels(min: f64, max: f64, level_count: usize) -> Vec<f64> {
    match level_count {
        0 => vec![],
        1 => vec![min],
        n => {
            let span = max - min;
            let last = (n - 1) as f64;
            (0..n).map(|k| min + (k as f64 * span) / last).collect()
        }
    }
}

/// Upper bound on the number of levels `levels_by_interval` will produce.
pub const MAX_INTERVAL_LEVELS: usize = 10_000;

/// Multiples of `interval` that fall within `[min, max]`.
///
/// Returns an empty vector for a non-positive or non-finite interval, a
/// non-finite bound, an inverted range, or a request for more than
/// [`MAX_INTERVAL_LEVELS`] levels.
pub fn levels_by_interval(min: f64, max: f64, interval: f64) -> Vec<f64> {
    if interval <= 0.0 || !interval.is_finite() || !min.is_finite() || !max.is_finite() {
        return vec![];
    }
    if max <= min {
        return vec![];
    }

    let first = (min / interval).ceil();
    let last = (max / interval).floor();
    if !first.is_finite() || !last.is_finite() || last < first {
        return vec![];
    }

    let count = last - first + 1.0;
    if count > MAX_INTERVAL_LEVELS as f64 {
        tracing::warn!(
            min,
            max,
            interval,
            count,
            limit = MAX_INTERVAL_LEVELS,
            "Contour interval too fine, no levels generated"
        );
        return vec![];
    }

    // Index from the first multiple instead of accumulating so rounding
    // does not drift.
    (0..count as usize)
        .map(|k| (first + k as f64) * interval)
        .filter(|level| *level >= min && *level <= max)
        .collect()
}

/// Count-based level generator, configured once and applied to many ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContourLevelGenerator {
    pub level_count: usize,
}

impl Default for ContourLevelGenerator {
    fn default() -> Self {
        Self { level_count: 25 }
    }
}

impl ContourLevelGenerator {
    pub fn new(level_count: usize) -> Self {
        Self { level_count }
    }

    pub fn generate(&self, min: f64, max: f64) -> Vec<f64> {
        let levels = generate_contour_levels(min, max, self.level_count);
        tracing::debug!(min, max, count = levels.len(), "Generated contour levels");
        levels
    }

    /// Levels spanning an optional `(min, max)` range, empty when absent.
    pub fn generate_for(&self, range: Option<(f64, f64)>) -> Vec<f64> {
        range
            .map(|(min, max)| self.generate(min, max))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_levels_are_endpoints() {
        assert_eq!(generate_contour_levels(-3.0, 5.0, 2), vec![-3.0, 5.0]);
    }

    #[test]
    fn test_generator_default_count() {
        let generator = ContourLevelGenerator::default();
        assert_eq!(generator.generate(0.0, 1.0).len(), 25);
        assert!(generator.generate_for(None).is_empty());
    }
}
