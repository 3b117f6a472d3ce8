//! Sample generators for creating synthetic scattered data.
//!
//! These generators create predictable, verifiable sample sets that can be
//! used across the test suite and benchmarks.

use field_common::Sample;

/// The four corners of the unit square with values 1, 2, 3, 4.
///
/// ```
/// use test_utils::unit_square_samples;
///
/// let samples = unit_square_samples();
/// assert_eq!(samples.len(), 4);
/// assert_eq!(samples[3].value, 4.0);
/// ```
pub fn unit_square_samples() -> Vec<Sample> {
    vec![
        Sample::new(0.0, 0.0, 1.0),
        Sample::new(1.0, 0.0, 2.0),
        Sample::new(0.0, 1.0, 3.0),
        Sample::new(1.0, 1.0, 4.0),
    ]
}

/// A regular `nx × ny` lattice over `[0, nx-1] × [0, ny-1]` with
/// `value = f(x, y)`.
pub fn lattice_samples<F>(nx: usize, ny: usize, f: F) -> Vec<Sample>
where
    F: Fn(f64, f64) -> f64,
{
    let mut samples = Vec::with_capacity(nx * ny);
    for col in 0..nx {
        for row in 0..ny {
            let x = col as f64;
            let y = row as f64;
            samples.push(Sample::new(x, y, f(x, y)));
        }
    }
    samples
}

/// A lattice where every node is nudged by a deterministic offset of at
/// most `jitter` in each axis. Values follow a smooth plane `x + 2y`.
pub fn jittered_lattice_samples(nx: usize, ny: usize, jitter: f64, seed: u32) -> Vec<Sample> {
    let mut samples = Vec::with_capacity(nx * ny);
    for col in 0..nx {
        for row in 0..ny {
            let dx = unit_noise(col as u32, row as u32, seed) * jitter;
            let dy = unit_noise(row as u32, col as u32, seed.wrapping_add(1)) * jitter;
            let x = col as f64 + dx;
            let y = row as f64 + dy;
            samples.push(Sample::new(x, y, x + 2.0 * y));
        }
    }
    samples
}

/// `count` pseudo-random samples in `[0, extent)²` on a coarse coordinate
/// raster, so exact `(x, y)` duplicates and shared x columns are common.
pub fn duplicate_heavy_samples(count: usize, extent: u32, seed: u32) -> Vec<Sample> {
    let extent = extent.max(1);
    (0..count as u32)
        .map(|i| {
            let x = simple_hash(i, 0, seed) % extent;
            let y = simple_hash(i, 1, seed) % extent;
            let value = (simple_hash(i, 2, seed) % 1000) as f64 / 10.0;
            Sample::new(x as f64, y as f64, value)
        })
        .collect()
}

/// Deterministic value in `[-1, 1]`.
fn unit_noise(x: u32, y: u32, seed: u32) -> f64 {
    (simple_hash(x, y, seed) % 2001) as f64 / 1000.0 - 1.0
}

/// Simple deterministic hash for reproducible test data.
fn simple_hash(x: u32, y: u32, seed: u32) -> u32 {
    let mut h = seed;
    h = h.wrapping_mul(31).wrapping_add(x);
    h = h.wrapping_mul(31).wrapping_add(y);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}
