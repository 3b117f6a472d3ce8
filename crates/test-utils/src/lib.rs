//! Shared test utilities for the scattered-field workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Scattered sample generators
//! - Delimited-text fixtures for ingestion tests
//! - Floating-point assertion macros
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{assert_approx_eq, unit_square_samples};
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if !(diff <= epsilon) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Assert two `f64` slices are identical bit for bit (NaN-safe).
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_bits_eq;
///
/// assert_bits_eq!(first.as_slice(), second.as_slice());
/// ```
#[macro_export]
macro_rules! assert_bits_eq {
    ($left:expr, $right:expr) => {{
        let left: &[f64] = $left;
        let right: &[f64] = $right;
        assert_eq!(left.len(), right.len(), "length mismatch");
        for (idx, (l, r)) in left.iter().zip(right.iter()).enumerate() {
            if l.to_bits() != r.to_bits() {
                panic!(
                    "assertion failed: bit mismatch at index {}\n  left: `{:?}`,\n right: `{:?}`",
                    idx, l, r
                );
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_assert_approx_eq_passes() {
        assert_approx_eq!(1.0001, 1.0, 0.001);
        assert_approx_eq!(0.0, 0.0, 0.0001);
        assert_approx_eq!(-5.5, -5.500001, 0.0001);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq!(1.1, 1.0, 0.001);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_approx_eq_rejects_nan() {
        assert_approx_eq!(f64::NAN, 1.0, 0.001);
    }

    #[test]
    fn test_assert_bits_eq_accepts_nan() {
        let a = [1.0, f64::NAN, -0.0];
        let b = [1.0, f64::NAN, -0.0];
        assert_bits_eq!(&a[..], &b[..]);
    }

    #[test]
    #[should_panic(expected = "bit mismatch")]
    fn test_assert_bits_eq_signed_zero() {
        assert_bits_eq!(&[0.0][..], &[-0.0][..]);
    }
}
