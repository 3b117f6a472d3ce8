//! Common types shared across the scattered-field gridding workspace.

pub mod bbox;
pub mod error;
pub mod sample;

pub use bbox::BoundingBox;
pub use error::{FieldError, Result};
pub use sample::Sample;
