//! Error types
//!
//! None of these abort frame processing: sampling and badge errors are
//! absorbed by their callers, store and config errors surface to the host.

use thiserror::Error;
use uuid::Uuid;

/// Brightness sampling failed for the current frame
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SampleError {
    /// Frame is smaller than the sample window
    #[error("frame {width}x{height} is smaller than the {window}x{window} sample window")]
    FrameTooSmall { width: u32, height: u32, window: u32 },

    /// Pixel buffer shorter than width × height × 4
    #[error("pixel buffer has {actual} bytes, expected {expected}")]
    ShortBuffer { actual: usize, expected: usize },

    /// The host could not provide pixels
    #[error("image sampling unavailable: {0}")]
    Unavailable(String),
}

/// A badge predicate could not be evaluated
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BadgeError {
    #[error("stats snapshot is missing `{0}`")]
    MissingData(&'static str),
}

/// Record persistence errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("no record with id {0}")]
    NotFound(Uuid),

    #[error("record {0} is already stored")]
    Duplicate(Uuid),
}

/// Invalid session configuration
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}
