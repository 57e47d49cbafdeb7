//! Error types for maxphase.

use thiserror::Error;

/// Result alias for maxphase operations.
pub type MaxPhaseResult<T> = std::result::Result<T, MaxPhaseError>;

/// Errors that can occur while building surfaces or computing offsets.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MaxPhaseError {
    /// The surface has no axes or an axis of length zero.
    #[error("invalid dimensions: {size:?}")]
    InvalidDimensions { size: Vec<usize> },
    /// An axis stride would alias elements of lower axes.
    #[error("invalid stride on axis {axis}: stride {stride}, minimum {min}")]
    InvalidStride {
        axis: usize,
        stride: usize,
        min: usize,
    },
    /// The backing buffer is shorter than the layout requires.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// A per-axis metadata vector has the wrong length.
    #[error("{context} has {got} entries, surface has {expected} axes")]
    MetadataLength {
        context: &'static str,
        expected: usize,
        got: usize,
    },
    /// Sample spacing must be finite and strictly positive.
    #[error("invalid spacing {spacing} on axis {axis}")]
    InvalidSpacing { axis: usize, spacing: f64 },
    /// Inputs of one invocation disagree on dimensionality.
    #[error("dimension mismatch for {context}: expected {expected}, got {got}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        got: usize,
    },
    /// The max finder returned value and index sequences of different lengths.
    #[error("maxima and their indices differ in length: {values} values, {indices} indices")]
    MaximaLengthMismatch { values: usize, indices: usize },
    /// Zero suppression must be finite and strictly positive.
    #[error("invalid zero suppression: {value}")]
    InvalidZeroSuppression { value: f64 },
    /// At least one offset must be requested.
    #[error("offset count must be at least 1, got {count}")]
    InvalidOffsetCount { count: usize },
    /// The interpolation mode name is not recognized.
    #[error("unknown peak interpolation method: {name}")]
    UnknownInterpolation { name: String },
    /// A max finder implementation failed.
    #[error("max finder failed: {reason}")]
    MaxFinderFailed { reason: String },
}
