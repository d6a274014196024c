//! Error types for rotation and principal-axis estimation.

use thiserror::Error;

/// Errors produced by the rotation and estimation operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RotationError {
    /// The eastward and northward components have different lengths.
    #[error("Component length mismatch: u has {u_len} samples, v has {v_len}")]
    ShapeMismatch { u_len: usize, v_len: usize },

    /// The angle distribution has no meaningful mode.
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// A component is NaN or infinite, so the histogram range is undefined.
    #[error("Non-finite velocity sample at index {index}")]
    NonFiniteSample { index: usize },

    /// The histogram needs at least one bin.
    #[error("Histogram bin count must be at least 1")]
    InvalidBinCount,
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, RotationError>;

/// Fail with `ShapeMismatch` unless both components have the same length.
pub(crate) fn check_shape(u: &[f64], v: &[f64]) -> Result<()> {
    if u.len() != v.len() {
        return Err(RotationError::ShapeMismatch {
            u_len: u.len(),
            v_len: v.len(),
        });
    }
    Ok(())
}
