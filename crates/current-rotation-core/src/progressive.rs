//! Progressive vectors: running sums of velocity components.
//!
//! Plotting the cumulative east/north sums traces the net displacement a
//! water parcel would follow, which makes the dominant flow direction obvious
//! before and after rotation.

use crate::error::{check_shape, Result};
use serde::{Deserialize, Serialize};

/// Cumulative sums of a component pair, one point per sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressiveVector {
    /// Running sum of the first component
    pub x: Vec<f64>,
    /// Running sum of the second component
    pub y: Vec<f64>,
}

impl ProgressiveVector {
    /// Build the progressive vector of `(a, b)`.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the components differ in length.
    pub fn from_components(a: &[f64], b: &[f64]) -> Result<Self> {
        check_shape(a, b)?;
        Ok(Self {
            x: cumulative_sum(a),
            y: cumulative_sum(b),
        })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Final point, i.e. the net displacement.
    pub fn end_point(&self) -> Option<(f64, f64)> {
        Some((*self.x.last()?, *self.y.last()?))
    }
}

/// Running sum: `out[i] = values[0] + ... + values[i]`.
pub fn cumulative_sum(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |acc, &value| {
            *acc += value;
            Some(*acc)
        })
        .collect()
}
