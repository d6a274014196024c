//! Principal-axis estimation from the angle distribution.
//!
//! # Algorithm
//!
//! 1. Convert each (u, v) sample to a compass bearing.
//! 2. Histogram the bearings over `bin_count` bins spanning their range.
//! 3. The left edge of the fullest bin (lowest index on ties) is the
//!    principal orientation; the orthogonal orientation is 180 degrees away.
//! 4. Rotate the series by `360 - principal` so the peak moves to 0 degrees.
//!
//! The rotated bearings and both progressive vectors are computed only as
//! diagnostics for a rendering surface.

use crate::angle::{normalize_degrees, to_compass_angle};
use crate::error::{check_shape, Result, RotationError};
use crate::histogram::Histogram;
use crate::progressive::ProgressiveVector;
use crate::rotation::rotate;
use crate::RotationResult;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Default number of histogram bins.
pub const DEFAULT_BIN_COUNT: usize = 100;

/// Tunable parameters for [`estimate_principal_axis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrincipalAxisOptions {
    /// Number of equal-width bins in the angle histogram
    pub bin_count: usize,
}

impl Default for PrincipalAxisOptions {
    fn default() -> Self {
        Self {
            bin_count: DEFAULT_BIN_COUNT,
        }
    }
}

impl PrincipalAxisOptions {
    /// Options with a custom bin count.
    pub fn with_bin_count(bin_count: usize) -> Self {
        Self { bin_count }
    }
}

/// Everything the estimator produces: the rotation plus diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrincipalAxis {
    /// Rotated components and the angles used
    pub rotation: RotationResult,
    /// Index of the modal bin in `current_histogram`
    pub modal_bin: usize,
    /// Bearing distribution before rotation
    pub current_histogram: Histogram,
    /// Bearing distribution after rotation
    pub rotated_histogram: Histogram,
    /// Progressive vector of (u, v)
    pub current_progressive: ProgressiveVector,
    /// Progressive vector of (v1, v2)
    pub rotated_progressive: ProgressiveVector,
}

/// Estimate the principal axis of `(u, v)` and rotate the series onto it.
///
/// # Arguments
///
/// * `u` - Eastward velocity components
/// * `v` - Northward velocity components
/// * `options` - Histogram settings
///
/// # Errors
///
/// * `ShapeMismatch` if `u` and `v` differ in length
/// * `InvalidBinCount` if `options.bin_count` is 0
/// * `NonFiniteSample` if any component is NaN or infinite
/// * `DegenerateInput` if the series is empty or every sample is zero
///
/// # Example
///
/// ```
/// use current_rotation_core::{estimate_principal_axis, PrincipalAxisOptions};
///
/// let u = [1.0, 1.0, 0.9];
/// let v = [0.0, 0.1, 0.0];
/// let axis = estimate_principal_axis(&u, &v, PrincipalAxisOptions::default()).unwrap();
/// assert!(axis.rotation.principal_orientation > 80.0);
/// ```
pub fn estimate_principal_axis(
    u: &[f64],
    v: &[f64],
    options: PrincipalAxisOptions,
) -> Result<PrincipalAxis> {
    check_shape(u, v)?;
    if options.bin_count == 0 {
        return Err(RotationError::InvalidBinCount);
    }
    check_finite(u, v)?;
    check_not_degenerate(u, v)?;

    let current_angle = to_compass_angle(u, v)?;
    let current_histogram = Histogram::from_samples(&current_angle, options.bin_count)?;

    let modal_bin = current_histogram
        .modal_bin()
        .ok_or_else(|| RotationError::DegenerateInput("angle histogram is empty".to_string()))?;
    // A single-valued series near 0 widens the range below zero
    let principal_orientation = current_histogram
        .left_edge(modal_bin)
        .map(normalize_degrees)
        .ok_or_else(|| RotationError::DegenerateInput("modal bin has no edge".to_string()))?;

    let orthogonal_orientation = normalize_degrees(principal_orientation + 180.0);
    let correction_angle = normalize_degrees(360.0 - principal_orientation);

    debug!(
        "principal axis: modal bin {} of {} ({} samples), principal {:.3}, correction {:.3}",
        modal_bin,
        options.bin_count,
        current_histogram.counts[modal_bin],
        principal_orientation,
        correction_angle
    );

    let (v1, v2) = rotate(u, v, correction_angle)?;

    let rotated_angle = to_compass_angle(&v1, &v2)?;
    let rotated_histogram = Histogram::from_samples(&rotated_angle, options.bin_count)?;

    let current_progressive = ProgressiveVector::from_components(u, v)?;
    let rotated_progressive = ProgressiveVector::from_components(&v1, &v2)?;

    Ok(PrincipalAxis {
        rotation: RotationResult {
            v1,
            v2,
            principal_orientation,
            orthogonal_orientation,
            correction_angle,
        },
        modal_bin,
        current_histogram,
        rotated_histogram,
        current_progressive,
        rotated_progressive,
    })
}

fn check_finite(u: &[f64], v: &[f64]) -> Result<()> {
    let bad = u
        .iter()
        .zip(v)
        .position(|(a, b)| !a.is_finite() || !b.is_finite());
    match bad {
        Some(index) => Err(RotationError::NonFiniteSample { index }),
        None => Ok(()),
    }
}

fn check_not_degenerate(u: &[f64], v: &[f64]) -> Result<()> {
    if u.is_empty() {
        warn!("principal axis requested for an empty velocity series");
        return Err(RotationError::DegenerateInput(
            "velocity series is empty".to_string(),
        ));
    }
    if u.iter().zip(v).all(|(&a, &b)| a == 0.0 && b == 0.0) {
        warn!(
            "principal axis requested for {} samples with zero velocity",
            u.len()
        );
        return Err(RotationError::DegenerateInput(
            "every sample has zero velocity".to_string(),
        ));
    }
    Ok(())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
