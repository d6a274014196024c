//! Current Rotation Core - principal-axis analysis of current velocities
//!
//! This crate takes an east/north current-velocity time series, finds the
//! dominant flow orientation from the distribution of compass bearings, and
//! rotates the series into that axis-aligned frame.
//!
//! # Module Structure
//!
//! - `rotation` - 2D rotation of orthogonal components
//! - `angle` - component pairs to compass bearings
//! - `histogram` - equal-width bearing histograms and the modal bin
//! - `principal` - principal-axis estimator
//! - `progressive` - progressive vectors (cumulative sums)
//! - `render` - diagnostics hand-off to a rendering surface

pub mod angle;
pub mod error;
pub mod histogram;
pub mod principal;
pub mod progressive;
pub mod render;
pub mod rotation;

pub use angle::{compass_angle, normalize_degrees, to_compass_angle};
pub use error::{Result, RotationError};
pub use histogram::Histogram;
pub use principal::{estimate_principal_axis, PrincipalAxis, PrincipalAxisOptions};
pub use progressive::ProgressiveVector;
pub use render::{render_principal_axis, RenderError, RenderSurface, RotationPlot};
pub use rotation::{rotate, rotate_vector};

use serde::{Deserialize, Serialize};

/// Eastward and northward velocity components sharing one time index.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VelocitySeries {
    u: Vec<f64>,
    v: Vec<f64>,
}

impl VelocitySeries {
    /// Pair `u` (east) with `v` (north).
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the components differ in length.
    pub fn new(u: Vec<f64>, v: Vec<f64>) -> Result<Self> {
        error::check_shape(&u, &v)?;
        Ok(Self { u, v })
    }

    /// Eastward components
    pub fn u(&self) -> &[f64] {
        &self.u
    }

    /// Northward components
    pub fn v(&self) -> &[f64] {
        &self.v
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.u.len()
    }

    pub fn is_empty(&self) -> bool {
        self.u.is_empty()
    }

    /// Split back into `(u, v)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.u, self.v)
    }

    /// Rotate the series by `theta_degrees`.
    pub fn rotated(&self, theta_degrees: f64) -> Self {
        let (u, v) = self
            .u
            .iter()
            .zip(&self.v)
            .map(|(&east, &north)| rotate_vector(east, north, theta_degrees))
            .unzip();
        Self { u, v }
    }

    /// Compass bearing of every sample.
    pub fn compass_angles(&self) -> Vec<f64> {
        self.u
            .iter()
            .zip(&self.v)
            .map(|(&east, &north)| compass_angle(east, north))
            .collect()
    }

    /// Progressive vector of the series.
    pub fn progressive_vector(&self) -> ProgressiveVector {
        ProgressiveVector {
            x: progressive::cumulative_sum(&self.u),
            y: progressive::cumulative_sum(&self.v),
        }
    }

    /// Estimate the principal axis of this series.
    pub fn principal_axis(&self, options: PrincipalAxisOptions) -> Result<PrincipalAxis> {
        estimate_principal_axis(&self.u, &self.v, options)
    }
}

/// Components rotated onto the principal axis, plus the angles used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationResult {
    /// First rotated component
    pub v1: Vec<f64>,
    /// Second rotated component, orthogonal to `v1`
    pub v2: Vec<f64>,
    /// Left edge of the modal bearing bin, in degrees
    pub principal_orientation: f64,
    /// `(principal_orientation + 180) mod 360`
    pub orthogonal_orientation: f64,
    /// Rotation applied: `(360 - principal_orientation) mod 360`
    pub correction_angle: f64,
}

impl RotationResult {
    /// The rotated components as a series.
    pub fn rotated_series(&self) -> VelocitySeries {
        VelocitySeries {
            u: self.v1.clone(),
            v: self.v2.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_series_new() {
        let series = VelocitySeries::new(vec![1.0, 2.0], vec![3.0, 4.0]).unwrap();
        assert_eq!(series.len(), 2);
        assert!(!series.is_empty());
        assert_eq!(series.u(), &[1.0, 2.0]);
        assert_eq!(series.v(), &[3.0, 4.0]);
    }

    #[test]
    fn test_velocity_series_shape_mismatch() {
        let err = VelocitySeries::new(vec![1.0, 2.0], vec![1.0]).unwrap_err();
        assert_eq!(err, RotationError::ShapeMismatch { u_len: 2, v_len: 1 });
    }

    #[test]
    fn test_velocity_series_rotated_matches_rotate() {
        let series = VelocitySeries::new(vec![0.3, -0.8, 1.1], vec![0.9, 0.2, -0.4]).unwrap();
        let (v1, v2) = rotate(series.u(), series.v(), 37.0).unwrap();
        let rotated = series.rotated(37.0);
        assert_eq!(rotated.u(), v1.as_slice());
        assert_eq!(rotated.v(), v2.as_slice());
    }

    #[test]
    fn test_velocity_series_compass_angles() {
        let series = VelocitySeries::new(vec![1.0, 0.0], vec![0.0, 1.0]).unwrap();
        assert_eq!(series.compass_angles(), vec![90.0, 0.0]);
    }

    #[test]
    fn test_velocity_series_progressive_vector() {
        let series = VelocitySeries::new(vec![1.0, 2.0], vec![0.5, 0.5]).unwrap();
        let pv = series.progressive_vector();
        assert_eq!(pv.x, vec![1.0, 3.0]);
        assert_eq!(pv.y, vec![0.5, 1.0]);
    }

    #[test]
    fn test_velocity_series_principal_axis() {
        let series = VelocitySeries::new(vec![0.0; 10], vec![2.0; 10]).unwrap();
        let axis = series
            .principal_axis(PrincipalAxisOptions::default())
            .unwrap();
        let result = axis.rotation;
        assert!(result.principal_orientation.abs() < 0.011);

        let rotated = result.rotated_series();
        assert_eq!(rotated.len(), 10);
        let (v1, v2) = rotated.into_parts();
        assert_eq!(v1, result.v1);
        assert_eq!(v2, result.v2);
    }

    #[test]
    fn test_velocity_series_default_is_empty() {
        let series = VelocitySeries::default();
        assert!(series.is_empty());
        assert!(matches!(
            series.principal_axis(PrincipalAxisOptions::default()),
            Err(RotationError::DegenerateInput(_))
        ));
    }
}
