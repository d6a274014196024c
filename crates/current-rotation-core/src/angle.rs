//! Conversion of velocity components to compass bearings.
//!
//! Bearings are measured clockwise from north, so `atan2` takes the eastward
//! component first: `atan2(u, v)`. Results are in degrees, in `[0, 360)`.

use crate::error::{check_shape, Result};

/// Wrap an angle in degrees into `[0, 360)`.
///
/// Tiny negative inputs can round up to exactly 360.0 under Euclidean
/// modulo; those fold back to 0.
#[inline]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Compass bearing of a single (u, v) vector.
///
/// `(0, 0)` yields 0, following `f64::atan2(0.0, 0.0)`.
#[inline]
pub fn compass_angle(u: f64, v: f64) -> f64 {
    let degrees = u.atan2(v).to_degrees();
    (degrees + 360.0) % 360.0
}

/// Convert eastward and northward velocity components to compass bearings.
///
/// # Arguments
///
/// * `u` - Eastward velocity components
/// * `v` - Northward velocity components
///
/// # Returns
///
/// Bearings in degrees from north, in `[0, 360)`, same length and order as
/// the input.
///
/// # Errors
///
/// `ShapeMismatch` if `u` and `v` differ in length.
///
/// # Example
///
/// ```
/// use current_rotation_core::angle::to_compass_angle;
///
/// let angles = to_compass_angle(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
/// assert_eq!(angles, vec![90.0, 0.0]);
/// ```
pub fn to_compass_angle(u: &[f64], v: &[f64]) -> Result<Vec<f64>> {
    check_shape(u, v)?;

    Ok(u.iter()
        .zip(v)
        .map(|(&east, &north)| compass_angle(east, north))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RotationError;

    #[test]
    fn test_east_is_90() {
        assert_eq!(to_compass_angle(&[1.0], &[0.0]).unwrap(), vec![90.0]);
    }

    #[test]
    fn test_north_is_0() {
        assert_eq!(to_compass_angle(&[0.0], &[1.0]).unwrap(), vec![0.0]);
    }

    #[test]
    fn test_south_is_180() {
        assert_eq!(to_compass_angle(&[0.0], &[-1.0]).unwrap(), vec![180.0]);
    }

    #[test]
    fn test_west_is_270() {
        assert_eq!(to_compass_angle(&[-1.0], &[0.0]).unwrap(), vec![270.0]);
    }

    #[test]
    fn test_north_west_quadrant() {
        let angle = compass_angle(-1.0, 1.0);
        assert!((angle - 315.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_vector_is_zero() {
        assert_eq!(compass_angle(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_magnitude_does_not_matter() {
        let a = compass_angle(0.3, 0.4);
        let b = compass_angle(30.0, 40.0);
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn test_shape_mismatch() {
        let err = to_compass_angle(&[1.0], &[1.0, 2.0]).unwrap_err();
        assert_eq!(err, RotationError::ShapeMismatch { u_len: 1, v_len: 2 });
    }

    #[test]
    fn test_empty() {
        assert!(to_compass_angle(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(-1e-17), 0.0);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Circular distance between two bearings.
    fn angular_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).abs() % 360.0;
        d.min(360.0 - d)
    }

    proptest! {
        /// Property: a unit vector built from a bearing converts back to it.
        #[test]
        fn prop_bearing_round_trip(theta in 0.0f64..360.0) {
            let rad = theta.to_radians();
            let angle = compass_angle(rad.sin(), rad.cos());
            prop_assert!(angular_distance(angle, theta) < 1e-9);
        }

        /// Property: output always falls in [0, 360).
        #[test]
        fn prop_output_in_range(
            u in -1e6f64..1e6,
            v in -1e6f64..1e6,
        ) {
            let angle = compass_angle(u, v);
            prop_assert!((0.0..360.0).contains(&angle), "angle {} out of range", angle);
        }

        /// Property: normalize_degrees always lands in [0, 360).
        #[test]
        fn prop_normalize_in_range(degrees in -1e4f64..1e4) {
            let wrapped = normalize_degrees(degrees);
            prop_assert!((0.0..360.0).contains(&wrapped));
        }
    }
}
