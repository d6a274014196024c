//! Rotation of orthogonal velocity components.
//!
//! For a rotation by angle θ (degrees), each sample is transformed as:
//! ```text
//! v1 =  u * cos(θ) + v * sin(θ)
//! v2 = -u * sin(θ) + v * cos(θ)
//! ```
//!
//! Under the compass convention (bearing measured clockwise from north) a
//! vector at bearing β ends up at bearing β + θ. The transform has
//! determinant +1, so magnitudes are preserved.

use crate::error::{check_shape, Result};

/// Sine and cosine of an angle in degrees.
///
/// Multiples of 90 degrees return exact values so quadrant rotations do not
/// pick up `6e-17` residue from `cos(π/2)`.
pub fn sin_cos_degrees(theta_degrees: f64) -> (f64, f64) {
    let normalized = theta_degrees.rem_euclid(360.0);

    if normalized == 0.0 || normalized == 360.0 {
        return (0.0, 1.0);
    }
    if normalized == 90.0 {
        return (1.0, 0.0);
    }
    if normalized == 180.0 {
        return (0.0, -1.0);
    }
    if normalized == 270.0 {
        return (-1.0, 0.0);
    }

    theta_degrees.to_radians().sin_cos()
}

/// Rotate a single (u, v) vector by `theta_degrees`.
#[inline]
pub fn rotate_vector(u: f64, v: f64, theta_degrees: f64) -> (f64, f64) {
    let (sin, cos) = sin_cos_degrees(theta_degrees);
    rotate_with(u, v, sin, cos)
}

#[inline]
fn rotate_with(u: f64, v: f64, sin: f64, cos: f64) -> (f64, f64) {
    (u * cos + v * sin, -u * sin + v * cos)
}

/// Rotate velocity components `u`, `v` by `theta_degrees`.
///
/// # Arguments
///
/// * `u` - Eastward velocity components
/// * `v` - Northward velocity components
/// * `theta_degrees` - Rotation angle in degrees (any range, including negative)
///
/// # Returns
///
/// `(v1, v2)`: the component along the rotated axis and the component
/// orthogonal to it, newly allocated, same length and order as the input.
///
/// # Errors
///
/// `ShapeMismatch` if `u` and `v` differ in length.
///
/// # Example
///
/// ```
/// use current_rotation_core::rotation::rotate;
///
/// let (v1, v2) = rotate(&[1.0, 0.0], &[0.0, 1.0], 90.0).unwrap();
/// assert_eq!(v1, vec![0.0, 1.0]);
/// assert_eq!(v2, vec![-1.0, 0.0]);
/// ```
pub fn rotate(u: &[f64], v: &[f64], theta_degrees: f64) -> Result<(Vec<f64>, Vec<f64>)> {
    check_shape(u, v)?;

    let (sin, cos) = sin_cos_degrees(theta_degrees);

    let (v1, v2) = u
        .iter()
        .zip(v)
        .map(|(&east, &north)| rotate_with(east, north, sin, cos))
        .unzip();

    Ok((v1, v2))
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for paired component vectors of equal length.
    fn components_strategy() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
        prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0), 0..64)
            .prop_map(|pairs| pairs.into_iter().unzip())
    }

    proptest! {
        /// Property: rotation preserves the magnitude of every sample.
        #[test]
        fn prop_rotation_preserves_magnitude(
            (u, v) in components_strategy(),
            theta in -720.0f64..720.0,
        ) {
            let (v1, v2) = rotate(&u, &v, theta).unwrap();
            for i in 0..u.len() {
                let before = u[i] * u[i] + v[i] * v[i];
                let after = v1[i] * v1[i] + v2[i] * v2[i];
                prop_assert!((before - after).abs() < 1e-9 * (1.0 + before));
            }
        }

        /// Property: two rotations compose into one by the summed angle.
        #[test]
        fn prop_rotation_composes(
            (u, v) in components_strategy(),
            theta1 in -360.0f64..360.0,
            theta2 in -360.0f64..360.0,
        ) {
            let (a1, a2) = rotate(&u, &v, theta1).unwrap();
            let (b1, b2) = rotate(&a1, &a2, theta2).unwrap();
            let (c1, c2) = rotate(&u, &v, theta1 + theta2).unwrap();
            for i in 0..u.len() {
                prop_assert!((b1[i] - c1[i]).abs() < 1e-9);
                prop_assert!((b2[i] - c2[i]).abs() < 1e-9);
            }
        }

        /// Property: output length and order follow the input.
        #[test]
        fn prop_output_length_matches(
            (u, v) in components_strategy(),
            theta in -360.0f64..360.0,
        ) {
            let (v1, v2) = rotate(&u, &v, theta).unwrap();
            prop_assert_eq!(v1.len(), u.len());
            prop_assert_eq!(v2.len(), v.len());
        }
    }
}
