//! WASM bindings for component rotation and bearing conversion.

use crate::to_js_error;
use crate::types::JsRotatedComponents;
use current_rotation_core::{rotate, to_compass_angle};
use wasm_bindgen::prelude::*;

/// Rotate velocity components by an angle.
///
/// # Arguments
///
/// * `u` - Eastward velocity components (Float64Array)
/// * `v` - Northward velocity components (Float64Array)
/// * `theta_degrees` - Rotation angle in degrees
///
/// # Errors
///
/// Throws if `u` and `v` differ in length.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const rotated = rotate_uv(u, v, 90.0);
/// const along = rotated.v1();
/// const across = rotated.v2();
/// rotated.free();
/// ```
#[wasm_bindgen]
pub fn rotate_uv(u: &[f64], v: &[f64], theta_degrees: f64) -> Result<JsRotatedComponents, JsValue> {
    let (v1, v2) = rotate(u, v, theta_degrees).map_err(to_js_error)?;
    Ok(JsRotatedComponents::new(v1, v2))
}

/// Convert velocity components to compass bearings in [0, 360).
///
/// # Errors
///
/// Throws if `u` and `v` differ in length.
#[wasm_bindgen]
pub fn velocity_to_angle(u: &[f64], v: &[f64]) -> Result<Vec<f64>, JsValue> {
    to_compass_angle(u, v).map_err(to_js_error)
}
