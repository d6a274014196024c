//! WASM-compatible wrapper types for rotation results.
//!
//! These types wrap the core result types and copy component arrays out to
//! JavaScript as `Float64Array` on request.

use current_rotation_core::{PrincipalAxis, RotationPlot};
use wasm_bindgen::prelude::*;

/// Rotated velocity components for JavaScript.
#[wasm_bindgen]
pub struct JsRotatedComponents {
    v1: Vec<f64>,
    v2: Vec<f64>,
}

#[wasm_bindgen]
impl JsRotatedComponents {
    /// Component along the rotated axis (Float64Array copy).
    pub fn v1(&self) -> Vec<f64> {
        self.v1.clone()
    }

    /// Component orthogonal to the rotated axis (Float64Array copy).
    pub fn v2(&self) -> Vec<f64> {
        self.v2.clone()
    }

    /// Number of samples
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.v1.len()
    }

    /// Explicitly free WASM memory.
    ///
    /// Optional; wasm-bindgen's finalizer releases it otherwise.
    pub fn free(self) {}
}

impl JsRotatedComponents {
    pub(crate) fn new(v1: Vec<f64>, v2: Vec<f64>) -> Self {
        Self { v1, v2 }
    }
}

/// Principal-axis estimate for JavaScript.
///
/// Orientation values are exposed as getters; component arrays and the plot
/// bundle are copied out on request.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const axis = estimate_principal_axis(u, v, 100);
/// const alongAxis = axis.v1();
/// const plot = axis.plot(); // hand to the charting library
/// axis.free();
/// ```
#[wasm_bindgen]
pub struct JsPrincipalAxis {
    inner: PrincipalAxis,
}

#[wasm_bindgen]
impl JsPrincipalAxis {
    /// Left edge of the modal bearing bin, in degrees
    #[wasm_bindgen(getter)]
    pub fn principal_orientation(&self) -> f64 {
        self.inner.rotation.principal_orientation
    }

    /// Principal orientation plus 180 degrees, in [0, 360)
    #[wasm_bindgen(getter)]
    pub fn orthogonal_orientation(&self) -> f64 {
        self.inner.rotation.orthogonal_orientation
    }

    /// Rotation applied to bring the peak to 0 degrees
    #[wasm_bindgen(getter)]
    pub fn correction_angle(&self) -> f64 {
        self.inner.rotation.correction_angle
    }

    /// Index of the modal histogram bin
    #[wasm_bindgen(getter)]
    pub fn modal_bin(&self) -> usize {
        self.inner.modal_bin
    }

    /// First rotated component (Float64Array copy).
    pub fn v1(&self) -> Vec<f64> {
        self.inner.rotation.v1.clone()
    }

    /// Second rotated component (Float64Array copy).
    pub fn v2(&self) -> Vec<f64> {
        self.inner.rotation.v2.clone()
    }

    /// Bin counts of the bearing histogram before rotation.
    pub fn current_counts(&self) -> Vec<u32> {
        self.inner.current_histogram.counts.clone()
    }

    /// Bin edges of the bearing histogram before rotation.
    pub fn current_edges(&self) -> Vec<f64> {
        self.inner.current_histogram.edges.clone()
    }

    /// Bin counts of the bearing histogram after rotation.
    pub fn rotated_counts(&self) -> Vec<u32> {
        self.inner.rotated_histogram.counts.clone()
    }

    /// Bin edges of the bearing histogram after rotation.
    pub fn rotated_edges(&self) -> Vec<f64> {
        self.inner.rotated_histogram.edges.clone()
    }

    /// Plot data as a plain JS object for a charting library.
    ///
    /// # Errors
    /// Returns error if the plot cannot be serialized
    pub fn plot(&self) -> Result<JsValue, JsValue> {
        let plot = RotationPlot::from_principal_axis(&self.inner);
        serde_wasm_bindgen::to_value(&plot)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize plot: {}", e)))
    }

    /// Explicitly free WASM memory.
    ///
    /// Optional; wasm-bindgen's finalizer releases it otherwise.
    pub fn free(self) {}
}

impl JsPrincipalAxis {
    pub(crate) fn new(inner: PrincipalAxis) -> Self {
        Self { inner }
    }
}
