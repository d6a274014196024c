//! WASM bindings for principal-axis estimation.
//!
//! The rendering surface lives on the JavaScript side: either the caller pulls
//! the plot object from [`JsPrincipalAxis::plot`], or passes a callback to
//! [`render_principal_axis`] that receives it directly.

use crate::to_js_error;
use crate::types::JsPrincipalAxis;
use current_rotation_core::{
    estimate_principal_axis as core_estimate, render_principal_axis as core_render,
    PrincipalAxisOptions, RenderError, RenderSurface, RotationError, RotationPlot,
};
use wasm_bindgen::prelude::*;

/// Rendering surface backed by a JavaScript callback.
///
/// The callback is invoked once with the plot as a plain object.
struct JsRenderSurface<'a> {
    callback: &'a js_sys::Function,
}

impl RenderSurface for JsRenderSurface<'_> {
    type Error = JsValue;

    fn render(&mut self, plot: &RotationPlot) -> Result<(), JsValue> {
        let value = serde_wasm_bindgen::to_value(plot)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize plot: {}", e)))?;
        self.callback.call1(&JsValue::NULL, &value)?;
        Ok(())
    }
}

fn options_from_bin_count(bin_count: Option<u32>) -> PrincipalAxisOptions {
    match bin_count {
        Some(count) => PrincipalAxisOptions::with_bin_count(count as usize),
        None => PrincipalAxisOptions::default(),
    }
}

/// Warn in the browser console before degenerate input is thrown.
fn report(err: &RotationError) {
    if let RotationError::DegenerateInput(reason) = err {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "Principal axis undefined: {}",
            reason
        )));
    }
}

/// Estimate the principal axis of a velocity series.
///
/// # Arguments
///
/// * `u` - Eastward velocity components (Float64Array)
/// * `v` - Northward velocity components (Float64Array)
/// * `bin_count` - Histogram bins (default 100)
///
/// # Errors
///
/// Throws on length mismatch, zero bins, non-finite samples, or a series
/// with no meaningful direction (empty or all zero).
#[wasm_bindgen]
pub fn estimate_principal_axis(
    u: &[f64],
    v: &[f64],
    bin_count: Option<u32>,
) -> Result<JsPrincipalAxis, JsValue> {
    let options = options_from_bin_count(bin_count);
    core_estimate(u, v, options)
        .map(JsPrincipalAxis::new)
        .map_err(|e| {
            report(&e);
            to_js_error(e)
        })
}

/// Estimate the principal axis with an options object.
///
/// # Arguments
///
/// * `options` - `{ bin_count?: number }`; missing fields take defaults
///
/// # Errors
///
/// Throws if the options cannot be deserialized, or on any estimator error.
#[wasm_bindgen]
pub fn estimate_principal_axis_with_options(
    u: &[f64],
    v: &[f64],
    options: JsValue,
) -> Result<JsPrincipalAxis, JsValue> {
    let options: PrincipalAxisOptions = if options.is_undefined() || options.is_null() {
        PrincipalAxisOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?
    };

    core_estimate(u, v, options)
        .map(JsPrincipalAxis::new)
        .map_err(|e| {
            report(&e);
            to_js_error(e)
        })
}

/// Estimate the principal axis and hand the plot to `callback`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const axis = render_principal_axis(u, v, 100, (plot) => {
///   drawHistograms(plot.current_histogram, plot.rotated_histogram);
///   drawProgressive(plot.current_progressive, plot.rotated_progressive);
/// });
/// ```
///
/// # Errors
///
/// Throws on any estimator error, or rethrows whatever the callback throws.
#[wasm_bindgen]
pub fn render_principal_axis(
    u: &[f64],
    v: &[f64],
    bin_count: Option<u32>,
    callback: &js_sys::Function,
) -> Result<JsPrincipalAxis, JsValue> {
    let options = options_from_bin_count(bin_count);
    let mut surface = JsRenderSurface { callback };

    match core_render(u, v, options, &mut surface) {
        Ok(axis) => Ok(JsPrincipalAxis::new(axis)),
        Err(RenderError::Estimate(e)) => {
            report(&e);
            Err(to_js_error(e))
        }
        Err(RenderError::Surface(e)) => {
            web_sys::console::error_2(&JsValue::from_str("Plot callback failed:"), &e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_from_bin_count() {
        assert_eq!(options_from_bin_count(None).bin_count, 100);
        assert_eq!(options_from_bin_count(Some(36)).bin_count, 36);
    }

    #[test]
    fn test_estimate_wraps_core_result() {
        let u = [0.0, 0.1, 0.0, -0.1];
        let v = [1.0, 1.0, 0.9, 1.0];
        let axis = estimate_principal_axis(&u, &v, Some(20)).ok().unwrap();
        assert_eq!(axis.current_counts().len(), 20);
        assert_eq!(axis.v1().len(), 4);
        assert!((0.0..360.0).contains(&axis.principal_orientation()));
    }
}
