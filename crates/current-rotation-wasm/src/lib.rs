//! Current Rotation WASM - WebAssembly bindings for current rotation analysis
//!
//! This crate exposes the current-rotation-core functionality to
//! JavaScript/TypeScript applications, where the charting library that
//! renders the diagnostic plots lives.
//!
//! # Module Structure
//!
//! - `rotation` - component rotation and compass bearing bindings
//! - `principal` - principal-axis estimation and plot hand-off
//! - `types` - WASM-compatible wrapper types for results
//!
//! # Usage
//!
//! ```typescript
//! import init, { estimate_principal_axis } from '@current-rotation/wasm';
//!
//! await init();
//!
//! const axis = estimate_principal_axis(u, v, 100);
//! console.log(`Principal orientation: ${axis.principal_orientation}`);
//! ```

use wasm_bindgen::prelude::*;

mod principal;
mod rotation;
mod types;

// Re-export public types
pub use principal::{
    estimate_principal_axis, estimate_principal_axis_with_options, render_principal_axis,
};
pub use rotation::{rotate_uv, velocity_to_angle};
pub use types::{JsPrincipalAxis, JsRotatedComponents};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // TODO: install console_error_panic_hook so panics reach the browser console
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Convert a core error into a JS exception value.
pub(crate) fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
