//! Hand-off of estimator diagnostics to a rendering surface.
//!
//! The estimator never draws anything. It produces a [`RotationPlot`], and a
//! [`RenderSurface`] implementation (a charting library, a JS callback, a test
//! recorder) decides how or whether to display it.
//!
//! The plot has two panels:
//! - angle histograms before and after rotation, with guide lines at the
//!   principal and orthogonal orientations
//! - progressive vectors before and after rotation

use crate::error::RotationError;
use crate::histogram::Histogram;
use crate::principal::{estimate_principal_axis, PrincipalAxis, PrincipalAxisOptions};
use crate::progressive::ProgressiveVector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Figure title.
pub const FIGURE_TITLE: &str = "Current Rotation: UV to principal current orientation";
/// Title of the histogram panel.
pub const HISTOGRAM_TITLE: &str = "Current Angle Histogram";
/// Title of the progressive vector panel.
pub const PROGRESSIVE_TITLE: &str = "Progressive Vector";

/// Text labels for both panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotLabels {
    pub figure_title: String,
    pub histogram_title: String,
    pub progressive_title: String,
    /// `"V1: <principal>"`, one decimal
    pub principal: String,
    /// `"V2: <orthogonal>"`, one decimal
    pub orthogonal: String,
    pub before: String,
    pub after: String,
}

impl PlotLabels {
    fn for_orientations(principal: f64, orthogonal: f64) -> Self {
        Self {
            figure_title: FIGURE_TITLE.to_string(),
            histogram_title: HISTOGRAM_TITLE.to_string(),
            progressive_title: PROGRESSIVE_TITLE.to_string(),
            principal: format!("V1: {:.1}", principal),
            orthogonal: format!("V2: {:.1}", orthogonal),
            before: "Before".to_string(),
            after: "After".to_string(),
        }
    }
}

/// Data for the two diagnostic panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationPlot {
    /// Bearing histogram before rotation ("Before")
    pub current_histogram: Histogram,
    /// Bearing histogram after rotation ("After")
    pub rotated_histogram: Histogram,
    /// Progressive vector before rotation
    pub current_progressive: ProgressiveVector,
    /// Progressive vector after rotation
    pub rotated_progressive: ProgressiveVector,
    /// Guide line position for the principal orientation
    pub principal_orientation: f64,
    /// Guide line position for the orthogonal orientation
    pub orthogonal_orientation: f64,
    /// Height of both guide lines (count of the modal bin)
    pub peak_count: u32,
    pub labels: PlotLabels,
}

impl RotationPlot {
    /// Collect the plot data from an estimator result.
    pub fn from_principal_axis(axis: &PrincipalAxis) -> Self {
        let principal = axis.rotation.principal_orientation;
        let orthogonal = axis.rotation.orthogonal_orientation;
        Self {
            current_histogram: axis.current_histogram.clone(),
            rotated_histogram: axis.rotated_histogram.clone(),
            current_progressive: axis.current_progressive.clone(),
            rotated_progressive: axis.rotated_progressive.clone(),
            principal_orientation: principal,
            orthogonal_orientation: orthogonal,
            peak_count: axis.current_histogram.counts[axis.modal_bin],
            labels: PlotLabels::for_orientations(principal, orthogonal),
        }
    }
}

/// Something that can display a [`RotationPlot`].
pub trait RenderSurface {
    type Error;

    fn render(&mut self, plot: &RotationPlot) -> std::result::Result<(), Self::Error>;
}

/// Why [`render_principal_axis`] failed.
#[derive(Debug, Error)]
pub enum RenderError<E> {
    /// The estimator rejected the input
    #[error(transparent)]
    Estimate(#[from] RotationError),
    /// The surface failed to draw
    #[error("Rendering failed: {0}")]
    Surface(E),
}

/// Estimate the principal axis and hand the diagnostics to `surface`.
///
/// Returns the estimator result so callers keep the rotated components.
pub fn render_principal_axis<S: RenderSurface>(
    u: &[f64],
    v: &[f64],
    options: PrincipalAxisOptions,
    surface: &mut S,
) -> std::result::Result<PrincipalAxis, RenderError<S::Error>> {
    let axis = estimate_principal_axis(u, v, options)?;
    let plot = RotationPlot::from_principal_axis(&axis);
    surface.render(&plot).map_err(RenderError::Surface)?;
    Ok(axis)
}
