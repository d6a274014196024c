//! Equal-width histograms over angle samples.
//!
//! Bins span the observed data range rather than a fixed `[0, 360)` window.
//! Every bin is half-open `[left, right)` except the last, which also
//! includes its right edge. A single-valued sample set is widened to
//! `value - 0.5 .. value + 0.5` so the bins keep a positive width.

use crate::error::{Result, RotationError};
use serde::{Deserialize, Serialize};

/// Bin counts paired with their edges (`edges.len() == counts.len() + 1`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Number of samples in each bin
    pub counts: Vec<u32>,
    /// Bin edges in ascending order
    pub edges: Vec<f64>,
}

impl Histogram {
    /// Bin `samples` into `bin_count` equal-width bins spanning their range.
    ///
    /// An empty sample set produces all-zero counts over `0.0 .. 1.0`.
    ///
    /// # Errors
    ///
    /// * `InvalidBinCount` if `bin_count` is 0
    /// * `NonFiniteSample` if any sample is NaN or infinite
    pub fn from_samples(samples: &[f64], bin_count: usize) -> Result<Self> {
        if bin_count == 0 {
            return Err(RotationError::InvalidBinCount);
        }
        if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
            return Err(RotationError::NonFiniteSample { index });
        }

        let (first, last) = data_range(samples);
        let edges = linear_edges(first, last, bin_count);
        let mut counts = vec![0u32; bin_count];

        let scale = bin_count as f64 / (last - first);
        for &sample in samples {
            let idx = bin_index(sample, first, scale, &edges);
            counts[idx] += 1;
        }

        Ok(Self { counts, edges })
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of binned samples.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Width of each bin.
    pub fn bin_width(&self) -> f64 {
        match (self.edges.first(), self.edges.last()) {
            (Some(first), Some(last)) if !self.counts.is_empty() => {
                (last - first) / self.counts.len() as f64
            }
            _ => 0.0,
        }
    }

    /// Index of the fullest bin; ties go to the lowest index.
    ///
    /// Returns `None` when the histogram holds no samples.
    pub fn modal_bin(&self) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (i, &count) in self.counts.iter().enumerate() {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((i, count)),
            }
        }
        best.filter(|&(_, count)| count > 0).map(|(i, _)| i)
    }

    /// Count of the fullest bin (0 for an empty histogram).
    pub fn peak_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Left edge of bin `index`.
    pub fn left_edge(&self, index: usize) -> Option<f64> {
        if index < self.counts.len() {
            self.edges.get(index).copied()
        } else {
            None
        }
    }
}

/// Observed `(min, max)`, widened by 0.5 each side when they coincide.
fn data_range(samples: &[f64]) -> (f64, f64) {
    if samples.is_empty() {
        return (0.0, 1.0);
    }

    let (min, max) = samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &s| {
            (lo.min(s), hi.max(s))
        });

    if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}

/// `bin_count + 1` evenly spaced edges with the last pinned to `last`.
fn linear_edges(first: f64, last: f64, bin_count: usize) -> Vec<f64> {
    let step = (last - first) / bin_count as f64;
    let mut edges: Vec<f64> = (0..=bin_count).map(|i| i as f64 * step + first).collect();
    edges[bin_count] = last;
    edges
}

/// Bin for `sample`, corrected against the actual edges.
///
/// The scaled estimate can land one bin off when an edge is not exactly
/// representable; the edge comparison settles it.
fn bin_index(sample: f64, first: f64, scale: f64, edges: &[f64]) -> usize {
    let bin_count = edges.len() - 1;

    let mut idx = (((sample - first) * scale) as usize).min(bin_count - 1);

    if idx > 0 && sample < edges[idx] {
        idx -= 1;
    }
    if idx + 1 < bin_count && sample >= edges[idx + 1] {
        idx += 1;
    }

    idx
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every sample is counted exactly once.
        #[test]
        fn prop_counts_sum_to_samples(
            samples in prop::collection::vec(0.0f64..360.0, 1..200),
            bin_count in 1usize..150,
        ) {
            let hist = Histogram::from_samples(&samples, bin_count).unwrap();
            prop_assert_eq!(hist.total(), samples.len() as u64);
        }

        /// Property: each sample falls inside the edges of some non-empty bin.
        #[test]
        fn prop_edges_are_ascending_and_cover_data(
            samples in prop::collection::vec(0.0f64..360.0, 1..200),
            bin_count in 1usize..150,
        ) {
            let hist = Histogram::from_samples(&samples, bin_count).unwrap();
            prop_assert!(hist.edges.windows(2).all(|w| w[0] <= w[1]));
            let lo = hist.edges[0];
            let hi = hist.edges[bin_count];
            for &s in &samples {
                prop_assert!(s >= lo && s <= hi);
            }
        }

        /// Property: the modal bin holds the peak count and no earlier bin ties it.
        #[test]
        fn prop_modal_bin_is_first_maximum(
            samples in prop::collection::vec(0.0f64..360.0, 1..200),
            bin_count in 1usize..150,
        ) {
            let hist = Histogram::from_samples(&samples, bin_count).unwrap();
            let modal = hist.modal_bin().unwrap();
            prop_assert_eq!(hist.counts[modal], hist.peak_count());
            prop_assert!(hist.counts[..modal].iter().all(|&c| c < hist.peak_count()));
        }
    }
}
