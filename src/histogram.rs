//! Gradient distribution for histogram plots.

use serde::{Deserialize, Serialize};

/// Gradient range shown by default, in percent either side of flat.
pub const DEFAULT_MAX_GRADIENT: f64 = 24.0;

/// Default bin width in percent.
pub const DEFAULT_BIN_WIDTH: f64 = 2.0;

/// Histogram bars: bin `i` spans `left[i]..right[i]` with height `density[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientHistogram {
    pub left: Vec<f64>,
    pub right: Vec<f64>,
    pub density: Vec<f64>,
}

impl GradientHistogram {
    pub fn len(&self) -> usize {
        self.density.len()
    }

    pub fn is_empty(&self) -> bool {
        self.density.is_empty()
    }
}

/// Bins gradients into `step`-wide bins over `-max_gradient..=max_gradient`.
///
/// Two extra bins collect everything below and above the range (infinite
/// gradients included); they are drawn one `step` wide. Counts are divided
/// by `step`. NaN gradients are skipped. Bins are half-open on the right
/// except the upper overflow bin, which also takes `max_gradient` itself.
/// A non-positive `step` or negative `max_gradient` yields an empty histogram.
pub fn gradient_histogram(gradients: &[f64], max_gradient: f64, step: f64) -> GradientHistogram {
    if !(step > 0.0) || !(max_gradient >= 0.0) || !max_gradient.is_finite() {
        return GradientHistogram {
            left: Vec::new(),
            right: Vec::new(),
            density: Vec::new(),
        };
    }

    let inner = ((2.0 * max_gradient) / step + 1e-9).floor() as usize;
    let edges: Vec<f64> = (0..=inner).map(|k| -max_gradient + k as f64 * step).collect();
    let first = edges[0];
    let last = edges[inner];

    let mut left = Vec::with_capacity(inner + 2);
    left.push(first - step);
    left.extend_from_slice(&edges);
    let mut right = Vec::with_capacity(inner + 2);
    right.extend_from_slice(&edges);
    right.push(last + step);

    let mut counts = vec![0usize; inner + 2];
    for &gradient in gradients.iter().filter(|g| !g.is_nan()) {
        let bin = if gradient < first {
            0
        } else if gradient >= last {
            inner + 1
        } else {
            // partition_point finds the first edge above the value
            edges.partition_point(|&edge| edge <= gradient)
        };
        counts[bin] += 1;
    }

    GradientHistogram {
        left,
        right,
        density: counts.into_iter().map(|count| count as f64 / step).collect(),
    }
}
