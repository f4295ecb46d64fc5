//! Distance and gradient between consecutive elevation samples.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::haversine;
use crate::position::{Elevation, Position};

/// The stretch of path between two consecutive elevation samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Position,
    pub end: Position,
    /// Great-circle length in meters.
    pub distance: f64,
    /// Signed height change (end minus start) in meters.
    pub height_diff: f64,
    /// Slope in percent, `100 * height_diff / distance`.
    ///
    /// Coincident samples give a zero distance. The division is left to
    /// IEEE-754, so the gradient is `±inf` (or NaN with no height change).
    pub gradient: f64,
}

impl Segment {
    pub fn between(start: &Elevation, end: &Elevation) -> Self {
        let distance = haversine::distance(start.position, end.position);
        let height_diff = end.height - start.height;

        Self {
            start: start.position,
            end: end.position,
            distance,
            height_diff,
            gradient: 100.0 * height_diff / distance,
        }
    }

    pub fn has_finite_gradient(&self) -> bool {
        self.gradient.is_finite()
    }
}

/// Builds one segment per adjacent pair of samples, in sample order.
///
/// Fewer than two samples yield no segments.
pub fn segments_from_elevations(elevations: &[Elevation]) -> Vec<Segment> {
    let segments: Vec<Segment> = elevations
        .par_windows(2)
        .map(|pair| Segment::between(&pair[0], &pair[1]))
        .collect();

    for (index, segment) in segments.iter().enumerate() {
        if segment.distance == 0.0 {
            warn!(
                index,
                lat = segment.start.lat,
                lng = segment.start.lng,
                gradient = segment.gradient,
                "coincident elevation samples, gradient is not finite"
            );
        }
    }

    segments
}
