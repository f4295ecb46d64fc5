//! Great-circle distance between two positions.
//!
//! Uses the haversine formula on a spherical Earth. Good to a few tenths of
//! a percent, which is well inside elevation-sample spacing.

use crate::position::Position;

/// Mean Earth radius in meters.
pub const EARTH_MEAN_RADIUS_M: f64 = 6_371_000.0;

/// Calculate haversine distance between two points in meters.
pub fn distance(from: Position, to: Position) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for antipodal points.
    let c = 2.0 * a.sqrt().clamp(-1.0, 1.0).asin();

    EARTH_MEAN_RADIUS_M * c
}
