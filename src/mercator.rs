//! Web-Mercator projection for map overlays.

use crate::errors::GeoError;
use crate::position::Position;

/// Equatorial Earth radius used by Web-Mercator (EPSG:3857), in meters.
pub const EARTH_EQUATORIAL_RADIUS_M: f64 = 6_378_137.0;

/// Project a position onto the Web-Mercator plane, returning `(x, y)` in meters.
///
/// Latitudes at or beyond the poles have no finite projection.
pub fn project_to_plane(position: Position) -> Result<(f64, f64), GeoError> {
    if !(position.lat.abs() < 90.0) {
        return Err(GeoError::PolarLatitude(position.lat));
    }

    let x = position.lng.to_radians() * EARTH_EQUATORIAL_RADIUS_M;
    let y = ((90.0 + position.lat) * std::f64::consts::PI / 360.0).tan().ln()
        * EARTH_EQUATORIAL_RADIUS_M;

    Ok((x, y))
}
