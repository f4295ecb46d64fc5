//! Coordinate and elevation value types.

use serde::{Deserialize, Serialize};

/// A point on the Earth's surface in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for Position {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl From<Position> for (f64, f64) {
    fn from(position: Position) -> Self {
        (position.lat, position.lng)
    }
}

/// Bounding box of a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub northeast: Position,
    pub southwest: Position,
}

/// A height sample along a path.
///
/// Sequences of samples are kept in path traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Elevation {
    pub position: Position,
    /// Height above sea level in meters.
    pub height: f64,
    /// Provider precision at this point in meters.
    pub resolution: f64,
}

impl Elevation {
    pub const fn new(position: Position, height: f64, resolution: f64) -> Self {
        Self {
            position,
            height,
            resolution,
        }
    }
}
