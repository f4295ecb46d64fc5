//! Typed schema of a routing-provider directions record.
//!
//! Mirrors the subset of the Google Directions route object the route model
//! reads. Unknown fields are ignored.

use serde::{Deserialize, Serialize};

use crate::errors::RouteError;
use crate::position::{Bounds, Position};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsRoute {
    #[serde(default)]
    pub summary: String,
    pub legs: Vec<Leg>,
    #[serde(default)]
    pub waypoint_order: Vec<usize>,
    pub bounds: LatLngBounds,
}

impl DirectionsRoute {
    /// Checks the record is usable for building a route.
    pub fn validate(&self) -> Result<(), RouteError> {
        if self.legs.is_empty() {
            return Err(RouteError::NoLegs);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    #[serde(default)]
    pub start_address: String,
    #[serde(default)]
    pub end_address: String,
    pub duration: TextValue,
    pub distance: TextValue,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// A quantity with its human-readable rendering, e.g. `{"text": "5 km", "value": 5012}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextValue {
    #[serde(default)]
    pub text: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub html_instructions: String,
    pub polyline: EncodedPolyline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedPolyline {
    pub points: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<LatLng> for Position {
    fn from(latlng: LatLng) -> Self {
        Position::new(latlng.lat, latlng.lng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub northeast: LatLng,
    pub southwest: LatLng,
}

impl From<LatLngBounds> for Bounds {
    fn from(bounds: LatLngBounds) -> Self {
        Bounds {
            northeast: bounds.northeast.into(),
            southwest: bounds.southwest.into(),
        }
    }
}
