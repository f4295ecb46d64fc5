//! Test fixtures for route-gradient.
//!
//! Provides:
//! - A two-leg directions record around Lake Zurich, built with real
//!   encoded step polylines
//! - In-memory routing and elevation providers implementing the ports

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::json;

use route_gradient::directions::DirectionsRoute;
use route_gradient::polyline::{self, Polyline};
use route_gradient::traits::{DirectionsQuery, ElevationProvider, RoutingProvider};
use route_gradient::{Elevation, Position, ProviderError};

pub const ZURICH: Position = Position::new(47.36667, 8.55);
pub const KILCHBERG: Position = Position::new(47.32402, 8.54647);
pub const THALWIL: Position = Position::new(47.29527, 8.56452);
pub const HORGEN: Position = Position::new(47.25984, 8.59762);

pub const LEG_DISTANCES: [u64; 2] = [5_612, 8_104];
pub const LEG_DURATIONS: [u64; 2] = [1_260, 1_745];

/// Directions record as the provider returns it.
pub fn lake_ride_json(summary: &str) -> serde_json::Value {
    json!({
        "summary": summary,
        "copyrights": "Map data ©2024",
        "warnings": [],
        "waypoint_order": [0],
        "bounds": {
            "northeast": {"lat": 47.36667, "lng": 8.59762},
            "southwest": {"lat": 47.25984, "lng": 8.54647}
        },
        "legs": [
            {
                "start_address": "Bellevue, 8001 Zürich, Switzerland",
                "end_address": "Seestrasse, 8802 Kilchberg, Switzerland",
                "distance": {"text": "5.6 km", "value": LEG_DISTANCES[0]},
                "duration": {"text": "21 mins", "value": LEG_DURATIONS[0]},
                "steps": [
                    {
                        "html_instructions": "Head <b>south</b> on <b>Seestrasse</b>",
                        "polyline": {"points": polyline::encode(&[ZURICH, Position::new(47.3451, 8.5362)])},
                        "travel_mode": "BICYCLING"
                    },
                    {
                        "html_instructions": "Continue onto <b>Alte Landstrasse</b>",
                        "polyline": {"points": polyline::encode(&[Position::new(47.3451, 8.5362), KILCHBERG])},
                        "travel_mode": "BICYCLING"
                    }
                ]
            },
            {
                "start_address": "Seestrasse, 8802 Kilchberg, Switzerland",
                "end_address": "Bahnhofstrasse, 8810 Horgen, Switzerland",
                "distance": {"text": "8.1 km", "value": LEG_DISTANCES[1]},
                "duration": {"text": "29 mins", "value": LEG_DURATIONS[1]},
                "steps": [
                    {
                        "html_instructions": "Turn <b>left</b> toward <b>Thalwil</b>",
                        "polyline": {"points": polyline::encode(&[KILCHBERG, THALWIL, HORGEN])},
                        "travel_mode": "BICYCLING"
                    }
                ]
            }
        ]
    })
}

pub fn lake_ride(summary: &str) -> DirectionsRoute {
    serde_json::from_value(lake_ride_json(summary)).expect("fixture parses")
}

/// Routing provider returning fixed records, or always failing.
pub struct FixedRouting {
    pub routes: Vec<DirectionsRoute>,
    pub fail: bool,
}

impl FixedRouting {
    pub fn new(summaries: &[&str]) -> Self {
        Self {
            routes: summaries.iter().map(|s| lake_ride(s)).collect(),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            routes: Vec::new(),
            fail: true,
        }
    }
}

impl RoutingProvider for FixedRouting {
    fn directions(&self, _query: &DirectionsQuery) -> Result<Vec<DirectionsRoute>, ProviderError> {
        if self.fail {
            return Err(ProviderError::Api {
                status: "REQUEST_DENIED".to_string(),
                message: "The provided API key is invalid.".to_string(),
            });
        }
        Ok(self.routes.clone())
    }
}

/// Elevation provider sampling a synthetic hill profile by linear
/// interpolation between the first and last path points.
#[derive(Default)]
pub struct HillProfile {
    pub calls: AtomicUsize,
    pub last_samples: AtomicUsize,
    pub fail: bool,
    /// Calls from this index on fail.
    pub fail_after: Option<usize>,
}

impl HillProfile {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn failing_after(calls: usize) -> Self {
        Self {
            fail_after: Some(calls),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn height_at(i: usize) -> f64 {
        410.0 + 25.0 * (i as f64 / 5.0).sin()
    }
}

impl ElevationProvider for HillProfile {
    fn elevation_along_path(&self, path: &Polyline, samples: usize) -> Result<Vec<Elevation>, ProviderError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.last_samples.store(samples, Ordering::SeqCst);
        if self.fail || self.fail_after.is_some_and(|limit| call >= limit) {
            return Err(ProviderError::Timeout);
        }

        let points = path.points();
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return Ok(Vec::new());
        };
        let span = samples.saturating_sub(1).max(1) as f64;

        Ok((0..samples)
            .map(|i| {
                let t = i as f64 / span;
                let position = Position::new(
                    first.lat + (last.lat - first.lat) * t,
                    first.lng + (last.lng - first.lng) * t,
                );
                Elevation::new(position, Self::height_at(i), 9.5)
            })
            .collect())
    }
}
