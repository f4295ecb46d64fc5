//! Provider ports consumed by the route model.
//!
//! These are intentionally narrow. The core never issues network requests
//! itself; callers plug in a routing and an elevation provider, either the
//! bundled Google Maps adapter or their own.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::directions::DirectionsRoute;
use crate::errors::ProviderError;
use crate::polyline::Polyline;
use crate::position::Elevation;

/// Upper bound on samples per elevation request.
pub const MAX_ELEVATION_SAMPLES: usize = 512;

/// Mode of travel requested from the routing provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Bicycling,
    Driving,
    Walking,
}

impl TravelMode {
    pub const ALL: [TravelMode; 3] = [TravelMode::Bicycling, TravelMode::Driving, TravelMode::Walking];

    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Bicycling => "bicycling",
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TravelMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProviderError::InvalidMode(s.to_string()))
    }
}

/// Parameters of a directions search.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsQuery {
    pub origin: String,
    pub destination: String,
    pub mode: TravelMode,
    pub alternatives: bool,
    pub waypoints: Vec<String>,
    pub optimize_waypoints: bool,
}

impl DirectionsQuery {
    /// A bicycling query asking for alternative routes.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            mode: TravelMode::default(),
            alternatives: true,
            waypoints: Vec::new(),
            optimize_waypoints: false,
        }
    }

    pub fn mode(mut self, mode: TravelMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn alternatives(mut self, alternatives: bool) -> Self {
        self.alternatives = alternatives;
        self
    }

    pub fn waypoints<I, S>(mut self, waypoints: I, optimize: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.waypoints = waypoints.into_iter().map(Into::into).collect();
        self.optimize_waypoints = optimize;
        self
    }
}

/// Returns zero or more candidate routes for a query.
pub trait RoutingProvider {
    fn directions(&self, query: &DirectionsQuery) -> Result<Vec<DirectionsRoute>, ProviderError>;
}

/// Samples heights along a path.
///
/// Implementations return `samples` elevations evenly spaced along `path`,
/// in path order. Callers check `samples` against [`MAX_ELEVATION_SAMPLES`]
/// before calling.
pub trait ElevationProvider {
    fn elevation_along_path(
        &self,
        path: &Polyline,
        samples: usize,
    ) -> Result<Vec<Elevation>, ProviderError>;
}

impl<T: RoutingProvider + ?Sized> RoutingProvider for &T {
    fn directions(&self, query: &DirectionsQuery) -> Result<Vec<DirectionsRoute>, ProviderError> {
        (**self).directions(query)
    }
}

impl<T: ElevationProvider + ?Sized> ElevationProvider for &T {
    fn elevation_along_path(
        &self,
        path: &Polyline,
        samples: usize,
    ) -> Result<Vec<Elevation>, ProviderError> {
        (**self).elevation_along_path(path, samples)
    }
}
