//! Route model built from a single directions record.
//!
//! A `Route` is immutable apart from its elevation profile: samples are
//! attached once they have been fetched, and segments are derived from them
//! on first use and cached until new samples replace them.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::directions::DirectionsRoute;
use crate::errors::{GeoError, RouteError};
use crate::histogram::{self, DEFAULT_BIN_WIDTH, GradientHistogram};
use crate::mercator;
use crate::polyline::Polyline;
use crate::position::{Bounds, Elevation, Position};
use crate::segment::{self, Segment};
use crate::traits::{ElevationProvider, MAX_ELEVATION_SAMPLES, TravelMode};

/// Target spacing between elevation samples when no count is given, in meters.
const DEFAULT_SAMPLE_SPACING_M: u64 = 30;

/// Height against cumulative distance, one entry per elevation sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElevationSeries {
    pub distance: Vec<f64>,
    pub height: Vec<f64>,
}

/// Gradient against cumulative distance at each segment's end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientSeries {
    pub distance: Vec<f64>,
    pub gradient: Vec<f64>,
}

/// Route path projected to Web-Mercator meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct Route {
    summary: String,
    origin: String,
    destination: String,
    waypoint_order: Vec<usize>,
    mode: TravelMode,
    path: Polyline,
    bounds: Bounds,
    /// Meters.
    distance: u64,
    /// Seconds.
    duration: u64,
    instructions: Vec<String>,
    elevations: Option<Vec<Elevation>>,
    segments: Option<Vec<Segment>>,
}

impl Route {
    /// Builds a route from a directions record, keeping leg and step order.
    pub fn new(response: DirectionsRoute, mode: TravelMode) -> Result<Self, RouteError> {
        response.validate()?;

        let mut coordinates = Vec::new();
        let mut instructions = Vec::new();
        let mut distance = 0;
        let mut duration = 0;

        for leg in &response.legs {
            distance += leg.distance.value;
            duration += leg.duration.value;
            for step in &leg.steps {
                coordinates.extend(Polyline::decode(&step.polyline.points)?.into_points());
                instructions.push(step.html_instructions.clone());
            }
        }

        let DirectionsRoute {
            summary,
            legs,
            waypoint_order,
            bounds,
        } = response;
        let (origin, destination) = match (legs.first(), legs.last()) {
            (Some(first), Some(last)) => (first.start_address.clone(), last.end_address.clone()),
            _ => return Err(RouteError::NoLegs),
        };

        debug!(
            %mode,
            summary = %summary,
            legs = legs.len(),
            steps = instructions.len(),
            points = coordinates.len(),
            distance,
            duration,
            "built route"
        );

        Ok(Self {
            summary,
            origin,
            destination,
            waypoint_order,
            mode,
            path: Polyline::new(coordinates),
            bounds: bounds.into(),
            distance,
            duration,
            instructions,
            elevations: None,
            segments: None,
        })
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn waypoint_order(&self) -> &[usize] {
        &self.waypoint_order
    }

    pub fn mode(&self) -> TravelMode {
        self.mode
    }

    /// Decoded path across every step of every leg.
    pub fn path(&self) -> &Polyline {
        &self.path
    }

    pub fn coordinates(&self) -> &[Position] {
        self.path.points()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Total length in meters.
    pub fn distance(&self) -> u64 {
        self.distance
    }

    /// Total travel time in seconds.
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// One instruction per step, in travel order.
    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    pub fn instructions_text(&self) -> String {
        self.instructions.join("<br>")
    }

    pub fn elevations(&self) -> Option<&[Elevation]> {
        self.elevations.as_deref()
    }

    /// Segments derived so far, if any.
    pub fn segments(&self) -> Option<&[Segment]> {
        self.segments.as_deref()
    }

    /// Short label for picking between alternative routes.
    pub fn label(&self) -> String {
        format!("via {} ({} minutes)", self.summary, self.minutes())
    }

    /// Roughly one sample every 30 m, capped at the provider limit.
    pub fn default_sample_count(&self) -> usize {
        let samples = usize::try_from(self.distance / DEFAULT_SAMPLE_SPACING_M).unwrap_or(usize::MAX);
        samples.clamp(2, MAX_ELEVATION_SAMPLES)
    }

    /// Stores elevation samples, dropping any segments derived from older ones.
    pub fn attach_elevations(&mut self, elevations: Vec<Elevation>) {
        self.elevations = Some(elevations);
        self.segments = None;
    }

    /// Drops attached elevations and any segments derived from them.
    pub fn clear_profile(&mut self) {
        self.elevations = None;
        self.segments = None;
    }

    /// Samples heights along the route path and attaches them.
    ///
    /// Counts above [`MAX_ELEVATION_SAMPLES`] are rejected before the
    /// provider is asked.
    pub fn fetch_elevations<E>(&mut self, provider: &E, samples: Option<usize>) -> Result<(), RouteError>
    where
        E: ElevationProvider + ?Sized,
    {
        let samples = samples.unwrap_or_else(|| self.default_sample_count());
        if samples > MAX_ELEVATION_SAMPLES {
            return Err(RouteError::TooManySamples {
                requested: samples,
                max: MAX_ELEVATION_SAMPLES,
            });
        }

        debug!(samples, path_points = self.path.points().len(), "requesting elevations");
        let elevations = provider.elevation_along_path(&self.path, samples)?;
        self.attach_elevations(elevations);
        Ok(())
    }

    /// Computes segments from the attached elevations.
    ///
    /// Recomputes on every call; the result only depends on the samples.
    pub fn derive_segments(&mut self) -> Result<&[Segment], RouteError> {
        let elevations = self.elevations.as_deref().ok_or(RouteError::ElevationsMissing)?;
        let segments = self.segments.insert(segment::segments_from_elevations(elevations));
        Ok(segments.as_slice())
    }

    fn ensure_segments(&mut self) -> Result<(), RouteError> {
        if self.segments.is_none() {
            self.derive_segments()?;
        }
        Ok(())
    }

    fn profile(&mut self) -> Result<(&[Elevation], &[Segment]), RouteError> {
        self.ensure_segments()?;
        match (self.elevations.as_deref(), self.segments.as_deref()) {
            (Some(elevations), Some(segments)) => Ok((elevations, segments)),
            _ => Err(RouteError::ElevationsMissing),
        }
    }

    /// Height at each sample against distance travelled, starting at 0.
    pub fn elevation_series(&mut self) -> Result<ElevationSeries, RouteError> {
        let (elevations, segments) = self.profile()?;

        let distance = std::iter::once(0.0)
            .chain(cumulative(segments))
            .take(elevations.len())
            .collect();
        let height = elevations.iter().map(|e| e.height).collect();

        Ok(ElevationSeries { distance, height })
    }

    /// Gradient of each segment against distance travelled at its end.
    pub fn gradient_series(&mut self) -> Result<GradientSeries, RouteError> {
        let (_, segments) = self.profile()?;

        Ok(GradientSeries {
            distance: cumulative(segments).collect(),
            gradient: segments.iter().map(|s| s.gradient).collect(),
        })
    }

    /// Gradient distribution in 2% bins over `-max_gradient..=max_gradient`.
    pub fn gradient_histogram(&mut self, max_gradient: f64) -> Result<GradientHistogram, RouteError> {
        let series = self.gradient_series()?;
        Ok(histogram::gradient_histogram(&series.gradient, max_gradient, DEFAULT_BIN_WIDTH))
    }

    /// Path projected for drawing over map tiles.
    pub fn map_series(&self) -> Result<MapSeries, GeoError> {
        let points = self.path.points();
        let mut x = Vec::with_capacity(points.len());
        let mut y = Vec::with_capacity(points.len());
        for position in points {
            let (px, py) = mercator::project_to_plane(*position)?;
            x.push(px);
            y.push(py);
        }
        Ok(MapSeries { x, y })
    }

    fn minutes(&self) -> u64 {
        ((self.duration as f64 / 60.0).round() as u64).max(1)
    }
}

fn cumulative(segments: &[Segment]) -> impl Iterator<Item = f64> + '_ {
    segments.iter().scan(0.0, |total, segment| {
        *total += segment.distance;
        Some(*total)
    })
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = self.mode.as_str();
        let mut chars = mode.chars();
        let mode: String = chars
            .next()
            .map(|first| first.to_ascii_uppercase())
            .into_iter()
            .chain(chars)
            .collect();

        writeln!(
            f,
            "{} route from {} to {} via {}",
            mode, self.origin, self.destination, self.summary
        )?;
        write!(
            f,
            "{:.1} kilometers in {} minutes",
            self.distance as f64 / 1000.0,
            self.minutes()
        )
    }
}
