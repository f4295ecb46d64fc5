//! route-gradient core
//!
//! Turns routing-provider responses and elevation samples into per-segment
//! distance, height difference and gradient, ready for plotting.

pub mod errors;
pub mod traits;
pub mod position;
pub mod haversine;
pub mod mercator;
pub mod polyline;
pub mod segment;
pub mod histogram;
pub mod directions;
pub mod route;
pub mod search;
pub mod gmaps;

pub use errors::{GeoError, PolylineError, ProviderError, RouteError};
pub use position::{Bounds, Elevation, Position};
pub use route::Route;
pub use segment::Segment;
pub use traits::{ElevationProvider, RoutingProvider, TravelMode};
