use thiserror::Error;

/// Failures raised by the route model.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("elevation samples must be attached first")]
    ElevationsMissing,

    #[error("routing response contains no legs")]
    NoLegs,

    #[error("step polyline could not be decoded: {0}")]
    Polyline(#[from] PolylineError),

    #[error("requested {requested} elevation samples, the maximum is {max}")]
    TooManySamples { requested: usize, max: usize },

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Failures reported by a routing or elevation provider.
///
/// The core never interprets these, it only hands them back to the caller.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider returned {status}: {message}")]
    Api { status: String, message: String },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider request timed out")]
    Timeout,

    #[error("malformed provider response: {0}")]
    Decode(String),

    #[error("invalid travel mode {0:?} (must be driving, walking or bicycling)")]
    InvalidMode(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolylineError {
    #[error("polyline ends inside a value at byte {offset}")]
    Truncated { offset: usize },

    #[error("invalid polyline byte {byte:#04x} at offset {offset}")]
    InvalidCharacter { offset: usize, byte: u8 },

    #[error("polyline coordinate starting at byte {offset} is outside the globe")]
    OutOfRange { offset: usize },

    #[error("polyline has a latitude without a longitude")]
    OddCoordinateCount,
}

#[derive(Debug, Error, PartialEq)]
pub enum GeoError {
    #[error("latitude {0} has no Mercator projection")]
    PolarLatitude(f64),
}
