//! Encoded polyline codec for route geometries.
//!
//! Routing providers hand out step geometry in the compact polyline format
//! (delta-encoded, 5 decimal places, printable ASCII). Decoding happens when
//! a route is built; encoding happens when a path is sent off for elevation
//! sampling.

use serde::{Deserialize, Serialize};

use crate::errors::PolylineError;
use crate::position::Position;

const PRECISION: f64 = 1e5;
const CHAR_OFFSET: u8 = 63;
const CHUNK_BITS: u32 = 5;
const CHUNK_MASK: i64 = 0x1f;
const CONTINUATION: i64 = 0x20;
const MAX_LAT_E5: i64 = 90 * 100_000;
const MAX_LNG_E5: i64 = 180 * 100_000;

/// A polyline representing a route geometry as decoded coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Position>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<Position>) -> Self {
        Self { points }
    }

    /// Parses an encoded polyline string.
    pub fn decode(encoded: &str) -> Result<Self, PolylineError> {
        decode(encoded).map(Self::new)
    }

    /// Encodes the points back into polyline text.
    pub fn encode(&self) -> String {
        encode(&self.points)
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Position] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Position> {
        self.points
    }
}

/// Encodes positions as a polyline string.
pub fn encode(points: &[Position]) -> String {
    let mut output = String::with_capacity(points.len() * 8);
    let mut prev_lat = 0i64;
    let mut prev_lng = 0i64;

    for point in points {
        let lat = (point.lat * PRECISION).round() as i64;
        let lng = (point.lng * PRECISION).round() as i64;

        encode_value(lat - prev_lat, &mut output);
        encode_value(lng - prev_lng, &mut output);

        prev_lat = lat;
        prev_lng = lng;
    }

    output
}

fn encode_value(value: i64, output: &mut String) {
    let mut bits = if value < 0 { !(value << 1) } else { value << 1 };

    while bits >= CONTINUATION {
        output.push((((bits & CHUNK_MASK) | CONTINUATION) as u8 + CHAR_OFFSET) as char);
        bits >>= CHUNK_BITS;
    }
    output.push((bits as u8 + CHAR_OFFSET) as char);
}

/// Decodes a polyline string into positions.
pub fn decode(encoded: &str) -> Result<Vec<Position>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut offset = 0;
    let mut lat = 0i64;
    let mut lng = 0i64;

    while offset < bytes.len() {
        lat = accumulate(lat, bytes, &mut offset, MAX_LAT_E5)?;
        if offset >= bytes.len() {
            return Err(PolylineError::OddCoordinateCount);
        }
        lng = accumulate(lng, bytes, &mut offset, MAX_LNG_E5)?;

        points.push(Position::new(lat as f64 / PRECISION, lng as f64 / PRECISION));
    }

    Ok(points)
}

/// Adds the next delta to a running coordinate, keeping it within `±limit`.
fn accumulate(total: i64, bytes: &[u8], offset: &mut usize, limit: i64) -> Result<i64, PolylineError> {
    let start = *offset;
    let delta = decode_value(bytes, offset)?;
    total
        .checked_add(delta)
        .filter(|value| value.abs() <= limit)
        .ok_or(PolylineError::OutOfRange { offset: start })
}

fn decode_value(bytes: &[u8], offset: &mut usize) -> Result<i64, PolylineError> {
    let mut result = 0i64;
    let mut shift = 0u32;

    loop {
        let Some(&byte) = bytes.get(*offset) else {
            return Err(PolylineError::Truncated { offset: *offset });
        };
        if !(CHAR_OFFSET..=CHAR_OFFSET + 63).contains(&byte) || shift > 60 {
            return Err(PolylineError::InvalidCharacter {
                offset: *offset,
                byte,
            });
        }
        *offset += 1;

        let chunk = i64::from(byte - CHAR_OFFSET);
        result |= (chunk & CHUNK_MASK) << shift;
        shift += CHUNK_BITS;

        if chunk < CONTINUATION {
            break;
        }
    }

    Ok(if result & 1 != 0 { !(result >> 1) } else { result >> 1 })
}
