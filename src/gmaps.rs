//! Google Maps web-service adapter for the provider ports.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::directions::{DirectionsRoute, LatLng};
use crate::errors::ProviderError;
use crate::polyline::Polyline;
use crate::position::Elevation;
use crate::traits::{DirectionsQuery, ElevationProvider, RoutingProvider};

/// Environment variable read by [`GmapsConfig::from_env`].
pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

const DIRECTIONS_PATH: &str = "/maps/api/directions/json";
const ELEVATION_PATH: &str = "/maps/api/elevation/json";

#[derive(Debug, Clone)]
pub struct GmapsConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for GmapsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://maps.googleapis.com".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }
}

impl GmapsConfig {
    pub fn with_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Reads the API key from a file such as `.api-key`.
    pub fn with_key_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let key = std::fs::read_to_string(path)?;
        Ok(Self::with_key(key.trim()))
    }

    pub fn from_env() -> Result<Self, std::env::VarError> {
        std::env::var(API_KEY_ENV).map(|key| Self::with_key(key.trim()))
    }
}

#[derive(Debug, Clone)]
pub struct GmapsClient {
    config: GmapsConfig,
    client: reqwest::blocking::Client,
}

impl GmapsClient {
    pub fn new(config: GmapsConfig) -> Result<Self, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &GmapsConfig {
        &self.config
    }

    fn get<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<T, ProviderError> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);

        let response = self
            .client
            .get(url)
            .query(params)
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().map_err(transport_error)?;
        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.to_string(),
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(|err| ProviderError::Decode(err.to_string()))
    }
}

fn transport_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Transport(err)
    }
}

fn check_status(status: &str, message: Option<String>) -> Result<(), ProviderError> {
    if status == "OK" {
        return Ok(());
    }
    warn!(status, "google maps request rejected");
    Err(ProviderError::Api {
        status: status.to_string(),
        message: message.unwrap_or_default(),
    })
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ElevationResponse {
    status: String,
    #[serde(default)]
    results: Vec<ElevationResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ElevationResult {
    location: LatLng,
    elevation: f64,
    resolution: f64,
}

impl RoutingProvider for GmapsClient {
    fn directions(&self, query: &DirectionsQuery) -> Result<Vec<DirectionsRoute>, ProviderError> {
        let mut params = vec![
            ("origin", query.origin.clone()),
            ("destination", query.destination.clone()),
            ("mode", query.mode.as_str().to_string()),
            ("alternatives", query.alternatives.to_string()),
        ];
        if !query.waypoints.is_empty() {
            let mut waypoints = query.waypoints.join("|");
            if query.optimize_waypoints {
                waypoints.insert_str(0, "optimize:true|");
            }
            params.push(("waypoints", waypoints));
        }

        let body: DirectionsResponse = self.get(DIRECTIONS_PATH, &params)?;
        if body.status == "ZERO_RESULTS" {
            return Ok(Vec::new());
        }
        check_status(&body.status, body.error_message)?;

        debug!(routes = body.routes.len(), "directions received");
        Ok(body.routes)
    }
}

impl ElevationProvider for GmapsClient {
    fn elevation_along_path(&self, path: &Polyline, samples: usize) -> Result<Vec<Elevation>, ProviderError> {
        let params = [
            ("path", format!("enc:{}", path.encode())),
            ("samples", samples.to_string()),
        ];

        let body: ElevationResponse = self.get(ELEVATION_PATH, &params)?;
        check_status(&body.status, body.error_message)?;

        Ok(body
            .results
            .into_iter()
            .map(|r| Elevation::new(r.location.into(), r.elevation, r.resolution))
            .collect())
    }
}
