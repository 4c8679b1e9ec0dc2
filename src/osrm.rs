//! OSRM HTTP adapter for drawn road paths.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::RoutingError;
use crate::haversine::Coordinate;
use crate::polyline::Polyline;
use crate::traits::{RoadPath, RoadPathProvider};

#[derive(Debug, Clone, PartialEq)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://router.project-osrm.org".to_string(),
            profile: "driving".to_string(),
            timeout_secs: 10,
        }
    }
}

impl OsrmConfig {
    /// Load from `OSRM_BASE_URL`, `OSRM_PROFILE` and `OSRM_TIMEOUT_SECS`,
    /// falling back to defaults for unset keys.
    pub fn from_env() -> Result<Self, RoutingError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, RoutingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = lookup("OSRM_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);
        let profile = lookup("OSRM_PROFILE").unwrap_or(defaults.profile);
        let timeout_secs = match lookup("OSRM_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                RoutingError::InvalidConfig(format!(
                    "OSRM_TIMEOUT_SECS must be a whole number of seconds, got {:?}",
                    raw
                ))
            })?,
            None => defaults.timeout_secs,
        };

        if timeout_secs == 0 {
            return Err(RoutingError::InvalidConfig(
                "OSRM_TIMEOUT_SECS must be positive".to_string(),
            ));
        }

        Ok(Self {
            base_url,
            profile,
            timeout_secs,
        })
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, RoutingError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn route_url(&self, waypoints: &[Coordinate]) -> String {
        let coords = waypoints
            .iter()
            .map(|point| format!("{:.6},{:.6}", point.longitude, point.latitude))
            .collect::<Vec<_>>()
            .join(";");

        format!(
            "{}/route/v1/{}/{}?overview=full&geometries=geojson",
            self.config.base_url, self.config.profile, coords
        )
    }
}

impl RoadPathProvider for OsrmClient {
    fn road_path(&self, waypoints: &[Coordinate]) -> Result<RoadPath, RoutingError> {
        if waypoints.len() < 2 {
            return Ok(RoadPath::stationary(waypoints));
        }

        let url = self.route_url(waypoints);
        debug!(waypoints = waypoints.len(), "requesting road path");

        // OSRM reports failures as JSON bodies with non-2xx statuses, so the
        // body is parsed before the status is considered.
        let body = self.client.get(url).send()?.text()?;

        parse_route_response(&body).inspect_err(|err| {
            warn!(error = %err, "road path lookup failed");
        })
    }
}

/// Parse an OSRM `route` service response body.
pub fn parse_route_response(body: &str) -> Result<RoadPath, RoutingError> {
    let response: OsrmRouteResponse = serde_json::from_str(body)?;

    if response.code != "Ok" {
        return Err(RoutingError::Engine {
            code: response.code,
            message: response.message.unwrap_or_default(),
        });
    }

    let route = response.routes.into_iter().next().ok_or(RoutingError::NoRoute)?;

    Ok(RoadPath {
        polyline: Polyline::from_lng_lat(&route.geometry.coordinates),
        distance_km: route.distance / 1000.0,
        duration_minutes: (route.duration / 60.0).round() as u32,
    })
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    /// Meters.
    distance: f64,
    /// Seconds.
    duration: f64,
    geometry: OsrmGeometry,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}
