//! Great-circle geometry used for sequencing decisions.
//!
//! Straight-line distances ignore roads. They drive stop selection because
//! they need no network call; road paths are fetched separately for display.

use serde::{Deserialize, Serialize};

/// Average city driving speed assumption for time estimation.
pub const DEFAULT_SPEED_KMH: f64 = 30.0;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// How close a courier must be to a stop to complete it.
pub const DEFAULT_DELIVERY_RADIUS_M: f64 = 100.0;

/// Minimum movement before a new GPS fix is worth a recomputation.
pub const DEFAULT_RECOMPUTE_DISTANCE_M: f64 = 10.0;

/// A (latitude, longitude) pair in decimal degrees.
///
/// No normalization or range validation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// True when both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Calculate haversine distance between two points in kilometers.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lng = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Convert a distance in km to whole travel minutes at the given speed.
pub fn travel_minutes(km: f64, speed_kmh: f64) -> u32 {
    let hours = km / speed_kmh;
    (hours * 60.0).round() as u32
}

/// Whether `current` lies within `radius_m` meters of `target`.
pub fn is_within_radius(current: Coordinate, target: Coordinate, radius_m: f64) -> bool {
    haversine_km(current, target) * 1000.0 <= radius_m
}

/// Whether a courier moved at least `min_m` meters between two fixes.
pub fn moved_materially(previous: Coordinate, current: Coordinate, min_m: f64) -> bool {
    haversine_km(previous, current) * 1000.0 >= min_m
}
