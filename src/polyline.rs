//! Polyline representation for drawn route geometries.
//!
//! Points are kept decoded. Routing engines hand back GeoJSON `[lng, lat]`
//! pairs, which are flipped into `Coordinate`s at the boundary.

use serde::{Deserialize, Serialize};

use crate::haversine::{Coordinate, haversine_km};

/// A route geometry as an ordered list of coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Builds a polyline from GeoJSON-ordered `[longitude, latitude]` pairs.
    pub fn from_lng_lat(pairs: &[[f64; 2]]) -> Self {
        Self {
            points: pairs
                .iter()
                .map(|[lng, lat]| Coordinate::new(*lat, *lng))
                .collect(),
        }
    }

    /// Straight segments between waypoints, used when no road path is available.
    pub fn straight_line(waypoints: &[Coordinate]) -> Self {
        Self::new(waypoints.to_vec())
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of great-circle lengths of every segment, in kilometers.
    pub fn length_km(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| haversine_km(pair[0], pair[1]))
            .sum()
    }
}
