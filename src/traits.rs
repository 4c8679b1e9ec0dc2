//! Core domain traits for route sequencing.
//!
//! These are intentionally minimal. Apps with their own delivery models
//! implement `Stop` for them; `model::DeliveryStop` covers the plain case.

use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::RoutingError;
use crate::haversine::Coordinate;
use crate::polyline::Polyline;

/// Unique identifier for sequenced entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// A single delivery destination awaiting a courier.
pub trait Stop {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Destination coordinates.
    fn location(&self) -> Coordinate;

    fn priority(&self) -> Priority;

    /// Current lifecycle status. Read on every `next_stop` call, so
    /// implementations backed by shared state see live updates.
    fn status(&self) -> StopStatus;
}

/// Delivery priority used to bias stop selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Divisor applied to the true distance. A larger weight makes the stop
    /// look closer than it is.
    pub fn weight(self) -> f64 {
        match self {
            Priority::High => 1.5,
            Priority::Medium => 1.0,
            Priority::Low => 0.8,
        }
    }
}

/// Lifecycle status of a stop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopStatus {
    #[default]
    Pending,
    #[serde(alias = "collected", alias = "in_transit")]
    InProgress,
    Delivered,
    Failed,
    Cancelled,
}

impl StopStatus {
    /// Whether a stop in this status still needs a visit.
    pub fn is_active(self) -> bool {
        matches!(self, StopStatus::Pending | StopStatus::InProgress)
    }
}

/// Street-level path between waypoints, for display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadPath {
    pub polyline: Polyline,
    /// Road distance in kilometers.
    pub distance_km: f64,
    /// Road travel time in minutes.
    pub duration_minutes: u32,
}

impl RoadPath {
    /// A path with no travel, drawn through the given points.
    pub fn stationary(points: &[Coordinate]) -> Self {
        Self {
            polyline: Polyline::new(points.to_vec()),
            distance_km: 0.0,
            duration_minutes: 0,
        }
    }
}

/// Provides road-network paths through an ordered list of waypoints.
///
/// Sequencing never consults this; it backs the drawn route only.
pub trait RoadPathProvider {
    fn road_path(&self, waypoints: &[Coordinate]) -> Result<RoadPath, RoutingError>;
}
