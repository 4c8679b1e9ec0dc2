//! Fleet-level sequencing.
//!
//! The caller side of the sequencer: filters stops down to the ones still
//! needing a visit, carries the courier context explicitly, and sequences
//! many couriers at once. Each courier's computation is independent.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::haversine::Coordinate;
use crate::sequencer::{Route, SequenceOptions, sequence_refs};
use crate::traits::{Id, Stop, StopStatus};

/// Who is sequencing, and from where.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourierContext<C> {
    pub courier_id: C,
    /// Last known position of the courier.
    pub location: Coordinate,
}

/// A courier together with every stop assigned to them, finished or not.
#[derive(Debug)]
pub struct CourierAssignment<'a, C, S> {
    pub courier: CourierContext<C>,
    pub stops: &'a [S],
}

#[derive(Debug)]
pub struct CourierRoute<'a, C, S> {
    pub courier_id: C,
    pub route: Route<'a, S>,
}

/// Completion figures for a set of assigned stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteProgress {
    pub total: usize,
    pub delivered: usize,
    pub remaining: usize,
    /// Delivered share of all stops, 0-100. Zero when there are no stops.
    pub percent_complete: f64,
}

impl RouteProgress {
    pub fn from_stops<S: Stop>(stops: &[S]) -> Self {
        let total = stops.len();
        let delivered = stops
            .iter()
            .filter(|stop| stop.status() == StopStatus::Delivered)
            .count();
        let remaining = stops.iter().filter(|stop| stop.status().is_active()).count();
        let percent_complete = if total > 0 {
            delivered as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total,
            delivered,
            remaining,
            percent_complete,
        }
    }
}

/// Stops that still need a visit, in input order.
pub fn eligible_stops<S: Stop>(stops: &[S]) -> Vec<&S> {
    stops.iter().filter(|stop| stop.status().is_active()).collect()
}

/// Sequence one courier's active stops from their current location.
pub fn sequence_courier<'a, C, S>(
    courier: &CourierContext<C>,
    stops: &'a [S],
    options: &SequenceOptions,
    now: DateTime<Utc>,
) -> Route<'a, S>
where
    S: Stop,
{
    sequence_refs(courier.location, eligible_stops(stops), options, now)
}

/// Sequence every assignment in parallel. Results keep the input order.
pub fn sequence_fleet<'a, C, S>(
    assignments: &[CourierAssignment<'a, C, S>],
    options: &SequenceOptions,
    now: DateTime<Utc>,
) -> Vec<CourierRoute<'a, C, S>>
where
    C: Id + Send + Sync,
    S: Stop + Sync,
{
    debug!(couriers = assignments.len(), "sequencing fleet");

    assignments
        .par_iter()
        .map(|assignment| CourierRoute {
            courier_id: assignment.courier.courier_id.clone(),
            route: sequence_courier(&assignment.courier, assignment.stops, options, now),
        })
        .collect()
}
