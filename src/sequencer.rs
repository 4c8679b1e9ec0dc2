//! Route sequencer: greedy nearest-neighbor with priority weighting.
//!
//! From the current point, the next stop is the remaining one with the
//! smallest `distance / priority weight`. Ties go to the stop met first in
//! the candidate order. O(n²), which is fine for a single courier's stops.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::RoutingError;
use crate::haversine::{Coordinate, DEFAULT_SPEED_KMH, haversine_km, travel_minutes};
use crate::traits::Stop;

/// Default seed radius for `group_nearby`.
pub const DEFAULT_GROUP_RADIUS_KM: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct SequenceOptions {
    /// Assumed average travel speed in km/h for duration estimates.
    pub average_speed_kmh: f64,
}

impl Default for SequenceOptions {
    fn default() -> Self {
        Self {
            average_speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl SequenceOptions {
    /// Options with a custom average speed, which must be finite and positive.
    pub fn with_speed(average_speed_kmh: f64) -> Result<Self, RoutingError> {
        if !is_valid_speed(average_speed_kmh) {
            return Err(RoutingError::InvalidConfig(format!(
                "average speed must be finite and positive, got {} km/h",
                average_speed_kmh
            )));
        }

        Ok(Self { average_speed_kmh })
    }
}

/// One scheduled visit. Borrows the stop it represents.
#[derive(Debug)]
pub struct RouteStep<'a, S> {
    pub stop: &'a S,
    /// 1-based position in the route.
    pub order: usize,
    /// Great-circle distance from the previous step (or the route start).
    pub distance_from_previous_km: f64,
    pub estimated_duration_minutes: u32,
}

impl<S> Clone for RouteStep<'_, S> {
    fn clone(&self) -> Self {
        Self {
            stop: self.stop,
            order: self.order,
            distance_from_previous_km: self.distance_from_previous_km,
            estimated_duration_minutes: self.estimated_duration_minutes,
        }
    }
}

/// A computed visit order for one courier.
///
/// Routes are never patched: completing a stop produces a new route through
/// `recompute`. All totals are derived from the steps on each call.
#[derive(Debug)]
pub struct Route<'a, S> {
    start: Coordinate,
    computed_at: DateTime<Utc>,
    steps: Vec<RouteStep<'a, S>>,
}

impl<S> Clone for Route<'_, S> {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            computed_at: self.computed_at,
            steps: self.steps.clone(),
        }
    }
}

/// Aggregate figures for a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStats {
    pub total_distance_km: f64,
    pub total_duration_minutes: u32,
    pub estimated_arrival: DateTime<Utc>,
}

/// Serializable snapshot of a route, keyed by stop id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan<I> {
    pub stops: Vec<PlannedStop<I>>,
    pub total_distance_km: f64,
    pub total_duration_minutes: u32,
    pub estimated_arrival: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedStop<I> {
    pub stop_id: I,
    pub order: usize,
    pub distance_from_previous_km: f64,
    pub estimated_duration_minutes: u32,
}

impl<'a, S: Stop> Route<'a, S> {
    /// Location the first step is measured from.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn computed_at(&self) -> DateTime<Utc> {
        self.computed_at
    }

    pub fn steps(&self) -> &[RouteStep<'a, S>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Stops in visit order.
    pub fn stops(&self) -> impl Iterator<Item = &'a S> + '_ {
        self.steps.iter().map(|step| step.stop)
    }

    /// Unrounded sum of every step's distance.
    pub fn raw_total_distance_km(&self) -> f64 {
        self.steps.iter().map(|step| step.distance_from_previous_km).sum()
    }

    /// Total distance rounded to two decimals.
    pub fn total_distance_km(&self) -> f64 {
        round_to_cents(self.raw_total_distance_km())
    }

    /// Sum of step durations, saturating at `u32::MAX`.
    pub fn total_duration_minutes(&self) -> u32 {
        self.steps
            .iter()
            .fold(0u32, |total, step| {
                total.saturating_add(step.estimated_duration_minutes)
            })
    }

    pub fn estimated_arrival(&self) -> DateTime<Utc> {
        self.computed_at + Duration::minutes(i64::from(self.total_duration_minutes()))
    }

    /// Route start followed by every stop location, in visit order.
    pub fn waypoints(&self) -> Vec<Coordinate> {
        std::iter::once(self.start)
            .chain(self.steps.iter().map(|step| step.stop.location()))
            .collect()
    }

    pub fn stats(&self) -> RouteStats {
        RouteStats {
            total_distance_km: self.total_distance_km(),
            total_duration_minutes: self.total_duration_minutes(),
            estimated_arrival: self.estimated_arrival(),
        }
    }

    pub fn to_plan(&self) -> RoutePlan<S::Id> {
        RoutePlan {
            stops: self
                .steps
                .iter()
                .map(|step| PlannedStop {
                    stop_id: step.stop.id().clone(),
                    order: step.order,
                    distance_from_previous_km: step.distance_from_previous_km,
                    estimated_duration_minutes: step.estimated_duration_minutes,
                })
                .collect(),
            total_distance_km: self.total_distance_km(),
            total_duration_minutes: self.total_duration_minutes(),
            estimated_arrival: self.estimated_arrival(),
        }
    }
}

/// Sequence `stops` starting from `start`, stamped with the current time.
///
/// Every stop passed in is treated as eligible; filtering out delivered or
/// cancelled stops is the caller's job. The input slice is never modified.
pub fn sequence<'a, S: Stop>(
    start: Coordinate,
    stops: &'a [S],
    options: &SequenceOptions,
) -> Route<'a, S> {
    sequence_at(start, stops, options, Utc::now())
}

/// Same as `sequence`, with an explicit computation instant.
pub fn sequence_at<'a, S: Stop>(
    start: Coordinate,
    stops: &'a [S],
    options: &SequenceOptions,
    now: DateTime<Utc>,
) -> Route<'a, S> {
    sequence_refs(start, stops.iter().collect(), options, now)
}

/// Drop the completed stop and re-sequence what is left from `current_location`.
///
/// An id that is not in the route is not an error: the remaining stops are
/// re-sequenced as they are.
pub fn recompute<'a, S: Stop>(
    route: &Route<'a, S>,
    completed: &S::Id,
    current_location: Coordinate,
    options: &SequenceOptions,
) -> Route<'a, S> {
    recompute_at(route, completed, current_location, options, Utc::now())
}

/// Same as `recompute`, with an explicit computation instant.
pub fn recompute_at<'a, S: Stop>(
    route: &Route<'a, S>,
    completed: &S::Id,
    current_location: Coordinate,
    options: &SequenceOptions,
    now: DateTime<Utc>,
) -> Route<'a, S> {
    let remaining: Vec<&'a S> = route
        .stops()
        .filter(|stop| stop.id() != completed)
        .collect();

    if remaining.len() == route.len() {
        debug!(
            stops = remaining.len(),
            "completed stop not in route, re-sequencing remaining stops"
        );
    }

    sequence_refs(current_location, remaining, options, now)
}

/// First step, by order, whose stop still needs a visit.
pub fn next_stop<'r, 'a, S: Stop>(route: &'r Route<'a, S>) -> Option<&'r RouteStep<'a, S>> {
    route
        .steps
        .iter()
        .filter(|step| step.stop.status().is_active())
        .min_by_key(|step| step.order)
}

/// Greedy seed-relative grouping.
///
/// Walking the stops in input order, each stop not yet grouped seeds a new
/// group and pulls in every later ungrouped stop within `max_distance_km` of
/// the seed. Membership is measured from the seed only, so two stops close
/// to each other can still land in different groups.
pub fn group_nearby<'a, S: Stop>(stops: &'a [S], max_distance_km: f64) -> Vec<Vec<&'a S>> {
    let mut grouped = vec![false; stops.len()];
    let mut groups = Vec::new();

    for (seed_index, seed) in stops.iter().enumerate() {
        if grouped[seed_index] {
            continue;
        }
        grouped[seed_index] = true;

        let seed_location = seed.location();
        let mut group = vec![seed];

        for (index, other) in stops.iter().enumerate().skip(seed_index + 1) {
            if grouped[index] {
                continue;
            }
            if haversine_km(seed_location, other.location()) <= max_distance_km {
                grouped[index] = true;
                group.push(other);
            }
        }

        groups.push(group);
    }

    groups
}

pub(crate) fn sequence_refs<'a, S: Stop>(
    start: Coordinate,
    candidates: Vec<&'a S>,
    options: &SequenceOptions,
    now: DateTime<Utc>,
) -> Route<'a, S> {
    debug_assert!(start.is_finite(), "start location must be finite, got {:?}", start);
    debug_assert!(
        candidates.iter().all(|stop| stop.location().is_finite()),
        "stop locations must be finite"
    );
    debug_assert!(
        is_valid_speed(options.average_speed_kmh),
        "average speed must be finite and positive, got {}",
        options.average_speed_kmh
    );

    // Indices into `candidates`, kept in candidate order for tie-breaking.
    let mut remaining: Vec<usize> = (0..candidates.len()).collect();
    let mut steps = Vec::with_capacity(candidates.len());
    let mut current = start;

    while !remaining.is_empty() {
        let (position, distance) = select_next(current, &candidates, &remaining);
        let stop = candidates[remaining.remove(position)];
        let order = steps.len() + 1;

        trace!(order, distance_km = distance, "selected next stop");

        steps.push(RouteStep {
            stop,
            order,
            distance_from_previous_km: distance,
            estimated_duration_minutes: travel_minutes(distance, options.average_speed_kmh),
        });
        current = stop.location();
    }

    let route = Route {
        start,
        computed_at: now,
        steps,
    };

    debug!(
        stops = route.len(),
        total_distance_km = route.total_distance_km(),
        total_duration_minutes = route.total_duration_minutes(),
        "sequenced route"
    );

    route
}

/// Position within `remaining` of the best next stop, with its true distance.
///
/// `remaining` must be non-empty. A non-finite score never wins over the
/// first candidate, so selection always makes progress.
fn select_next<S: Stop>(
    current: Coordinate,
    candidates: &[&S],
    remaining: &[usize],
) -> (usize, f64) {
    let mut best_position = 0;
    let mut best_distance = haversine_km(current, candidates[remaining[0]].location());
    let mut best_score = best_distance / candidates[remaining[0]].priority().weight();

    for (position, &index) in remaining.iter().enumerate().skip(1) {
        let stop = candidates[index];
        let distance = haversine_km(current, stop.location());
        let score = distance / stop.priority().weight();

        if score < best_score {
            best_position = position;
            best_distance = distance;
            best_score = score;
        }
    }

    (best_position, best_distance)
}

fn is_valid_speed(speed_kmh: f64) -> bool {
    speed_kmh.is_finite() && speed_kmh > 0.0
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
