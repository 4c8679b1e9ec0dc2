//! Test fixtures for courier-sequencer.
//!
//! Provides realistic test data including:
//! - Registro (SP) delivery locations
//! - A builder for test stops

pub mod registro_locations;

use std::cell::Cell;

use courier_sequencer::haversine::Coordinate;
use courier_sequencer::traits::{Priority, Stop, StopStatus};

pub use registro_locations::*;

#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct TestId(pub String);

impl TestId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Builder for test stops with sensible defaults.
///
/// Status sits in a `Cell` so tests can complete a stop while a route
/// still borrows it.
#[derive(Clone, Debug)]
pub struct TestStop {
    pub id: TestId,
    pub location: Coordinate,
    pub priority: Priority,
    pub status: Cell<StopStatus>,
}

impl TestStop {
    pub fn new(id: &str) -> Self {
        Self {
            id: TestId::new(id),
            location: Coordinate::new(0.0, 0.0),
            priority: Priority::Medium,
            status: Cell::new(StopStatus::Pending),
        }
    }

    pub fn at(id: &str, location: &Location) -> Self {
        Self::new(id).location(location.lat, location.lng)
    }

    pub fn location(mut self, lat: f64, lng: f64) -> Self {
        self.location = Coordinate::new(lat, lng);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn status(self, status: StopStatus) -> Self {
        self.status.set(status);
        self
    }

    pub fn complete(&self) {
        self.status.set(StopStatus::Delivered);
    }
}

impl Stop for TestStop {
    type Id = TestId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn location(&self) -> Coordinate {
        self.location
    }

    fn priority(&self) -> Priority {
        self.priority
    }

    fn status(&self) -> StopStatus {
        self.status.get()
    }
}

/// Stop ids of a sequence of stops, in order.
pub fn ids<'a>(stops: impl Iterator<Item = &'a TestStop>) -> Vec<&'a str> {
    stops.map(|stop| stop.id.0.as_str()).collect()
}
