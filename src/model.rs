//! Plain delivery stop record.

use serde::{Deserialize, Serialize};

use crate::haversine::Coordinate;
use crate::traits::{Priority, Stop, StopStatus};

/// A stop in the shape the stop data source hands out:
/// `{id, latitude, longitude, priority, status}`.
///
/// `priority` defaults to medium and `status` to pending when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryStop {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: StopStatus,
}

impl DeliveryStop {
    pub fn new(id: impl Into<String>, location: Coordinate) -> Self {
        Self {
            id: id.into(),
            latitude: location.latitude,
            longitude: location.longitude,
            priority: Priority::default(),
            status: StopStatus::default(),
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: StopStatus) -> Self {
        self.status = status;
        self
    }
}

impl Stop for DeliveryStop {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn location(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    fn priority(&self) -> Priority {
        self.priority
    }

    fn status(&self) -> StopStatus {
        self.status
    }
}
