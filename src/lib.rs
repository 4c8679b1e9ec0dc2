//! courier-sequencer
//!
//! Orders a courier's pending delivery stops into a visit sequence with
//! distance, duration and arrival estimates.

pub mod traits;
pub mod error;
pub mod haversine;
pub mod model;
pub mod sequencer;
pub mod dispatch;
pub mod osrm;
pub mod polyline;
