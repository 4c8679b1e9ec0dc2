//! Error types for the routing-engine boundary.
//!
//! Sequencing itself is infallible; only road-path lookups and
//! configuration checks can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("routing engine request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("routing engine response could not be parsed: {0}")]
    Json(#[from] serde_json::Error),

    /// The engine answered but reported a failure code.
    #[error("routing engine returned {code}: {message}")]
    Engine { code: String, message: String },

    #[error("routing engine found no route")]
    NoRoute,

    #[error("invalid routing configuration: {0}")]
    InvalidConfig(String),
}
