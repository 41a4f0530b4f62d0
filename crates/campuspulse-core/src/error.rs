// Rust guideline compliant 2026-10-16

//! Error types for the CampusPulse core library.

use thiserror::Error;

/// Result type alias for CampusPulse operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for CampusPulse operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid issue data.
    #[error("Invalid issue: {0}")]
    InvalidIssue(String),

    /// Text that does not name a known category, stress level, priority or status.
    #[error("Invalid {kind}: {value}")]
    InvalidValue {
        /// Kind of value being parsed (e.g. "category").
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// Issue not found.
    #[error("Issue not found: {0}")]
    NotFound(String),

    /// Invalid status transition.
    #[error("Invalid status transition: {0}")]
    InvalidTransition(String),

    /// Ambiguous partial ID.
    #[error("Ambiguous ID: {0} matches {1:?}")]
    AmbiguousId(String, Vec<String>),

    /// Invalid configuration.
    #[error("Invalid config: {0}")]
    Config(String),
}
