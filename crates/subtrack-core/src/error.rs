//! Error types for SubTrack core operations.
//!
//! Domain computations (renewal, stats, filtering, export) are total and never
//! return these. Only the boundaries can fail: input validation and slot
//! storage I/O. The CLI layer maps these to user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for SubTrack operations.
pub type Result<T> = std::result::Result<T, SubtrackError>;

/// Core error type for SubTrack operations.
#[derive(Debug, Error)]
pub enum SubtrackError {
    /// A record failed an input-boundary constraint
    #[error("Validation error: {0}")]
    Validation(String),

    /// A value could not be parsed into a domain type
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Slot storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// A document could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for SubtrackError {
    fn from(err: std::io::Error) -> Self {
        SubtrackError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for SubtrackError {
    fn from(err: serde_json::Error) -> Self {
        SubtrackError::Serialization(err.to_string())
    }
}
