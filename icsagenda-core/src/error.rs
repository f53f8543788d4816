//! Error types for agenda building.

use thiserror::Error;

/// Errors that can occur while building an agenda.
#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Malformed date-time token: '{0}'")]
    MalformedDateTime(String),

    #[error("Event limit of {limit} exceeded")]
    CapacityExceeded { limit: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for agenda operations.
pub type AgendaResult<T> = Result<T, AgendaError>;
