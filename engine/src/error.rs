//! Error types for the Roster engine.

use crate::RecordId;
use thiserror::Error;

/// All possible errors from the Roster engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // Store errors
    #[error("record not found: {0}")]
    RecordNotFound(RecordId),

    // Input errors
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown event: {0}")]
    UnknownEvent(String),

    #[error("event '{0}' requires a value")]
    MissingPayload(&'static str),

    // Action precondition errors
    #[error("no record selected")]
    NothingSelected,

    #[error("form is not visible")]
    FormHidden,

    #[error("form is open")]
    FormOpen,
}

impl Error {
    /// Whether the error is a missing-target condition the handler layer
    /// recovers from as a no-op.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::RecordNotFound(_))
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
