//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Every error
/// here is recoverable at the operation boundary; none is fatal to the
/// process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A referenced invoice or supplier does not exist.
    #[error("not found")]
    NotFound,

    /// The actor role lacks permission for the requested operation.
    #[error("forbidden")]
    Forbidden,

    /// The requested status change is not reachable from the current status.
    #[error("invalid transition: {0}")]
    InvalidTransition(String),

    /// An extraction is already outstanding for this upload slot.
    #[error("an upload is already being processed")]
    UploadInFlight,

    /// The external collaborator could not produce a structured result.
    #[error("extraction failed: {0}")]
    Extraction(String),

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn invalid_transition(msg: impl Into<String>) -> Self {
        Self::InvalidTransition(msg.into())
    }

    pub fn extraction(msg: impl Into<String>) -> Self {
        Self::Extraction(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
