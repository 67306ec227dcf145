//! Error types for memory operations.

use database::DatabaseError;
use thiserror::Error;

/// Errors surfaced by [`MemoryService`](crate::MemoryService).
#[derive(Debug, Error)]
pub enum MemoryError {
    /// A referenced user or memory does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The record would duplicate an existing one.
    #[error("{0}")]
    Conflict(String),

    /// The input was rejected.
    #[error("{0}")]
    Invalid(String),

    /// Persistence failed; the unit of work was rolled back.
    #[error("{0}")]
    Internal(String),
}

/// Result type for memory operations.
pub type Result<T> = std::result::Result<T, MemoryError>;

impl From<DatabaseError> for MemoryError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound { entity, id } => {
                MemoryError::NotFound(format!("{} with id {} not found", entity, id))
            }
            DatabaseError::AlreadyExists { entity, id } => {
                MemoryError::Conflict(format!("{} with email {} already exists", entity, id))
            }
            DatabaseError::Invalid(e) => MemoryError::Invalid(e.to_string()),
            other => MemoryError::Internal(other.to_string()),
        }
    }
}
