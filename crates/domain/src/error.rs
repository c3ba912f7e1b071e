//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PetstoreError`] via `#[from]`.

use std::num::ParseIntError;

/// Top-level error shared by services and adapters.
#[derive(Debug, thiserror::Error)]
pub enum PetstoreError {
    /// Input failed a domain invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    /// The storage backend failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons a record or request is rejected before reaching storage.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// A record id is missing, not an integer, or below 1.
    #[error("id must be a positive integer")]
    InvalidId,

    /// A user has no first name.
    #[error("firstName must not be empty")]
    EmptyFirstName,

    /// A pet has no name.
    #[error("name must not be empty")]
    EmptyName,

    /// A path segment could not be parsed as an id.
    #[error("invalid id in path")]
    InvalidPathId(#[source] ParseIntError),

    /// The request body does not have the expected shape.
    #[error("invalid request body: {0}")]
    InvalidBody(#[source] serde_json::Error),
}

/// No record of kind `entity` has the identifier `id`.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// A collection of `entity` records has no identifier left to allocate.
#[derive(Debug, thiserror::Error)]
#[error("{entity} id space exhausted")]
pub struct IdExhaustedError {
    pub entity: &'static str,
}

impl From<IdExhaustedError> for PetstoreError {
    fn from(err: IdExhaustedError) -> Self {
        Self::Storage(Box::new(err))
    }
}
