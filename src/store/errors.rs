//! Store error types

use thiserror::Error;

use crate::model::ValidationError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Why a store mutation was rejected.
///
/// The boolean API collapses all of these to `false`; the `try_`
/// variants expose them so callers can tell a duplicate id apart from a
/// validation failure without re-querying the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no record with id: {0}")]
    NotFound(String),

    #[error("id already in use: {0}")]
    DuplicateId(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
