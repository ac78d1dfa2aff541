//! Persistence error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::ValidationError;

/// Result type for persistence operations
pub type PersistResult<T> = Result<T, PersistError>;

/// File read/write failures.
///
/// The store never lets these escape its boundary; they are reported
/// through the diagnostic sink and the operation proceeds (empty load,
/// accepted in-memory mutation).
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed record file: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid record in file: {0}")]
    InvalidRecord(#[from] ValidationError),
}
