//! CLI error types

use thiserror::Error;

use crate::store::StoreError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced to the terminal user.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
