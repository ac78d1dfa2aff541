//! Record validation errors

use thiserror::Error;

/// Result type for record validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Raised when a record field is empty after trimming surrounding
/// whitespace. Each variant names the offending field so callers can
/// report which input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("student id cannot be empty")]
    EmptyId,

    #[error("major cannot be empty")]
    EmptyMajor,
}
