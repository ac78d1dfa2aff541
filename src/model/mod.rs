//! Student record model
//!
//! A `Record` holds the three roster fields (name, student id, major).
//! All three are non-empty after trimming at every observable point;
//! construction and mutation reject values that violate this.
//!
//! Field access goes through getters and validated setters only. Callers
//! never hold a mutable alias into the store's records.

mod errors;
mod record;

pub use errors::{ValidationError, ValidationResult};
pub use record::{Record, RecordOnDisk};
