//! Flat-file persistence for the roster store
//!
//! The backing file holds the entire collection as a pretty-printed JSON
//! array of `{name, student_id, major}` objects, UTF-8, human-readable.
//! Every save is a full rewrite; there is no append path.
//!
//! # Invariants
//!
//! - A missing file is an empty store, not an error
//! - A save never truncates the previous good file: the new contents are
//!   written to a sibling temp file and renamed over the target
//! - Records read back are re-validated before the store accepts them

mod errors;
mod file;

pub use errors::{PersistError, PersistResult};
pub use file::FileBackend;
