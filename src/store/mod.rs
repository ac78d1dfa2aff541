//! Roster store
//!
//! `RecordStore` owns the in-memory collection of records, enforces id
//! uniqueness, and rewrites the backing file after every successful
//! mutation.
//!
//! # Invariants Enforced
//!
//! - Record ids are unique across the store at every observable point
//! - No mutation commits partially: update validates every incoming
//!   field and the uniqueness constraint before touching the record
//! - Persistence failures never escape the store boundary
//!
//! Single-threaded by design. Hosts with multiple threads must serialize
//! all store operations behind one exclusive lock; the check-then-insert
//! uniqueness test is not atomic against concurrent callers.

mod errors;
#[allow(clippy::module_inception)]
mod store;

pub use errors::{StoreError, StoreResult};
pub use store::{RecordStore, SortKey};
