//! Observable events in the roster store
//!
//! Events are explicit and typed. One event = one observable condition.

use std::fmt;

/// Observable events emitted by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Backing file loaded (or absent) and the store is ready
    StoreLoaded,
    /// Backing file exists but could not be read or parsed; store starts empty
    LoadFailed,
    /// Rewrite of the backing file failed; in-memory state stands
    SaveFailed,
}

impl Event {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::StoreLoaded => "STORE_LOADED",
            Event::LoadFailed => "LOAD_FAILED",
            Event::SaveFailed => "SAVE_FAILED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
