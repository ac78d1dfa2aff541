//! Observability for the roster store
//!
//! Diagnostics flow through an injected sink instead of going straight to
//! the console, so embedding hosts can redirect or capture them.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on store operations
//! 3. Synchronous, no buffering
//! 4. Deterministic output

mod events;
mod logger;

pub use events::Event;
pub use logger::{format_line, DiagnosticSink, JsonLineSink, MemorySink, Severity};
