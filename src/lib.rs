//! rosterdb - a single-user student roster store with flat-file persistence
//!
//! The store owns an ordered collection of student records, enforces id
//! uniqueness, and rewrites its backing JSON file after every successful
//! mutation. Single-threaded, synchronous, no background work.

pub mod cli;
pub mod model;
pub mod observability;
pub mod persist;
pub mod store;
