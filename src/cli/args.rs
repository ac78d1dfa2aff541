//! CLI argument definitions using clap
//!
//! Commands:
//! - rosterdb add <name> <id> <major>
//! - rosterdb list
//! - rosterdb search <query>
//! - rosterdb sort [by] [--descending]
//! - rosterdb update <original-id> <name> <id> <major>
//! - rosterdb delete <id>
//!
//! Every command takes `--file` for the backing roster file.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rosterdb - a single-user student roster store
#[derive(Parser, Debug)]
#[command(name = "rosterdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the roster file
    #[arg(long, global = true, default_value = "students_data.json")]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new student record
    Add {
        /// Student's full name
        name: String,
        /// Unique student id
        id: String,
        /// Student's major
        major: String,
    },

    /// List every record in store order
    List,

    /// Search records by name or id (case-insensitive substring)
    Search {
        /// Text to look for; empty matches everything
        query: String,
    },

    /// Reorder the roster and persist the new order
    Sort {
        /// Field to sort by: "name" or "id" (anything else means "name")
        #[arg(default_value = "name")]
        by: String,

        /// Sort in descending order
        #[arg(long)]
        descending: bool,
    },

    /// Update an existing record's fields
    Update {
        /// Current id of the record to update
        original_id: String,
        /// New name
        name: String,
        /// New id
        id: String,
        /// New major
        major: String,
    },

    /// Delete a record by id
    Delete {
        /// Id of the record to remove
        id: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
