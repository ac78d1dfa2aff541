//! CLI module for rosterdb
//!
//! Provides the command-line caller over the record store:
//! - add: insert one record
//! - list: print every record in store order
//! - search: case-insensitive name/id lookup
//! - sort: reorder by name or id and persist the order
//! - update: replace a record's fields
//! - delete: remove a record by id

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run_command;
pub use errors::{CliError, CliResult};

/// Parse arguments and run the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli)
}
