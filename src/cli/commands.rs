//! CLI command implementations
//!
//! Each command opens the store over `--file`, runs one operation, and
//! prints the result. Mutations use the typed store API so the exit
//! message can say why an operation was rejected instead of a bare
//! failure.

use std::io::{self, Write};

use crate::model::Record;
use crate::store::{RecordStore, SortKey};

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Dispatch the parsed command.
pub fn run_command(cli: Cli) -> CliResult<()> {
    let mut store = RecordStore::open(cli.file);

    match cli.command {
        Command::Add { name, id, major } => {
            store.try_add(&name, &id, &major)?;
            println!("added {}", id.trim());
        }
        Command::List => {
            print_records(&store.get_all())?;
        }
        Command::Search { query } => {
            print_records(&store.search(&query))?;
        }
        Command::Sort { by, descending } => {
            store.sort(SortKey::parse(&by), !descending);
            print_records(&store.get_all())?;
        }
        Command::Update {
            original_id,
            name,
            id,
            major,
        } => {
            store.try_update(&original_id, &name, &id, &major)?;
            println!("updated {}", original_id);
        }
        Command::Delete { id } => {
            store.try_delete(&id)?;
            println!("deleted {}", id);
        }
    }

    Ok(())
}

/// Print records one per line, store order.
fn print_records(records: &[Record]) -> CliResult<()> {
    let mut out = io::stdout().lock();
    if records.is_empty() {
        writeln!(out, "(no records)")?;
        return Ok(());
    }
    for record in records {
        writeln!(out, "{}", record.describe())?;
    }
    writeln!(out, "{} record(s)", records.len())?;
    Ok(())
}
