//! The record store
//!
//! Operations are synchronous request/response: each runs to completion,
//! including the persistence rewrite, before returning. Callers receive
//! cloned records, never references into the collection.

use std::path::{Path, PathBuf};

use crate::model::Record;
use crate::observability::{DiagnosticSink, Event, JsonLineSink, Severity};
use crate::persist::FileBackend;

use super::errors::{StoreError, StoreResult};

/// Field the store can reorder by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Id,
}

impl SortKey {
    /// Parse a sort key from caller input.
    ///
    /// Unrecognized keys fall back to `Name`.
    pub fn parse(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "id" => SortKey::Id,
            _ => SortKey::Name,
        }
    }
}

/// In-memory collection of records bound to one backing file.
pub struct RecordStore {
    records: Vec<Record>,
    backend: FileBackend,
    sink: Box<dyn DiagnosticSink>,
}

impl RecordStore {
    /// Open a store over the given backing file, with diagnostics going
    /// to the default JSON line sink.
    ///
    /// A missing file starts the store empty. An unreadable or malformed
    /// file is reported through the sink and the store starts empty; the
    /// file contents are not recovered.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::open_with_sink(path, Box::new(JsonLineSink))
    }

    /// Open a store with a caller-supplied diagnostic sink.
    pub fn open_with_sink(path: impl Into<PathBuf>, sink: Box<dyn DiagnosticSink>) -> Self {
        let backend = FileBackend::new(path);
        let records = match backend.load() {
            Ok(records) => records,
            Err(e) => {
                sink.emit(
                    Severity::Error,
                    Event::LoadFailed,
                    &[
                        ("path", &backend.path().display().to_string()),
                        ("error", &e.to_string()),
                    ],
                );
                Vec::new()
            }
        };
        sink.emit(
            Severity::Info,
            Event::StoreLoaded,
            &[
                ("path", &backend.path().display().to_string()),
                ("records", &records.len().to_string()),
            ],
        );
        Self {
            records,
            backend,
            sink,
        }
    }

    /// Returns the backing file path
    pub fn path(&self) -> &Path {
        self.backend.path()
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ------------------------------------------------------------------
    // Typed mutations
    // ------------------------------------------------------------------

    /// Add a new record.
    ///
    /// Inputs are trimmed. The record is appended in insertion order and
    /// the full store is persisted.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if any trimmed field is empty,
    /// or `StoreError::DuplicateId` if the id is already in use.
    pub fn try_add(&mut self, name: &str, id: &str, major: &str) -> StoreResult<()> {
        let record = Record::new(name, id, major)?;
        if self.find_by_id(record.id()).is_some() {
            return Err(StoreError::DuplicateId(record.id().to_string()));
        }
        self.records.push(record);
        self.persist();
        Ok(())
    }

    /// Update the record identified by `original_id`.
    ///
    /// All three incoming values are validated, and the uniqueness of a
    /// changed id is checked, before any field is touched. A rejected
    /// update leaves the record exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if `original_id` matches nothing,
    /// `StoreError::Validation` if any trimmed field is empty, or
    /// `StoreError::DuplicateId` if the new id belongs to another record.
    pub fn try_update(
        &mut self,
        original_id: &str,
        new_name: &str,
        new_id: &str,
        new_major: &str,
    ) -> StoreResult<()> {
        let position = self
            .position_by_id(original_id)
            .ok_or_else(|| StoreError::NotFound(original_id.to_string()))?;

        // Validate everything up front; nothing is mutated yet
        let replacement = Record::new(new_name, new_id, new_major)?;
        if replacement.id() != original_id && self.find_by_id(replacement.id()).is_some() {
            return Err(StoreError::DuplicateId(replacement.id().to_string()));
        }

        self.records[position] = replacement;
        self.persist();
        Ok(())
    }

    /// Remove the record matching `id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record carries that id.
    pub fn try_delete(&mut self, id: &str) -> StoreResult<()> {
        let position = self
            .position_by_id(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        self.records.remove(position);
        self.persist();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Boolean surface
    // ------------------------------------------------------------------

    /// Add a record; `false` means the store is unchanged.
    pub fn add(&mut self, name: &str, id: &str, major: &str) -> bool {
        self.try_add(name, id, major).is_ok()
    }

    /// Update a record; `false` means the store is unchanged.
    pub fn update(&mut self, original_id: &str, new_name: &str, new_id: &str, new_major: &str) -> bool {
        self.try_update(original_id, new_name, new_id, new_major).is_ok()
    }

    /// Delete a record; `false` means no record carried that id.
    pub fn delete(&mut self, id: &str) -> bool {
        self.try_delete(id).is_ok()
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Returns a defensive copy of the whole collection, in store order.
    pub fn get_all(&self) -> Vec<Record> {
        self.records.clone()
    }

    /// Case-insensitive substring search over name OR id.
    ///
    /// The query is trimmed first; an empty query returns everything.
    /// Store order is preserved among matches.
    pub fn search(&self, query: &str) -> Vec<Record> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.get_all();
        }
        self.records
            .iter()
            .filter(|r| {
                r.name().to_lowercase().contains(&query) || r.id().to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }

    /// Look up a record by exact id match.
    pub fn find_by_id(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id() == id)
    }

    // ------------------------------------------------------------------
    // Ordering
    // ------------------------------------------------------------------

    /// Reorder the collection by the given key, then persist the new
    /// order. Comparison is case-insensitive lexicographic; the sort is
    /// stable, so ties keep their previous relative order.
    pub fn sort(&mut self, by: SortKey, ascending: bool) {
        let key = |r: &Record| match by {
            SortKey::Name => r.name().to_lowercase(),
            SortKey::Id => r.id().to_lowercase(),
        };
        if ascending {
            self.records.sort_by(|a, b| key(a).cmp(&key(b)));
        } else {
            self.records.sort_by(|a, b| key(b).cmp(&key(a)));
        }
        self.persist();
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Rewrite the backing file with the current collection.
    ///
    /// A failed save is reported through the sink and otherwise ignored:
    /// the in-memory mutation stands, and the next successful save will
    /// bring the file back in line.
    fn persist(&self) {
        if let Err(e) = self.backend.save(&self.records) {
            self.sink.emit(
                Severity::Error,
                Event::SaveFailed,
                &[
                    ("path", &self.backend.path().display().to_string()),
                    ("error", &e.to_string()),
                ],
            );
        }
    }

    fn position_by_id(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }
}
