//! JSON file backend
//!
//! One backend owns exactly one path, fixed at construction. Load and
//! save both operate on the whole collection.

use std::fs;
use std::path::{Path, PathBuf};

use crate::model::{Record, RecordOnDisk};

use super::errors::{PersistError, PersistResult};

/// Reads and rewrites the backing roster file.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Create a backend for the given path. The file is not touched
    /// until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full collection from disk.
    ///
    /// A missing file yields an empty collection. Any entry that fails
    /// record validation rejects the whole file: loading a subset would
    /// silently drop the rest on the next full rewrite.
    ///
    /// # Errors
    ///
    /// Returns `PersistError` if the file exists but cannot be read,
    /// is not valid JSON of the expected shape, or contains an invalid
    /// record.
    pub fn load(&self) -> PersistResult<Vec<Record>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let bytes = fs::read(&self.path).map_err(|e| PersistError::Read {
            path: self.path.clone(),
            source: e,
        })?;

        let entries: Vec<RecordOnDisk> = serde_json::from_slice(&bytes)?;
        let records = entries
            .into_iter()
            .map(Record::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// Rewrite the backing file with the full collection.
    ///
    /// Writes to a sibling temp file first and renames it over the
    /// target, so a failed write leaves the previous contents intact.
    ///
    /// # Errors
    ///
    /// Returns `PersistError::Write` if the temp file cannot be written
    /// or the rename fails.
    pub fn save(&self, records: &[Record]) -> PersistResult<()> {
        let entries: Vec<RecordOnDisk> = records.iter().map(RecordOnDisk::from).collect();

        // Pretty-printed array, trailing newline for diff-friendliness
        let mut body = serde_json::to_vec_pretty(&entries)?;
        body.push(b'\n');

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, &body).map_err(|e| PersistError::Write {
            path: tmp_path.clone(),
            source: e,
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|e| PersistError::Write {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Sibling temp path used for the rewrite-then-rename dance
    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_records() -> Vec<Record> {
        vec![
            Record::new("Alice Tan", "S001", "Computer Science").unwrap(),
            Record::new("Budi Santoso", "S002", "Mechanical Engineering").unwrap(),
        ]
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path().join("absent.json"));
        assert!(backend.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path().join("roster.json"));
        let records = sample_records();

        backend.save(&records).unwrap();
        assert_eq!(backend.load().unwrap(), records);
    }

    #[test]
    fn test_save_is_pretty_printed_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.json");
        let backend = FileBackend::new(&path);
        backend.save(&sample_records()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        // Human-readable: one key per line, stable key order
        assert!(text.trim_start().starts_with('['));
        assert!(text.contains('\n'));
        assert!(text.find("\"name\"").unwrap() < text.find("\"student_id\"").unwrap());
        assert!(text.find("\"student_id\"").unwrap() < text.find("\"major\"").unwrap());
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.json");
        fs::write(&path, "{ not json").unwrap();

        let backend = FileBackend::new(&path);
        assert!(matches!(
            backend.load().unwrap_err(),
            PersistError::Malformed(_)
        ));
    }

    #[test]
    fn test_load_rejects_invalid_record() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.json");
        fs::write(
            &path,
            r#"[{"name": "  ", "student_id": "S001", "major": "Math"}]"#,
        )
        .unwrap();

        let backend = FileBackend::new(&path);
        assert!(matches!(
            backend.load().unwrap_err(),
            PersistError::InvalidRecord(_)
        ));
    }

    #[test]
    fn test_failed_save_keeps_previous_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.json");
        let backend = FileBackend::new(&path);
        backend.save(&sample_records()).unwrap();

        // A backend pointed into a missing directory cannot write its
        // temp file; the original file must remain loadable
        let broken = FileBackend::new(dir.path().join("missing/roster.json"));
        assert!(broken.save(&sample_records()).is_err());
        assert_eq!(backend.load().unwrap(), sample_records());
    }

    #[test]
    fn test_save_empty_collection() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path().join("roster.json"));
        backend.save(&[]).unwrap();
        assert!(backend.load().unwrap().is_empty());
    }
}
