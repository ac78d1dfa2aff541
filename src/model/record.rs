//! Student record type and its on-disk shape
//!
//! The on-disk representation is a plain field mapping:
//!
//! ```text
//! {"name": "...", "student_id": "...", "major": "..."}
//! ```
//!
//! Key order is fixed (name, student_id, major). `RecordOnDisk` is the
//! serde bridge; converting it back into a `Record` re-validates, so a
//! file edited by hand cannot smuggle empty fields past the invariant.

use serde::{Deserialize, Serialize};

use super::errors::{ValidationError, ValidationResult};

/// A single student's roster data.
///
/// Fields are private. Reads go through the getters, writes through the
/// validated setters, and a setter that fails leaves the field unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    id: String,
    major: String,
}

impl Record {
    /// Construct a record, trimming all three fields.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any field is empty after trimming.
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        major: impl Into<String>,
    ) -> ValidationResult<Self> {
        let name = validate(name.into(), ValidationError::EmptyName)?;
        let id = validate(id.into(), ValidationError::EmptyId)?;
        let major = validate(major.into(), ValidationError::EmptyMajor)?;
        Ok(Self { name, id, major })
    }

    /// Returns the student's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the student's unique identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the student's major
    pub fn major(&self) -> &str {
        &self.major
    }

    /// Set the name after trim + non-empty validation.
    pub fn set_name(&mut self, name: impl Into<String>) -> ValidationResult<()> {
        self.name = validate(name.into(), ValidationError::EmptyName)?;
        Ok(())
    }

    /// Set the identifier after trim + non-empty validation.
    ///
    /// Uniqueness across the store is the store's concern, not the
    /// record's; this only enforces the non-empty invariant.
    pub fn set_id(&mut self, id: impl Into<String>) -> ValidationResult<()> {
        self.id = validate(id.into(), ValidationError::EmptyId)?;
        Ok(())
    }

    /// Set the major after trim + non-empty validation.
    pub fn set_major(&mut self, major: impl Into<String>) -> ValidationResult<()> {
        self.major = validate(major.into(), ValidationError::EmptyMajor)?;
        Ok(())
    }

    /// Human-readable one-line rendering of the record.
    pub fn describe(&self) -> String {
        format!("{}: {} ({})", self.id, self.name, self.major)
    }
}

/// Trim a field value and reject it if nothing remains.
fn validate(value: String, on_empty: ValidationError) -> ValidationResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(on_empty);
    }
    // Avoid reallocating when the input carried no surrounding whitespace
    if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_string())
    }
}

/// On-disk shape of a record.
///
/// Serde field order matches the persisted key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordOnDisk {
    pub name: String,
    pub student_id: String,
    pub major: String,
}

impl From<&Record> for RecordOnDisk {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            student_id: record.id.clone(),
            major: record.major.clone(),
        }
    }
}

impl TryFrom<RecordOnDisk> for Record {
    type Error = ValidationError;

    fn try_from(disk: RecordOnDisk) -> Result<Self, Self::Error> {
        Record::new(disk.name, disk.student_id, disk.major)
    }
}
