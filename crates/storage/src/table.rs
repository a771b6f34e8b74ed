// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only delimited record table
//!
//! A minimal key-value table over a text file: fixed header line, one record
//! per line, comma-delimited fields, optionally RFC4180-quoted. Scans skip
//! the header and any line with fewer than the expected number of fields;
//! malformed lines are never an error.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

/// Errors that can occur in store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("duplicate key: {key}")]
    Duplicate { key: String },
}

/// How fields are written on append
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quoting {
    /// Fields written verbatim (credential table)
    None,
    /// Every field double-quoted, internal quotes doubled (medical table)
    All,
}

/// An append-only delimited table backed by one file
///
/// The write guard serializes every scan-then-append sequence against other
/// writers in this process; one table instance per target file.
pub struct RecordTable {
    path: PathBuf,
    header: String,
    min_fields: usize,
    quoting: Quoting,
    write_guard: Mutex<()>,
}

impl RecordTable {
    pub fn new(
        path: PathBuf,
        header: impl Into<String>,
        min_fields: usize,
        quoting: Quoting,
    ) -> Self {
        Self {
            path,
            header: header.into(),
            min_fields,
            quoting,
            write_guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file with its header line when it does not exist yet
    pub fn ensure_exists(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(&self.path)?;
        writeln!(file, "{}", self.header)?;
        Ok(())
    }

    /// Scan records top-to-bottom, returning the first mapped match
    ///
    /// Skips the header line and any line with fewer than `min_fields`
    /// fields. A missing file scans as empty.
    pub fn scan<T>(
        &self,
        mut f: impl FnMut(&[String]) -> Option<T>,
    ) -> Result<Option<T>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let reader = BufReader::new(file);
        for line in reader.lines().skip(1) {
            let line = line?;
            let fields = parse_fields(&line);
            if fields.len() < self.min_fields {
                continue;
            }
            if let Some(found) = f(&fields) {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    /// Append one record, creating the file with its header when new
    ///
    /// No duplicate check here; duplicate policy belongs to the caller.
    pub fn append(&self, fields: &[&str]) -> Result<(), StoreError> {
        let _guard = self.write_guard.lock().unwrap_or_else(|e| e.into_inner());
        self.append_locked(fields)
    }

    /// Append one record only if no existing record carries the same key
    ///
    /// Holds the write guard across the existence scan and the append, so
    /// two concurrent inserts of the same key cannot both succeed.
    pub fn append_unique(&self, key_column: usize, fields: &[&str]) -> Result<(), StoreError> {
        let _guard = self.write_guard.lock().unwrap_or_else(|e| e.into_inner());

        let key = fields.get(key_column).copied().unwrap_or_default();
        let existing = self.scan(|row| {
            row.get(key_column)
                .is_some_and(|v| v.as_str() == key)
                .then_some(())
        })?;
        if existing.is_some() {
            return Err(StoreError::Duplicate {
                key: key.to_string(),
            });
        }

        self.append_locked(fields)
    }

    fn append_locked(&self, fields: &[&str]) -> Result<(), StoreError> {
        self.ensure_exists()?;

        let line = match self.quoting {
            Quoting::None => fields.join(","),
            Quoting::All => fields
                .iter()
                .map(|f| format!("\"{}\"", f.replace('"', "\"\"")))
                .collect::<Vec<_>>()
                .join(","),
        };

        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        // Single write so a failure leaves no partial record behind
        file.write_all(format!("{line}\n").as_bytes())?;
        Ok(())
    }
}

/// Split a line on commas and strip per-field quoting
///
/// Each field is trimmed; a field wrapped in double quotes is unwrapped and
/// doubled internal quotes are collapsed back to one.
pub fn parse_fields(line: &str) -> Vec<String> {
    line.split(',').map(clean_field).collect()
}

fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        trimmed[1..trimmed.len() - 1].replace("\"\"", "\"")
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
