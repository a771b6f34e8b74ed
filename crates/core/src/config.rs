// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File-path configuration for the stores and the watcher
//!
//! Paths are always supplied externally (constructor argument, TOML file, or
//! a data-dir default); nothing in this workspace bakes a path into the
//! binary.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("no user data directory available")]
    NoDataDir,
}

/// Locations of the four flat files the subsystem owns
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClinicPaths {
    /// Credential table (`Username,Password,Role`)
    pub credentials_file: PathBuf,
    /// Medical registration table (ten quoted columns)
    pub medical_records_file: PathBuf,
    /// Emergency audit log (pipe-delimited, write-only)
    pub emergency_log_file: PathBuf,
    /// Notification source watched for appended lines
    pub messages_file: PathBuf,
}

impl ClinicPaths {
    /// Place the canonical file names under a single directory
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            credentials_file: dir.join("credentials.csv"),
            medical_records_file: dir.join("medical_registrations.csv"),
            emergency_log_file: dir.join("emergency_logs.txt"),
            messages_file: dir.join("messages.txt"),
        }
    }

    /// Load paths from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Default layout under the user's data directory
    pub fn default_local() -> Result<Self, ConfigError> {
        let base = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
        Ok(Self::in_dir(&base.join("clinic")))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
