// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Emergency alert log
//!
//! Write-only audit trail of emergency calls. One pipe-delimited line per
//! event, no header, never read back by this subsystem. The watched messages
//! file can point at the same path so each alert also surfaces as a live
//! notification.

use crate::table::StoreError;
use chrono::{DateTime, Local};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Tag written as the third field of every alert line
pub const EMERGENCY_EVENT_TAG: &str = "emergencycall_1";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only log of timestamped emergency events
pub struct AlertLog {
    path: PathBuf,
}

impl AlertLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Record an emergency call for the given user at the current time
    ///
    /// Failure is reported to the caller and not retried.
    pub fn log_alert(&self, user_id: &str) -> Result<(), StoreError> {
        self.log_alert_at(user_id, Local::now())
    }

    /// Record an emergency call with an explicit timestamp
    pub fn log_alert_at(
        &self,
        user_id: &str,
        timestamp: DateTime<Local>,
    ) -> Result<(), StoreError> {
        let line = format!(
            "{} | {} | {}\n",
            timestamp.format(TIMESTAMP_FORMAT),
            user_id,
            EMERGENCY_EVENT_TAG
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        // Single write so a failed append leaves no partial line
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "alerts_tests.rs"]
mod tests;
