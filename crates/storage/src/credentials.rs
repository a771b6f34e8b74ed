// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Credential store over the record table
//!
//! Maps a username to (secret, role) in `credentials.csv`. Secrets are
//! stored in plaintext and compared exactly; this is a documented limitation
//! of the file format, not a feature.

use crate::table::{Quoting, RecordTable, StoreError};
use clinic_core::Role;
use std::path::PathBuf;

/// Header line of the credential file
pub const CREDENTIALS_HEADER: &str = "Username,Password,Role";

const USERNAME_COLUMN: usize = 0;

/// Store of (username, secret, role) rows with unique usernames
pub struct CredentialStore {
    table: RecordTable,
}

impl CredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            table: RecordTable::new(path, CREDENTIALS_HEADER, 3, Quoting::None),
        }
    }

    /// Check a username/secret pair, returning the stored role on a match
    ///
    /// Matching is exact and case-sensitive on both fields. I/O failure and
    /// rows with an unknown role column scan as no-match.
    pub fn verify(&self, username: &str, secret: &str) -> Option<Role> {
        let result = self.table.scan(|fields| {
            if fields[0] != username || fields[1] != secret {
                return None;
            }
            match fields[2].parse::<Role>() {
                Ok(role) => Some(role),
                Err(e) => {
                    tracing::warn!(username = %fields[0], error = %e, "skipping credential row");
                    None
                }
            }
        });

        match result {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(error = %e, "credential scan failed");
                None
            }
        }
    }

    /// Register a new user
    ///
    /// The username-existence check and the append run under the table's
    /// write guard, so concurrent registrations of the same username cannot
    /// both succeed. A taken username is a normal failure outcome
    /// ([`StoreError::Duplicate`]), not a fault.
    pub fn register(&self, username: &str, secret: &str, role: Role) -> Result<(), StoreError> {
        self.table
            .append_unique(USERNAME_COLUMN, &[username, secret, &role.to_string()])
    }
}

#[cfg(test)]
#[path = "credentials_tests.rs"]
mod tests;
