// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Medical registration store over the record table
//!
//! Records are created once at registration and never updated or deleted.
//! There is no duplicate check on write; when several rows share a user id,
//! fetch resolves the ambiguity by returning the first row top-to-bottom.

use crate::table::{Quoting, RecordTable, StoreError};
use clinic_core::record::{MEDICAL_FIELD_COUNT, USER_ID_COLUMN};
use clinic_core::MedicalRecord;
use std::path::PathBuf;

/// Header line of the medical registration file
pub const MEDICAL_HEADER: &str =
    "FullName,BITS_ID,Gender,BITS_Email,MobileNo,TelegramNo,BloodType,Allergies,ChronicIllnesses,InsuranceType";

/// Store of ten-column medical registrations keyed by user id
pub struct MedicalRecordStore {
    table: RecordTable,
}

impl MedicalRecordStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            table: RecordTable::new(path, MEDICAL_HEADER, MEDICAL_FIELD_COUNT, Quoting::All),
        }
    }

    /// Append one registration, writing the header only when the file is new
    pub fn write_record(&self, record: &MedicalRecord) -> Result<(), StoreError> {
        self.table.append(&record.to_fields())
    }

    /// Fetch the first registration matching the user id
    ///
    /// The key column is compared case-insensitively after trimming. Rows
    /// with fewer than ten fields are skipped; I/O failure fetches as empty.
    pub fn fetch_by_user_id(&self, user_id: &str) -> Option<MedicalRecord> {
        let key = user_id.trim();
        let result = self.table.scan(|fields| {
            if fields[USER_ID_COLUMN].eq_ignore_ascii_case(key) {
                MedicalRecord::from_fields(fields)
            } else {
                None
            }
        });

        match result {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(error = %e, "medical record scan failed");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "medical_tests.rs"]
mod tests;
