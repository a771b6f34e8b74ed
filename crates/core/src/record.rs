// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The ten-field medical registration record

use serde::{Deserialize, Serialize};

/// Number of columns in a medical registration row
pub const MEDICAL_FIELD_COUNT: usize = 10;

/// Column index of the user id within a row
pub const USER_ID_COLUMN: usize = 1;

/// One medical registration, created once and never updated
///
/// Field order matches the on-disk column order; `user_id` is the lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub full_name: String,
    pub user_id: String,
    pub gender: String,
    pub email: String,
    pub mobile_no: String,
    pub contact_id: String,
    pub blood_type: String,
    pub allergies: String,
    pub chronic_illnesses: String,
    pub insurance_type: String,
}

impl MedicalRecord {
    /// Ordered fields for writing one row
    pub fn to_fields(&self) -> [&str; MEDICAL_FIELD_COUNT] {
        [
            &self.full_name,
            &self.user_id,
            &self.gender,
            &self.email,
            &self.mobile_no,
            &self.contact_id,
            &self.blood_type,
            &self.allergies,
            &self.chronic_illnesses,
            &self.insurance_type,
        ]
    }

    /// Build a record from scanned fields
    ///
    /// Returns `None` when the row has fewer than ten fields; such rows are
    /// malformed and skipped by callers, never an error.
    pub fn from_fields(fields: &[String]) -> Option<Self> {
        if fields.len() < MEDICAL_FIELD_COUNT {
            return None;
        }
        Some(Self {
            full_name: fields[0].clone(),
            user_id: fields[1].clone(),
            gender: fields[2].clone(),
            email: fields[3].clone(),
            mobile_no: fields[4].clone(),
            contact_id: fields[5].clone(),
            blood_type: fields[6].clone(),
            allergies: fields[7].clone(),
            chronic_illnesses: fields[8].clone(),
            insurance_type: fields[9].clone(),
        })
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
