// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! clinic-storage: Flat-file stores for the clinic session subsystem
//!
//! Three stores over append-only delimited text files:
//! - credential table (verify / register)
//! - medical registration table (write once / fetch first match)
//! - emergency alert log (write-only audit trail)
//!
//! All of them report failure as a result or an empty optional at the
//! operation boundary; none of them can take the host process down.

pub mod alerts;
pub mod credentials;
pub mod medical;
pub mod table;

pub use alerts::{AlertLog, EMERGENCY_EVENT_TAG};
pub use credentials::{CredentialStore, CREDENTIALS_HEADER};
pub use medical::{MedicalRecordStore, MEDICAL_HEADER};
pub use table::{Quoting, RecordTable, StoreError};
