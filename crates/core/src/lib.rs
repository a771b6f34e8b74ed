// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! clinic-core: Domain types for the clinic session subsystem
//!
//! This crate provides:
//! - User roles and the tagged user variant with pure title resolution
//! - The ten-field medical record
//! - Externally supplied file-path configuration

pub mod config;
pub mod record;
pub mod user;

// Re-exports
pub use config::{ClinicPaths, ConfigError};
pub use record::MedicalRecord;
pub use user::{dashboard_title, ClinicUser, Role, RoleParseError};
