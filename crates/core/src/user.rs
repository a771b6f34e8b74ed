// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User roles and the tagged user variant
//!
//! Role strings are stored verbatim in the credential file, so `Display` and
//! `FromStr` must round-trip the exact on-disk spellings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Role stored in the third column of the credential file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Student,
    Nurse,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => write!(f, "Student"),
            Role::Nurse => write!(f, "Nurse"),
            Role::Admin => write!(f, "Admin"),
        }
    }
}

/// Error parsing a role column
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct RoleParseError(pub String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Student" => Ok(Role::Student),
            "Nurse" => Ok(Role::Nurse),
            "Admin" => Ok(Role::Admin),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

/// A logged-in clinic user
///
/// Tagged variant rather than an inheritance hierarchy: role-specific data
/// lives on the variant, and dashboard-title resolution is a pure function
/// over the tag (see [`dashboard_title`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClinicUser {
    Student {
        id: String,
        full_name: String,
        email: String,
        blood_type: String,
        allergies: String,
        chronic_illnesses: String,
        insurance_type: String,
        mobile_no: String,
        contact_id: String,
    },
    Staff {
        id: String,
        full_name: String,
        email: String,
        role: Role,
    },
}

impl ClinicUser {
    pub fn id(&self) -> &str {
        match self {
            ClinicUser::Student { id, .. } | ClinicUser::Staff { id, .. } => id,
        }
    }

    pub fn full_name(&self) -> &str {
        match self {
            ClinicUser::Student { full_name, .. } | ClinicUser::Staff { full_name, .. } => {
                full_name
            }
        }
    }

    pub fn email(&self) -> &str {
        match self {
            ClinicUser::Student { email, .. } | ClinicUser::Staff { email, .. } => email,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            ClinicUser::Student { .. } => Role::Student,
            ClinicUser::Staff { role, .. } => *role,
        }
    }

    /// Summary line for the dashboard alerts card
    ///
    /// A student with no recorded allergies or chronic illnesses has no
    /// critical alerts; anything else flags the medical history for review.
    pub fn alerts_status(&self) -> &'static str {
        match self {
            ClinicUser::Student {
                allergies,
                chronic_illnesses,
                ..
            } => {
                if allergies.eq_ignore_ascii_case("N/A")
                    && chronic_illnesses.eq_ignore_ascii_case("N/A")
                {
                    "No known critical alerts."
                } else {
                    "Alert: Review medical history."
                }
            }
            ClinicUser::Staff { .. } => "No known critical alerts.",
        }
    }
}

/// Resolve the dashboard title for a user
pub fn dashboard_title(user: &ClinicUser) -> &'static str {
    match user {
        ClinicUser::Student { .. } => "Clinic Student Portal",
        ClinicUser::Staff { .. } => "Clinic Nurse Portal",
    }
}

#[cfg(test)]
#[path = "user_tests.rs"]
mod tests;
