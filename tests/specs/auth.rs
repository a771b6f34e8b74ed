//! Authentication specs
//!
//! Registration and verification against the credential file.

use crate::prelude::Clinic;
use clinic_core::Role;
use clinic_storage::{CredentialStore, StoreError};

#[test]
fn registered_credentials_verify_with_their_role() {
    let clinic = Clinic::empty();
    let store = CredentialStore::new(clinic.paths.credentials_file.clone());

    store.register("2021A1PS001U", "hunter2", Role::Student).unwrap();
    store.register("nurse.rao", "ward-7", Role::Nurse).unwrap();
    store.register("admin.khan", "keys", Role::Admin).unwrap();

    assert_eq!(store.verify("2021A1PS001U", "hunter2"), Some(Role::Student));
    assert_eq!(store.verify("nurse.rao", "ward-7"), Some(Role::Nurse));
    assert_eq!(store.verify("admin.khan", "keys"), Some(Role::Admin));
}

#[test]
fn wrong_password_verifies_as_empty() {
    let clinic = Clinic::empty();
    let store = CredentialStore::new(clinic.paths.credentials_file.clone());
    store.register("2021A1PS001U", "hunter2", Role::Student).unwrap();

    assert_eq!(store.verify("2021A1PS001U", "hunter3"), None);
}

#[test]
fn second_registration_of_a_username_fails() {
    let clinic = Clinic::empty();
    let store = CredentialStore::new(clinic.paths.credentials_file.clone());

    store.register("sam", "pw-a", Role::Student).unwrap();
    let err = store.register("sam", "pw-b", Role::Student).unwrap_err();
    assert!(matches!(err, StoreError::Duplicate { .. }));

    let content = std::fs::read_to_string(&clinic.paths.credentials_file).unwrap();
    assert_eq!(content.lines().filter(|l| l.starts_with("sam,")).count(), 1);
}

#[test]
fn credential_file_matches_the_wire_format() {
    let clinic = Clinic::empty();
    let store = CredentialStore::new(clinic.paths.credentials_file.clone());
    store.register("sam", "pw", Role::Student).unwrap();

    let content = std::fs::read_to_string(&clinic.paths.credentials_file).unwrap();
    assert_eq!(content, "Username,Password,Role\nsam,pw,Student\n");
}
