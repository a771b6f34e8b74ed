//! Shared helpers for the behavioral specs.

use clinic_core::{ClinicPaths, MedicalRecord};
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// A clinic data directory living in a tempdir
pub struct Clinic {
    pub paths: ClinicPaths,
    _dir: TempDir,
}

impl Clinic {
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        Self {
            paths: ClinicPaths::in_dir(dir.path()),
            _dir: dir,
        }
    }
}

/// The literal example registration from the medical round-trip property
pub fn jane() -> MedicalRecord {
    MedicalRecord {
        full_name: "Jane Doe".to_string(),
        user_id: "2021A1PS001U".to_string(),
        gender: "Female".to_string(),
        email: "jane@x.com".to_string(),
        mobile_no: "+971 500000000".to_string(),
        contact_id: "+971 500000001".to_string(),
        blood_type: "O+".to_string(),
        allergies: "N/A".to_string(),
        chronic_illnesses: "N/A".to_string(),
        insurance_type: "Institute Insurance".to_string(),
    }
}

/// Poll a line receiver until a line arrives or the timeout elapses
pub fn recv_within(rx: &mut clinic_watch::LineReceiver, timeout: Duration) -> Option<String> {
    let deadline = Instant::now() + timeout;
    loop {
        match rx.try_recv() {
            Ok(line) => return Some(line),
            Err(tokio::sync::mpsc::error::TryRecvError::Empty) => {
                if Instant::now() >= deadline {
                    return None;
                }
                std::thread::sleep(Duration::from_millis(10));
            }
            Err(tokio::sync::mpsc::error::TryRecvError::Disconnected) => return None,
        }
    }
}
