//! Live notification specs
//!
//! The watcher scenario from the session lifetime: one subscriber registered
//! at startup, lines delivered as the messages file grows.

use crate::prelude::{recv_within, Clinic};
use clinic_watch::{LogWatcher, WatcherState};
use std::io::Write;
use std::time::Duration;

fn append(path: &std::path::Path, bytes: &str) {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .unwrap();
    file.write_all(bytes.as_bytes()).unwrap();
}

#[test]
fn hello_appended_to_empty_file_delivers_one_event() {
    let clinic = Clinic::empty();
    std::fs::write(&clinic.paths.messages_file, "").unwrap();

    let mut watcher = LogWatcher::new(clinic.paths.messages_file.clone());
    let mut rx = watcher.subscribe();
    watcher.start().unwrap();

    append(&clinic.paths.messages_file, "Hello\n");

    assert_eq!(
        recv_within(&mut rx, Duration::from_secs(5)),
        Some("Hello".to_string())
    );
    assert_eq!(recv_within(&mut rx, Duration::from_millis(300)), None);
    watcher.stop();
}

#[test]
fn split_write_delivers_one_complete_event() {
    let clinic = Clinic::empty();
    std::fs::write(&clinic.paths.messages_file, "").unwrap();

    let mut watcher = LogWatcher::new(clinic.paths.messages_file.clone());
    let mut rx = watcher.subscribe();
    watcher.start().unwrap();

    append(&clinic.paths.messages_file, "A");
    std::thread::sleep(Duration::from_millis(200));
    append(&clinic.paths.messages_file, "BC\n");

    assert_eq!(
        recv_within(&mut rx, Duration::from_secs(5)),
        Some("ABC".to_string())
    );
    assert_eq!(recv_within(&mut rx, Duration::from_millis(300)), None);
    watcher.stop();
}

#[test]
fn empty_line_delivers_nothing() {
    let clinic = Clinic::empty();
    std::fs::write(&clinic.paths.messages_file, "").unwrap();

    let mut watcher = LogWatcher::new(clinic.paths.messages_file.clone());
    let mut rx = watcher.subscribe();
    watcher.start().unwrap();

    append(&clinic.paths.messages_file, "\n");

    assert_eq!(recv_within(&mut rx, Duration::from_millis(300)), None);
    watcher.stop();
}

#[test]
fn consumer_counts_unread_from_delivered_events_only() {
    // The unread counter is state the subscriber derives from its own
    // received events, not shared watcher state.
    let clinic = Clinic::empty();
    std::fs::write(&clinic.paths.messages_file, "").unwrap();

    let mut watcher = LogWatcher::new(clinic.paths.messages_file.clone());
    let mut rx = watcher.subscribe();
    watcher.start().unwrap();

    append(&clinic.paths.messages_file, "first\nsecond\n\nthird\n");

    let mut unread = 0;
    while recv_within(&mut rx, Duration::from_secs(2)).is_some() {
        unread += 1;
    }
    assert_eq!(unread, 3);
    watcher.stop();
    assert_eq!(watcher.state(), WatcherState::Stopped);
}
