// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! clinic-watch: Background log tailing for live notifications
//!
//! Watches one append-only file and turns each newly appended, non-empty
//! line into a delivered event on a subscriber channel.

pub mod tailer;

pub use tailer::{LineReceiver, LogWatcher, WatchError, WatcherState};
