// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log tailing watcher
//!
//! Watches the parent directory of one append-only file and delivers each
//! newly appended, non-empty line to subscribers. A byte cursor tracks how
//! much of the file has already been delivered; the cursor only advances
//! past lines whose terminating newline was actually read, so a line whose
//! body and newline arrive in separate writes is delivered exactly once,
//! when it completes.

use notify::{EventKind, RecursiveMode, Watcher};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use thiserror::Error;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Receiver side of a line subscription
pub type LineReceiver = UnboundedReceiver<String>;

/// Errors that can occur setting up the watcher
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("no parent directory for {}", .0.display())]
    NoParentDir(PathBuf),
    #[error("watch registration failed: {0}")]
    Notify(#[from] notify::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("watcher already started")]
    AlreadyStarted,
}

/// Lifecycle of a watcher: Idle until started, Stopped on setup failure or
/// shutdown. No transition back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatcherState {
    Idle,
    Watching,
    Stopped,
}

enum LoopMsg {
    Fs(notify::Result<notify::Event>),
    Stop,
}

/// Tails one file and fans appended lines out to subscribers
pub struct LogWatcher {
    path: PathBuf,
    state: Arc<Mutex<WatcherState>>,
    subscribers: Arc<Mutex<Vec<UnboundedSender<String>>>>,
    control: Option<Sender<LoopMsg>>,
    thread: Option<JoinHandle<()>>,
}

impl LogWatcher {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: Arc::new(Mutex::new(WatcherState::Idle)),
            subscribers: Arc::new(Mutex::new(Vec::new())),
            control: None,
            thread: None,
        }
    }

    pub fn state(&self) -> WatcherState {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Register a subscriber for appended lines
    ///
    /// Lines are delivered through an unbounded channel, so the watcher
    /// thread never hands state to a consumer context directly. Subscribers
    /// whose receiver has been dropped are silently skipped.
    pub fn subscribe(&self) -> LineReceiver {
        let (tx, rx) = unbounded_channel();
        self.subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(tx);
        rx
    }

    /// Start watching: register for directory notifications, record the
    /// current file length as the cursor, and spawn the tailing loop.
    ///
    /// Setup failure is fatal to the watcher only: the state becomes
    /// `Stopped` and the error is surfaced once to the caller.
    pub fn start(&mut self) -> Result<(), WatchError> {
        if self.state() != WatcherState::Idle {
            return Err(WatchError::AlreadyStarted);
        }

        match self.try_start() {
            Ok(()) => {
                self.set_state(WatcherState::Watching);
                tracing::info!(path = %self.path.display(), "message watcher started");
                Ok(())
            }
            Err(e) => {
                self.set_state(WatcherState::Stopped);
                tracing::error!(path = %self.path.display(), error = %e, "message watcher setup failed");
                Err(e)
            }
        }
    }

    fn try_start(&mut self) -> Result<(), WatchError> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| WatchError::NoParentDir(self.path.clone()))?
            .canonicalize()?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| WatchError::NoParentDir(self.path.clone()))?;
        // Events carry paths under the canonical directory, so the target
        // must be resolved the same way for the exact-path filter to hold.
        let target = dir.join(file_name);

        let (tx, rx) = channel();
        let fs_tx = tx.clone();
        let mut fs_watcher = notify::recommended_watcher(move |res| {
            let _ = fs_tx.send(LoopMsg::Fs(res));
        })?;
        fs_watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        let cursor = std::fs::metadata(&target).map(|m| m.len()).unwrap_or(0);

        let subscribers = Arc::clone(&self.subscribers);
        let state = Arc::clone(&self.state);
        let thread = std::thread::Builder::new()
            .name("message-watcher".to_string())
            .spawn(move || {
                // The fs watcher must outlive the loop or notifications stop
                let _fs_watcher = fs_watcher;
                tail_loop(&target, cursor, &rx, &subscribers);
                *state.lock().unwrap_or_else(|e| e.into_inner()) = WatcherState::Stopped;
            })?;

        self.control = Some(tx);
        self.thread = Some(thread);
        Ok(())
    }

    /// Request shutdown and wait for the loop to exit
    ///
    /// An in-flight read completes before the stop signal is observed; no
    /// events are delivered afterwards. Bytes appended after the last
    /// processed notification are not drained.
    pub fn stop(&mut self) {
        if let Some(tx) = self.control.take() {
            let _ = tx.send(LoopMsg::Stop);
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
        self.set_state(WatcherState::Stopped);
    }

    fn set_state(&self, state: WatcherState) {
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = state;
    }
}

impl Drop for LogWatcher {
    fn drop(&mut self) {
        if let Some(tx) = self.control.take() {
            let _ = tx.send(LoopMsg::Stop);
        }
    }
}

fn tail_loop(
    target: &Path,
    mut cursor: u64,
    rx: &Receiver<LoopMsg>,
    subscribers: &Mutex<Vec<UnboundedSender<String>>>,
) {
    while let Ok(msg) = rx.recv() {
        let event = match msg {
            LoopMsg::Stop => break,
            LoopMsg::Fs(Err(e)) => {
                tracing::warn!(error = %e, "watch event error");
                continue;
            }
            LoopMsg::Fs(Ok(event)) => event,
        };

        // Our own reads raise access events on the same directory
        if matches!(event.kind, EventKind::Access(_)) {
            continue;
        }
        if !event.paths.iter().any(|p| p == target) {
            continue;
        }

        let len = match std::fs::metadata(target) {
            Ok(meta) => meta.len(),
            Err(_) => continue,
        };
        if len <= cursor {
            continue;
        }

        match read_appended_lines(target, cursor) {
            Ok((lines, consumed)) => {
                cursor = consumed;
                if lines.is_empty() {
                    continue;
                }
                let subs = subscribers.lock().unwrap_or_else(|e| e.into_inner());
                for line in lines {
                    for tx in subs.iter() {
                        let _ = tx.send(line.clone());
                    }
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed reading appended lines");
            }
        }
    }
}

/// Read complete lines starting at `from`, returning them with the new
/// cursor position
///
/// A trailing line without a newline is left unread and the cursor stays at
/// the last newline boundary, so the same bytes are re-read once the line
/// completes. Empty and whitespace-only lines advance the cursor but are not
/// returned.
fn read_appended_lines(path: &Path, from: u64) -> io::Result<(Vec<String>, u64)> {
    let mut file = File::open(path)?;
    file.seek(SeekFrom::Start(from))?;
    let mut reader = BufReader::new(file);

    let mut lines = Vec::new();
    let mut consumed = from;
    let mut buf = String::new();
    loop {
        buf.clear();
        let n = reader.read_line(&mut buf)?;
        if n == 0 {
            break;
        }
        if !buf.ends_with('\n') {
            break;
        }
        consumed += n as u64;
        let trimmed = buf.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Ok((lines, consumed))
}

#[cfg(test)]
#[path = "tailer_tests.rs"]
mod tests;
