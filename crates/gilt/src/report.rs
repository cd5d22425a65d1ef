// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test reporting.

use parking_lot::Mutex;
use std::sync::Arc;

/// Receives the outcome of an assertion.
pub trait Reporter {
    /// Fail the calling test. Called at most once per assertion.
    fn fail(&self, message: &str);

    /// Informational line (diffs before an update, bytes written).
    fn log(&self, message: &str);
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn fail(&self, message: &str) {
        (**self).fail(message)
    }

    fn log(&self, message: &str) {
        (**self).log(message)
    }
}

/// Reports to the libtest harness: logs go to stdout, which the harness
/// captures per test, and failures panic.
#[derive(Debug, Clone, Copy, Default)]
pub struct Libtest;

impl Reporter for Libtest {
    #[allow(clippy::panic)]
    fn fail(&self, message: &str) {
        panic!("{message}");
    }

    fn log(&self, message: &str) {
        println!("{message}");
    }
}

/// One recorded report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Log(String),
    Failure(String),
}

/// Records reports in memory.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    entries: Arc<Mutex<Vec<Entry>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries in the order they were reported.
    pub fn entries(&self) -> Vec<Entry> {
        self.entries.lock().clone()
    }

    pub fn logs(&self) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter_map(|e| match e {
                Entry::Log(m) => Some(m.clone()),
                Entry::Failure(_) => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter_map(|e| match e {
                Entry::Failure(m) => Some(m.clone()),
                Entry::Log(_) => None,
            })
            .collect()
    }

    pub fn has_failed(&self) -> bool {
        self.entries
            .lock()
            .iter()
            .any(|e| matches!(e, Entry::Failure(_)))
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Reporter for Recorder {
    fn fail(&self, message: &str) {
        self.entries.lock().push(Entry::Failure(message.to_string()));
    }

    fn log(&self, message: &str) {
        self.entries.lock().push(Entry::Log(message.to_string()));
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
