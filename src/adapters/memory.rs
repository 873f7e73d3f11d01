//! In-memory status sink.
//!
//! Records every status line so tests (and embedders that want to
//! inspect output) can assert on the exact sequence.  Clones share the
//! same buffer.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::app::ports::StatusSink;

#[derive(Clone, Default)]
pub struct MemoryOutput {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of every line recorded so far.
    pub fn lines(&self) -> Vec<String> {
        self.buffer().clone()
    }

    /// True if any recorded line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.buffer().iter().any(|l| l.contains(needle))
    }

    /// Number of recorded lines containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.buffer().iter().filter(|l| l.contains(needle)).count()
    }

    pub fn clear(&self) {
        self.buffer().clear();
    }
}

impl StatusSink for MemoryOutput {
    fn output_line(&self, line: &str) {
        self.buffer().push(line.to_owned());
    }
}
