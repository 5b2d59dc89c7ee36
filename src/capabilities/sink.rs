//! # Output sink capability.
//!
//! [`OutputSink`] is the "emit a line of text" boundary. Strategies, the
//! [`LogWriter`](crate::LogWriter) observer and subjects that report registry
//! changes all write through it instead of printing directly.
//!
//! Provided sinks:
//! - [`StdoutSink`] prints each line (demo/console use);
//! - [`TracingSink`] forwards each line as a `tracing` info event;
//! - [`MemorySink`] keeps every line in memory (tests, replays).

use std::sync::{Mutex, PoisonError};

/// Destination for human-readable output lines.
pub trait OutputSink: Send + Sync {
    /// Emits one line of text.
    fn emit(&self, text: &str);
}

/// Prints each line to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&self, text: &str) {
        println!("{text}");
    }
}

/// Forwards each line to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl OutputSink for TracingSink {
    fn emit(&self, text: &str) {
        tracing::info!(target: "switchyard::output", "{text}");
    }
}

/// Records every emitted line.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the lines emitted so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns the lines emitted so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Number of lines emitted so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// True if nothing was emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OutputSink for MemorySink {
    fn emit(&self, text: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_and_drains() {
        let sink = MemorySink::new();
        sink.emit("one");
        sink.emit("two");
        assert_eq!(sink.lines(), vec!["one", "two"]);
        assert_eq!(sink.take(), vec!["one", "two"]);
        assert!(sink.is_empty());
    }
}
