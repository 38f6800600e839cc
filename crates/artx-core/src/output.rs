//! Line-oriented user output for retry notices.
//!
//! This is the user-visible log stream ("ERROR: ...", "Waiting ..."), kept
//! apart from `tracing` diagnostics so its exact content can be asserted.

use std::io::Write;
use std::sync::Mutex;

/// Append-only line sink.
pub trait OutputSink: Send + Sync {
    fn write_line(&self, line: &str);
}

/// Writes lines to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrOutput;

impl OutputSink for StderrOutput {
    fn write_line(&self, line: &str) {
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }
}

/// Forwards lines to the tracing subscriber at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingOutput;

impl OutputSink for TracingOutput {
    fn write_line(&self, line: &str) {
        tracing::warn!(target: "artx::output", "{}", line);
    }
}

/// Keeps every line in memory.
#[derive(Debug, Default)]
pub struct BufferOutput {
    lines: Mutex<Vec<String>>,
}

impl BufferOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn count(&self, line: &str) -> usize {
        self.lines().iter().filter(|l| l.as_str() == line).count()
    }
}

impl OutputSink for BufferOutput {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(line.to_string());
    }
}

impl<T: OutputSink + ?Sized> OutputSink for &T {
    fn write_line(&self, line: &str) {
        (**self).write_line(line)
    }
}

impl<T: OutputSink + ?Sized> OutputSink for std::sync::Arc<T> {
    fn write_line(&self, line: &str) {
        (**self).write_line(line)
    }
}
