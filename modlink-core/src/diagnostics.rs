//! Diagnostic sinks for soft resolution failures
//!
//! The eager resolver reports soft failures as human-readable lines rather
//! than errors. The sink abstraction routes those lines to stderr in
//! production and to an in-memory buffer in tests.

use std::sync::{Arc, Mutex};

/// Destination for diagnostic lines
pub trait DiagnosticSink: Send + Sync {
    /// Emit a single diagnostic line
    fn emit(&self, line: &str);
}

/// Sink that writes each line to stderr
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn emit(&self, line: &str) {
        eprintln!("{line}");
    }
}

/// In-memory sink for capturing diagnostics in tests
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    /// Drain all captured lines (returns and clears)
    pub fn drain(&self) -> Vec<String> {
        if let Ok(mut lines) = self.lines.lock() {
            std::mem::take(&mut *lines)
        } else {
            Vec::new()
        }
    }

    /// Check if no lines were captured
    pub fn is_empty(&self) -> bool {
        self.lines
            .lock()
            .map(|lines| lines.is_empty())
            .unwrap_or(true)
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}

/// Shared diagnostic sink handle
pub type DiagnosticHandle = Arc<dyn DiagnosticSink>;

/// Create the default stderr sink
pub fn stderr_sink() -> DiagnosticHandle {
    Arc::new(StderrSink)
}
