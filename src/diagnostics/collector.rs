// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! The collector stores events in a memory-bounded circular buffer.
//! Producers hold a [`DiagnosticsHandle`], which is cheap to clone and can
//! cross threads; the background worker periodically flushes the buffer to
//! a log file.

use std::io::Write;
use std::sync::{Arc, Mutex};

use super::buffer::CircularBuffer;
use super::events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, WarningEvent,
};
use crate::error::Result;

type SharedBuffer = Arc<Mutex<CircularBuffer<DiagnosticEvent>>>;

/// Handle for sending diagnostic events to the collector.
///
/// Logging never blocks on I/O; events only land in the in-memory buffer.
/// A poisoned lock drops the event rather than propagating the panic.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    buffer: SharedBuffer,
}

impl DiagnosticsHandle {
    /// Logs an error event with full details.
    pub fn log_error(&self, event: ErrorEvent) {
        self.push(DiagnosticEvent::new(DiagnosticEventKind::Error(event)));
    }

    /// Logs a simple error message under `ErrorType::Other`.
    pub fn log_error_simple(&self, message: impl Into<String>) {
        self.log_error(ErrorEvent::new(ErrorType::Other, message));
    }

    /// Logs a warning event.
    pub fn log_warning(&self, event: WarningEvent) {
        self.push(DiagnosticEvent::new(DiagnosticEventKind::Warning(event)));
    }

    /// Logs a simple warning message.
    pub fn log_warning_simple(&self, message: impl Into<String>) {
        self.log_warning(WarningEvent::new(message));
    }

    /// Records a successful worker registration.
    pub fn log_worker_registered(&self, manifest: impl Into<String>) {
        self.push(DiagnosticEvent::new(DiagnosticEventKind::WorkerRegistered {
            manifest: manifest.into(),
        }));
    }

    fn push(&self, event: DiagnosticEvent) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(event);
        }
    }
}

/// Owns the event buffer and hands out logging handles.
///
/// Cloning shares the underlying buffer, so the background worker can hold
/// its own collector for flushing.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsCollector {
    buffer: SharedBuffer,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a cloneable handle for producers.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            buffer: Arc::clone(&self.buffer),
        }
    }

    /// Returns a snapshot of the buffered events in chronological order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<DiagnosticEvent> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Drains the buffered events and writes them to `writer`, one line per
    /// event. Used by the background housekeeping worker.
    pub fn flush_to(&self, writer: &mut impl Write) -> Result<usize> {
        let events = match self.buffer.lock() {
            Ok(mut buffer) => buffer.drain(),
            Err(_) => Vec::new(),
        };
        for event in &events {
            writeln!(writer, "{event}")?;
        }
        Ok(events.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_events_reach_the_collector() {
        let collector = DiagnosticsCollector::new();
        let handle = collector.handle();

        handle.log_error_simple("boom");
        handle.log_warning_simple("careful");

        let events = collector.snapshot();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0].kind, DiagnosticEventKind::Error(_)));
        assert!(matches!(events[1].kind, DiagnosticEventKind::Warning(_)));
    }

    #[test]
    fn cloned_handles_share_one_buffer() {
        let collector = DiagnosticsCollector::new();
        let a = collector.handle();
        let b = a.clone();

        a.log_error_simple("from a");
        b.log_error_simple("from b");

        assert_eq!(collector.snapshot().len(), 2);
    }

    #[test]
    fn flush_writes_lines_and_drains() {
        let collector = DiagnosticsCollector::new();
        collector.handle().log_warning_simple("one");
        collector.handle().log_warning_simple("two");

        let mut out = Vec::new();
        let written = collector.flush_to(&mut out).expect("flush failed");
        assert_eq!(written, 2);
        let text = String::from_utf8(out).expect("invalid utf8");
        assert_eq!(text.lines().count(), 2);

        // Buffer is empty after the flush
        assert!(collector.snapshot().is_empty());
    }
}
