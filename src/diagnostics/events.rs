// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.
//!
//! Events capture the conditions the shell is contractually required to
//! report without surfacing them to the user: a missing toast display
//! region, worker registration outcomes, and config loading problems.

use std::fmt;

use chrono::{DateTime, Utc};

/// Category for error events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// No display region was configured when a toast was pushed.
    MissingRegion,
    /// Background worker registration failed.
    WorkerRegistration,
    /// Configuration could not be read or parsed.
    Config,
    /// Anything else.
    Other,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorType::MissingRegion => "missing-region",
            ErrorType::WorkerRegistration => "worker-registration",
            ErrorType::Config => "config",
            ErrorType::Other => "other",
        };
        write!(f, "{label}")
    }
}

/// An error condition worth recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// A recoverable condition worth recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningEvent {
    pub message: String,
}

impl WarningEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The different kinds of events the collector accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEventKind {
    Error(ErrorEvent),
    Warning(WarningEvent),
    /// The background worker was registered.
    WorkerRegistered { manifest: String },
}

/// A timestamped diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEvent {
    pub at: DateTime<Utc>,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            at: Utc::now(),
            kind,
        }
    }
}

impl fmt::Display for DiagnosticEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stamp = self.at.format("%Y-%m-%dT%H:%M:%S%.3fZ");
        match &self.kind {
            DiagnosticEventKind::Error(event) => {
                write!(f, "{stamp} [ERROR] ({}) {}", event.error_type, event.message)
            }
            DiagnosticEventKind::Warning(event) => {
                write!(f, "{stamp} [WARN] {}", event.message)
            }
            DiagnosticEventKind::WorkerRegistered { manifest } => {
                write!(f, "{stamp} [INFO] worker registered: {manifest}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_event_display_includes_type_and_message() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error(ErrorEvent::new(
            ErrorType::MissingRegion,
            "notification display region not found",
        )));
        let line = event.to_string();
        assert!(line.contains("[ERROR]"));
        assert!(line.contains("missing-region"));
        assert!(line.contains("display region not found"));
    }

    #[test]
    fn warning_event_display_is_tagged_warn() {
        let event =
            DiagnosticEvent::new(DiagnosticEventKind::Warning(WarningEvent::new("slow disk")));
        assert!(event.to_string().contains("[WARN] slow disk"));
    }

    #[test]
    fn worker_registered_display_names_manifest() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::WorkerRegistered {
            manifest: "workers/service-worker.toml".to_string(),
        });
        assert!(event.to_string().contains("service-worker.toml"));
    }
}
