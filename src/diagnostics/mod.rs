// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting reportable conditions.
//!
//! The shell never surfaces its internal failures to the user: a missing
//! toast display region or a failed worker registration is recorded here and
//! nowhere else. Events are stored in a memory-bounded circular buffer and
//! periodically flushed to `diagnostics.log` by the background worker.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: timestamped event with a kind tag
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: owner and cloneable
//!   producer handle

mod buffer;
mod collector;
mod events;

pub use buffer::{CircularBuffer, DEFAULT_CAPACITY};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, WarningEvent,
};
