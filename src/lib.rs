// SPDX-License-Identifier: MPL-2.0
//! `iced_herald` is a toast notification shell built with the Iced GUI
//! framework.
//!
//! It shows one transient toast at a time inside a scrollable content
//! region, closes its dropdown menu on outside clicks and Escape, and
//! registers a background worker that flushes diagnostics to disk.

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod ui;
pub mod worker;
