// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::menu;
use crate::ui::notifications;
use crate::worker;
use iced::Point;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Menu(menu::Message),
    Notification(notifications::NotificationMessage),
    /// Show a toast. Emitted by the content triggers; embedding code can
    /// feed the same message from anywhere.
    ShowToast {
        severity: notifications::Severity,
        message: String,
    },
    /// Periodic tick driving notification lifecycle timers.
    Tick(Instant),
    /// The cursor moved; tracked for outside-click detection.
    CursorMoved(Point),
    /// A left mouse button press anywhere in the window.
    MousePressed,
    /// Escape was pressed anywhere in the window.
    EscapePressed,
    /// Result of the startup worker registration.
    WorkerRegistered(Result<worker::Registration, Error>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional theme mode override (`light`, `dark`, `system`).
    pub theme: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_HERALD_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Optional data directory override (worker manifest, diagnostics log).
    /// Takes precedence over `ICED_HERALD_DATA_DIR`.
    pub data_dir: Option<String>,
}
