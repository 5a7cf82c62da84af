// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Each handler receives an [`UpdateContext`] with mutable references to
//! the state it may touch, keeping `App::update` itself a thin dispatcher.

use std::time::Instant;

use iced::widget::operation;
use iced::widget::scrollable::RelativeOffset;
use iced::{Point, Task};

use super::Message;
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, ErrorType};
use crate::error::Error;
use crate::ui::menu;
use crate::ui::notifications::{self, Notification, PushOutcome, Severity};
use crate::ui::theming::ThemeMode;
use crate::worker;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub menu_open: &'a mut bool,
    pub theme_mode: &'a mut ThemeMode,
    pub cursor: &'a mut Point,
    pub notifications: &'a mut notifications::Manager,
    pub diagnostics: &'a DiagnosticsHandle,
}

/// Shows a toast and, when it lands in the region, scrolls the region to
/// the top so the newest message is visible.
pub fn handle_show_toast(
    ctx: &mut UpdateContext<'_>,
    severity: Severity,
    message: String,
) -> Task<Message> {
    match ctx.notifications.push(Notification::new(severity, message)) {
        PushOutcome::Shown(_) => match ctx.notifications.region() {
            Some(region) => operation::snap_to(
                region.scrollable_id(),
                RelativeOffset { x: 0.0, y: 0.0 },
            ),
            None => Task::none(),
        },
        PushOutcome::MissingRegion => Task::none(),
    }
}

/// Routes a notification message (dismiss or tick) to the manager.
pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &notifications::NotificationMessage,
) -> Task<Message> {
    ctx.notifications.handle_message(message);
    Task::none()
}

/// Advances notification timers.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.tick(now);
    Task::none()
}

/// Applies a menu event produced by `menu::update`.
pub fn handle_menu_event(ctx: &mut UpdateContext<'_>, event: menu::Event) -> Task<Message> {
    match event {
        menu::Event::None => Task::none(),
        menu::Event::ToggleTheme => {
            *ctx.theme_mode = ctx.theme_mode.toggled();
            Task::none()
        }
        menu::Event::ClearNotifications => {
            ctx.notifications.clear();
            Task::none()
        }
        menu::Event::ShowAbout => handle_show_toast(
            ctx,
            Severity::Info,
            "Herald — toast notification shell".to_string(),
        ),
    }
}

/// Remembers where the cursor is so a later press can be classified.
pub fn handle_cursor_moved(ctx: &mut UpdateContext<'_>, position: Point) -> Task<Message> {
    *ctx.cursor = position;
    Task::none()
}

/// A left press closes the menu unless it lands inside the dropdown or on
/// the toggle control.
pub fn handle_mouse_pressed(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if *ctx.menu_open && !menu::is_inside_menu(*ctx.cursor) && !menu::is_on_toggle(*ctx.cursor) {
        *ctx.menu_open = false;
    }
    Task::none()
}

/// Escape closes the menu when open; otherwise it does nothing.
pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if *ctx.menu_open {
        *ctx.menu_open = false;
    }
    Task::none()
}

/// Records the worker registration outcome. Nothing else happens in either
/// case.
pub fn handle_worker_registered(
    ctx: &mut UpdateContext<'_>,
    result: &Result<worker::Registration, Error>,
) -> Task<Message> {
    match result {
        Ok(registration) => {
            ctx.diagnostics
                .log_worker_registered(registration.manifest_path.display().to_string());
        }
        Err(err) => {
            ctx.diagnostics.log_error(ErrorEvent::new(
                ErrorType::WorkerRegistration,
                err.to_string(),
            ));
        }
    }
    Task::none()
}
