// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the display region and the single visible toast.
//! The shell shows at most one notification at a time: pushing a new one
//! replaces whatever is currently shown. This mirrors how an inline alert
//! banner behaves at the top of a content area, as opposed to a stacking
//! toast tray.

use std::time::Instant;

use iced::widget::Id;

use super::notification::{Notification, NotificationId};
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, ErrorType};

/// Names the scrollable content region that toasts are inserted into.
///
/// The manager holds this explicitly instead of resolving an ambient
/// target on every push; a manager without a region models a page that
/// lacks the expected content area.
#[derive(Debug, Clone)]
pub struct DisplayRegion {
    scrollable_id: Id,
}

impl DisplayRegion {
    #[must_use]
    pub fn new(scrollable_id: Id) -> Self {
        Self { scrollable_id }
    }

    /// The id of the scrollable the app scrolls to the top on insertion.
    #[must_use]
    pub fn scrollable_id(&self) -> Id {
        self.scrollable_id.clone()
    }
}

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for advancing lifecycle timers.
    Tick(Instant),
}

/// Result of pushing a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// The notification is now shown; the caller should scroll the region
    /// to the top so it is visible.
    Shown(NotificationId),
    /// No display region is configured; nothing was shown.
    MissingRegion,
}

/// Manages the display region and the currently shown notification.
#[derive(Debug, Default)]
pub struct Manager {
    region: Option<DisplayRegion>,
    current: Option<Notification>,
    /// Optional diagnostics handle for reporting the missing-region condition.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager {
    /// Creates a manager without a display region. Pushes will be reported
    /// and dropped until a region is set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager bound to a display region.
    #[must_use]
    pub fn with_region(region: DisplayRegion) -> Self {
        Self {
            region: Some(region),
            ..Self::default()
        }
    }

    /// Sets the display region.
    pub fn set_region(&mut self, region: DisplayRegion) {
        self.region = Some(region);
    }

    /// Returns the display region, if configured.
    #[must_use]
    pub fn region(&self) -> Option<&DisplayRegion> {
        self.region.as_ref()
    }

    /// Sets the diagnostics handle for reporting error conditions.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Shows a notification, replacing any notification currently shown.
    ///
    /// If no display region is configured the condition is reported to
    /// diagnostics and nothing happens; the caller sees the outcome tag but
    /// no error is raised.
    pub fn push(&mut self, notification: Notification) -> PushOutcome {
        if self.region.is_none() {
            if let Some(handle) = &self.diagnostics {
                handle.log_error(ErrorEvent::new(
                    ErrorType::MissingRegion,
                    "notification display region not found",
                ));
            }
            return PushOutcome::MissingRegion;
        }

        let id = notification.id();
        self.current = Some(notification);
        PushOutcome::Shown(id)
    }

    /// Dismisses a notification by its ID, removing it immediately.
    ///
    /// Returns `true` if the notification was shown and got removed. The
    /// timers that would have expired it later find nothing to do.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match &mut self.current {
            Some(current) if current.id() == id => {
                current.dismiss();
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Advances the lifecycle of the shown notification and drops it once
    /// it reaches the terminal phase. Safe to call with nothing shown.
    pub fn tick(&mut self, now: Instant) {
        if let Some(current) = &mut self.current {
            current.tick(now);
            if current.is_removed() {
                self.current = None;
            }
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => {
                self.tick(*now);
            }
        }
    }

    /// Returns the currently shown notification.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Returns whether a notification is currently shown.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        self.current.is_some()
    }

    /// Removes any shown notification.
    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
    use crate::ui::notifications::notification::{EXIT_TRANSITION, LIFETIME};

    fn region() -> DisplayRegion {
        DisplayRegion::new(Id::unique())
    }

    #[test]
    fn display_region_hands_back_the_widget_id() {
        let id = Id::new("content-region");
        let region = DisplayRegion::new(id.clone());
        assert_eq!(region.scrollable_id(), id);
    }

    #[test]
    fn new_manager_shows_nothing() {
        let manager = Manager::new();
        assert!(manager.current().is_none());
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_without_region_is_reported_and_dropped() {
        let collector = DiagnosticsCollector::new();
        let mut manager = Manager::new();
        manager.set_diagnostics(collector.handle());

        let outcome = manager.push(Notification::info("lost"));

        assert_eq!(outcome, PushOutcome::MissingRegion);
        assert!(manager.current().is_none());
        let events = collector.snapshot();
        assert_eq!(events.len(), 1);
        match &events[0].kind {
            DiagnosticEventKind::Error(event) => {
                assert_eq!(event.error_type, ErrorType::MissingRegion);
            }
            other => panic!("expected error event, got {other:?}"),
        }
    }

    #[test]
    fn push_with_region_shows_the_notification() {
        let mut manager = Manager::with_region(region());
        let notification = Notification::success("saved");
        let id = notification.id();

        assert_eq!(manager.push(notification), PushOutcome::Shown(id));
        assert_eq!(manager.current().map(Notification::id), Some(id));
    }

    #[test]
    fn push_replaces_the_shown_notification() {
        let mut manager = Manager::with_region(region());
        manager.push(Notification::info("first"));
        let second = Notification::error("second");
        let second_id = second.id();

        manager.push(second);

        // Mutual exclusion: exactly one notification, the newest.
        assert_eq!(manager.current().map(Notification::id), Some(second_id));
    }

    #[test]
    fn dismiss_removes_immediately() {
        let mut manager = Manager::with_region(region());
        let notification = Notification::info("bye");
        let id = notification.id();
        manager.push(notification);

        assert!(manager.dismiss(id));
        assert!(manager.current().is_none());
    }

    #[test]
    fn dismiss_unknown_id_returns_false() {
        let mut manager = Manager::with_region(region());
        manager.push(Notification::info("shown"));
        let unrelated = Notification::info("never pushed").id();

        assert!(!manager.dismiss(unrelated));
        assert!(manager.has_notifications());
    }

    #[test]
    fn tick_expires_the_notification() {
        let mut manager = Manager::with_region(region());
        let notification = Notification::info("ephemeral");
        let created = notification.created_at();
        manager.push(notification);

        // Still present during the exit fade
        manager.tick(created + LIFETIME);
        assert!(manager.has_notifications());

        manager.tick(created + LIFETIME + EXIT_TRANSITION);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn tick_after_manual_dismissal_is_a_no_op() {
        let mut manager = Manager::with_region(region());
        let notification = Notification::info("raced");
        let id = notification.id();
        let created = notification.created_at();
        manager.push(notification);

        manager.dismiss(id);
        // The still-pending timer fires later and finds nothing.
        manager.tick(created + LIFETIME + EXIT_TRANSITION);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn handle_message_routes_dismiss() {
        let mut manager = Manager::with_region(region());
        let notification = Notification::info("routed");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn clear_removes_the_notification() {
        let mut manager = Manager::with_region(region());
        manager.push(Notification::info("gone"));
        manager.clear();
        assert!(!manager.has_notifications());
    }
}
