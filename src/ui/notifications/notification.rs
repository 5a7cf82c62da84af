// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, the `Severity` enum, and
//! the explicit `Phase` lifecycle. Every notification lives for a fixed
//! 5000 ms, then fades out over a further 300 ms before removal. Manual
//! dismissal short-circuits straight to the removed state; both triggers
//! land in the same terminal phase, so double removal is a safe no-op.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// How long a notification stays fully visible.
pub const LIFETIME: Duration = Duration::from_millis(5000);

/// How long the exit fade runs before the notification is removed.
pub const EXIT_TRANSITION: Duration = Duration::from_millis(300);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines icon and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Informational message (blue, info-circle icon).
    #[default]
    Info,
    /// Operation completed successfully (green, check-circle icon).
    Success,
    /// Something went wrong (red, exclamation-triangle icon).
    Error,
}

impl Severity {
    /// Parses a severity keyword. Anything other than `success` or `error`
    /// resolves to `Info`.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "success" => Severity::Success,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
        }
    }
}

/// Lifecycle state of a notification.
///
/// Transitions are linear and irreversible: `Visible` becomes `Exiting`
/// once the lifetime elapses, `Exiting` becomes `Removed` once the fade
/// finishes. Manual dismissal jumps to `Removed` from either earlier phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    Exiting { since: Instant },
    Removed,
}

/// A notification to be displayed to the user.
///
/// The message is plain text and is always rendered as text, never as
/// markup, regardless of its content.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    created_at: Instant,
    phase: Phase,
}

impl Notification {
    /// Creates a new notification with the given severity and message.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            created_at: Instant::now(),
            phase: Phase::Visible,
        }
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whether this notification has reached the terminal phase.
    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.phase == Phase::Removed
    }

    /// Advances the lifecycle based on `now`.
    ///
    /// `Visible` enters `Exiting` once the lifetime has elapsed; `Exiting`
    /// enters `Removed` once the fade duration has elapsed. A single tick
    /// can cross both boundaries when enough time has passed. Ticking a
    /// removed notification does nothing.
    pub fn tick(&mut self, now: Instant) {
        if let Phase::Visible = self.phase {
            if now.saturating_duration_since(self.created_at) >= LIFETIME {
                // The fade starts at the lifetime boundary, not at the
                // observation instant, so a late tick cannot extend it.
                self.phase = Phase::Exiting {
                    since: self.created_at + LIFETIME,
                };
            }
        }
        if let Phase::Exiting { since } = self.phase {
            if now.saturating_duration_since(since) >= EXIT_TRANSITION {
                self.phase = Phase::Removed;
            }
        }
    }

    /// Dismisses the notification immediately, independent of timers.
    /// Idempotent: dismissing an already removed notification is a no-op.
    pub fn dismiss(&mut self) {
        self.phase = Phase::Removed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let a = Notification::info("test");
        let b = Notification::info("test");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn severity_keyword_defaults_to_info() {
        assert_eq!(Severity::from_keyword("success"), Severity::Success);
        assert_eq!(Severity::from_keyword("error"), Severity::Error);
        assert_eq!(Severity::from_keyword("info"), Severity::Info);
        assert_eq!(Severity::from_keyword("warning"), Severity::Info);
        assert_eq!(Severity::from_keyword(""), Severity::Info);
        assert_eq!(Severity::from_keyword("ERROR"), Severity::Info);
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(Severity::Info.color(), Severity::Success.color());
        assert_ne!(Severity::Info.color(), Severity::Error.color());
        assert_ne!(Severity::Success.color(), Severity::Error.color());
    }

    #[test]
    fn constructors_set_severity() {
        assert_eq!(Notification::info("").severity(), Severity::Info);
        assert_eq!(Notification::success("").severity(), Severity::Success);
        assert_eq!(Notification::error("").severity(), Severity::Error);
    }

    #[test]
    fn stays_visible_before_lifetime() {
        let mut n = Notification::info("hello");
        let just_before = n.created_at() + LIFETIME - Duration::from_millis(1);
        n.tick(just_before);
        assert_eq!(n.phase(), Phase::Visible);
    }

    #[test]
    fn enters_exiting_at_lifetime() {
        let mut n = Notification::info("hello");
        n.tick(n.created_at() + LIFETIME);
        assert!(matches!(n.phase(), Phase::Exiting { .. }));
    }

    #[test]
    fn removed_after_lifetime_plus_transition() {
        let mut n = Notification::info("hello");
        n.tick(n.created_at() + LIFETIME + EXIT_TRANSITION);
        assert!(n.is_removed());
    }

    #[test]
    fn exit_fade_is_anchored_to_the_lifetime_boundary() {
        let mut n = Notification::info("hello");
        // First observation happens late, well into the fade window.
        let late = n.created_at() + LIFETIME + EXIT_TRANSITION - Duration::from_millis(1);
        n.tick(late);
        assert!(matches!(n.phase(), Phase::Exiting { .. }));
        // One more millisecond crosses the removal boundary.
        n.tick(late + Duration::from_millis(1));
        assert!(n.is_removed());
    }

    #[test]
    fn dismiss_short_circuits_to_removed() {
        let mut n = Notification::info("hello");
        n.dismiss();
        assert!(n.is_removed());
    }

    #[test]
    fn ticking_a_removed_notification_is_a_no_op() {
        let mut n = Notification::info("hello");
        n.dismiss();
        n.tick(n.created_at() + LIFETIME + EXIT_TRANSITION);
        assert!(n.is_removed());
    }

    #[test]
    fn ticks_before_creation_are_tolerated() {
        let mut n = Notification::info("hello");
        // A tick captured before the notification existed must not panic.
        n.tick(n.created_at() - Duration::from_millis(10));
        assert_eq!(n.phase(), Phase::Visible);
    }
}
