// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear as an inline alert banner at the top of the content
//! region, stay for 5 seconds, fade out over 300 ms, and can be dismissed
//! early with the close button. At most one notification is shown at a
//! time; a newer one replaces the current one.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels and
//!   an explicit lifecycle phase
//! - [`manager`] - `Manager` owning the display region and the shown toast
//! - [`toast`] - Toast widget component for rendering
//!
//! # Usage
//!
//! ```ignore
//! use iced_herald::ui::notifications::{DisplayRegion, Manager, Notification};
//!
//! let mut manager = Manager::with_region(DisplayRegion::new(scroll_id));
//! manager.push(Notification::success("Saved"));
//!
//! // In the view function, render the banner slot
//! let banner = Toast::view_banner(&manager).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{DisplayRegion, Manager, Message as NotificationMessage, PushOutcome};
pub use notification::{
    Notification, NotificationId, Phase, Severity, EXIT_TRANSITION, LIFETIME,
};
pub use toast::Toast;
