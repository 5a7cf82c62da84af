// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Raw mouse and keyboard events are translated into the small set of
//! app-level messages the menu auto-close behavior needs. The periodic tick
//! only runs while a notification is alive.

use super::Message;
use iced::keyboard::{self, key};
use iced::{event, mouse, time, Subscription};
use std::time::Duration;

/// Listens for the raw events the shell cares about: cursor position (to
/// know where a later click lands), left mouse presses, and Escape.
///
/// Presses are forwarded even when a widget captured them: a click on some
/// other control still counts as a click outside the menu.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position))
        }
        event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::MousePressed)
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
