// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard events are only listened to while the delete dialog or the new
//! entry form is shown. Escape cancels whichever is on top.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Event, Subscription};

/// Creates the keyboard subscription; `escape_enabled` is true while
/// something can be cancelled.
pub fn create_event_subscription(escape_enabled: bool) -> Subscription<Message> {
    if !escape_enabled {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window_id| match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    })
}
