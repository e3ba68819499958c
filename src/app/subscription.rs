// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native keyboard and window events into top-level messages. Key
//! presses already captured by a focused widget are not forwarded.

use super::Message;
use iced::{event, keyboard, window, Subscription};

/// Creates the native event subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => Some(Message::CloseRequested),
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => Some(Message::KeyPressed(key)),
            event::Status::Captured => None,
        },
        _ => None,
    })
}
