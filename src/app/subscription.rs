// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard and drag-and-drop events are mapped to top-level messages
//! here; whether they have any effect is decided by the gallery controller.

use super::Message;
use crate::config::ANIMATION_TICK;
use crate::gallery::NavKey;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Event, Subscription};

/// Routes keyboard and file drag-and-drop events.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        Event::Window(window::Event::FileHovered(_)) => Some(Message::FilesHovered),
        Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => nav_key(&key).map(Message::Key),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Creates the periodic tick driving fades and toast expiry.
///
/// Only runs while something on screen is changing.
pub fn create_tick_subscription(animating: bool, has_notifications: bool) -> Subscription<Message> {
    if animating || has_notifications {
        time::every(ANIMATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

fn nav_key(key: &Key) -> Option<NavKey> {
    match key {
        Key::Named(Named::Escape) => Some(NavKey::Escape),
        Key::Named(Named::ArrowLeft) => Some(NavKey::ArrowLeft),
        Key::Named(Named::ArrowRight) => Some(NavKey::ArrowRight),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_keys_are_recognized() {
        assert_eq!(nav_key(&Key::Named(Named::Escape)), Some(NavKey::Escape));
        assert_eq!(
            nav_key(&Key::Named(Named::ArrowLeft)),
            Some(NavKey::ArrowLeft)
        );
        assert_eq!(
            nav_key(&Key::Named(Named::ArrowRight)),
            Some(NavKey::ArrowRight)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(nav_key(&Key::Named(Named::ArrowUp)), None);
        assert_eq!(nav_key(&Key::Character("a".into())), None);
    }
}
