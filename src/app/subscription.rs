// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard and window events are turned into [`Message`]s here.
//! Keys already captured by a focused widget are left alone.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, window, Subscription};

/// Keyboard shortcuts understood by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Space
    TogglePlayback,
    /// F11
    ToggleFullscreen,
    /// Escape
    ExitFullscreen,
    /// Left arrow
    SeekBackward,
    /// Right arrow
    SeekForward,
    /// Up arrow
    SpeedUp,
    /// Down arrow
    SpeedDown,
}

/// Maps a pressed key to its shortcut, if any.
#[must_use]
pub fn shortcut_for(key: &Key) -> Option<Shortcut> {
    match key {
        Key::Named(Named::Space) => Some(Shortcut::TogglePlayback),
        Key::Named(Named::F11) => Some(Shortcut::ToggleFullscreen),
        Key::Named(Named::Escape) => Some(Shortcut::ExitFullscreen),
        Key::Named(Named::ArrowLeft) => Some(Shortcut::SeekBackward),
        Key::Named(Named::ArrowRight) => Some(Shortcut::SeekForward),
        Key::Named(Named::ArrowUp) => Some(Shortcut::SpeedUp),
        Key::Named(Named::ArrowDown) => Some(Shortcut::SpeedDown),
        _ => None,
    }
}

/// Keyboard shortcuts, window resizes and file drops.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => shortcut_for(&key).map(|shortcut| Message::Shortcut {
                window: window_id,
                shortcut,
            }),
            event::Status::Captured => None,
        },
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            window: window_id,
            size,
        }),
        event::Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_all_seven_shortcuts() {
        let cases = [
            (Named::Space, Shortcut::TogglePlayback),
            (Named::F11, Shortcut::ToggleFullscreen),
            (Named::Escape, Shortcut::ExitFullscreen),
            (Named::ArrowLeft, Shortcut::SeekBackward),
            (Named::ArrowRight, Shortcut::SeekForward),
            (Named::ArrowUp, Shortcut::SpeedUp),
            (Named::ArrowDown, Shortcut::SpeedDown),
        ];
        for (named, expected) in cases {
            assert_eq!(shortcut_for(&Key::Named(named)), Some(expected));
        }
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(shortcut_for(&Key::Named(Named::Enter)), None);
        assert_eq!(shortcut_for(&Key::Character("k".into())), None);
    }
}
