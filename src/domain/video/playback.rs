// SPDX-License-Identifier: MPL-2.0
//! Video playback state machine.
//!
//! This module defines the playback states for the player:
//! Stopped ⇄ Playing ⇄ Paused.

/// Represents the current playback state of a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// No frames are being delivered. Either nothing is open, or the last
    /// playlist entry ran out and the cursor was rewound to the first frame.
    #[default]
    Stopped,
    /// Video is currently playing.
    Playing,
    /// Video is paused at current position.
    Paused,
}

impl PlaybackState {
    /// Returns true if the video is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if the video is paused.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns true if the video is stopped.
    #[must_use]
    pub fn is_stopped(self) -> bool {
        matches!(self, Self::Stopped)
    }

    /// Returns the state reached by a play/pause toggle.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Playing => Self::Paused,
            Self::Paused | Self::Stopped => Self::Playing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_stopped() {
        assert_eq!(PlaybackState::default(), PlaybackState::Stopped);
    }

    #[test]
    fn test_state_checks() {
        assert!(PlaybackState::Playing.is_playing());
        assert!(!PlaybackState::Paused.is_playing());

        assert!(PlaybackState::Paused.is_paused());
        assert!(!PlaybackState::Playing.is_paused());

        assert!(PlaybackState::Stopped.is_stopped());
        assert!(!PlaybackState::Playing.is_stopped());
    }

    #[test]
    fn test_toggled() {
        assert_eq!(PlaybackState::Playing.toggled(), PlaybackState::Paused);
        assert_eq!(PlaybackState::Paused.toggled(), PlaybackState::Playing);
        assert_eq!(PlaybackState::Stopped.toggled(), PlaybackState::Playing);
    }
}
