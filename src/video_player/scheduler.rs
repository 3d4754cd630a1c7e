// SPDX-License-Identifier: MPL-2.0
//! Frame pacing for the timer-driven playback loop.
//!
//! Playback is driven by a chain of one-shot timers: every tick computes the
//! delay until its successor. [`FrameClock`] tags each chain with a
//! generation so a restarted chain silently retires the old one.

use crate::domain::video::PlaybackSpeed;
use std::time::Duration;

/// Poll interval while nothing is playing.
pub const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Delay between two frames: `1000 / (fps * speed)` milliseconds, truncated.
///
/// Falls back to [`IDLE_POLL_INTERVAL`] when the stream reports no usable
/// frame rate.
#[must_use]
pub fn frame_delay(fps: f64, speed: PlaybackSpeed) -> Duration {
    let rate = fps * speed.value();
    if !rate.is_finite() || rate <= 0.0 {
        return IDLE_POLL_INTERVAL;
    }
    Duration::from_millis((1000.0 / rate) as u64)
}

/// Generation counter for the tick chain.
#[derive(Debug, Default)]
pub struct FrameClock {
    generation: u64,
}

impl FrameClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new chain and returns its id. Ticks carrying an older id are
    /// no longer current.
    pub fn restart(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Returns true if `id` belongs to the live chain.
    #[must_use]
    pub fn is_current(&self, id: u64) -> bool {
        id == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_truncates_integer_milliseconds() {
        assert_eq!(
            frame_delay(30.0, PlaybackSpeed::Double),
            Duration::from_millis(16)
        );
        assert_eq!(
            frame_delay(30.0, PlaybackSpeed::Normal),
            Duration::from_millis(33)
        );
        assert_eq!(
            frame_delay(25.0, PlaybackSpeed::Half),
            Duration::from_millis(80)
        );
        assert_eq!(
            frame_delay(29.97, PlaybackSpeed::OneAndHalf),
            Duration::from_millis(22)
        );
    }

    #[test]
    fn delay_without_frame_rate_falls_back_to_idle() {
        assert_eq!(frame_delay(0.0, PlaybackSpeed::Normal), IDLE_POLL_INTERVAL);
        assert_eq!(frame_delay(-1.0, PlaybackSpeed::Normal), IDLE_POLL_INTERVAL);
        assert_eq!(
            frame_delay(f64::NAN, PlaybackSpeed::Normal),
            IDLE_POLL_INTERVAL
        );
    }

    #[test]
    fn restart_retires_previous_chain() {
        let mut clock = FrameClock::new();
        let first = clock.restart();
        assert!(clock.is_current(first));

        let second = clock.restart();
        assert!(clock.is_current(second));
        assert!(!clock.is_current(first));
    }
}
