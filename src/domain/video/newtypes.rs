// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for video playback values,
//! ensuring they are always within valid ranges.

use std::fmt;
use std::str::FromStr;

// =============================================================================
// PlaybackSpeed
// =============================================================================

/// Playback speed, restricted to the four presets offered by the player.
///
/// Storing the speed as an enum instead of a raw float means a lookup of
/// "the current preset" can never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaybackSpeed {
    /// 0.5x
    Half,
    /// 1.0x
    #[default]
    Normal,
    /// 1.5x
    OneAndHalf,
    /// 2.0x
    Double,
}

impl PlaybackSpeed {
    /// All presets, slowest first.
    pub const ALL: [PlaybackSpeed; 4] = [
        PlaybackSpeed::Half,
        PlaybackSpeed::Normal,
        PlaybackSpeed::OneAndHalf,
        PlaybackSpeed::Double,
    ];

    /// Returns the speed multiplier.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Half => 0.5,
            Self::Normal => 1.0,
            Self::OneAndHalf => 1.5,
            Self::Double => 2.0,
        }
    }

    /// Returns the preset matching `multiplier`, if any.
    #[must_use]
    pub fn from_multiplier(multiplier: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|speed| (speed.value() - multiplier).abs() < 0.001)
    }

    /// Position of this preset in [`PlaybackSpeed::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Half => 0,
            Self::Normal => 1,
            Self::OneAndHalf => 2,
            Self::Double => 3,
        }
    }

    /// Moves `delta` presets up (positive) or down (negative), stopping at either end.
    #[must_use]
    pub fn step(self, delta: isize) -> Self {
        let last = Self::ALL.len() - 1;
        let target = self.index().saturating_add_signed(delta).min(last);
        // saturating_add_signed already floors at zero
        Self::ALL[target]
    }

    /// Returns the next higher preset speed, or self if at maximum.
    #[must_use]
    pub fn increase(self) -> Self {
        self.step(1)
    }

    /// Returns the next lower preset speed, or self if at minimum.
    #[must_use]
    pub fn decrease(self) -> Self {
        self.step(-1)
    }
}

impl fmt::Display for PlaybackSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}x", self.value())
    }
}

impl FromStr for PlaybackSpeed {
    type Err = String;

    /// Accepts `1.5`, `1.5x` or `1.5X`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches(['x', 'X']);
        trimmed
            .parse::<f64>()
            .ok()
            .and_then(Self::from_multiplier)
            .ok_or_else(|| format!("unsupported playback speed: {s}"))
    }
}

// =============================================================================
// KeyboardSeekStep
// =============================================================================

/// Keyboard seek step bounds (0.5 to 30.0 seconds).
pub mod seek_step_bounds {
    /// Minimum keyboard seek step in seconds.
    pub const MIN: f64 = 0.5;
    /// Maximum keyboard seek step in seconds.
    pub const MAX: f64 = 30.0;
    /// Default keyboard seek step in seconds (arrow keys jump ±5 s).
    pub const DEFAULT: f64 = 5.0;
}

/// Keyboard seek step in seconds for video navigation.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (0.5–30.0 seconds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardSeekStep(f64);

impl KeyboardSeekStep {
    /// Creates a new keyboard seek step value, clamping to valid range.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(seek_step_bounds::MIN, seek_step_bounds::MAX))
    }

    /// Returns the value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for KeyboardSeekStep {
    fn default() -> Self {
        Self(seek_step_bounds::DEFAULT)
    }
}
