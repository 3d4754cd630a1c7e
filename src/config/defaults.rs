// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration entries.

use crate::domain::video::newtypes::seek_step_bounds;
use crate::domain::video::{Effect, PlaybackSpeed};

/// Fallback UI language.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Default keyboard seek step in seconds (arrow keys).
pub const DEFAULT_KEYBOARD_SEEK_STEP_SECS: f64 = seek_step_bounds::DEFAULT;

/// Minimum keyboard seek step in seconds.
pub const MIN_KEYBOARD_SEEK_STEP_SECS: f64 = seek_step_bounds::MIN;

/// Maximum keyboard seek step in seconds.
pub const MAX_KEYBOARD_SEEK_STEP_SECS: f64 = seek_step_bounds::MAX;

/// Default playback speed as written to `settings.toml`.
#[must_use]
pub fn default_speed() -> PlaybackSpeed {
    PlaybackSpeed::default()
}

/// Default frame effect as written to `settings.toml`.
#[must_use]
pub fn default_effect() -> Effect {
    Effect::default()
}
