// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Speed and effect choices are written back to `settings.toml` as soon as
//! the user changes them.

use crate::config::{self, Config};
use crate::domain::video::{Effect, PlaybackSpeed};

/// Records the current playback preferences in `cfg` and saves it to disk.
///
/// Guarded during tests to keep isolation: the in-memory config is still
/// updated so tests can observe it.
pub fn persist_playback(cfg: &mut Config, speed: PlaybackSpeed, effect: Effect) {
    cfg.set_speed(speed);
    cfg.set_effect(effect);

    if cfg!(test) {
        return;
    }

    if let Err(error) = config::save(cfg) {
        tracing::warn!(%error, "failed to save config");
    }
}
