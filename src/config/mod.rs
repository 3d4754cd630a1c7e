// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[playback]` - playback speed, frame effect and keyboard seek step
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_REEL_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_reel::config::{self, Config};
//! use iced_reel::domain::video::PlaybackSpeed;
//!
//! let (mut config, _warning) = config::load();
//! config.set_speed(PlaybackSpeed::Double);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::video::{Effect, KeyboardSeekStep, PlaybackSpeed};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "tr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Playback preferences.
///
/// Values are kept as written in the file and parsed on access, so one bad
/// entry does not throw away the whole section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    /// Playback speed, e.g. `"1.5x"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,

    /// Frame effect name, e.g. `"sepia"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,

    /// Keyboard seek step in seconds (arrow keys).
    #[serde(
        default = "default_seek_step_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub seek_step_secs: Option<f64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed: Some(default_speed().to_string()),
            effect: Some(default_effect().to_string()),
            seek_step_secs: default_seek_step_secs(),
        }
    }
}

fn default_seek_step_secs() -> Option<f64> {
    Some(DEFAULT_KEYBOARD_SEEK_STEP_SECS)
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub playback: PlaybackConfig,
}

impl Config {
    /// Stored playback speed, or the default when missing or unsupported.
    #[must_use]
    pub fn speed(&self) -> PlaybackSpeed {
        parse_or_default(self.playback.speed.as_deref(), "speed")
    }

    /// Stored frame effect, or the default when missing or unknown.
    #[must_use]
    pub fn effect(&self) -> Effect {
        parse_or_default(self.playback.effect.as_deref(), "effect")
    }

    /// Stored keyboard seek step, clamped to the supported range.
    #[must_use]
    pub fn seek_step(&self) -> KeyboardSeekStep {
        self.playback
            .seek_step_secs
            .map(KeyboardSeekStep::new)
            .unwrap_or_default()
    }

    pub fn set_speed(&mut self, speed: PlaybackSpeed) {
        self.playback.speed = Some(speed.to_string());
    }

    pub fn set_effect(&mut self, effect: Effect) {
        self.playback.effect = Some(effect.to_string());
    }
}

fn parse_or_default<T>(raw: Option<&str>, field: &str) -> T
where
    T: std::str::FromStr<Err = String> + Default,
{
    match raw.map(str::parse::<T>) {
        Some(Ok(value)) => value,
        Some(Err(e)) => {
            tracing::warn!(field, error = %e, "ignoring invalid playback setting");
            T::default()
        }
        None => T::default(),
    }
}

/// Returns the config file path with an optional directory override.
fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(e) => (
            Config::default(),
            Some(format!("Could not read {}: {e}", path.display())),
        ),
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
