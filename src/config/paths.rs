// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - parameter to [`config_dir_with_override`] (for tests)
//! 2. **CLI argument** `--config-dir`, set once via [`init_cli_override`]
//! 3. **Environment variable** `ICED_REEL_CONFIG_DIR`
//! 4. **Platform default** - `dirs::config_dir()` joined with the app name

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedReel";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_REEL_CONFIG_DIR";

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` CLI argument.
///
/// Only the first call has an effect; later calls are ignored with a warning.
pub fn init_cli_override(config_dir: Option<PathBuf>) {
    if CLI_CONFIG_DIR.set(config_dir).is_err() {
        tracing::warn!("config directory override already initialized");
    }
}

fn cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory, e.g. `~/.config/IcedReel/` on
/// Linux, with an optional override that takes precedence over everything else.
///
/// Returns `None` if no directory can be determined.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let dir = PathBuf::from("/tmp/iced_reel_override");
        assert_eq!(config_dir_with_override(Some(dir.clone())), Some(dir));
    }

    #[test]
    fn platform_default_ends_with_app_name() {
        // Only meaningful when neither CLI nor environment overrides are set
        if std::env::var(ENV_CONFIG_DIR).is_ok() || cli_config_dir().is_some() {
            return;
        }
        if let Some(path) = config_dir_with_override(None) {
            assert!(path.ends_with(APP_NAME));
        }
    }
}
