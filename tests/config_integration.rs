// SPDX-License-Identifier: MPL-2.0
use iced_reel::config::{self, Config, GeneralConfig};
use iced_reel::domain::video::{Effect, PlaybackSpeed};
use iced_reel::i18n::fluent::I18n;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&english, &config_path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("play"), "Play");

    let turkish = Config {
        general: GeneralConfig {
            language: Some("tr".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&turkish, &config_path).expect("Failed to write updated config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to reload config");
    let i18n_tr = I18n::new(None, &loaded);
    assert_eq!(i18n_tr.current_locale().to_string(), "tr");
    assert_eq!(i18n_tr.tr("play"), "Oynat");
}

#[test]
fn test_cli_language_overrides_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("tr".to_string()),
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_playback_preferences_survive_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut config = Config::default();
    config.set_speed(PlaybackSpeed::Double);
    config.set_effect(Effect::Grayscale);
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to save config");

    let (reloaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(reloaded.speed(), PlaybackSpeed::Double);
    assert_eq!(reloaded.effect(), Effect::Grayscale);
}

#[test]
fn test_every_locale_translates_the_player_keys() {
    let keys = [
        "window-title",
        "play",
        "pause",
        "speed-label",
        "effect-label",
        "playlist-add",
        "playlist-clear",
        "playlist-empty",
        "dialog-video-files",
    ];
    let base = I18n::default();
    for locale in &base.available_locales {
        let mut i18n = I18n::default();
        i18n.set_locale(locale.clone());
        for key in keys {
            assert!(
                !i18n.tr(key).starts_with("MISSING"),
                "{locale} is missing {key}"
            );
        }
    }
}
