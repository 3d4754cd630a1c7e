// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` owns the single [`PlaybackController`] and wires it to the
//! window: messages become controller calls, ticks become frames on screen,
//! and speed/effect choices are persisted to the config file.

mod message;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use subscription::{shortcut_for, Shortcut};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::media::FfmpegOpener;
use crate::ui::playlist::entry_label;
use crate::video_player::{FrameClock, PlaybackController};
use iced::widget::image;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    player: PlaybackController<FfmpegOpener>,
    clock: FrameClock,
    /// Last frame produced by the player.
    frame: Option<image::Handle>,
    /// Slider position while the progress handle is being dragged.
    seek_preview: Option<f64>,
    window_id: Option<window::Id>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("state", &self.player.state())
            .field("current", &self.player.current_path())
            .field("playlist_len", &self.player.playlist().len())
            .field("window_id", &self.window_id)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 400;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot function, flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the config and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!("{warning}; using default settings");
        }
        Self::with_config(flags, config)
    }

    /// Builds the initial state from an already loaded config, queues the
    /// startup files and starts the tick chain.
    fn with_config(flags: Flags, config: Config) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, &config);
        let player = PlaybackController::new(FfmpegOpener).with_preferences(
            config.speed(),
            config.effect(),
            config.seek_step(),
        );

        let mut app = Self {
            i18n,
            config,
            player,
            clock: FrameClock::new(),
            frame: None,
            seek_preview: None,
            window_id: None,
        };

        if !flags.files.is_empty() {
            if let Err(error) = app.player.add(flags.files) {
                tracing::debug!(%error, "startup video could not be opened");
            }
        }

        let task = update::restart_clock(&mut app);
        (app, task)
    }

    fn title(&self) -> String {
        match self.player.current_path() {
            Some(path) => {
                let file = entry_label(path);
                self.i18n
                    .tr_with_args("window-title-file", &[("file", file.as_str())])
            }
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            frame: self.frame.as_ref(),
            playlist: self.player.playlist(),
            state: self.player.state(),
            has_video: self.player.has_session(),
            progress: self
                .seek_preview
                .unwrap_or_else(|| self.player.progress()),
            speed: self.player.speed(),
            effect: self.player.effect(),
            fullscreen: self.player.is_fullscreen(),
        })
    }
}
