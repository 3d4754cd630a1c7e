// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Every frame is produced by a `Message::Tick` carrying the generation of the
//! timer chain that scheduled it. Ticks from a retired chain are dropped, so
//! restarting the chain never leaves two loops running.

use super::persistence;
use super::subscription::Shortcut;
use super::{App, Message};
use crate::media::extensions::{self, VIDEO_EXTENSIONS};
use crate::video_player::TickOutcome;
use iced::widget::image;
use iced::{window, Task};
use image_rs::RgbaImage;
use std::path::PathBuf;
use std::time::Duration;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Tick(generation) => handle_tick(app, generation),
        Message::TogglePlayback => {
            app.player.toggle_play();
            Task::none()
        }
        Message::SeekDragged(percent) => {
            app.seek_preview = Some(percent);
            Task::none()
        }
        Message::SeekReleased => {
            if let Some(percent) = app.seek_preview.take() {
                app.player.seek(percent);
            }
            Task::none()
        }
        Message::SpeedSelected(speed) => {
            app.player.set_speed(speed);
            persist(app);
            Task::none()
        }
        Message::EffectSelected(choice) => {
            app.player.set_effect(choice.effect);
            persist(app);
            Task::none()
        }
        Message::AddFiles => pick_files(
            app.i18n.tr("playlist-add"),
            app.i18n.tr("dialog-video-files"),
        ),
        Message::FilesPicked(Some(paths)) => add_paths(app, paths),
        Message::FilesPicked(None) => Task::none(),
        Message::FileDropped(path) => {
            if !extensions::is_video_path(&path) {
                tracing::debug!(path = %path.display(), "ignoring dropped non-video file");
                return Task::none();
            }
            add_paths(app, vec![path])
        }
        Message::ClearPlaylist => {
            app.player.clear();
            app.frame = None;
            Task::none()
        }
        Message::PlaylistSelected(index) => match app.player.select(index) {
            Ok(true) => restart_clock(app),
            Ok(false) => Task::none(),
            Err(_) => {
                app.frame = None;
                Task::none()
            }
        },
        Message::Shortcut { window, shortcut } => handle_shortcut(app, window, shortcut),
        Message::WindowResized { window, size } => {
            app.window_id = Some(window);
            app.player
                .set_viewport(size.width.round() as u32, size.height.round() as u32);
            Task::none()
        }
    }
}

/// Schedules the tick for `generation` after `delay`.
pub(super) fn schedule_tick(generation: u64, delay: Duration) -> Task<Message> {
    // The timer is created lazily, inside the executor's runtime
    Task::perform(
        async move { tokio::time::sleep(delay).await },
        move |()| Message::Tick(generation),
    )
}

/// Retires the running tick chain and starts a new one immediately.
pub(super) fn restart_clock(app: &mut App) -> Task<Message> {
    let generation = app.clock.restart();
    schedule_tick(generation, Duration::ZERO)
}

fn handle_tick(app: &mut App, generation: u64) -> Task<Message> {
    if !app.clock.is_current(generation) {
        return Task::none();
    }

    let tick = app.player.tick();
    match tick.outcome {
        TickOutcome::Frame(frame) => app.frame = Some(frame_handle(frame)),
        TickOutcome::Advanced(index) => {
            tracing::debug!(index, "playlist advanced");
        }
        TickOutcome::Finished | TickOutcome::Idle => {}
    }
    schedule_tick(generation, tick.next_delay)
}

fn handle_shortcut(app: &mut App, window: window::Id, shortcut: Shortcut) -> Task<Message> {
    match shortcut {
        Shortcut::TogglePlayback => app.player.toggle_play(),
        Shortcut::SeekBackward => app.player.seek_backward(),
        Shortcut::SeekForward => app.player.seek_forward(),
        Shortcut::SpeedUp => {
            app.player.increase_speed();
            persist(app);
        }
        Shortcut::SpeedDown => {
            app.player.decrease_speed();
            persist(app);
        }
        Shortcut::ToggleFullscreen => {
            app.player.toggle_fullscreen();
            return window_mode(app, window);
        }
        Shortcut::ExitFullscreen => {
            if app.player.is_fullscreen() {
                app.player.exit_fullscreen();
                return window_mode(app, window);
            }
        }
    }
    Task::none()
}

/// Mirrors the player's fullscreen flag into the window mode.
fn window_mode(app: &mut App, window: window::Id) -> Task<Message> {
    app.window_id = Some(window);
    let mode = if app.player.is_fullscreen() {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(window, mode)
}

fn add_paths(app: &mut App, paths: Vec<PathBuf>) -> Task<Message> {
    if paths.is_empty() {
        return Task::none();
    }
    match app.player.add(paths) {
        Ok(true) => restart_clock(app),
        Ok(false) => Task::none(),
        Err(_) => {
            app.frame = None;
            Task::none()
        }
    }
}

fn persist(app: &mut App) {
    persistence::persist_playback(&mut app.config, app.player.speed(), app.player.effect());
}

fn pick_files(title: String, filter_name: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter(filter_name, VIDEO_EXTENSIONS)
                .pick_files()
                .await
                .map(|handles| {
                    handles
                        .iter()
                        .map(|handle| handle.path().to_path_buf())
                        .collect()
                })
        },
        Message::FilesPicked,
    )
}

fn frame_handle(frame: RgbaImage) -> image::Handle {
    let (width, height) = frame.dimensions();
    image::Handle::from_rgba(width, height, frame.into_raw())
}
