// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::subscription::Shortcut;
use crate::domain::video::PlaybackSpeed;
use crate::ui::video_controls::EffectChoice;
use iced::{window, Size};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Frame timer fired for the chain with this generation.
    Tick(u64),
    TogglePlayback,
    /// Progress slider dragged to this percentage.
    SeekDragged(f64),
    /// Progress slider released; seeks to the last dragged position.
    SeekReleased,
    SpeedSelected(PlaybackSpeed),
    EffectSelected(EffectChoice),
    /// Open the multi-select file dialog.
    AddFiles,
    /// Result from the file dialog (`None` when cancelled).
    FilesPicked(Option<Vec<PathBuf>>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    ClearPlaylist,
    /// A playlist row was clicked.
    PlaylistSelected(usize),
    Shortcut {
        window: window::Id,
        shortcut: Shortcut,
    },
    WindowResized {
        window: window::Id,
        size: Size,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `tr`, `en-US`).
    pub lang: Option<String>,
    /// Videos queued in the playlist at startup.
    pub files: Vec<PathBuf>,
}
