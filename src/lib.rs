// SPDX-License-Identifier: MPL-2.0
//! `iced_reel` is a lightweight video player built with the Iced GUI framework.
//!
//! It decodes videos with FFmpeg, plays them through a playlist, applies
//! per-frame visual effects, and persists playback preferences with a
//! localized interface.

#![doc(html_root_url = "https://docs.rs/iced_reel/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
pub mod video_player;

#[cfg(test)]
mod test_utils;
