// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core playback rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) so the playback
//! rules can be tested without a decoder or a window.
//!
//! # Modules
//!
//! - [`playlist`]: Ordered list of video paths with a current selection
//! - [`video`]: Video playback types ([`PlaybackState`](video::PlaybackState),
//!   [`PlaybackSpeed`](video::PlaybackSpeed), [`Effect`](video::Effect))

pub mod playlist;
pub mod video;
