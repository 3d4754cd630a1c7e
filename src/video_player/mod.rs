// SPDX-License-Identifier: MPL-2.0
//! Video playback engine for IcedReel.
//!
//! The [`PlaybackController`] owns the open decoding handle, the playlist and
//! the user-facing playback settings. The application shell calls
//! [`PlaybackController::tick`] from a self-rescheduling timer; each tick
//! returns the delay before the next one.

mod controller;
pub mod scheduler;
pub mod source;

pub use controller::{PlaybackController, Tick, TickOutcome};
pub use scheduler::{frame_delay, FrameClock, IDLE_POLL_INTERVAL};
pub use source::{FrameSource, MediaOpener};
