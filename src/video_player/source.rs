// SPDX-License-Identifier: MPL-2.0
//! Decoding handle abstraction.
//!
//! The controller never talks to FFmpeg directly. It opens files through a
//! [`MediaOpener`] and pulls frames from the resulting [`FrameSource`], which
//! keeps the playback rules testable with an in-memory source.
//!
//! Dropping a source releases the underlying decoder.

use crate::error::Result;
use image_rs::RgbaImage;
use std::path::Path;

/// An open, seekable stream of decoded frames.
///
/// Positions are frame indices. `position()` is the index of the frame the
/// next [`read_frame`](FrameSource::read_frame) call returns.
pub trait FrameSource {
    /// Total number of frames reported by the container.
    fn frame_count(&self) -> u64;

    /// Nominal frame rate in frames per second.
    fn fps(&self) -> f64;

    /// Index of the next frame to be read.
    fn position(&self) -> u64;

    /// Moves the read cursor to `frame`. Values past the end park the cursor
    /// at the end, so the next read reports end of stream.
    fn set_position(&mut self, frame: u64);

    /// Decodes the frame at the cursor and advances it by one.
    ///
    /// Returns `None` at end of stream (or when the decoder gives up).
    fn read_frame(&mut self) -> Option<RgbaImage>;
}

/// Opens video files into [`FrameSource`]s.
pub trait MediaOpener {
    type Source: FrameSource;

    /// Opens `path` for decoding.
    fn open(&self, path: &Path) -> Result<Self::Source>;
}
