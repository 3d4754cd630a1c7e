// SPDX-License-Identifier: MPL-2.0
//! Test utilities: float assertions and an in-memory decoding backend.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::error::{Error, Result, VideoError};
use crate::video_player::{FrameSource, MediaOpener};
use image_rs::{Rgba, RgbaImage};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Width and height of every fake frame.
pub const FAKE_FRAME_SIZE: u32 = 8;

/// Deterministic colourful frame for index `index`.
pub fn fake_frame(index: u64) -> RgbaImage {
    let shade = (index % 256) as u8;
    RgbaImage::from_fn(FAKE_FRAME_SIZE, FAKE_FRAME_SIZE, |x, y| {
        Rgba([
            shade,
            (x * 30) as u8,
            (y * 30) as u8,
            255,
        ])
    })
}

#[derive(Default)]
struct Counters {
    live: Cell<usize>,
    max_live: Cell<usize>,
}

/// Opener backed by a table of fake videos. Unknown paths fail to open.
#[derive(Clone, Default)]
pub struct FakeOpener {
    videos: Rc<RefCell<HashMap<PathBuf, (u64, f64)>>>,
    counters: Rc<Counters>,
}

impl FakeOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a video with `frames` frames at `fps`.
    pub fn register(&self, path: &str, frames: u64, fps: f64) {
        self.videos
            .borrow_mut()
            .insert(PathBuf::from(path), (frames, fps));
    }

    /// Number of sources currently open.
    pub fn live_sources(&self) -> usize {
        self.counters.live.get()
    }

    /// Highest number of sources ever open at the same time.
    pub fn max_live_sources(&self) -> usize {
        self.counters.max_live.get()
    }
}

impl MediaOpener for FakeOpener {
    type Source = FakeSource;

    fn open(&self, path: &Path) -> Result<FakeSource> {
        let (frames, fps) = self
            .videos
            .borrow()
            .get(path)
            .copied()
            .ok_or_else(|| Error::Video(VideoError::NotFound(path.to_path_buf())))?;

        let live = self.counters.live.get() + 1;
        self.counters.live.set(live);
        self.counters
            .max_live
            .set(self.counters.max_live.get().max(live));

        Ok(FakeSource {
            frames,
            fps,
            position: 0,
            counters: Rc::clone(&self.counters),
        })
    }
}

/// In-memory frame source handing out [`fake_frame`]s.
pub struct FakeSource {
    frames: u64,
    fps: f64,
    position: u64,
    counters: Rc<Counters>,
}

impl FrameSource for FakeSource {
    fn frame_count(&self) -> u64 {
        self.frames
    }

    fn fps(&self) -> f64 {
        self.fps
    }

    fn position(&self) -> u64 {
        self.position
    }

    fn set_position(&mut self, frame: u64) {
        self.position = frame.min(self.frames);
    }

    fn read_frame(&mut self) -> Option<RgbaImage> {
        if self.position >= self.frames {
            return None;
        }
        let frame = fake_frame(self.position);
        self.position += 1;
        Some(frame)
    }
}

impl Drop for FakeSource {
    fn drop(&mut self) {
        self.counters.live.set(self.counters.live.get() - 1);
    }
}
