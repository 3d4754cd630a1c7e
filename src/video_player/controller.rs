// SPDX-License-Identifier: MPL-2.0
//! Playback controller.
//!
//! Owns at most one open [`FrameSource`], the [`Playlist`] and the playback
//! settings, and runs one step of the "read frame → filter → reschedule"
//! loop per [`tick`](PlaybackController::tick).
//!
//! State transitions:
//! - Stopped → Playing: a file is opened, or play is toggled on a stopped video
//! - Playing ⇄ Paused: play/pause toggle
//! - Playing → Stopped: the last playlist entry ran out (cursor rewound to 0)
//!
//! Everything runs on the UI thread; state changed between two ticks is
//! simply observed by the next one.

use super::scheduler::{frame_delay, IDLE_POLL_INTERVAL};
use super::source::{FrameSource, MediaOpener};
use crate::domain::playlist::Playlist;
use crate::domain::video::{Effect, KeyboardSeekStep, PlaybackSpeed, PlaybackState};
use crate::error::Result;
use crate::media::effects;
use image_rs::RgbaImage;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The open decoding handle and the stream facts read when it was opened.
struct Session<S> {
    source: S,
    path: PathBuf,
    total_frames: u64,
    fps: f64,
}

/// What a single tick did.
#[derive(Debug)]
pub enum TickOutcome {
    /// Nothing open, or not playing.
    Idle,
    /// A frame was decoded and filtered, ready for display.
    Frame(RgbaImage),
    /// The stream ended and the playlist moved on to the entry at this index.
    Advanced(usize),
    /// The last entry ended; the cursor is back on frame 0 and playback stopped.
    Finished,
}

/// Result of [`PlaybackController::tick`].
#[derive(Debug)]
pub struct Tick {
    pub outcome: TickOutcome,
    /// Delay before the next tick should run.
    pub next_delay: Duration,
}

impl Tick {
    fn idle() -> Self {
        Self {
            outcome: TickOutcome::Idle,
            next_delay: IDLE_POLL_INTERVAL,
        }
    }
}

/// Playback controller for a single window.
pub struct PlaybackController<O: MediaOpener> {
    opener: O,
    session: Option<Session<O::Source>>,
    playlist: Playlist,
    state: PlaybackState,
    speed: PlaybackSpeed,
    effect: Effect,
    seek_step: KeyboardSeekStep,
    fullscreen: bool,
    /// Window size in pixels, used to scale frames in fullscreen.
    viewport: Option<(u32, u32)>,
}

impl<O: MediaOpener> PlaybackController<O> {
    /// Creates an idle controller with an empty playlist.
    pub fn new(opener: O) -> Self {
        Self {
            opener,
            session: None,
            playlist: Playlist::new(),
            state: PlaybackState::Stopped,
            speed: PlaybackSpeed::default(),
            effect: Effect::default(),
            seek_step: KeyboardSeekStep::default(),
            fullscreen: false,
            viewport: None,
        }
    }

    /// Sets the initial speed, effect and keyboard seek step.
    #[must_use]
    pub fn with_preferences(
        mut self,
        speed: PlaybackSpeed,
        effect: Effect,
        seek_step: KeyboardSeekStep,
    ) -> Self {
        self.speed = speed;
        self.effect = effect;
        self.seek_step = seek_step;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    pub fn effect(&self) -> Effect {
        self.effect
    }

    pub fn seek_step(&self) -> KeyboardSeekStep {
        self.seek_step
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Returns true if a decoding handle is open.
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Path of the open video.
    pub fn current_path(&self) -> Option<&Path> {
        self.session.as_ref().map(|session| session.path.as_path())
    }

    pub fn total_frames(&self) -> u64 {
        self.session.as_ref().map_or(0, |session| session.total_frames)
    }

    pub fn fps(&self) -> f64 {
        self.session.as_ref().map_or(0.0, |session| session.fps)
    }

    /// Index of the next frame to be decoded.
    pub fn position(&self) -> u64 {
        self.session
            .as_ref()
            .map_or(0, |session| session.source.position())
    }

    /// Playback progress in percent, always within `[0, 100]`.
    pub fn progress(&self) -> f64 {
        let Some(session) = &self.session else {
            return 0.0;
        };
        if session.total_frames == 0 {
            return 0.0;
        }
        let percent = session.source.position() as f64 / session.total_frames as f64 * 100.0;
        percent.clamp(0.0, 100.0)
    }

    // =========================================================================
    // Opening and playlist
    // =========================================================================

    /// Opens `path` and starts playing it from its first frame.
    ///
    /// The previous handle is released before the new one is acquired. On
    /// failure no handle is left open and the player is stopped.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        self.release();

        let source = match self.opener.open(path) {
            Ok(source) => source,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to open video");
                return Err(err);
            }
        };

        let total_frames = source.frame_count();
        let fps = source.fps();
        tracing::info!(
            path = %path.display(),
            total_frames,
            fps,
            "opened video"
        );

        self.session = Some(Session {
            source,
            path: path.to_path_buf(),
            total_frames,
            fps,
        });
        self.state = PlaybackState::Playing;
        Ok(())
    }

    /// Appends `paths` to the playlist. When nothing was selected yet, the
    /// first entry is selected and opened.
    ///
    /// Returns `Ok(true)` if a video was opened.
    pub fn add<I>(&mut self, paths: I) -> Result<bool>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let before = self.playlist.len();
        self.playlist.extend(paths);
        tracing::debug!(added = self.playlist.len() - before, "playlist extended");

        if self.playlist.current_index().is_none() && !self.playlist.is_empty() {
            self.select(0)
        } else {
            Ok(false)
        }
    }

    /// Selects the playlist entry at `index` and opens it. Entries that fail
    /// to open are skipped in favour of the ones after them.
    ///
    /// Returns `Ok(false)` without touching anything if `index` is out of range,
    /// and the last open error when no entry from `index` onward opens.
    pub fn select(&mut self, index: usize) -> Result<bool> {
        self.open_from(index).map(|opened| opened.is_some())
    }

    /// Opens the entry at `index`, moving the selection forward past entries
    /// that fail to open. Returns the index that was opened.
    fn open_from(&mut self, mut index: usize) -> Result<Option<usize>> {
        loop {
            let Some(path) = self.playlist.select(index).map(Path::to_path_buf) else {
                return Ok(None);
            };
            match self.open(&path) {
                Ok(()) => return Ok(Some(index)),
                Err(err) if index + 1 < self.playlist.len() => {
                    tracing::debug!(index, error = %err, "skipping unopenable entry");
                    index += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Empties the playlist, releases the open handle and stops playback.
    pub fn clear(&mut self) {
        self.playlist.clear();
        self.release();
    }

    fn release(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::debug!(path = %session.path.display(), "released video");
        }
        self.state = PlaybackState::Stopped;
    }

    // =========================================================================
    // Transport
    // =========================================================================

    /// Flips between playing and paused. Does nothing when no video is open.
    pub fn toggle_play(&mut self) {
        if self.session.is_some() {
            self.state = self.state.toggled();
        }
    }

    /// Jumps to `percent` of the video, rounded to the nearest frame.
    pub fn seek(&mut self, percent: f64) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let fraction = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 100.0) / 100.0
        };
        let frame = (fraction * session.total_frames as f64).round() as u64;
        session.source.set_position(frame);
    }

    /// Moves the cursor by `delta_secs` seconds, clamped to `[0, total_frames]`.
    pub fn seek_relative(&mut self, delta_secs: f64) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let current = session.source.position() as f64;
        let target = (current + delta_secs * session.fps)
            .clamp(0.0, session.total_frames as f64)
            .round();
        // NaN (from a NaN delta or fps) saturates to 0
        session.source.set_position(target as u64);
    }

    /// Seeks forward by the keyboard seek step.
    pub fn seek_forward(&mut self) {
        self.seek_relative(self.seek_step.value());
    }

    /// Seeks backward by the keyboard seek step.
    pub fn seek_backward(&mut self) {
        self.seek_relative(-self.seek_step.value());
    }

    /// Sets the speed used for the next scheduled frame.
    pub fn set_speed(&mut self, speed: PlaybackSpeed) {
        self.speed = speed;
    }

    /// Moves the speed one preset up, staying at the fastest one.
    pub fn increase_speed(&mut self) {
        self.speed = self.speed.increase();
    }

    /// Moves the speed one preset down, staying at the slowest one.
    pub fn decrease_speed(&mut self) {
        self.speed = self.speed.decrease();
    }

    /// Sets the effect applied from the next decoded frame onward.
    pub fn set_effect(&mut self, effect: Effect) {
        self.effect = effect;
    }

    // =========================================================================
    // Display
    // =========================================================================

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    pub fn exit_fullscreen(&mut self) {
        self.fullscreen = false;
    }

    /// Records the window size used to scale frames in fullscreen.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width > 0 && height > 0).then_some((width, height));
    }

    // =========================================================================
    // Frame loop
    // =========================================================================

    /// Runs one step of the playback loop.
    ///
    /// - Not playing (or nothing open): idle, poll again after
    ///   [`IDLE_POLL_INTERVAL`].
    /// - Frame decoded: returns it filtered, next tick after
    ///   `1000 / (fps * speed)` ms.
    /// - End of stream: opens the next playlist entry if there is one,
    ///   otherwise rewinds to frame 0 and stops.
    pub fn tick(&mut self) -> Tick {
        if !self.state.is_playing() {
            return Tick::idle();
        }
        let Some(session) = self.session.as_mut() else {
            return Tick::idle();
        };

        match session.source.read_frame() {
            Some(frame) => {
                let next_delay = frame_delay(session.fps, self.speed);
                Tick {
                    outcome: TickOutcome::Frame(self.render(frame)),
                    next_delay,
                }
            }
            None => self.end_of_stream(),
        }
    }

    fn render(&self, frame: RgbaImage) -> RgbaImage {
        let filtered = if self.effect.is_identity() {
            frame
        } else {
            effects::apply(self.effect, &frame)
        };
        match self.viewport {
            Some((width, height)) if self.fullscreen => {
                effects::resize_to(&filtered, width, height)
            }
            _ => filtered,
        }
    }

    fn end_of_stream(&mut self) -> Tick {
        if let Some(next) = self.playlist.advance() {
            tracing::info!(index = next, "end of stream, advancing playlist");
            if let Ok(Some(opened)) = self.open_from(next) {
                return Tick {
                    outcome: TickOutcome::Advanced(opened),
                    next_delay: Duration::ZERO,
                };
            }
        }

        // No further entry could be opened: the session (if any) is rewound
        tracing::info!("end of playlist, rewinding");
        if let Some(session) = self.session.as_mut() {
            session.source.set_position(0);
        }
        self.state = PlaybackState::Stopped;
        Tick {
            outcome: TickOutcome::Finished,
            next_delay: IDLE_POLL_INTERVAL,
        }
    }
}
