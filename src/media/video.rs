// SPDX-License-Identifier: MPL-2.0
//! FFmpeg-backed frame source.
//!
//! Frames are decoded synchronously on the caller's thread, one per
//! [`FrameSource::read_frame`] call, and converted to RGBA by swscale.

use crate::error::{Error, Result, VideoError};
use crate::video_player::{FrameSource, MediaOpener};
use ffmpeg_next::software::scaling;
use image_rs::RgbaImage;
use std::path::{Path, PathBuf};
use std::sync::Once;

/// Static flag to ensure FFmpeg is initialized only once.
static FFMPEG_INIT: Once = Once::new();

/// FFmpeg seek timestamps are expressed in AV_TIME_BASE units (microseconds).
const AV_TIME_BASE: f64 = 1_000_000.0;

/// Initialize FFmpeg with appropriate log level.
///
/// This function is safe to call multiple times - initialization will only
/// happen once thanks to `std::sync::Once`. It sets the FFmpeg log level
/// to ERROR to suppress warning messages like "Detected creation time before 1970".
pub fn init_ffmpeg() -> Result<()> {
    let mut init_result: Result<()> = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(Error::Io(format!("FFmpeg initialization failed: {e}")));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Opens video files with FFmpeg.
#[derive(Debug, Clone, Copy, Default)]
pub struct FfmpegOpener;

impl MediaOpener for FfmpegOpener {
    type Source = FfmpegSource;

    fn open(&self, path: &Path) -> Result<FfmpegSource> {
        FfmpegSource::open(path)
    }
}

/// An open video file: demuxer, video decoder and RGBA scaler.
pub struct FfmpegSource {
    path: PathBuf,
    input: ffmpeg_next::format::context::Input,
    decoder: ffmpeg_next::decoder::Video,
    scaler: scaling::Context,
    stream_index: usize,
    /// Seconds per stream time base unit.
    time_base: f64,
    fps: f64,
    frame_count: u64,
    position: u64,
    /// Frame decoded ahead of time by an accurate seek.
    pending: Option<RgbaImage>,
    /// The demuxer is exhausted and the decoder has been sent EOF.
    draining: bool,
}

impl FfmpegSource {
    /// Opens `path` and prepares the best video stream for decoding.
    pub fn open(path: &Path) -> Result<Self> {
        init_ffmpeg()?;

        if !path.exists() {
            return Err(VideoError::NotFound(path.to_path_buf()).into());
        }

        let input = ffmpeg_next::format::input(&path)?;

        let (stream_index, time_base, fps, stream_frames, parameters) = {
            let stream = input
                .streams()
                .best(ffmpeg_next::media::Type::Video)
                .ok_or(VideoError::NoVideoStream)?;
            let time_base = stream.time_base();
            let rate = stream.avg_frame_rate();
            let fallback_rate = stream.rate();
            let fps = rational_to_f64(rate)
                .or_else(|| rational_to_f64(fallback_rate))
                .unwrap_or(0.0);
            (
                stream.index(),
                rational_to_f64(time_base).unwrap_or(0.0),
                fps,
                stream.frames(),
                stream.parameters(),
            )
        };

        let context = ffmpeg_next::codec::context::Context::from_parameters(parameters)?;
        let decoder = context.decoder().video()?;

        let width = decoder.width();
        let height = decoder.height();
        if width == 0 || height == 0 {
            return Err(VideoError::Decoder(format!(
                "Invalid video dimensions: {width}x{height}"
            ))
            .into());
        }

        let scaler = scaling::Context::get(
            decoder.format(),
            width,
            height,
            ffmpeg_next::format::Pixel::RGBA,
            width,
            height,
            scaling::Flags::BILINEAR,
        )?;

        // Containers without a frame count get one estimated from the duration
        let frame_count = if stream_frames > 0 {
            stream_frames as u64
        } else if input.duration() > 0 {
            (input.duration() as f64 / AV_TIME_BASE * fps).round() as u64
        } else {
            0
        };

        Ok(Self {
            path: path.to_path_buf(),
            input,
            decoder,
            scaler,
            stream_index,
            time_base,
            fps,
            frame_count,
            position: 0,
            pending: None,
            draining: false,
        })
    }

    /// Decodes the next frame in stream order together with its frame index
    /// (derived from the presentation timestamp when there is one).
    fn decode_next(&mut self) -> Result<Option<(RgbaImage, Option<u64>)>> {
        let mut decoded = ffmpeg_next::frame::Video::empty();
        loop {
            if self.decoder.receive_frame(&mut decoded).is_ok() {
                let index = decoded.timestamp().map(|pts| {
                    (pts as f64 * self.time_base * self.fps).round().max(0.0) as u64
                });
                let image = self.convert(&decoded)?;
                return Ok(Some((image, index)));
            }
            if self.draining {
                return Ok(None);
            }

            let next = self
                .input
                .packets()
                .next()
                .map(|(stream, packet)| (stream.index(), packet));
            match next {
                Some((index, packet)) if index == self.stream_index => {
                    if let Err(e) = self.decoder.send_packet(&packet) {
                        tracing::debug!(error = %e, "skipping undecodable packet");
                    }
                }
                Some(_) => {}
                None => {
                    self.decoder.send_eof()?;
                    self.draining = true;
                }
            }
        }
    }

    /// Converts a decoded frame to a tightly packed RGBA image.
    fn convert(&mut self, decoded: &ffmpeg_next::frame::Video) -> Result<RgbaImage> {
        let mut rgba = ffmpeg_next::frame::Video::empty();
        self.scaler.run(decoded, &mut rgba)?;

        let width = rgba.width();
        let height = rgba.height();
        let data = rgba.data(0);
        let stride = rgba.stride(0);

        let mut bytes = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height as usize {
            let row_start = y * stride;
            let row_end = row_start + (width * 4) as usize;
            bytes.extend_from_slice(&data[row_start..row_end]);
        }

        RgbaImage::from_raw(width, height, bytes).ok_or_else(|| {
            VideoError::Decoder("RGBA buffer does not match frame size".into()).into()
        })
    }

    /// Seeks to the keyframe before `frame`, then decodes forward until the
    /// requested frame is reached. That frame is kept for the next read.
    fn seek_to(&mut self, frame: u64) -> Result<()> {
        self.pending = None;
        self.draining = false;

        let secs = if self.fps > 0.0 {
            frame as f64 / self.fps
        } else {
            0.0
        };
        let timestamp = (secs * AV_TIME_BASE) as i64;
        // RangeTo lets FFmpeg land on the keyframe before the target
        self.input.seek(timestamp, ..timestamp)?;
        self.decoder.flush();

        while let Some((image, index)) = self.decode_next()? {
            if index.is_some_and(|index| index < frame) {
                continue;
            }
            self.pending = Some(image);
            break;
        }
        Ok(())
    }
}

impl FrameSource for FfmpegSource {
    fn frame_count(&self) -> u64 {
        self.frame_count
    }

    fn fps(&self) -> f64 {
        self.fps
    }

    fn position(&self) -> u64 {
        self.position
    }

    fn set_position(&mut self, frame: u64) {
        let target = frame.min(self.frame_count);
        if let Err(e) = self.seek_to(target) {
            tracing::debug!(path = %self.path.display(), frame = target, error = %e, "seek failed");
        }
        self.position = target;
    }

    fn read_frame(&mut self) -> Option<RgbaImage> {
        let frame = match self.pending.take() {
            Some(frame) => Some(frame),
            None => match self.decode_next() {
                Ok(next) => next.map(|(image, _)| image),
                Err(e) => {
                    tracing::debug!(path = %self.path.display(), error = %e, "decoding stopped");
                    None
                }
            },
        };
        if frame.is_some() {
            self.position += 1;
        }
        frame
    }
}

fn rational_to_f64(value: ffmpeg_next::Rational) -> Option<f64> {
    let (num, den) = (value.numerator(), value.denominator());
    (num > 0 && den > 0).then(|| f64::from(num) / f64::from(den))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "tests/data/sample.mp4";

    #[test]
    fn rational_conversion_rejects_zero() {
        assert_eq!(
            rational_to_f64(ffmpeg_next::Rational::new(30000, 1001)).map(|v| (v * 100.0).round()),
            Some(2997.0)
        );
        assert_eq!(rational_to_f64(ffmpeg_next::Rational::new(0, 1)), None);
        assert_eq!(rational_to_f64(ffmpeg_next::Rational::new(25, 0)), None);
    }

    #[test]
    fn open_fails_for_missing_file() {
        let result = FfmpegOpener.open(Path::new("/nonexistent/video.mp4"));
        assert!(matches!(
            result,
            Err(Error::Video(VideoError::NotFound(_)))
        ));
    }

    #[test]
    fn open_fails_for_garbage_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("fake.mp4");
        std::fs::write(&path, b"fake video data").unwrap();

        assert!(FfmpegOpener.open(&path).is_err());
    }

    #[test]
    fn sample_video_decodes_and_rewinds() {
        if !Path::new(SAMPLE).exists() {
            eprintln!("Test video not found, skipping test");
            return;
        }

        let mut source = FfmpegOpener.open(Path::new(SAMPLE)).unwrap();
        assert!(source.fps() > 0.0);
        assert!(source.frame_count() > 0);

        let first = source.read_frame().expect("first frame");
        assert!(first.width() > 0 && first.height() > 0);
        assert_eq!(source.position(), 1);

        source.set_position(0);
        assert_eq!(source.position(), 0);
        assert!(source.read_frame().is_some());
    }

    #[test]
    fn seeking_past_the_end_reports_end_of_stream() {
        if !Path::new(SAMPLE).exists() {
            return;
        }

        let mut source = FfmpegOpener.open(Path::new(SAMPLE)).unwrap();
        let total = source.frame_count();
        source.set_position(total + 100);
        assert_eq!(source.position(), total);
    }
}
