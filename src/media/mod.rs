// SPDX-License-Identifier: MPL-2.0
//! Video decoding and frame processing.

pub mod effects;
pub mod video;

pub use extensions::VIDEO_EXTENSIONS;
pub use video::{FfmpegOpener, FfmpegSource};

/// Supported media extensions
pub mod extensions {
    use std::path::Path;

    /// Video file extensions offered by the file dialog.
    pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mkv", "mov"];

    /// Checks if a path carries one of the offered extensions (case-insensitive).
    ///
    /// Advisory only: the decoder decides what it can actually open.
    #[must_use]
    pub fn is_video_path<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
    }

}
