// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Video(VideoError),
}

/// Why a video could not be opened or decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum VideoError {
    /// The file does not exist.
    NotFound(PathBuf),

    /// The container holds no video stream.
    NoVideoStream,

    /// FFmpeg rejected the file or failed while decoding it.
    Decoder(String),
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            VideoError::NoVideoStream => write!(f, "No video stream found"),
            VideoError::Decoder(msg) => write!(f, "Decoder error: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Video(e) => write!(f, "Video Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<VideoError> for Error {
    fn from(err: VideoError) -> Self {
        Error::Video(err)
    }
}

impl From<ffmpeg_next::Error> for Error {
    fn from(err: ffmpeg_next::Error) -> Self {
        Error::Video(VideoError::Decoder(err.to_string()))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
