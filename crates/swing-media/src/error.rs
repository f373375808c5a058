//! Error types for media operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for media operations.
pub type MediaResult<T> = Result<T, MediaError>;

/// Errors that can occur while reading or decoding video input.
///
/// The setup variants (`FileNotFound`, `NoVideoStream`, `InvalidDuration`)
/// are fatal to an analysis run; extraction failures at a single timestamp
/// are recovered by the caller and only skip that frame.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("FFmpeg not found in PATH")]
    FfmpegNotFound,

    #[error("FFprobe not found in PATH")]
    FfprobeNotFound,

    #[error("FFmpeg command failed: {message}")]
    FfmpegFailed {
        message: String,
        stderr: Option<String>,
        exit_code: Option<i32>,
    },

    #[error("FFprobe command failed: {message}")]
    FfprobeFailed {
        message: String,
        stderr: Option<String>,
    },

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("No video stream in {0}")]
    NoVideoStream(PathBuf),

    #[error("Cannot read video duration: {0}")]
    InvalidDuration(String),

    #[error("Frame decode failed: {0}")]
    InvalidImage(String),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Operation timed out after {0} seconds")]
    Timeout(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl MediaError {
    /// Create an FFmpeg failure error.
    pub fn ffmpeg_failed(
        message: impl Into<String>,
        stderr: Option<String>,
        exit_code: Option<i32>,
    ) -> Self {
        Self::FfmpegFailed {
            message: message.into(),
            stderr,
            exit_code,
        }
    }

    /// True for failures that invalidate the whole video, not just one frame.
    pub fn is_setup_error(&self) -> bool {
        matches!(
            self,
            Self::FfmpegNotFound
                | Self::FfprobeNotFound
                | Self::FfprobeFailed { .. }
                | Self::FileNotFound(_)
                | Self::NoVideoStream(_)
                | Self::InvalidDuration(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_error_classification() {
        assert!(MediaError::NoVideoStream(PathBuf::from("a.mp4")).is_setup_error());
        assert!(MediaError::InvalidDuration("missing".into()).is_setup_error());
        assert!(!MediaError::Timeout(30).is_setup_error());
        assert!(!MediaError::ffmpeg_failed("exit 1", None, Some(1)).is_setup_error());
    }
}
