//! Video source abstraction.
//!
//! The orchestrator consumes videos through this trait so tests (and any
//! non-file input the UI layer supplies) can stand in for FFmpeg.

use async_trait::async_trait;
use image::DynamicImage;
use std::path::{Path, PathBuf};
use tokio::sync::watch;

use crate::error::MediaResult;
use crate::frame::extract_frame;
use crate::probe::{probe_video, VideoInfo};
use crate::FfmpegRunner;

/// A readable video resource with a decodable duration and extractable frames.
#[async_trait]
pub trait VideoSource: Send + Sync {
    /// Probe the video for duration, frame rate, and orientation.
    ///
    /// Errors here are setup errors: the run must fail before any frame
    /// is processed.
    async fn probe(&self) -> MediaResult<VideoInfo>;

    /// Extract the frame at the given timestamp.
    async fn frame_at(&self, seconds: f64) -> MediaResult<DynamicImage>;

    /// Source name for logging.
    fn name(&self) -> &'static str;
}

/// FFmpeg-backed video source reading a local file.
pub struct FfmpegVideoSource {
    path: PathBuf,
    frame_timeout_secs: u64,
    cancel_rx: Option<watch::Receiver<bool>>,
}

impl FfmpegVideoSource {
    /// Create a source for a local video file.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            frame_timeout_secs: 30,
            cancel_rx: None,
        }
    }

    /// Set the per-frame extraction timeout.
    pub fn with_frame_timeout(mut self, secs: u64) -> Self {
        self.frame_timeout_secs = secs;
        self
    }

    /// Propagate a cancellation signal into frame extraction.
    pub fn with_cancel(mut self, cancel_rx: watch::Receiver<bool>) -> Self {
        self.cancel_rx = Some(cancel_rx);
        self
    }

    fn runner(&self) -> FfmpegRunner {
        let runner = FfmpegRunner::new().with_timeout(self.frame_timeout_secs);
        match &self.cancel_rx {
            Some(rx) => runner.with_cancel(rx.clone()),
            None => runner,
        }
    }
}

#[async_trait]
impl VideoSource for FfmpegVideoSource {
    async fn probe(&self) -> MediaResult<VideoInfo> {
        probe_video(&self.path).await
    }

    async fn frame_at(&self, seconds: f64) -> MediaResult<DynamicImage> {
        extract_frame(&self.path, seconds, &self.runner()).await
    }

    fn name(&self) -> &'static str {
        "ffmpeg_file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_name() {
        let source = FfmpegVideoSource::new("clip.mp4");
        assert_eq!(source.name(), "ffmpeg_file");
    }

    #[tokio::test]
    async fn test_missing_file_probe_fails() {
        let dir = tempfile::tempdir().unwrap();
        let source = FfmpegVideoSource::new(dir.path().join("missing.mp4"));
        let err = source.probe().await.unwrap_err();
        assert!(err.is_setup_error());
    }
}
