//! Single-frame extraction.

use image::DynamicImage;
use std::path::Path;

use crate::command::{FfmpegCommand, FfmpegRunner, PIPE_OUTPUT};
use crate::error::{MediaError, MediaResult};

/// Extract the frame at `seconds` as an in-memory image.
///
/// The frame is decoded to PNG over a stdout pipe; nothing touches disk.
/// A failure here invalidates only the one frame, the caller decides
/// whether to continue.
pub async fn extract_frame(
    video_path: impl AsRef<Path>,
    seconds: f64,
    runner: &FfmpegRunner,
) -> MediaResult<DynamicImage> {
    let cmd = FfmpegCommand::new(video_path.as_ref(), PIPE_OUTPUT)
        .seek(seconds)
        .single_frame()
        .format("image2pipe")
        .video_codec("png")
        .log_level("error");

    let bytes = runner.run_capture(&cmd).await?;

    if bytes.is_empty() {
        return Err(MediaError::InvalidImage(format!(
            "no frame data at {:.3}s",
            seconds
        )));
    }

    image::load_from_memory(&bytes)
        .map_err(|e| MediaError::InvalidImage(format!("at {:.3}s: {}", seconds, e)))
}
