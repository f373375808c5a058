#![deny(unreachable_patterns)]
//! FFmpeg CLI wrapper for swing video input.
//!
//! This crate provides:
//! - Type-safe FFmpeg command building with timeout and cancellation
//! - Video probing (duration, frame rate, orientation) via FFprobe
//! - Lazy frame-index sampling
//! - Single-frame extraction to in-memory images
//! - The `VideoSource` seam consumed by the analysis orchestrator

pub mod command;
pub mod error;
pub mod frame;
pub mod probe;
pub mod sampler;
pub mod source;

pub use command::{check_ffmpeg, check_ffprobe, FfmpegCommand, FfmpegRunner};
pub use error::{MediaError, MediaResult};
pub use frame::extract_frame;
pub use probe::{probe_video, VideoInfo};
pub use sampler::{FrameSampler, SampleFrame, NOMINAL_FRAME_RATE, TARGET_SAMPLE_COUNT};
pub use source::{FfmpegVideoSource, VideoSource};
