//! Shared data models for the SwingLens backend.
//!
//! This crate provides Serde-serializable types for:
//! - Per-frame body key points and swing phases
//! - Frame-level analysis metrics and skip outcomes
//! - Video orientation metadata
//! - Analysis run state and progress reporting

pub mod analysis;
pub mod keypoint;
pub mod metrics;
pub mod orientation;
pub mod phase;

// Re-export common types
pub use analysis::{AnalysisOutcome, AnalysisProgress, AnalysisState};
pub use keypoint::{find_key_point, KeyPoint, KeyPointKind, Point2};
pub use metrics::{FrameMetrics, FrameOutcome, SkipReason};
pub use orientation::VideoOrientation;
pub use phase::SwingPhase;
