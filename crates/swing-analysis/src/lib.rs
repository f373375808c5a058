//! Swing analysis pipeline.
//!
//! Drives the full frame-sampling, pose-to-metric, phase-segmentation and
//! report-generation pipeline over a video source:
//! sample timestamps, extract a frame per timestamp, extract key points,
//! compute biomechanical angles, classify the swing phase, then aggregate
//! everything into a textual coaching report while publishing fractional
//! progress to the caller.

pub mod angles;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod phase;
pub mod report;
pub mod run_metrics;

pub use angles::{hip_rotation, shoulder_rotation, spine_angle};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, AnalysisResult};
pub use orchestrator::{AnalysisRun, SwingAnalyzer};
pub use phase::{
    classify_phase, BACKSWING_SPINE_DEG, DOWNSWING_SPINE_DEG, FOLLOW_THROUGH_SPINE_DEG,
};
pub use report::generate_report;
