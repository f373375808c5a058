//! Error types for pose detection.

use thiserror::Error;

/// Result type for pose operations.
pub type PoseResult<T> = Result<T, PoseError>;

/// Errors from a pose provider.
///
/// These are per-frame errors: the analysis run logs them, skips the frame,
/// and continues. Zero detected joints is not an error.
#[derive(Debug, Error)]
pub enum PoseError {
    #[error("Pose detection failed: {0}")]
    DetectionFailed(String),
}

impl PoseError {
    /// Create a detection failure error.
    pub fn detection_failed(message: impl Into<String>) -> Self {
        Self::DetectionFailed(message.into())
    }
}
