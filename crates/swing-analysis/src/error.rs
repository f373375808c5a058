//! Analysis error types.

use thiserror::Error;

pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors that cross an analysis run's external boundary.
///
/// Only setup failures and cancellation do; per-frame extraction or
/// detection failures are recovered inside the run and surface solely as a
/// sparser report.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Video setup failed: {0}")]
    Setup(#[from] swing_media::MediaError),

    #[error("Analysis cancelled")]
    Cancelled,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AnalysisError {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// True when the caller cancelled the run.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_setup_error_wraps_media_error() {
        let err: AnalysisError =
            swing_media::MediaError::NoVideoStream(PathBuf::from("clip.mp4")).into();
        assert!(matches!(err, AnalysisError::Setup(_)));
        assert!(!err.is_cancelled());
    }
}
