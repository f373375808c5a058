//! Analysis run state and progress models.
//!
//! One analysis run is scoped to a single video: the UI collaborator hands
//! the pipeline a video handle, polls progress while the run is in flight,
//! and receives the finished report (or a failure) once.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// State of an analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisState {
    /// Run created, not yet started.
    #[default]
    Idle,
    /// Probing the video and computing sample timestamps.
    Sampling,
    /// Extracting and analyzing frames.
    Extracting,
    /// Aggregating per-frame results into the report.
    Aggregating,
    /// Run completed, report available.
    Done,
    /// Run failed before producing a report.
    Failed,
}

impl AnalysisState {
    /// Returns the state as a string for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Sampling => "sampling",
            Self::Extracting => "extracting",
            Self::Aggregating => "aggregating",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }

    /// Returns true if the state is terminal (done or failed).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

/// Progress snapshot published while a run is in flight.
///
/// The fraction is monotonically non-decreasing and reaches 1.0 on success;
/// it is safe to read at any time from any task.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisProgress {
    /// Current run state.
    pub state: AnalysisState,
    /// Completed fraction in [0.0, 1.0].
    pub fraction: f64,
    /// Sampled frames processed so far (analyzed or skipped).
    pub frames_processed: usize,
    /// Total frames the sampler selected for this run.
    pub frames_total: usize,
}

impl AnalysisProgress {
    /// Initial snapshot for a run that has not started.
    pub fn idle() -> Self {
        Self {
            state: AnalysisState::Idle,
            fraction: 0.0,
            frames_processed: 0,
            frames_total: 0,
        }
    }
}

impl Default for AnalysisProgress {
    fn default() -> Self {
        Self::idle()
    }
}

/// Final result of a completed run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisOutcome {
    /// Human-readable coaching report.
    pub report: String,
    /// Frames that produced metrics.
    pub frames_analyzed: usize,
    /// Frames skipped due to per-frame failures.
    pub frames_skipped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_is_terminal() {
        assert!(!AnalysisState::Idle.is_terminal());
        assert!(!AnalysisState::Sampling.is_terminal());
        assert!(!AnalysisState::Extracting.is_terminal());
        assert!(!AnalysisState::Aggregating.is_terminal());
        assert!(AnalysisState::Done.is_terminal());
        assert!(AnalysisState::Failed.is_terminal());
    }

    #[test]
    fn test_idle_progress() {
        let p = AnalysisProgress::idle();
        assert_eq!(p.state, AnalysisState::Idle);
        assert_eq!(p.fraction, 0.0);
    }
}
