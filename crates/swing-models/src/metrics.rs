//! Per-frame analysis results.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::keypoint::KeyPoint;
use crate::phase::SwingPhase;

/// Metrics computed for a single sampled frame.
///
/// Any field may be absent when the frame did not yield enough key points
/// for that calculation. Produced and finalized by a single sequential pass
/// over one frame; never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FrameMetrics {
    /// Timestamp of the sampled frame in seconds.
    pub time_secs: f64,

    /// Swing phase classified from the spine angle, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<SwingPhase>,

    /// Absolute spine tilt in degrees, range [0, 180].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spine_angle: Option<f64>,

    /// Signed hip rotation in degrees, range (-180, 180].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hip_rotation: Option<f64>,

    /// Signed shoulder rotation in degrees, range (-180, 180].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shoulder_rotation: Option<f64>,

    /// Key points the metrics were derived from.
    pub key_points: Vec<KeyPoint>,
}

impl FrameMetrics {
    /// Create an empty metrics bundle for a frame with no usable pose.
    pub fn empty(time_secs: f64) -> Self {
        Self {
            time_secs,
            phase: None,
            spine_angle: None,
            hip_rotation: None,
            shoulder_rotation: None,
            key_points: Vec::new(),
        }
    }

    /// True when no metric could be computed for this frame.
    pub fn is_empty(&self) -> bool {
        self.spine_angle.is_none() && self.hip_rotation.is_none() && self.shoulder_rotation.is_none()
    }
}

/// Why a sampled frame contributed nothing to the accumulators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Image extraction at the timestamp failed.
    ExtractionFailed,
    /// The pose provider returned an error.
    DetectionFailed,
    /// Detection succeeded but produced zero usable key points.
    NoPose,
}

impl SkipReason {
    /// Returns the reason as a string for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExtractionFailed => "extraction_failed",
            Self::DetectionFailed => "detection_failed",
            Self::NoPose => "no_pose",
        }
    }
}

/// Outcome of processing a single sampled frame.
///
/// Per-frame failures are recovered locally: the frame is recorded as
/// skipped and the run continues. Only setup failures abort a run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FrameOutcome {
    Analyzed(FrameMetrics),
    Skipped { time_secs: f64, reason: SkipReason },
}

impl FrameOutcome {
    /// The frame's metrics, when it was analyzed.
    pub fn metrics(&self) -> Option<&FrameMetrics> {
        match self {
            Self::Analyzed(m) => Some(m),
            Self::Skipped { .. } => None,
        }
    }

    /// True when the frame was skipped.
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_metrics() {
        let m = FrameMetrics::empty(1.5);
        assert!(m.is_empty());
        assert!(m.phase.is_none());
        assert_eq!(m.time_secs, 1.5);
    }

    #[test]
    fn test_outcome_accessors() {
        let analyzed = FrameOutcome::Analyzed(FrameMetrics::empty(0.0));
        assert!(!analyzed.is_skipped());
        assert!(analyzed.metrics().is_some());

        let skipped = FrameOutcome::Skipped {
            time_secs: 2.0,
            reason: SkipReason::NoPose,
        };
        assert!(skipped.is_skipped());
        assert!(skipped.metrics().is_none());
    }
}
