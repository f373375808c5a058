//! Swing phase classification.

use swing_models::SwingPhase;

/// Spine angles strictly above this are classified as backswing.
pub const BACKSWING_SPINE_DEG: f64 = 85.0;

/// Spine angles strictly below this are classified as follow-through.
pub const FOLLOW_THROUGH_SPINE_DEG: f64 = 15.0;

/// Spine angles strictly below this (and not follow-through) are downswing.
pub const DOWNSWING_SPINE_DEG: f64 = 45.0;

/// Classify a single frame's spine angle into a swing phase.
///
/// Pure function of the spine angle alone; frames in the unmatched
/// 45-85 degree band carry no phase.
pub fn classify_phase(spine_angle: Option<f64>) -> Option<SwingPhase> {
    let angle = spine_angle?;

    if angle > BACKSWING_SPINE_DEG {
        Some(SwingPhase::Backswing)
    } else if angle < FOLLOW_THROUGH_SPINE_DEG {
        Some(SwingPhase::FollowThrough)
    } else if angle < DOWNSWING_SPINE_DEG {
        Some(SwingPhase::Downswing)
    } else {
        None
    }
}
