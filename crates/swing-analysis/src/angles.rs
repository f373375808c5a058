//! Biomechanical angle calculations.
//!
//! Each function is total and side-effect-free: a missing required key
//! point yields `None`, never an error. All angles are in degrees.

use swing_models::{find_key_point, KeyPoint, KeyPointKind};

/// Absolute spine tilt from vertical, range [0, 180].
///
/// Requires Root and both shoulders. The spine vector runs from the root to
/// the shoulder midpoint; 0 degrees is a perfectly vertical spine.
pub fn spine_angle(points: &[KeyPoint]) -> Option<f64> {
    let root = find_key_point(points, KeyPointKind::Root)?;
    let left = find_key_point(points, KeyPointKind::LeftShoulder)?;
    let right = find_key_point(points, KeyPointKind::RightShoulder)?;

    let midpoint = left.midpoint(&right);
    let spine = midpoint.delta(&root);
    Some(spine.x.atan2(spine.y).to_degrees().abs())
}

/// Signed hip rotation, range (-180, 180].
///
/// Requires both hips; the angle of the left-to-right hip vector.
pub fn hip_rotation(points: &[KeyPoint]) -> Option<f64> {
    let left = find_key_point(points, KeyPointKind::LeftHip)?;
    let right = find_key_point(points, KeyPointKind::RightHip)?;

    let v = right.delta(&left);
    Some(v.y.atan2(v.x).to_degrees())
}

/// Signed shoulder rotation, range (-180, 180].
///
/// Same formula as hip rotation applied to the shoulder pair.
pub fn shoulder_rotation(points: &[KeyPoint]) -> Option<f64> {
    let left = find_key_point(points, KeyPointKind::LeftShoulder)?;
    let right = find_key_point(points, KeyPointKind::RightShoulder)?;

    let v = right.delta(&left);
    Some(v.y.atan2(v.x).to_degrees())
}
