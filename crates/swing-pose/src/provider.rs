//! Provider trait for external pose estimation.

use async_trait::async_trait;
use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::error::PoseResult;

/// Body joints the pipeline consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyJoint {
    Root,
    LeftHip,
    RightHip,
    LeftShoulder,
    RightShoulder,
}

impl BodyJoint {
    /// Joints in the fixed extraction order.
    pub const ALL: [BodyJoint; 5] = [
        BodyJoint::Root,
        BodyJoint::LeftHip,
        BodyJoint::RightHip,
        BodyJoint::LeftShoulder,
        BodyJoint::RightShoulder,
    ];
}

/// Hand joints the pipeline consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandJoint {
    Wrist,
}

/// One detected body joint in provider coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyObservation {
    pub joint: BodyJoint,
    /// Horizontal position in [0, 1], provider coordinate space.
    pub x: f64,
    /// Vertical position in [0, 1], provider coordinate space.
    pub y: f64,
    /// Detection confidence in [0, 1].
    pub confidence: f64,
}

/// One detected hand joint in provider coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandObservation {
    /// Which detected hand this observation belongs to.
    pub hand_index: u32,
    pub joint: HandJoint,
    pub x: f64,
    pub y: f64,
    pub confidence: f64,
}

/// Orientation hint passed to the provider alongside the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ImageOrientation {
    Up,
    /// Rotate right. The default for the portrait-held side-on capture this
    /// product targets.
    #[default]
    Right,
    Left,
    Down,
}

/// External capability producing body and hand joint observations.
///
/// Not implemented in this repository beyond test stubs; the analysis
/// pipeline only depends on this contract.
#[async_trait]
pub trait PoseProvider: Send + Sync {
    /// Detect body joints in an image.
    async fn detect_body(
        &self,
        image: &DynamicImage,
        orientation: ImageOrientation,
    ) -> PoseResult<Vec<BodyObservation>>;

    /// Detect hand joints in an image. One entry per joint per hand.
    async fn detect_hands(
        &self,
        image: &DynamicImage,
        orientation: ImageOrientation,
    ) -> PoseResult<Vec<HandObservation>>;

    /// Provider name for logging.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_joint_extraction_order() {
        assert_eq!(BodyJoint::ALL[0], BodyJoint::Root);
        assert_eq!(BodyJoint::ALL[4], BodyJoint::RightShoulder);
    }

    #[test]
    fn test_default_orientation_is_rotate_right() {
        assert_eq!(ImageOrientation::default(), ImageOrientation::Right);
    }
}
