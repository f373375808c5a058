//! Key-point extraction from raw provider observations.

use image::DynamicImage;
use tracing::debug;

use swing_models::{KeyPoint, KeyPointKind, VideoOrientation};

use crate::error::PoseResult;
use crate::provider::{BodyJoint, HandJoint, ImageOrientation, PoseProvider};

/// Joints at or below this confidence are discarded.
pub const CONFIDENCE_FLOOR: f64 = 0.1;

/// Converts one frame's provider output into a normalized key-point set.
///
/// The orientation hint handed to the provider is fixed to rotate-right for
/// the portrait-held side-on capture this product targets, regardless of the
/// video's recorded angle. This is a documented simplification, not an
/// adaptive correction; callers that know the real angle can supply a
/// corrected hint via [`JointExtractor::with_orientation`].
#[derive(Debug, Clone)]
pub struct JointExtractor {
    confidence_floor: f64,
    orientation: ImageOrientation,
}

impl Default for JointExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl JointExtractor {
    /// Create an extractor with the default floor and rotate-right hint.
    pub fn new() -> Self {
        Self {
            confidence_floor: CONFIDENCE_FLOOR,
            orientation: ImageOrientation::default(),
        }
    }

    /// Override the confidence floor.
    pub fn with_confidence_floor(mut self, floor: f64) -> Self {
        self.confidence_floor = floor;
        self
    }

    /// Override the orientation hint passed to the provider.
    pub fn with_orientation(mut self, orientation: ImageOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Hint for a known recorded video orientation.
    ///
    /// Exposed so a corrected mapping can be supplied instead of the
    /// hard-coded portrait default; the pipeline itself does not yet feed
    /// the probed angle back in.
    pub fn orientation_for(recorded: VideoOrientation) -> ImageOrientation {
        match recorded {
            VideoOrientation::Up => ImageOrientation::Up,
            VideoOrientation::Right => ImageOrientation::Right,
            VideoOrientation::Left => ImageOrientation::Left,
            VideoOrientation::Down => ImageOrientation::Down,
        }
    }

    /// Extract the key-point set for one frame.
    ///
    /// Body joints are emitted first, in the fixed [`BodyJoint::ALL`] order,
    /// then one wrist per detected hand. An empty result is valid and means
    /// "no usable pose in this frame".
    pub async fn extract(
        &self,
        provider: &dyn PoseProvider,
        image: &DynamicImage,
    ) -> PoseResult<Vec<KeyPoint>> {
        let body = provider.detect_body(image, self.orientation).await?;
        let hands = provider.detect_hands(image, self.orientation).await?;

        let mut points = Vec::with_capacity(BodyJoint::ALL.len() + hands.len());

        for joint in BodyJoint::ALL {
            let observation = body
                .iter()
                .find(|o| o.joint == joint && o.confidence > self.confidence_floor);

            if let Some(o) = observation {
                let (x, y) = normalize(o.x, o.y);
                points.push(KeyPoint::new(body_kind(joint), x, y));
            }
        }

        // No wrist deduplication: both hands may contribute a Wrist point.
        // Downstream calculators consume only the first match by kind.
        for o in &hands {
            if o.joint == HandJoint::Wrist && o.confidence > self.confidence_floor {
                let (x, y) = normalize(o.x, o.y);
                points.push(KeyPoint::new(KeyPointKind::Wrist, x, y));
            }
        }

        debug!(
            provider = provider.name(),
            key_points = points.len(),
            "extracted key points"
        );

        Ok(points)
    }
}

/// Fixed 90-degree coordinate remap compensating for portrait capture.
fn normalize(x: f64, y: f64) -> (f64, f64) {
    (1.0 - y, x)
}

fn body_kind(joint: BodyJoint) -> KeyPointKind {
    match joint {
        BodyJoint::Root => KeyPointKind::Root,
        BodyJoint::LeftHip => KeyPointKind::LeftHip,
        BodyJoint::RightHip => KeyPointKind::RightHip,
        BodyJoint::LeftShoulder => KeyPointKind::LeftShoulder,
        BodyJoint::RightShoulder => KeyPointKind::RightShoulder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{BodyObservation, HandObservation};
    use async_trait::async_trait;

    struct StubProvider {
        body: Vec<BodyObservation>,
        hands: Vec<HandObservation>,
    }

    #[async_trait]
    impl PoseProvider for StubProvider {
        async fn detect_body(
            &self,
            _image: &DynamicImage,
            _orientation: ImageOrientation,
        ) -> PoseResult<Vec<BodyObservation>> {
            Ok(self.body.clone())
        }

        async fn detect_hands(
            &self,
            _image: &DynamicImage,
            _orientation: ImageOrientation,
        ) -> PoseResult<Vec<HandObservation>> {
            Ok(self.hands.clone())
        }

        fn name(&self) -> &'static str {
            "stub"
        }
    }

    fn blank_image() -> DynamicImage {
        DynamicImage::new_rgb8(4, 4)
    }

    fn body(joint: BodyJoint, x: f64, y: f64, confidence: f64) -> BodyObservation {
        BodyObservation {
            joint,
            x,
            y,
            confidence,
        }
    }

    #[tokio::test]
    async fn test_low_confidence_joints_are_dropped() {
        let provider = StubProvider {
            body: vec![
                body(BodyJoint::Root, 0.5, 0.5, 0.1),
                body(BodyJoint::LeftHip, 0.4, 0.6, 0.09),
                body(BodyJoint::RightHip, 0.6, 0.6, 0.11),
            ],
            hands: vec![],
        };

        let points = JointExtractor::new()
            .extract(&provider, &blank_image())
            .await
            .unwrap();

        // Exactly 0.1 is not above the floor
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].kind, KeyPointKind::RightHip);
    }

    #[tokio::test]
    async fn test_remap_applied_exactly_once() {
        let provider = StubProvider {
            body: vec![body(BodyJoint::Root, 0.2, 0.7, 0.9)],
            hands: vec![],
        };

        let points = JointExtractor::new()
            .extract(&provider, &blank_image())
            .await
            .unwrap();

        // (x, y) -> (1 - y, x)
        assert!((points[0].position.x - 0.3).abs() < 1e-12);
        assert!((points[0].position.y - 0.2).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_body_order_then_wrists() {
        let provider = StubProvider {
            body: vec![
                body(BodyJoint::RightShoulder, 0.7, 0.5, 0.8),
                body(BodyJoint::Root, 0.5, 0.9, 0.8),
                body(BodyJoint::LeftShoulder, 0.3, 0.5, 0.8),
            ],
            hands: vec![
                HandObservation {
                    hand_index: 0,
                    joint: HandJoint::Wrist,
                    x: 0.1,
                    y: 0.1,
                    confidence: 0.5,
                },
                HandObservation {
                    hand_index: 1,
                    joint: HandJoint::Wrist,
                    x: 0.9,
                    y: 0.9,
                    confidence: 0.5,
                },
            ],
        };

        let points = JointExtractor::new()
            .extract(&provider, &blank_image())
            .await
            .unwrap();

        let kinds: Vec<_> = points.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                KeyPointKind::Root,
                KeyPointKind::LeftShoulder,
                KeyPointKind::RightShoulder,
                KeyPointKind::Wrist,
                KeyPointKind::Wrist,
            ]
        );
    }

    #[test]
    fn test_orientation_hint_mapping() {
        assert_eq!(
            JointExtractor::orientation_for(VideoOrientation::Up),
            ImageOrientation::Up
        );
        assert_eq!(
            JointExtractor::orientation_for(VideoOrientation::Left),
            ImageOrientation::Left
        );
    }

    #[tokio::test]
    async fn test_no_joints_is_ok_and_empty() {
        let provider = StubProvider {
            body: vec![],
            hands: vec![],
        };

        let points = JointExtractor::new()
            .extract(&provider, &blank_image())
            .await
            .unwrap();
        assert!(points.is_empty());
    }
}
