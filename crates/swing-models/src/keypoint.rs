//! Body key points in frame-relative coordinates.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A 2D point in normalized [0,1]x[0,1] frame-relative coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint between this point and another.
    pub fn midpoint(&self, other: &Point2) -> Point2 {
        Point2::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Component-wise difference `self - other`.
    pub fn delta(&self, other: &Point2) -> Point2 {
        Point2::new(self.x - other.x, self.y - other.y)
    }
}

/// Named anatomical landmark detected in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum KeyPointKind {
    Root,
    LeftHip,
    RightHip,
    LeftShoulder,
    RightShoulder,
    Wrist,
}

impl KeyPointKind {
    /// Returns the kind as a string for display and logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::Wrist => "wrist",
        }
    }
}

/// One landmark's normalized position for a single frame.
///
/// Positions are already corrected for the video's recorded orientation and
/// for the portrait-capture convention (the analyzed subject is treated as
/// facing sideways). Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct KeyPoint {
    pub kind: KeyPointKind,
    pub position: Point2,
}

impl KeyPoint {
    /// Create a new key point.
    pub fn new(kind: KeyPointKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            position: Point2::new(x, y),
        }
    }
}

/// Find the first key point of the given kind.
///
/// Multiple hands may each contribute a `Wrist` key point; consumers use
/// only the first match, so only one wrist is ever actually consumed.
pub fn find_key_point(points: &[KeyPoint], kind: KeyPointKind) -> Option<Point2> {
    points.iter().find(|p| p.kind == kind).map(|p| p.position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_and_delta() {
        let a = Point2::new(0.2, 0.4);
        let b = Point2::new(0.6, 0.8);
        let mid = a.midpoint(&b);
        assert!((mid.x - 0.4).abs() < 1e-12);
        assert!((mid.y - 0.6).abs() < 1e-12);

        let d = b.delta(&a);
        assert!((d.x - 0.4).abs() < 1e-12);
        assert!((d.y - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_find_key_point_first_match_wins() {
        let points = vec![
            KeyPoint::new(KeyPointKind::Wrist, 0.1, 0.2),
            KeyPoint::new(KeyPointKind::Wrist, 0.9, 0.8),
        ];

        let wrist = find_key_point(&points, KeyPointKind::Wrist).unwrap();
        assert!((wrist.x - 0.1).abs() < 1e-12);
        assert!(find_key_point(&points, KeyPointKind::Root).is_none());
    }

    #[test]
    fn test_keypoint_kind_serde() {
        let json = serde_json::to_string(&KeyPointKind::LeftShoulder).unwrap();
        assert_eq!(json, "\"left_shoulder\"");
    }
}
