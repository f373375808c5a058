//! Video orientation metadata.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Recorded orientation of a video, derived from its transform matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum VideoOrientation {
    /// No rotation (0 degrees).
    #[default]
    Up,
    /// Rotated 90 degrees (portrait captured with the home button down).
    Right,
    /// Rotated -90 degrees.
    Left,
    /// Rotated 180 degrees.
    Down,
}

impl VideoOrientation {
    /// Derive the orientation from the source transform matrix coefficients.
    ///
    /// `b=1,c=-1` -> 90 degrees; `b=-1,c=1` -> -90 degrees;
    /// `a=-1,d=-1` -> 180 degrees; anything else -> 0 degrees.
    pub fn from_transform(a: f64, b: f64, c: f64, d: f64) -> Self {
        let eq = |x: f64, y: f64| (x - y).abs() < 1e-6;

        if eq(b, 1.0) && eq(c, -1.0) {
            Self::Right
        } else if eq(b, -1.0) && eq(c, 1.0) {
            Self::Left
        } else if eq(a, -1.0) && eq(d, -1.0) {
            Self::Down
        } else {
            Self::Up
        }
    }

    /// Map a rotation tag in degrees (as reported by container metadata)
    /// onto an orientation. Values are normalized into (-180, 180].
    pub fn from_rotation_degrees(degrees: f64) -> Self {
        let mut deg = degrees % 360.0;
        if deg > 180.0 {
            deg -= 360.0;
        } else if deg <= -180.0 {
            deg += 360.0;
        }

        if (deg - 90.0).abs() < 1.0 {
            Self::Right
        } else if (deg + 90.0).abs() < 1.0 {
            Self::Left
        } else if (deg.abs() - 180.0).abs() < 1.0 {
            Self::Down
        } else {
            Self::Up
        }
    }

    /// The rotation this orientation represents, in degrees.
    pub fn degrees(&self) -> i32 {
        match self {
            Self::Up => 0,
            Self::Right => 90,
            Self::Left => -90,
            Self::Down => 180,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_transform_table() {
        assert_eq!(
            VideoOrientation::from_transform(0.0, 1.0, -1.0, 0.0),
            VideoOrientation::Right
        );
        assert_eq!(
            VideoOrientation::from_transform(0.0, -1.0, 1.0, 0.0),
            VideoOrientation::Left
        );
        assert_eq!(
            VideoOrientation::from_transform(-1.0, 0.0, 0.0, -1.0),
            VideoOrientation::Down
        );
        assert_eq!(
            VideoOrientation::from_transform(1.0, 0.0, 0.0, 1.0),
            VideoOrientation::Up
        );
    }

    #[test]
    fn test_from_rotation_degrees() {
        assert_eq!(
            VideoOrientation::from_rotation_degrees(90.0),
            VideoOrientation::Right
        );
        assert_eq!(
            VideoOrientation::from_rotation_degrees(-90.0),
            VideoOrientation::Left
        );
        assert_eq!(
            VideoOrientation::from_rotation_degrees(270.0),
            VideoOrientation::Left
        );
        assert_eq!(
            VideoOrientation::from_rotation_degrees(180.0),
            VideoOrientation::Down
        );
        assert_eq!(
            VideoOrientation::from_rotation_degrees(-180.0),
            VideoOrientation::Down
        );
        assert_eq!(
            VideoOrientation::from_rotation_degrees(0.0),
            VideoOrientation::Up
        );
    }
}
