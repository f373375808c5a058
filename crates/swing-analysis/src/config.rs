//! Analysis configuration.

use swing_media::{NOMINAL_FRAME_RATE, TARGET_SAMPLE_COUNT};
use swing_pose::{ImageOrientation, CONFIDENCE_FLOOR};

/// Configuration for one analyzer instance.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Nominal frame rate assumed for sampling
    pub frame_rate: f64,
    /// Maximum sampled frames per video
    pub target_samples: usize,
    /// Joint confidence floor
    pub confidence_floor: f64,
    /// Orientation hint handed to the pose provider
    pub provider_orientation: ImageOrientation,
    /// Per-frame FFmpeg extraction timeout in seconds
    pub frame_timeout_secs: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            frame_rate: NOMINAL_FRAME_RATE,
            target_samples: TARGET_SAMPLE_COUNT,
            confidence_floor: CONFIDENCE_FLOOR,
            provider_orientation: ImageOrientation::default(),
            frame_timeout_secs: 30,
        }
    }
}

impl AnalysisConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            frame_rate: std::env::var("SWING_FRAME_RATE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.frame_rate),
            target_samples: std::env::var("SWING_TARGET_SAMPLES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.target_samples),
            confidence_floor: std::env::var("SWING_CONFIDENCE_FLOOR")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.confidence_floor),
            provider_orientation: std::env::var("SWING_PROVIDER_ORIENTATION")
                .ok()
                .and_then(|s| parse_orientation(&s))
                .unwrap_or(defaults.provider_orientation),
            frame_timeout_secs: std::env::var("SWING_FRAME_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.frame_timeout_secs),
        }
    }
}

fn parse_orientation(s: &str) -> Option<ImageOrientation> {
    match s.to_ascii_lowercase().as_str() {
        "up" => Some(ImageOrientation::Up),
        "right" => Some(ImageOrientation::Right),
        "left" => Some(ImageOrientation::Left),
        "down" => Some(ImageOrientation::Down),
        _ => None,
    }
}
