//! Swing phase labels.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Coarse swing segment derived from the spine angle of a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SwingPhase {
    Backswing,
    Downswing,
    FollowThrough,
}

impl SwingPhase {
    /// All phases in the fixed reporting order.
    pub const ALL: [SwingPhase; 3] = [
        SwingPhase::Backswing,
        SwingPhase::Downswing,
        SwingPhase::FollowThrough,
    ];

    /// Returns the phase as a string for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backswing => "backswing",
            Self::Downswing => "downswing",
            Self::FollowThrough => "follow_through",
        }
    }

    /// Human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Backswing => "Backswing",
            Self::Downswing => "Downswing",
            Self::FollowThrough => "Follow-through",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_order_is_fixed() {
        let labels: Vec<_> = SwingPhase::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels, vec!["Backswing", "Downswing", "Follow-through"]);
    }

    #[test]
    fn test_phase_serde() {
        let json = serde_json::to_string(&SwingPhase::FollowThrough).unwrap();
        assert_eq!(json, "\"follow_through\"");
    }
}
