//! Coaching report generation.
//!
//! Pure aggregation over the full collected frame sequence. Aggregation
//! never fails: every statistic degrades to an explanatory sentence when
//! its input is empty, and identical inputs always produce byte-identical
//! report text.

use swing_models::{FrameMetrics, SwingPhase};

/// Generate the coaching report for a completed run.
///
/// Four paragraphs in fixed order: swing phases, spine angle, hip rotation,
/// shoulder rotation. Order-independent over the input frames.
pub fn generate_report(frames: &[FrameMetrics]) -> String {
    let sections = [
        phase_section(frames),
        spine_section(frames),
        hip_section(frames),
        shoulder_section(frames),
    ];

    let mut report = sections.join("\n\n");
    report.push('\n');
    report
}

fn phase_section(frames: &[FrameMetrics]) -> String {
    let counts: Vec<usize> = SwingPhase::ALL
        .iter()
        .map(|phase| {
            frames
                .iter()
                .filter(|f| f.phase == Some(*phase))
                .count()
        })
        .collect();
    let total: usize = counts.iter().sum();

    if total == 0 {
        return "No valid swing phases were detected. \
                Ensure the video shows a clear side view of the golfer."
            .to_string();
    }

    let mut lines = vec!["Swing phase breakdown:".to_string()];
    for (phase, count) in SwingPhase::ALL.iter().zip(&counts) {
        let percent = *count as f64 / total as f64 * 100.0;
        lines.push(format!(
            "{}: {} frames ({:.1}%)",
            phase.label(),
            count,
            percent
        ));
    }
    lines.join("\n")
}

fn spine_section(frames: &[FrameMetrics]) -> String {
    let angles: Vec<f64> = frames.iter().filter_map(|f| f.spine_angle).collect();

    let Some(stats) = Stats::over(&angles) else {
        return "Spine angle data is not available. \
                Ensure the golfer's upper body is visible."
            .to_string();
    };

    let mut section = format!(
        "Spine angle: average {:.1} deg, min {:.1} deg, max {:.1} deg.",
        stats.mean, stats.min, stats.max
    );
    if stats.mean < 45.0 {
        section.push_str(
            "\nSpine angle is too shallow. Maintain a more upright spine through the swing.",
        );
    } else if stats.mean > 90.0 {
        section.push_str("\nExcessive spine tilt detected. Keep your spine closer to neutral.");
    }
    section
}

fn hip_section(frames: &[FrameMetrics]) -> String {
    let angles: Vec<f64> = frames.iter().filter_map(|f| f.hip_rotation).collect();

    let Some(stats) = Stats::over(&angles) else {
        return "Hip rotation data is not available. \
                Ensure the golfer's hips are visible."
            .to_string();
    };

    let mut section = format!(
        "Hip rotation: average {:.1} deg, max {:.1} deg.",
        stats.mean, stats.max
    );
    if stats.max < 45.0 {
        section.push_str(
            "\nLimited hip rotation detected. Rotate your hips more through the swing.",
        );
    } else if stats.max > 90.0 {
        section.push_str("\nExcessive hip rotation detected. Maintain lower-body stability.");
    }
    section
}

fn shoulder_section(frames: &[FrameMetrics]) -> String {
    let angles: Vec<f64> = frames.iter().filter_map(|f| f.shoulder_rotation).collect();

    let Some(stats) = Stats::over(&angles) else {
        return "Shoulder rotation data is not available. \
                Ensure the golfer's shoulders are visible."
            .to_string();
    };

    let mut section = format!(
        "Shoulder rotation: average {:.1} deg, max {:.1} deg.",
        stats.mean, stats.max
    );
    if stats.max < 90.0 {
        section.push_str(
            "\nLimited shoulder turn detected. Increase shoulder rotation for more power.",
        );
    } else if stats.max > 120.0 {
        section.push_str(
            "\nShoulder over-rotation detected. Maintain control at the top of the swing.",
        );
    }
    section
}

struct Stats {
    mean: f64,
    min: f64,
    max: f64,
}

impl Stats {
    fn over(values: &[f64]) -> Option<Stats> {
        if values.is_empty() {
            return None;
        }
        let sum: f64 = values.iter().sum();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Stats {
            mean: sum / values.len() as f64,
            min,
            max,
        })
    }
}
