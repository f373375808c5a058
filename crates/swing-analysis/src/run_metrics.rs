//! Pipeline metrics.
//!
//! Thin wrappers over the `metrics` macros; a recorder (if any) is
//! installed by the embedding process.

use metrics::counter;

/// Metric name constants.
pub mod names {
    pub const RUNS_TOTAL: &str = "swing_runs_total";
    pub const RUNS_FAILED_TOTAL: &str = "swing_runs_failed_total";
    pub const FRAMES_ANALYZED_TOTAL: &str = "swing_frames_analyzed_total";
    pub const FRAMES_SKIPPED_TOTAL: &str = "swing_frames_skipped_total";
}

/// Record a completed run with its frame counts.
pub fn record_run_completed(frames_analyzed: usize, frames_skipped: usize) {
    counter!(names::RUNS_TOTAL).increment(1);
    counter!(names::FRAMES_ANALYZED_TOTAL).increment(frames_analyzed as u64);
    counter!(names::FRAMES_SKIPPED_TOTAL).increment(frames_skipped as u64);
}

/// Record a failed run.
pub fn record_run_failed() {
    counter!(names::RUNS_TOTAL).increment(1);
    counter!(names::RUNS_FAILED_TOTAL).increment(1);
}
