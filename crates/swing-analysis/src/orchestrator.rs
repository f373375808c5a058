//! Analysis run orchestration.
//!
//! Drives the pipeline end-to-end for one video: probe, sample, then a
//! sequential per-frame loop (extract image, extract key points, compute
//! angles, classify phase) followed by report aggregation. The run is an
//! asynchronous task relative to its caller; progress is published through
//! a per-run watch channel and cancellation is checked at each frame
//! boundary. Runs never share mutable state.

use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use swing_media::{FrameSampler, MediaError, VideoSource};
use swing_models::{
    AnalysisOutcome, AnalysisProgress, AnalysisState, FrameMetrics, FrameOutcome, SkipReason,
};
use swing_pose::{JointExtractor, PoseProvider};

use crate::angles::{hip_rotation, shoulder_rotation, spine_angle};
use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, AnalysisResult};
use crate::phase::classify_phase;
use crate::report::generate_report;
use crate::run_metrics;

/// Swing analysis coordinator.
///
/// One analyzer can serve any number of concurrent runs; all per-run state
/// (accumulators, progress, cancellation) lives in the run itself.
pub struct SwingAnalyzer {
    provider: Arc<dyn PoseProvider>,
    extractor: JointExtractor,
    config: AnalysisConfig,
}

impl SwingAnalyzer {
    /// Create an analyzer over a pose provider.
    pub fn new(provider: Arc<dyn PoseProvider>, config: AnalysisConfig) -> Self {
        let extractor = JointExtractor::new()
            .with_confidence_floor(config.confidence_floor)
            .with_orientation(config.provider_orientation);

        Self {
            provider,
            extractor,
            config,
        }
    }

    /// Analyze a video to completion, without external progress observation.
    pub async fn analyze(&self, source: &dyn VideoSource) -> AnalysisResult<AnalysisOutcome> {
        let (progress_tx, _progress_rx) = watch::channel(AnalysisProgress::idle());
        let (_cancel_tx, cancel_rx) = watch::channel(false);
        self.run(source, &progress_tx, cancel_rx).await
    }

    /// Execute one run, publishing progress and honoring cancellation.
    async fn run(
        &self,
        source: &dyn VideoSource,
        progress: &watch::Sender<AnalysisProgress>,
        cancel: watch::Receiver<bool>,
    ) -> AnalysisResult<AnalysisOutcome> {
        let run_id = Uuid::new_v4();

        publish(progress, AnalysisState::Sampling, 0.0, 0, 0);

        let video = match source.probe().await {
            Ok(v) => v,
            Err(e) => {
                warn!(
                    run_id = %run_id,
                    source = source.name(),
                    error = %e,
                    "video setup failed"
                );
                publish(progress, AnalysisState::Failed, 0.0, 0, 0);
                run_metrics::record_run_failed();
                return Err(e.into());
            }
        };

        let sampler = FrameSampler::new(
            video.duration,
            self.config.frame_rate,
            self.config.target_samples,
        );
        let total = sampler.len();

        info!(
            run_id = %run_id,
            source = source.name(),
            provider = self.provider.name(),
            duration_secs = video.duration,
            total_frames = sampler.total_frames(),
            samples = total,
            orientation = ?video.orientation,
            "starting swing analysis"
        );

        let mut outcomes: Vec<FrameOutcome> = Vec::with_capacity(total);

        for (processed, sample) in sampler.iter().enumerate() {
            // The frame boundary is the run's only cancellation point.
            if *cancel.borrow() {
                info!(run_id = %run_id, processed, "analysis cancelled");
                publish(
                    progress,
                    AnalysisState::Failed,
                    processed as f64 / total as f64,
                    processed,
                    total,
                );
                run_metrics::record_run_failed();
                return Err(AnalysisError::Cancelled);
            }

            publish(
                progress,
                AnalysisState::Extracting,
                processed as f64 / total as f64,
                processed,
                total,
            );

            let outcome = self.process_frame(source, sample.time_secs).await?;
            if let FrameOutcome::Skipped { reason, .. } = &outcome {
                debug!(
                    run_id = %run_id,
                    time_secs = sample.time_secs,
                    reason = reason.as_str(),
                    "frame skipped"
                );
            }
            outcomes.push(outcome);

            publish(
                progress,
                AnalysisState::Extracting,
                (processed + 1) as f64 / total as f64,
                processed + 1,
                total,
            );
        }

        publish(progress, AnalysisState::Aggregating, 1.0, total, total);

        let metrics: Vec<FrameMetrics> = outcomes
            .iter()
            .filter_map(|o| o.metrics().cloned())
            .collect();
        let report = generate_report(&metrics);

        let frames_analyzed = metrics.len();
        let frames_skipped = outcomes.len() - frames_analyzed;
        run_metrics::record_run_completed(frames_analyzed, frames_skipped);

        publish(progress, AnalysisState::Done, 1.0, total, total);
        info!(
            run_id = %run_id,
            frames_analyzed,
            frames_skipped,
            "swing analysis complete"
        );

        Ok(AnalysisOutcome {
            report,
            frames_analyzed,
            frames_skipped,
        })
    }

    /// Run the per-frame pipeline at one timestamp.
    ///
    /// Every per-frame failure is recovered into a skip outcome; only
    /// cancellation propagates.
    async fn process_frame(
        &self,
        source: &dyn VideoSource,
        time_secs: f64,
    ) -> AnalysisResult<FrameOutcome> {
        let image = match source.frame_at(time_secs).await {
            Ok(image) => image,
            Err(MediaError::Cancelled) => return Err(AnalysisError::Cancelled),
            Err(e) => {
                warn!(time_secs, error = %e, "frame extraction failed, skipping");
                return Ok(FrameOutcome::Skipped {
                    time_secs,
                    reason: SkipReason::ExtractionFailed,
                });
            }
        };

        let key_points = match self.extractor.extract(self.provider.as_ref(), &image).await {
            Ok(points) => points,
            Err(e) => {
                warn!(time_secs, error = %e, "pose detection failed, skipping");
                return Ok(FrameOutcome::Skipped {
                    time_secs,
                    reason: SkipReason::DetectionFailed,
                });
            }
        };

        if key_points.is_empty() {
            return Ok(FrameOutcome::Skipped {
                time_secs,
                reason: SkipReason::NoPose,
            });
        }

        let spine = spine_angle(&key_points);
        let metrics = FrameMetrics {
            time_secs,
            phase: classify_phase(spine),
            spine_angle: spine,
            hip_rotation: hip_rotation(&key_points),
            shoulder_rotation: shoulder_rotation(&key_points),
            key_points,
        };

        Ok(FrameOutcome::Analyzed(metrics))
    }
}

/// Publish a progress snapshot, keeping the fraction monotone.
fn publish(
    tx: &watch::Sender<AnalysisProgress>,
    state: AnalysisState,
    fraction: f64,
    frames_processed: usize,
    frames_total: usize,
) {
    let fraction = if fraction.is_finite() { fraction } else { 1.0 };
    let fraction = tx.borrow().fraction.max(fraction.clamp(0.0, 1.0));
    let _ = tx.send(AnalysisProgress {
        state,
        fraction,
        frames_processed,
        frames_total,
    });
}

/// Handle for an in-flight analysis run.
///
/// The UI collaborator polls [`AnalysisRun::progress`] (or awaits change
/// notifications via [`AnalysisRun::subscribe`]) while the run executes,
/// and collects the report with [`AnalysisRun::join`].
pub struct AnalysisRun {
    progress_rx: watch::Receiver<AnalysisProgress>,
    cancel_tx: watch::Sender<bool>,
    handle: JoinHandle<AnalysisResult<AnalysisOutcome>>,
}

impl AnalysisRun {
    /// Spawn an analysis of `source` as a background task.
    pub fn spawn(analyzer: Arc<SwingAnalyzer>, source: Arc<dyn VideoSource>) -> Self {
        let (progress_tx, progress_rx) = watch::channel(AnalysisProgress::idle());
        let (cancel_tx, cancel_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            analyzer.run(source.as_ref(), &progress_tx, cancel_rx).await
        });

        Self {
            progress_rx,
            cancel_tx,
            handle,
        }
    }

    /// Current progress snapshot. Safe to call at any time.
    pub fn progress(&self) -> AnalysisProgress {
        *self.progress_rx.borrow()
    }

    /// Receiver notified on every progress change.
    pub fn subscribe(&self) -> watch::Receiver<AnalysisProgress> {
        self.progress_rx.clone()
    }

    /// Request cooperative cancellation at the next frame boundary.
    pub fn cancel(&self) {
        let _ = self.cancel_tx.send(true);
    }

    /// Wait for the run and return its outcome.
    pub async fn join(self) -> AnalysisResult<AnalysisOutcome> {
        self.handle
            .await
            .map_err(|e| AnalysisError::internal(format!("analysis task failed: {}", e)))?
    }
}
