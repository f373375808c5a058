//! Frame-index sampling.
//!
//! A sampler is a pure function of the video duration: it never holds state
//! across calls, so the same sampler can be iterated any number of times and
//! always yields the same timestamps.

/// Nominal frame rate assumed for swing captures.
pub const NOMINAL_FRAME_RATE: f64 = 30.0;

/// Maximum number of frames analyzed per video regardless of length.
pub const TARGET_SAMPLE_COUNT: usize = 30;

/// One sampled frame: its index in the source and its timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleFrame {
    /// Frame index in the source video.
    pub index: u64,
    /// Timestamp in seconds (`index / frame_rate`).
    pub time_secs: f64,
}

/// Lazy, finite, restartable sampler over a video's frame indices.
///
/// Yields indices `0, step, 2*step, ...` with
/// `step = max(1, total_frames / target)`, capped at `target` samples.
#[derive(Debug, Clone, Copy)]
pub struct FrameSampler {
    total_frames: u64,
    step: u64,
    frame_rate: f64,
    target: usize,
}

impl FrameSampler {
    /// Create a sampler for a video of the given duration.
    pub fn new(duration_secs: f64, frame_rate: f64, target: usize) -> Self {
        let total_frames = if duration_secs > 0.0 && frame_rate > 0.0 {
            (duration_secs * frame_rate).floor() as u64
        } else {
            0
        };
        let step = (total_frames / target.max(1) as u64).max(1);

        Self {
            total_frames,
            step,
            frame_rate,
            target,
        }
    }

    /// Sampler with the domain defaults (30 fps, 30 samples).
    pub fn with_defaults(duration_secs: f64) -> Self {
        Self::new(duration_secs, NOMINAL_FRAME_RATE, TARGET_SAMPLE_COUNT)
    }

    /// Total frames in the source video.
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Index stride between samples.
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Number of frames this sampler will yield.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// True when the source is degenerate (zero frames).
    pub fn is_empty(&self) -> bool {
        self.total_frames == 0
    }

    /// Iterate the sampled frames. Restartable; each call starts at index 0.
    pub fn iter(&self) -> impl Iterator<Item = SampleFrame> + '_ {
        let frame_rate = self.frame_rate;
        (0..)
            .map(move |i| i * self.step)
            .take_while(move |index| *index < self.total_frames)
            .take(self.target)
            .map(move |index| SampleFrame {
                index,
                time_secs: index as f64 / frame_rate,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_second_video_yields_thirty_samples() {
        let sampler = FrameSampler::with_defaults(10.0);
        assert_eq!(sampler.total_frames(), 300);
        assert_eq!(sampler.step(), 10);

        let frames: Vec<_> = sampler.iter().collect();
        assert_eq!(frames.len(), 30);
        assert_eq!(frames[0].index, 0);
        assert_eq!(frames[29].index, 290);
        assert!((frames[1].time_secs - 10.0 / 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_is_empty() {
        let sampler = FrameSampler::with_defaults(0.0);
        assert!(sampler.is_empty());
        assert_eq!(sampler.iter().count(), 0);
    }

    #[test]
    fn test_short_video_samples_every_frame() {
        // 0.5s at 30fps = 15 frames, fewer than the target
        let sampler = FrameSampler::with_defaults(0.5);
        let frames: Vec<_> = sampler.iter().collect();
        assert_eq!(frames.len(), 15);
        assert!(frames.windows(2).all(|w| w[1].index == w[0].index + 1));
    }

    #[test]
    fn test_sequence_properties_hold_for_any_duration() {
        for duration in [0.0, 0.03, 0.5, 1.0, 1.5, 7.3, 10.0, 60.0, 3600.0] {
            let sampler = FrameSampler::with_defaults(duration);
            let indices: Vec<u64> = sampler.iter().map(|f| f.index).collect();

            assert!(indices.len() <= TARGET_SAMPLE_COUNT);
            if sampler.total_frames() > 0 {
                assert_eq!(indices.first(), Some(&0));
            }
            assert!(indices.windows(2).all(|w| w[0] < w[1]));
            assert!(indices.iter().all(|i| *i < sampler.total_frames()));
        }
    }

    #[test]
    fn test_restartable() {
        let sampler = FrameSampler::with_defaults(10.0);
        let first: Vec<_> = sampler.iter().collect();
        let second: Vec<_> = sampler.iter().collect();
        assert_eq!(first, second);
    }
}
