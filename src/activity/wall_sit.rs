//! Wall-sit hold timing
//!
//! No reps. The timer starts on the first frame with the knees in the
//! good band and then accrues wall-clock time; stability is the share of
//! frames since then that stayed in band.

use super::detector::*;
use crate::physics::{quality_band, QualityBand};
use crate::pose::NamedPose;

pub const WALL_SIT_GOOD_MIN: f32 = 85.0;
pub const WALL_SIT_GOOD_MAX: f32 = 100.0;
/// Warning band is 75-110°
pub const WALL_SIT_TOLERANCE: f32 = 10.0;

#[derive(Clone, Debug, Default)]
pub struct WallSitDetector {
    /// First in-band frame; the timer never resets once started
    started_at: Option<f64>,
    elapsed_ms: f64,
    frames_total: u32,
    frames_in_band: u32,
}

impl WallSitDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of frames in the good band since the timer started (0-100)
    pub fn stability_score(&self) -> f32 {
        if self.frames_total == 0 {
            return 0.0;
        }
        clamp_score(self.frames_in_band as f32 / self.frames_total as f32 * 100.0)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn advance(&self, knee_angle: f32, timestamp_ms: f64) -> (Self, StepOutput) {
        let mut next = self.clone();
        let band = quality_band(knee_angle, WALL_SIT_GOOD_MIN, WALL_SIT_GOOD_MAX, WALL_SIT_TOLERANCE);

        if next.started_at.is_none() && band == QualityBand::Good {
            log::debug!("wall-sit timer started at {:.0}ms", timestamp_ms);
            next.started_at = Some(timestamp_ms);
        }

        if let Some(start) = next.started_at {
            next.frames_total += 1;
            if band == QualityBand::Good {
                next.frames_in_band += 1;
            }
            next.elapsed_ms = (timestamp_ms - start).max(next.elapsed_ms);
        }

        let metrics = DisplayMetrics::new(next.phase())
            .with_angle(knee_angle)
            .with_quality(Some(band))
            .readout("stability", next.stability_score())
            .readout("elapsedSeconds", (next.elapsed_ms / 1000.0) as f32);

        (next, StepOutput::display(metrics))
    }
}

impl Detector for WallSitDetector {
    fn phase(&self) -> Phase {
        if self.started_at.is_some() {
            Phase::Timing
        } else {
            Phase::Idle
        }
    }

    fn step(&self, pose: &NamedPose, ctx: &FrameContext) -> (Self, StepOutput) {
        let (left, right) = pose.knee_angles();
        self.advance((left + right) / 2.0, ctx.timestamp_ms)
    }

    fn summarize(&self, summary: &mut SessionSummary) {
        summary.stability = Some(self.stability_score());
        summary.duration_ms = self.elapsed_ms;
    }
}
