//! Squat rep detection
//!
//! idle → up → down → up, driven by the average knee angle. A rep
//! completes on down → up; form is squat depth minus a symmetry penalty.

use super::detector::*;
use crate::physics::{quality_band, DEFAULT_BAND_TOLERANCE};
use crate::pose::NamedPose;

/// Knee angle above which the athlete is standing
pub const SQUAT_UP_ANGLE: f32 = 165.0;
/// Knee angle below which the athlete is at the bottom
pub const SQUAT_DOWN_ANGLE: f32 = 95.0;
/// Knee angle counted as 100% depth
pub const SQUAT_FULL_DEPTH_ANGLE: f32 = 70.0;

/// Left/right knee difference tolerated without penalty
const SYMMETRY_TOLERANCE: f32 = 10.0;
const MAX_SYMMETRY_PENALTY: f32 = 25.0;

/// Depth percentage for a knee angle, 0 = standing, 100 = 70° or deeper
pub fn depth_percent(knee_angle: f32) -> f32 {
    clamp_score((180.0 - knee_angle) / (180.0 - SQUAT_FULL_DEPTH_ANGLE) * 100.0)
}

/// Form score for one rep
pub fn squat_form_score(deepest_angle: f32, worst_asymmetry: f32) -> f32 {
    let penalty = (worst_asymmetry - SYMMETRY_TOLERANCE).clamp(0.0, MAX_SYMMETRY_PENALTY);
    clamp_score(depth_percent(deepest_angle) - penalty)
}

#[derive(Clone, Debug)]
pub struct SquatDetector {
    phase: Phase,
    /// Smallest knee angle seen in the current down phase
    deepest: f32,
    /// Largest left/right knee difference in the current down phase
    worst_asymmetry: f32,
}

impl SquatDetector {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            deepest: 180.0,
            worst_asymmetry: 0.0,
        }
    }

    /// Advance on raw knee angles
    pub fn advance(&self, left_knee: f32, right_knee: f32) -> (Self, StepOutput) {
        let mut next = self.clone();
        let angle = (left_knee + right_knee) / 2.0;
        let asymmetry = (left_knee - right_knee).abs();
        let mut event = None;

        match self.phase {
            Phase::Idle => {
                if angle > SQUAT_UP_ANGLE {
                    next.phase = Phase::Up;
                }
            }
            Phase::Up => {
                if angle < SQUAT_DOWN_ANGLE {
                    next.phase = Phase::Down;
                    next.deepest = angle;
                    next.worst_asymmetry = asymmetry;
                }
            }
            Phase::Down => {
                next.deepest = next.deepest.min(angle);
                next.worst_asymmetry = next.worst_asymmetry.max(asymmetry);

                if angle > SQUAT_UP_ANGLE {
                    next.phase = Phase::Up;
                    event = Some(CompletedEvent {
                        label: "rep",
                        value: depth_percent(next.deepest),
                        form_score: squat_form_score(next.deepest, next.worst_asymmetry),
                    });
                }
            }
            _ => next.phase = Phase::Idle,
        }

        if next.phase != self.phase {
            log::debug!("squat {:?} -> {:?} at {:.1}°", self.phase, next.phase, angle);
        }

        let quality = (angle < SQUAT_UP_ANGLE).then(|| {
            quality_band(angle, SQUAT_FULL_DEPTH_ANGLE, SQUAT_DOWN_ANGLE, DEFAULT_BAND_TOLERANCE)
        });
        let metrics = DisplayMetrics::new(next.phase)
            .with_angle(angle)
            .with_quality(quality)
            .readout("leftKnee", left_knee)
            .readout("rightKnee", right_knee)
            .readout("depth", depth_percent(angle));

        (next, StepOutput { metrics, event })
    }
}

impl Default for SquatDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for SquatDetector {
    fn phase(&self) -> Phase {
        self.phase
    }

    fn step(&self, pose: &NamedPose, _ctx: &FrameContext) -> (Self, StepOutput) {
        let (left, right) = pose.knee_angles();
        self.advance(left, right)
    }
}
