//! Sit-up rep detection
//!
//! idle → down → up → down on the knee-hip-shoulder fold angle.
//! A rep completes when the athlete lies back down after sitting up.

use super::detector::*;
use crate::physics::{quality_band, DEFAULT_BAND_TOLERANCE};
use crate::pose::NamedPose;

/// Fold angle above which the athlete is lying
pub const SITUP_LYING_ANGLE: f32 = 140.0;
/// Fold angle below which the athlete is upright
pub const SITUP_UPRIGHT_ANGLE: f32 = 90.0;
/// Fold deeper than this earns the crunch bonus
pub const SITUP_CRUNCH_ANGLE: f32 = 70.0;
/// Left/right difference below this earns the symmetry bonus
pub const SITUP_SYMMETRY_TOLERANCE: f32 = 15.0;

const BASE_FORM: f32 = 60.0;
const CRUNCH_BONUS: f32 = 20.0;
const SYMMETRY_BONUS: f32 = 20.0;

pub fn situp_form_score(tightest_fold: f32, worst_asymmetry: f32) -> f32 {
    let mut score = BASE_FORM;
    if tightest_fold < SITUP_CRUNCH_ANGLE {
        score += CRUNCH_BONUS;
    }
    if worst_asymmetry < SITUP_SYMMETRY_TOLERANCE {
        score += SYMMETRY_BONUS;
    }
    clamp_score(score)
}

#[derive(Clone, Debug)]
pub struct SitUpDetector {
    phase: Phase,
    tightest_fold: f32,
    worst_asymmetry: f32,
}

impl SitUpDetector {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            tightest_fold: 180.0,
            worst_asymmetry: 0.0,
        }
    }

    pub fn advance(&self, left_fold: f32, right_fold: f32) -> (Self, StepOutput) {
        let mut next = self.clone();
        let angle = (left_fold + right_fold) / 2.0;
        let asymmetry = (left_fold - right_fold).abs();
        let mut event = None;

        match self.phase {
            Phase::Idle => {
                if angle > SITUP_LYING_ANGLE {
                    next.phase = Phase::Down;
                }
            }
            Phase::Down => {
                if angle < SITUP_UPRIGHT_ANGLE {
                    next.phase = Phase::Up;
                    next.tightest_fold = angle;
                    next.worst_asymmetry = asymmetry;
                }
            }
            Phase::Up => {
                next.tightest_fold = next.tightest_fold.min(angle);
                next.worst_asymmetry = next.worst_asymmetry.max(asymmetry);

                if angle > SITUP_LYING_ANGLE {
                    next.phase = Phase::Down;
                    event = Some(CompletedEvent {
                        label: "rep",
                        value: next.tightest_fold,
                        form_score: situp_form_score(next.tightest_fold, next.worst_asymmetry),
                    });
                }
            }
            _ => next.phase = Phase::Idle,
        }

        if next.phase != self.phase {
            log::debug!("sit-up {:?} -> {:?} at {:.1}°", self.phase, next.phase, angle);
        }

        let quality = (next.phase == Phase::Up).then(|| {
            quality_band(angle, 0.0, SITUP_CRUNCH_ANGLE, DEFAULT_BAND_TOLERANCE)
        });
        let metrics = DisplayMetrics::new(next.phase)
            .with_angle(angle)
            .with_quality(quality)
            .readout("asymmetry", asymmetry);

        (next, StepOutput { metrics, event })
    }
}

impl Default for SitUpDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for SitUpDetector {
    fn phase(&self) -> Phase {
        self.phase
    }

    fn step(&self, pose: &NamedPose, _ctx: &FrameContext) -> (Self, StepOutput) {
        let (left, right) = pose.hip_angles();
        self.advance(left, right)
    }
}
