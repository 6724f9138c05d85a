//! Push-up rep detection
//!
//! idle → up → down → up on the average elbow angle. Transitions are only
//! taken while the body line (shoulder-hip-ankle) is straight.

use super::detector::*;
use crate::physics::{quality_band, DEFAULT_BAND_TOLERANCE};
use crate::pose::NamedPose;

/// Elbow angle above which the arms are extended
pub const PUSHUP_UP_ANGLE: f32 = 155.0;
/// Elbow angle below which the chest is down
pub const PUSHUP_DOWN_ANGLE: f32 = 100.0;
/// Body-line angle required for any transition
pub const PUSHUP_STRAIGHT_ANGLE: f32 = 150.0;
/// Top-of-rep elbow angle counted as full lockout
pub const PUSHUP_FULL_EXTENSION_ANGLE: f32 = 165.0;

const FORM_ALIGNED_FULL: f32 = 95.0;
const FORM_ALIGNED: f32 = 80.0;
const FORM_MISALIGNED: f32 = 55.0;

pub fn pushup_form_score(aligned: bool, full_extension: bool) -> f32 {
    match (aligned, full_extension) {
        (true, true) => FORM_ALIGNED_FULL,
        (true, false) => FORM_ALIGNED,
        (false, _) => FORM_MISALIGNED,
    }
}

#[derive(Clone, Debug)]
pub struct PushUpDetector {
    phase: Phase,
    /// Highest elbow angle while up, carried into the next rep
    top_angle: f32,
    /// Lockout reached before the current descent
    rep_full_extension: bool,
    /// Lowest body-line angle since the current descent began
    worst_line: f32,
}

impl PushUpDetector {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            top_angle: 0.0,
            rep_full_extension: false,
            worst_line: 180.0,
        }
    }

    pub fn advance(&self, elbow_angle: f32, body_line: f32) -> (Self, StepOutput) {
        let mut next = self.clone();
        let straight = body_line > PUSHUP_STRAIGHT_ANGLE;
        let mut event = None;

        match self.phase {
            Phase::Idle => {
                if straight && elbow_angle > PUSHUP_UP_ANGLE {
                    next.phase = Phase::Up;
                    next.top_angle = elbow_angle;
                }
            }
            Phase::Up => {
                next.top_angle = next.top_angle.max(elbow_angle);
                if straight && elbow_angle < PUSHUP_DOWN_ANGLE {
                    next.phase = Phase::Down;
                    next.rep_full_extension = next.top_angle >= PUSHUP_FULL_EXTENSION_ANGLE;
                    next.worst_line = body_line;
                }
            }
            Phase::Down => {
                next.worst_line = next.worst_line.min(body_line);
                if straight && elbow_angle > PUSHUP_UP_ANGLE {
                    next.phase = Phase::Up;
                    next.top_angle = elbow_angle;
                    let aligned = next.worst_line > PUSHUP_STRAIGHT_ANGLE;
                    event = Some(CompletedEvent {
                        label: "rep",
                        value: elbow_angle,
                        form_score: pushup_form_score(aligned, next.rep_full_extension),
                    });
                }
            }
            _ => next.phase = Phase::Idle,
        }

        if next.phase != self.phase {
            log::debug!(
                "push-up {:?} -> {:?} (elbow {:.1}°, line {:.1}°)",
                self.phase,
                next.phase,
                elbow_angle,
                body_line
            );
        }

        let metrics = DisplayMetrics::new(next.phase)
            .with_angle(elbow_angle)
            .with_quality(Some(quality_band(
                body_line,
                PUSHUP_STRAIGHT_ANGLE,
                180.0,
                DEFAULT_BAND_TOLERANCE,
            )))
            .readout("bodyLine", body_line);

        (next, StepOutput { metrics, event })
    }
}

impl Default for PushUpDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for PushUpDetector {
    fn phase(&self) -> Phase {
        self.phase
    }

    fn step(&self, pose: &NamedPose, _ctx: &FrameContext) -> (Self, StepOutput) {
        let (left, right) = pose.elbow_angles();
        self.advance((left + right) / 2.0, pose.body_line_angle())
    }
}
