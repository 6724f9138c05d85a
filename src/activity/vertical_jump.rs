//! Vertical jump measurement
//!
//! idle → calibrating → ready → jumping → landed → idle. The standing hip
//! height is averaged during calibration; the jump starts once the hip
//! rises clear of it, the peak is the highest hip point, and landing is a
//! drop back below the peak.

use super::detector::*;
use crate::physics::RollingWindow;
use crate::pose::NamedPose;

/// Hip rise above standing height that starts a jump
pub const JUMP_START_RISE: f32 = 0.04;
/// Hip drop below the peak that ends a jump
pub const JUMP_LANDING_DROP: f32 = 0.03;
/// Centimetres per normalized vertical unit
pub const VERTICAL_JUMP_CM_PER_UNIT: f32 = 250.0;
/// Jump height scored as 100 power
pub const ELITE_JUMP_CM: f32 = 70.0;
/// Trailing frames used for steadiness
pub const STABILITY_WINDOW: usize = 15;

const POWER_WEIGHT: f32 = 0.7;
const STABILITY_WEIGHT: f32 = 0.3;

/// Power score for a jump height
pub fn jump_power(height_cm: f32) -> f32 {
    clamp_score(height_cm / ELITE_JUMP_CM * 100.0)
}

/// Steadiness from hip-height variance: 100 when perfectly still
pub fn stability_from_variance(variance: f32) -> f32 {
    clamp_score(100.0 / (1.0 + variance * 10_000.0))
}

#[derive(Clone, Debug)]
pub struct VerticalJumpDetector {
    phase: Phase,
    calibration_frames: u32,
    calibration_sum: f32,
    calibration_count: u32,
    standing_y: f32,
    peak_y: f32,
    window: RollingWindow<STABILITY_WINDOW>,
    takeoff_stability: f32,
    landing_stability: Option<f32>,
    best_height_cm: Option<f32>,
}

impl VerticalJumpDetector {
    pub fn new(calibration_frames: u32) -> Self {
        Self {
            phase: Phase::Idle,
            calibration_frames: calibration_frames.max(1),
            calibration_sum: 0.0,
            calibration_count: 0,
            standing_y: 0.0,
            peak_y: 0.0,
            window: RollingWindow::new(),
            takeoff_stability: 0.0,
            landing_stability: None,
            best_height_cm: None,
        }
    }

    pub fn best_height_cm(&self) -> Option<f32> {
        self.best_height_cm
    }

    fn current_stability(&self) -> f32 {
        self.window.variance().map_or(0.0, stability_from_variance)
    }

    pub fn advance(&self, hip_y: f32) -> (Self, StepOutput) {
        let mut next = self.clone();
        let mut event = None;

        match self.phase {
            Phase::Idle => {
                next.phase = Phase::Calibrating;
                next.calibration_sum = hip_y;
                next.calibration_count = 1;
                next.window.clear();
                next.window.push(hip_y);
            }
            Phase::Calibrating => {
                next.calibration_sum += hip_y;
                next.calibration_count += 1;
                next.window.push(hip_y);
                if next.calibration_count >= next.calibration_frames {
                    next.standing_y = next.calibration_sum / next.calibration_count as f32;
                    next.phase = Phase::Ready;
                    log::debug!("vertical jump calibrated: standing hip y {:.3}", next.standing_y);
                }
            }
            Phase::Ready => {
                if next.standing_y - hip_y > JUMP_START_RISE {
                    next.phase = Phase::Jumping;
                    next.peak_y = hip_y;
                    next.takeoff_stability = self.current_stability();
                } else {
                    next.window.push(hip_y);
                }
            }
            Phase::Jumping => {
                next.peak_y = next.peak_y.min(hip_y);
                if hip_y - next.peak_y > JUMP_LANDING_DROP {
                    next.phase = Phase::Landed;
                    let height = (next.standing_y - next.peak_y) * VERTICAL_JUMP_CM_PER_UNIT;
                    next.best_height_cm =
                        Some(next.best_height_cm.map_or(height, |b| b.max(height)));
                    next.window.clear();
                    next.window.push(hip_y);

                    let form = jump_power(height) * POWER_WEIGHT
                        + next.takeoff_stability * STABILITY_WEIGHT;
                    log::info!("vertical jump landed: {:.1}cm", height);
                    event = Some(CompletedEvent {
                        label: "jump",
                        value: height,
                        form_score: clamp_score(form),
                    });
                }
            }
            Phase::Landed => {
                next.window.push(hip_y);
                if next.window.is_full() {
                    next.landing_stability = Some(next.current_stability());
                    next.phase = Phase::Idle;
                }
            }
            _ => next.phase = Phase::Idle,
        }

        if next.phase != self.phase {
            log::debug!("vertical jump {:?} -> {:?}", self.phase, next.phase);
        }

        let mut metrics = DisplayMetrics::new(next.phase)
            .readout("stability", next.current_stability());
        if matches!(next.phase, Phase::Ready | Phase::Jumping) {
            let rise = (next.standing_y - hip_y) * VERTICAL_JUMP_CM_PER_UNIT;
            metrics = metrics.readout("riseCm", rise);
        }
        if let Some(best) = next.best_height_cm {
            metrics = metrics
                .readout("bestHeightCm", best)
                .readout("power", jump_power(best));
        }

        (next, StepOutput { metrics, event })
    }
}

impl Detector for VerticalJumpDetector {
    fn phase(&self) -> Phase {
        self.phase
    }

    fn step(&self, pose: &NamedPose, _ctx: &FrameContext) -> (Self, StepOutput) {
        self.advance(pose.hip_mid().1)
    }

    fn summarize(&self, summary: &mut SessionSummary) {
        summary.best_height_cm = self.best_height_cm;
        summary.stability = self.landing_stability;
    }
}
