//! Standing broad jump measurement
//!
//! idle → takeoff → landed. Takeoff fires on a fast hip rise, landing
//! once the hip has come back down and stopped descending. Distance is
//! the horizontal hip travel from the takeoff origin.

use super::detector::*;
use crate::pose::NamedPose;

/// Upward hip velocity (normalized units/frame) that counts as takeoff
pub const TAKEOFF_VELOCITY: f32 = 0.03;
/// Centimetres per normalized horizontal unit
pub const BROAD_JUMP_CM_PER_UNIT: f32 = 300.0;
/// Hip-ankle horizontal offset above which a landing is invalid
pub const MAX_LANDING_LEAN: f32 = 0.15;
/// Hip motion below this per frame counts as settled after landing
const SETTLED_VELOCITY: f32 = 0.01;
/// Form lost at the maximum allowed lean
const LEAN_PENALTY: f32 = 30.0;

pub fn broad_jump_form_score(lean: f32) -> f32 {
    if lean > MAX_LANDING_LEAN {
        return 0.0;
    }
    clamp_score(100.0 - lean / MAX_LANDING_LEAN * LEAN_PENALTY)
}

#[derive(Clone, Debug)]
pub struct BroadJumpDetector {
    phase: Phase,
    prev_hip: Option<(f32, f32)>,
    takeoff_x: f32,
    /// Hip has started coming down since takeoff
    descending: bool,
    best_cm: Option<f32>,
    /// Landings discarded for leaning
    rejected: u32,
}

impl BroadJumpDetector {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            prev_hip: None,
            takeoff_x: 0.0,
            descending: false,
            best_cm: None,
            rejected: 0,
        }
    }

    pub fn best_distance_cm(&self) -> Option<f32> {
        self.best_cm
    }

    pub fn rejected_landings(&self) -> u32 {
        self.rejected
    }

    pub fn advance(&self, hip: (f32, f32), ankle_x: f32) -> (Self, StepOutput) {
        let mut next = self.clone();
        next.prev_hip = Some(hip);
        let mut event = None;

        let Some(prev) = self.prev_hip else {
            return (next, StepOutput::display(DisplayMetrics::new(self.phase)));
        };

        // Image y grows downward: positive rise means moving up
        let rise = prev.1 - hip.1;

        match self.phase {
            Phase::Idle => {
                if rise > TAKEOFF_VELOCITY {
                    next.phase = Phase::Takeoff;
                    next.takeoff_x = prev.0;
                    next.descending = false;
                }
            }
            Phase::Takeoff => {
                if rise < 0.0 {
                    next.descending = true;
                } else if self.descending {
                    next.phase = Phase::Landed;
                    let distance = (hip.0 - self.takeoff_x).abs() * BROAD_JUMP_CM_PER_UNIT;
                    let lean = (hip.0 - ankle_x).abs();
                    let valid = lean <= MAX_LANDING_LEAN;

                    if valid {
                        next.best_cm = Some(next.best_cm.map_or(distance, |b| b.max(distance)));
                        log::info!("broad jump landed: {:.0}cm", distance);
                        event = Some(CompletedEvent {
                            label: "jump",
                            value: distance,
                            form_score: broad_jump_form_score(lean),
                        });
                    } else {
                        next.rejected += 1;
                        log::info!("broad jump landing rejected: lean {:.2}", lean);
                    }
                }
            }
            Phase::Landed => {
                if rise.abs() < SETTLED_VELOCITY {
                    next.phase = Phase::Idle;
                }
            }
            _ => next.phase = Phase::Idle,
        }

        if next.phase != self.phase {
            log::debug!("broad jump {:?} -> {:?}", self.phase, next.phase);
        }

        let mut metrics = DisplayMetrics::new(next.phase)
            .readout("hipHeight", 1.0 - hip.1)
            .readout("lean", (hip.0 - ankle_x).abs())
            .readout("rejectedLandings", next.rejected as f32);
        if let Some(best) = next.best_cm {
            metrics = metrics.readout("bestDistanceCm", best);
        }

        (next, StepOutput { metrics, event })
    }
}

impl Default for BroadJumpDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for BroadJumpDetector {
    fn phase(&self) -> Phase {
        self.phase
    }

    fn step(&self, pose: &NamedPose, _ctx: &FrameContext) -> (Self, StepOutput) {
        self.advance(pose.hip_mid(), pose.ankle_mid().0)
    }

    fn summarize(&self, summary: &mut SessionSummary) {
        summary.best_distance_cm = self.best_cm;
    }
}
