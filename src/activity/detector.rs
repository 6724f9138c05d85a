//! Shared detector contract
//!
//! Every activity is a pure reducer: `(state, pose, frame) -> (state', output)`.
//! Detectors never mutate in place, the owning session swaps in the new state.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::physics::QualityBand;
use crate::pose::NamedPose;

/// Named state of an activity's finite-state machine
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Up,
    Down,
    Timing,
    Tracking,
    Takeoff,
    Landed,
    Calibrating,
    Ready,
    Jumping,
    Punching,
    Kicking,
    Waiting,
    Prompt,
    Result,
}

/// Per-frame inputs that are not part of the pose
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameContext {
    /// Wall-clock time of the frame (ms)
    pub timestamp_ms: f64,
    /// Uniform sample in [0, 1) supplied by the host
    pub entropy: f64,
}

impl FrameContext {
    pub fn at(timestamp_ms: f64) -> Self {
        Self {
            timestamp_ms,
            entropy: 0.0,
        }
    }
}

/// One completed rep or event
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedEvent {
    /// Event label ("rep", "jump", "punch", "kick", "reaction")
    #[serde(rename = "type")]
    pub label: &'static str,
    /// Activity-specific measurement (depth %, cm, m/s, % body height, ms)
    pub value: f32,
    /// Form score 0-100
    pub form_score: f32,
}

/// Live readouts for the host UI
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayMetrics {
    pub phase: Phase,
    pub rep_count: u32,
    /// Primary joint angle driving the machine, if any
    pub angle: Option<f32>,
    pub quality: Option<QualityBand>,
    pub readouts: BTreeMap<&'static str, f32>,
}

impl DisplayMetrics {
    pub fn new(phase: Phase) -> Self {
        Self {
            phase,
            ..Self::default()
        }
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = Some(angle);
        self
    }

    pub fn with_quality(mut self, quality: Option<QualityBand>) -> Self {
        self.quality = quality;
        self
    }

    pub fn readout(mut self, name: &'static str, value: f32) -> Self {
        self.readouts.insert(name, value);
        self
    }
}

/// Result of stepping a detector by one frame
#[derive(Clone, Debug, PartialEq)]
pub struct StepOutput {
    pub metrics: DisplayMetrics,
    pub event: Option<CompletedEvent>,
}

impl StepOutput {
    pub fn display(metrics: DisplayMetrics) -> Self {
        Self {
            metrics,
            event: None,
        }
    }

    pub fn with_event(metrics: DisplayMetrics, event: CompletedEvent) -> Self {
        Self {
            metrics,
            event: Some(event),
        }
    }
}

/// Raw metrics gathered over a session, fed to the score aggregator
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub reps: u32,
    pub form_scores: Vec<f32>,
    pub duration_ms: f64,
    pub best_distance_cm: Option<f32>,
    pub best_height_cm: Option<f32>,
    pub stability: Option<f32>,
    pub strides: Option<u32>,
    pub direction_changes: Option<u32>,
    pub peak_velocity_mps: Option<f32>,
    pub peak_lift_pct: Option<f32>,
    pub reaction_times_ms: Vec<f32>,
}

/// A per-activity state machine
pub trait Detector: Clone {
    /// Current phase
    fn phase(&self) -> Phase;

    /// Advance by one frame without mutating `self`
    fn step(&self, pose: &NamedPose, ctx: &FrameContext) -> (Self, StepOutput);

    /// Contribute activity-specific raw metrics to the session summary
    fn summarize(&self, _summary: &mut SessionSummary) {}
}

/// Clamp a score into [0, 100]
pub fn clamp_score(value: f32) -> f32 {
    value.clamp(0.0, 100.0)
}
