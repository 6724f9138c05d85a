//! Sprint and agility event counters
//!
//! Not a phase machine: strides come from ankle-height reversals,
//! direction changes from hip-x reversals. Time scoring happens at
//! session end from the elapsed session time.

use super::detector::*;
use crate::physics::ReversalCounter;
use crate::pose::NamedPose;

/// Signal a timing detector tracks
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimingSignal {
    /// Left ankle height, one reversal per stride
    AnkleHeight,
    /// Hip centre x, one reversal per direction change
    HipLateral,
}

#[derive(Clone, Debug)]
pub struct TimingDetector {
    signal: TimingSignal,
    counter: ReversalCounter,
}

impl TimingDetector {
    pub fn sprint() -> Self {
        Self {
            signal: TimingSignal::AnkleHeight,
            counter: ReversalCounter::new(),
        }
    }

    pub fn agility() -> Self {
        Self {
            signal: TimingSignal::HipLateral,
            counter: ReversalCounter::new(),
        }
    }

    pub fn events(&self) -> u32 {
        self.counter.count()
    }

    pub fn advance(&self, value: f32) -> (Self, StepOutput) {
        let mut next = self.clone();
        if next.counter.update(value) {
            log::debug!("{:?} reversal #{}", self.signal, next.counter.count());
        }

        let name = match self.signal {
            TimingSignal::AnkleHeight => "strides",
            TimingSignal::HipLateral => "directionChanges",
        };
        let metrics = DisplayMetrics::new(next.phase()).readout(name, next.events() as f32);

        (next, StepOutput::display(metrics))
    }
}

impl Detector for TimingDetector {
    fn phase(&self) -> Phase {
        if self.counter.count() > 0 {
            Phase::Tracking
        } else {
            Phase::Idle
        }
    }

    fn step(&self, pose: &NamedPose, _ctx: &FrameContext) -> (Self, StepOutput) {
        let value = match self.signal {
            TimingSignal::AnkleHeight => pose.left_ankle.y,
            TimingSignal::HipLateral => pose.hip_mid().0,
        };
        self.advance(value)
    }

    fn summarize(&self, summary: &mut SessionSummary) {
        match self.signal {
            TimingSignal::AnkleHeight => summary.strides = Some(self.events()),
            TimingSignal::HipLateral => summary.direction_changes = Some(self.events()),
        }
    }
}
