//! Tagged dispatch over the per-activity detectors

use super::broad_jump::BroadJumpDetector;
use super::combat::{KickDetector, PunchDetector};
use super::detector::*;
use super::kind::ActivityKind;
use super::pushups::PushUpDetector;
use super::reaction::ReactionDetector;
use super::situps::SitUpDetector;
use super::squats::SquatDetector;
use super::timing::TimingDetector;
use super::vertical_jump::VerticalJumpDetector;
use super::wall_sit::WallSitDetector;
use crate::config::AssessmentConfig;
use crate::pose::NamedPose;

/// State of whichever activity is running
#[derive(Clone, Debug)]
pub enum ActivityState {
    Squats(SquatDetector),
    SitUps(SitUpDetector),
    WallSit(WallSitDetector),
    BroadJump(BroadJumpDetector),
    PushUps(PushUpDetector),
    Sprint(TimingDetector),
    Agility(TimingDetector),
    VerticalJump(VerticalJumpDetector),
    Punch(PunchDetector),
    Kick(KickDetector),
    Reaction(ReactionDetector),
}

/// Expand `$body` once per variant with `$d` bound to the detector
macro_rules! dispatch {
    ($state:expr, $d:ident => $body:expr) => {
        match $state {
            ActivityState::Squats($d) => $body,
            ActivityState::SitUps($d) => $body,
            ActivityState::WallSit($d) => $body,
            ActivityState::BroadJump($d) => $body,
            ActivityState::PushUps($d) => $body,
            ActivityState::Sprint($d) => $body,
            ActivityState::Agility($d) => $body,
            ActivityState::VerticalJump($d) => $body,
            ActivityState::Punch($d) => $body,
            ActivityState::Kick($d) => $body,
            ActivityState::Reaction($d) => $body,
        }
    };
}

impl ActivityState {
    /// Fresh detector for `kind`, tuned by `config`
    pub fn new(kind: ActivityKind, config: &AssessmentConfig) -> Self {
        match kind {
            ActivityKind::Squats => ActivityState::Squats(SquatDetector::new()),
            ActivityKind::SitUps => ActivityState::SitUps(SitUpDetector::new()),
            ActivityKind::WallSit => ActivityState::WallSit(WallSitDetector::new()),
            ActivityKind::BroadJump => ActivityState::BroadJump(BroadJumpDetector::new()),
            ActivityKind::PushUps => ActivityState::PushUps(PushUpDetector::new()),
            ActivityKind::Sprint => ActivityState::Sprint(TimingDetector::sprint()),
            ActivityKind::Agility => ActivityState::Agility(TimingDetector::agility()),
            ActivityKind::VerticalJump => {
                ActivityState::VerticalJump(VerticalJumpDetector::new(config.calibration_frames))
            }
            ActivityKind::Punch => {
                ActivityState::Punch(PunchDetector::new(config.meters_per_unit))
            }
            ActivityKind::Kick => ActivityState::Kick(KickDetector::new()),
            ActivityKind::Reaction => ActivityState::Reaction(ReactionDetector::new(
                config.reaction_rounds,
                config.reaction_cooldown_ms,
            )),
        }
    }

    pub fn kind(&self) -> ActivityKind {
        match self {
            ActivityState::Squats(_) => ActivityKind::Squats,
            ActivityState::SitUps(_) => ActivityKind::SitUps,
            ActivityState::WallSit(_) => ActivityKind::WallSit,
            ActivityState::BroadJump(_) => ActivityKind::BroadJump,
            ActivityState::PushUps(_) => ActivityKind::PushUps,
            ActivityState::Sprint(_) => ActivityKind::Sprint,
            ActivityState::Agility(_) => ActivityKind::Agility,
            ActivityState::VerticalJump(_) => ActivityKind::VerticalJump,
            ActivityState::Punch(_) => ActivityKind::Punch,
            ActivityState::Kick(_) => ActivityKind::Kick,
            ActivityState::Reaction(_) => ActivityKind::Reaction,
        }
    }

    pub fn phase(&self) -> Phase {
        dispatch!(self, d => d.phase())
    }

    /// Advance the active detector by one frame
    pub fn step(&self, pose: &NamedPose, ctx: &FrameContext) -> (Self, StepOutput) {
        match self {
            ActivityState::Squats(d) => wrap(d.step(pose, ctx), ActivityState::Squats),
            ActivityState::SitUps(d) => wrap(d.step(pose, ctx), ActivityState::SitUps),
            ActivityState::WallSit(d) => wrap(d.step(pose, ctx), ActivityState::WallSit),
            ActivityState::BroadJump(d) => wrap(d.step(pose, ctx), ActivityState::BroadJump),
            ActivityState::PushUps(d) => wrap(d.step(pose, ctx), ActivityState::PushUps),
            ActivityState::Sprint(d) => wrap(d.step(pose, ctx), ActivityState::Sprint),
            ActivityState::Agility(d) => wrap(d.step(pose, ctx), ActivityState::Agility),
            ActivityState::VerticalJump(d) => {
                wrap(d.step(pose, ctx), ActivityState::VerticalJump)
            }
            ActivityState::Punch(d) => wrap(d.step(pose, ctx), ActivityState::Punch),
            ActivityState::Kick(d) => wrap(d.step(pose, ctx), ActivityState::Kick),
            ActivityState::Reaction(d) => wrap(d.step(pose, ctx), ActivityState::Reaction),
        }
    }

    pub fn summarize(&self, summary: &mut SessionSummary) {
        dispatch!(self, d => d.summarize(summary))
    }
}

fn wrap<D>(
    (detector, output): (D, StepOutput),
    tag: fn(D) -> ActivityState,
) -> (ActivityState, StepOutput) {
    (tag(detector), output)
}
