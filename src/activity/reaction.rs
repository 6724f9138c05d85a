//! Reaction challenge
//!
//! waiting → prompt → result per round. The stimulus appears after a
//! random 1-3s delay; the first wrist movement above a small threshold
//! is the response. No response within 3s resolves the round as a
//! timeout exactly once.

use super::detector::*;
use crate::physics::distance;
use crate::pose::NamedPose;
use crate::scoring::reaction_score;

/// Response window after the stimulus
pub const RESPONSE_TIMEOUT_MS: f64 = 3000.0;
/// Per-frame wrist displacement (normalized units) that counts as a response
pub const MOVEMENT_THRESHOLD: f32 = 0.03;
/// Shortest delay before the stimulus
pub const MIN_STIMULUS_DELAY_MS: f64 = 1000.0;
/// Random span added on top of the minimum delay
pub const STIMULUS_DELAY_SPAN_MS: f64 = 2000.0;

#[derive(Clone, Debug)]
pub struct ReactionDetector {
    phase: Phase,
    rounds: u32,
    cooldown_ms: f64,
    /// When the stimulus is due (Waiting) or was shown (Prompt)
    stimulus_at: Option<f64>,
    result_at: f64,
    prev_wrists: Option<((f32, f32), (f32, f32))>,
    results: Vec<f32>,
}

impl ReactionDetector {
    pub fn new(rounds: u32, cooldown_ms: f64) -> Self {
        Self {
            phase: Phase::Waiting,
            rounds: rounds.max(1),
            cooldown_ms,
            stimulus_at: None,
            result_at: 0.0,
            prev_wrists: None,
            results: Vec::new(),
        }
    }

    /// Reaction time of every finished round (ms, timeouts are 3000)
    pub fn results(&self) -> &[f32] {
        &self.results
    }

    pub fn average_ms(&self) -> Option<f32> {
        if self.results.is_empty() {
            return None;
        }
        Some(self.results.iter().sum::<f32>() / self.results.len() as f32)
    }

    pub fn advance(
        &self,
        wrists: ((f32, f32), (f32, f32)),
        ctx: &FrameContext,
    ) -> (Self, StepOutput) {
        let mut next = self.clone();
        let now = ctx.timestamp_ms;
        let movement = match self.prev_wrists {
            Some((l, r)) => distance(l, wrists.0).max(distance(r, wrists.1)),
            None => 0.0,
        };
        next.prev_wrists = Some(wrists);
        let mut event = None;

        match self.phase {
            Phase::Waiting => match self.stimulus_at {
                None => {
                    let delay = MIN_STIMULUS_DELAY_MS
                        + ctx.entropy.clamp(0.0, 1.0) * STIMULUS_DELAY_SPAN_MS;
                    next.stimulus_at = Some(now + delay);
                }
                Some(due) if now >= due => {
                    next.phase = Phase::Prompt;
                    next.stimulus_at = Some(now);
                    log::debug!("reaction stimulus shown at {:.0}ms", now);
                }
                Some(_) => {}
            },
            Phase::Prompt => {
                let shown = self.stimulus_at.unwrap_or(now);
                let elapsed = now - shown;

                let reaction_ms = if elapsed >= RESPONSE_TIMEOUT_MS {
                    log::info!("reaction round timed out");
                    Some(RESPONSE_TIMEOUT_MS as f32)
                } else if movement > MOVEMENT_THRESHOLD {
                    log::info!("reaction: {:.0}ms", elapsed);
                    Some(elapsed as f32)
                } else {
                    None
                };

                if let Some(ms) = reaction_ms {
                    next.phase = Phase::Result;
                    next.result_at = now;
                    next.results.push(ms);
                    event = Some(CompletedEvent {
                        label: "reaction",
                        value: ms,
                        form_score: reaction_score(ms),
                    });
                }
            }
            Phase::Result => {
                let more_rounds = (next.results.len() as u32) < next.rounds;
                if more_rounds && now - next.result_at >= next.cooldown_ms {
                    next.phase = Phase::Waiting;
                    next.stimulus_at = None;
                }
            }
            _ => next.phase = Phase::Waiting,
        }

        let mut metrics = DisplayMetrics::new(next.phase)
            .readout("round", next.results.len() as f32)
            .readout("movement", movement);
        if let Some(last) = next.results.last() {
            metrics = metrics.readout("lastMs", *last);
        }

        (next, StepOutput { metrics, event })
    }
}

impl Detector for ReactionDetector {
    fn phase(&self) -> Phase {
        self.phase
    }

    fn step(&self, pose: &NamedPose, ctx: &FrameContext) -> (Self, StepOutput) {
        self.advance(
            (pose.left_wrist.position(), pose.right_wrist.position()),
            ctx,
        )
    }

    fn summarize(&self, summary: &mut SessionSummary) {
        summary.reaction_times_ms = self.results.clone();
    }
}
