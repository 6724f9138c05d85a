//! Per-session score breakdown

use std::collections::BTreeMap;

use serde::Serialize;

use super::benchmarks::{sprint_benchmark, Benchmark, T_TEST};
use super::formulas::*;
use crate::activity::{clamp_score, ActivityKind, ScoreModule, SessionSummary};
use crate::config::AssessmentConfig;

/// Broad-jump distance scored as 100
pub const ELITE_BROAD_JUMP_CM: f32 = 250.0;
/// Wall-sit hold scored as 100
pub const TARGET_WALL_SIT_S: f32 = 120.0;

/// Score one session contributes to its module, with the inputs behind it
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub module: ScoreModule,
    pub score: f32,
    pub components: BTreeMap<&'static str, f32>,
}

impl ScoreBreakdown {
    fn new(module: ScoreModule, score: f32) -> Self {
        Self {
            module,
            score: clamp_score(score),
            components: BTreeMap::new(),
        }
    }

    fn with(mut self, name: &'static str, value: f32) -> Self {
        self.components.insert(name, value);
        self
    }
}

/// Turn a finished session's raw metrics into its module score
pub fn score_session(
    kind: ActivityKind,
    summary: &SessionSummary,
    config: &AssessmentConfig,
) -> ScoreBreakdown {
    let module = kind.module();
    let form_accuracy = mean_score(&summary.form_scores);

    match kind {
        ActivityKind::Sprint => timed(
            module,
            summary,
            &sprint_benchmark(config.sprint_distance),
            ("strides", summary.strides.unwrap_or(0) as f32),
        ),
        ActivityKind::Agility => timed(
            module,
            summary,
            &T_TEST,
            ("directionChanges", summary.direction_changes.unwrap_or(0) as f32),
        ),
        ActivityKind::Squats | ActivityKind::SitUps | ActivityKind::PushUps => {
            let fatigue = fatigue_rate(&summary.form_scores);
            ScoreBreakdown::new(module, pushup_score(summary.reps, form_accuracy, fatigue))
                .with("reps", summary.reps as f32)
                .with("formAccuracy", form_accuracy)
                .with("fatigueRate", fatigue)
        }
        ActivityKind::WallSit => {
            let seconds = (summary.duration_ms / 1000.0) as f32;
            let hold = clamp_score(seconds / TARGET_WALL_SIT_S * 100.0);
            let stability = summary.stability.unwrap_or(0.0);
            ScoreBreakdown::new(module, accuracy_score(hold, stability))
                .with("seconds", seconds)
                .with("stability", stability)
        }
        ActivityKind::VerticalJump => {
            let height = summary.best_height_cm.unwrap_or(0.0);
            ScoreBreakdown::new(module, jump_power(height))
                .with("heightCm", height)
                .with("formAccuracy", form_accuracy)
        }
        ActivityKind::BroadJump => {
            let distance = summary.best_distance_cm.unwrap_or(0.0);
            ScoreBreakdown::new(module, distance / ELITE_BROAD_JUMP_CM * 100.0)
                .with("distanceCm", distance)
                .with("formAccuracy", form_accuracy)
        }
        ActivityKind::Punch | ActivityKind::Kick => {
            let consistency = consistency(&summary.form_scores);
            let mut breakdown =
                ScoreBreakdown::new(module, accuracy_score(form_accuracy, consistency))
                    .with("accuracy", form_accuracy)
                    .with("consistency", consistency);
            if let Some(v) = summary.peak_velocity_mps {
                breakdown = breakdown.with("peakVelocity", v);
            }
            if let Some(lift) = summary.peak_lift_pct {
                breakdown = breakdown.with("peakLiftPct", lift);
            }
            breakdown
        }
        ActivityKind::Reaction => {
            let avg = mean_score(&summary.reaction_times_ms);
            ScoreBreakdown::new(module, reaction_score(avg))
                .with("averageMs", avg)
                .with("rounds", summary.reaction_times_ms.len() as f32)
        }
    }
}

fn timed(
    module: ScoreModule,
    summary: &SessionSummary,
    benchmark: &Benchmark,
    counter: (&'static str, f32),
) -> ScoreBreakdown {
    let seconds = (summary.duration_ms / 1000.0) as f32;
    if seconds <= 0.0 {
        return ScoreBreakdown::new(module, 0.0).with(counter.0, counter.1);
    }
    ScoreBreakdown::new(module, sprint_score(seconds, benchmark.elite, benchmark.poor))
        .with("timeSeconds", seconds)
        .with("bandScore", benchmark.time_score(seconds))
        .with(counter.0, counter.1)
}
