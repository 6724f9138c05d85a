//! One finished session, ready to hand to storage

use serde::Serialize;
use uuid::Uuid;

use crate::activity::{ActivityKind, SessionSummary};
use crate::config::AssessmentConfig;
use crate::scoring::{mean_score, score_session, xp_for_session, ScoreBreakdown};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: Uuid,
    pub activity_kind: ActivityKind,
    pub score_breakdown: ScoreBreakdown,
    pub reps: u32,
    pub duration_ms: f64,
    pub distance_cm: Option<f32>,
    pub xp_earned: u32,
    pub form_scores: Vec<f32>,
    pub transmitted: bool,
}

impl SessionRecord {
    /// Score a finished session and wrap it in a fresh record
    pub fn from_summary(
        kind: ActivityKind,
        summary: SessionSummary,
        config: &AssessmentConfig,
    ) -> Self {
        let score_breakdown = score_session(kind, &summary, config);
        let xp_earned = xp_for_session(summary.reps, mean_score(&summary.form_scores));
        Self {
            id: Uuid::new_v4(),
            activity_kind: kind,
            score_breakdown,
            reps: summary.reps,
            duration_ms: summary.duration_ms,
            distance_cm: summary.best_distance_cm.or(summary.best_height_cm),
            xp_earned,
            form_scores: summary.form_scores,
            transmitted: false,
        }
    }
}
