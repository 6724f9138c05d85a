//! Per-test scoring formulas
//!
//! Every function returns a score in [0, 100].

use crate::activity::clamp_score;

pub use crate::activity::vertical_jump::jump_power;

/// Push-up reps scored as a full rep component
pub const TARGET_REPS: f32 = 50.0;
/// Beep-test level scored as 100
pub const TARGET_BEEP_LEVEL: f32 = 15.0;
/// Reaction time scored as 100
pub const FASTEST_REACTION_MS: f32 = 150.0;
/// Reaction time scored as 0
pub const SLOWEST_REACTION_MS: f32 = 500.0;

/// Linear time score between the elite and poor benchmark times
pub fn sprint_score(actual_s: f32, elite_s: f32, poor_s: f32) -> f32 {
    if poor_s <= elite_s {
        return 0.0;
    }
    clamp_score((poor_s - actual_s) / (poor_s - elite_s) * 100.0)
}

/// Reps, form and fatigue blended into one whole-number score
pub fn pushup_score(reps: u32, form_accuracy: f32, fatigue_rate: f32) -> f32 {
    let rep_score = (reps as f32 / TARGET_REPS * 100.0).min(100.0);
    let fatigue_bonus = (100.0 - fatigue_rate).max(0.0);
    clamp_score((rep_score * 0.4 + form_accuracy * 0.4 + fatigue_bonus * 0.2).round())
}

pub fn beep_score(level: f32) -> f32 {
    clamp_score(level / TARGET_BEEP_LEVEL * 100.0)
}

pub fn accuracy_score(accuracy: f32, consistency: f32) -> f32 {
    clamp_score(accuracy * 0.7 + consistency * 0.3)
}

/// 150 ms or faster scores 100, 500 ms or slower scores 0
pub fn reaction_score(avg_ms: f32) -> f32 {
    if avg_ms <= 0.0 {
        return 0.0;
    }
    clamp_score((SLOWEST_REACTION_MS - avg_ms) / (SLOWEST_REACTION_MS - FASTEST_REACTION_MS) * 100.0)
}

/// Percentage drop in form between the first and last third of reps
///
/// Fewer than three reps gives no fatigue signal.
pub fn fatigue_rate(form_scores: &[f32]) -> f32 {
    let third = form_scores.len() / 3;
    if third == 0 {
        return 0.0;
    }
    let mean = |s: &[f32]| s.iter().sum::<f32>() / s.len() as f32;
    let first = mean(&form_scores[..third]);
    let last = mean(&form_scores[form_scores.len() - third..]);
    if first <= 0.0 {
        return 0.0;
    }
    ((first - last) / first * 100.0).max(0.0)
}

/// Mean of the scores, 0 when empty
pub fn mean_score(scores: &[f32]) -> f32 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f32>() / scores.len() as f32
}

/// 100 minus the population standard deviation of the scores
pub fn consistency(scores: &[f32]) -> f32 {
    if scores.len() < 2 {
        return 100.0;
    }
    let mean = mean_score(scores);
    let variance =
        scores.iter().map(|s| (s - mean) * (s - mean)).sum::<f32>() / scores.len() as f32;
    clamp_score(100.0 - variance.sqrt())
}
