//! Badge catalogue
//!
//! Each badge is a predicate over a stats snapshot. A predicate that
//! lacks the data it needs reports `BadgeError`, and the badge is simply
//! not awarded.

use serde::{Deserialize, Serialize};

use super::composite::ModuleScores;
use crate::error::BadgeError;

/// Athlete statistics badges are judged on; any field may be unknown
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub total_reps: Option<u32>,
    pub best_form_accuracy: Option<f32>,
    pub module_scores: Option<ModuleScores>,
    pub best_reaction_ms: Option<f32>,
    pub level: Option<u32>,
    pub streak_days: Option<u32>,
}

type Predicate = fn(&StatsSnapshot) -> Result<bool, BadgeError>;

#[derive(Clone, Copy, Serialize)]
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip)]
    predicate: Predicate,
}

impl std::fmt::Debug for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Badge").field("id", &self.id).finish()
    }
}

impl Badge {
    pub fn check(&self, stats: &StatsSnapshot) -> Result<bool, BadgeError> {
        (self.predicate)(stats)
    }
}

fn need<T: Copy>(value: Option<T>, field: &'static str) -> Result<T, BadgeError> {
    value.ok_or(BadgeError::MissingData(field))
}

fn modules(stats: &StatsSnapshot) -> Result<ModuleScores, BadgeError> {
    need(stats.module_scores, "moduleScores")
}

pub static BADGES: [Badge; 10] = [
    Badge {
        id: "first-rep",
        name: "First Rep",
        description: "Complete your first rep",
        predicate: |s| Ok(need(s.total_reps, "totalReps")? >= 1),
    },
    Badge {
        id: "century",
        name: "Century",
        description: "Complete 100 reps in total",
        predicate: |s| Ok(need(s.total_reps, "totalReps")? >= 100),
    },
    Badge {
        id: "perfect-form",
        name: "Perfect Form",
        description: "Finish a session with 95% form accuracy",
        predicate: |s| Ok(need(s.best_form_accuracy, "bestFormAccuracy")? >= 95.0),
    },
    Badge {
        id: "speed-demon",
        name: "Speed Demon",
        description: "Reach a speed score of 90",
        predicate: |s| Ok(modules(s)?.speed >= 90.0),
    },
    Badge {
        id: "powerhouse",
        name: "Powerhouse",
        description: "Reach a strength score of 90",
        predicate: |s| Ok(modules(s)?.strength >= 90.0),
    },
    Badge {
        id: "marathoner",
        name: "Marathoner",
        description: "Reach an endurance score of 90",
        predicate: |s| Ok(modules(s)?.endurance >= 90.0),
    },
    Badge {
        id: "lightning-reflexes",
        name: "Lightning Reflexes",
        description: "React in under 200 ms",
        predicate: |s| {
            let ms = need(s.best_reaction_ms, "bestReactionMs")?;
            Ok(ms > 0.0 && ms < 200.0)
        },
    },
    Badge {
        id: "all-rounder",
        name: "All-Rounder",
        description: "Score 70 or more in every module",
        predicate: |s| {
            let m = modules(s)?;
            Ok([m.speed, m.strength, m.endurance, m.skill, m.reaction]
                .iter()
                .all(|v| *v >= 70.0))
        },
    },
    Badge {
        id: "level-10",
        name: "Level 10",
        description: "Reach level 10",
        predicate: |s| Ok(need(s.level, "level")? >= 10),
    },
    Badge {
        id: "week-streak",
        name: "Week Streak",
        description: "Train seven days in a row",
        predicate: |s| Ok(need(s.streak_days, "streakDays")? >= 7),
    },
];

/// Every badge the snapshot qualifies for
pub fn evaluate_badges(stats: &StatsSnapshot) -> Vec<&'static Badge> {
    BADGES
        .iter()
        .filter(|badge| match badge.check(stats) {
            Ok(earned) => earned,
            Err(err) => {
                log::debug!("badge {} skipped: {}", badge.id, err);
                false
            }
        })
        .collect()
}
