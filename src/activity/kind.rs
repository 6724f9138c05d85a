//! Activity selector

use serde::{Deserialize, Serialize};

/// Every activity the assessment can run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    #[default]
    Squats,
    SitUps,
    WallSit,
    BroadJump,
    PushUps,
    Sprint,
    Agility,
    VerticalJump,
    Punch,
    Kick,
    Reaction,
}

/// Score module an activity contributes to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreModule {
    Speed,
    Strength,
    Endurance,
    Skill,
    Reaction,
}

impl ScoreModule {
    pub const ALL: [ScoreModule; 5] = [
        ScoreModule::Speed,
        ScoreModule::Strength,
        ScoreModule::Endurance,
        ScoreModule::Skill,
        ScoreModule::Reaction,
    ];
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 11] = [
        ActivityKind::Squats,
        ActivityKind::SitUps,
        ActivityKind::WallSit,
        ActivityKind::BroadJump,
        ActivityKind::PushUps,
        ActivityKind::Sprint,
        ActivityKind::Agility,
        ActivityKind::VerticalJump,
        ActivityKind::Punch,
        ActivityKind::Kick,
        ActivityKind::Reaction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Squats => "squats",
            ActivityKind::SitUps => "sit-ups",
            ActivityKind::WallSit => "wall-sit",
            ActivityKind::BroadJump => "broad-jump",
            ActivityKind::PushUps => "push-ups",
            ActivityKind::Sprint => "sprint",
            ActivityKind::Agility => "agility",
            ActivityKind::VerticalJump => "vertical-jump",
            ActivityKind::Punch => "punch",
            ActivityKind::Kick => "kick",
            ActivityKind::Reaction => "reaction",
        }
    }

    /// Parse a host selector, falling back to the default activity
    ///
    /// Matching ignores case, spaces, dashes and underscores, so
    /// "Push Ups", "push_ups" and "pushups" all select push-ups.
    pub fn from_selector(selector: &str) -> Self {
        let key: String = selector
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let kind = match key.as_str() {
            "squat" | "squats" => Some(ActivityKind::Squats),
            "situp" | "situps" => Some(ActivityKind::SitUps),
            "wallsit" => Some(ActivityKind::WallSit),
            "broadjump" | "standingbroadjump" | "longjump" => Some(ActivityKind::BroadJump),
            "pushup" | "pushups" => Some(ActivityKind::PushUps),
            "sprint" => Some(ActivityKind::Sprint),
            "agility" | "ttest" => Some(ActivityKind::Agility),
            "verticaljump" | "jump" => Some(ActivityKind::VerticalJump),
            "punch" | "combatpunch" => Some(ActivityKind::Punch),
            "kick" | "combatkick" => Some(ActivityKind::Kick),
            "reaction" | "reactionchallenge" => Some(ActivityKind::Reaction),
            _ => None,
        };

        kind.unwrap_or_else(|| {
            log::warn!(
                "unknown activity selector {:?}, using {}",
                selector,
                ActivityKind::default().as_str()
            );
            ActivityKind::default()
        })
    }

    /// Module this activity's score feeds into
    pub fn module(&self) -> ScoreModule {
        match self {
            ActivityKind::Sprint | ActivityKind::Agility => ScoreModule::Speed,
            ActivityKind::PushUps | ActivityKind::VerticalJump | ActivityKind::BroadJump => {
                ScoreModule::Strength
            }
            ActivityKind::Squats | ActivityKind::SitUps | ActivityKind::WallSit => {
                ScoreModule::Endurance
            }
            ActivityKind::Punch | ActivityKind::Kick => ScoreModule::Skill,
            ActivityKind::Reaction => ScoreModule::Reaction,
        }
    }
}
