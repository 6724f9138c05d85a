//! Module composites, overall score, percentile and rank

use serde::{Deserialize, Serialize};

use super::session::ScoreBreakdown;
use crate::activity::{clamp_score, ScoreModule};

/// Weight of each module in the overall score, in percent
const SPEED_WEIGHT: u32 = 25;
const STRENGTH_WEIGHT: u32 = 25;
const ENDURANCE_WEIGHT: u32 = 20;
const SKILL_WEIGHT: u32 = 15;
const REACTION_WEIGHT: u32 = 15;

/// (minimum overall score, percentile), highest band first
const PERCENTILE_BANDS: [(f32, u32); 7] = [
    (95.0, 99),
    (90.0, 95),
    (80.0, 85),
    (70.0, 72),
    (60.0, 55),
    (50.0, 40),
    (40.0, 25),
];
const FLOOR_PERCENTILE: u32 = 10;

/// Five module sub-scores, each 0-100
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleScores {
    pub speed: f32,
    pub strength: f32,
    pub endurance: f32,
    pub skill: f32,
    pub reaction: f32,
}

impl ModuleScores {
    /// Module scores from a set of finished sessions
    ///
    /// Each module is the mean of the sessions that feed it, so speed is
    /// (sprint + agility) / 2 and strength is (push-ups + jump) / 2. A
    /// module with no sessions scores 0.
    pub fn from_breakdowns(breakdowns: &[ScoreBreakdown]) -> Self {
        let mut scores = Self::default();
        for module in ScoreModule::ALL {
            let feeding: Vec<f32> = breakdowns
                .iter()
                .filter(|b| b.module == module)
                .map(|b| clamp_score(b.score))
                .collect();
            if !feeding.is_empty() {
                scores.set(module, feeding.iter().sum::<f32>() / feeding.len() as f32);
            }
        }
        scores
    }

    pub fn get(&self, module: ScoreModule) -> f32 {
        match module {
            ScoreModule::Speed => self.speed,
            ScoreModule::Strength => self.strength,
            ScoreModule::Endurance => self.endurance,
            ScoreModule::Skill => self.skill,
            ScoreModule::Reaction => self.reaction,
        }
    }

    pub fn set(&mut self, module: ScoreModule, score: f32) {
        let slot = match module {
            ScoreModule::Speed => &mut self.speed,
            ScoreModule::Strength => &mut self.strength,
            ScoreModule::Endurance => &mut self.endurance,
            ScoreModule::Skill => &mut self.skill,
            ScoreModule::Reaction => &mut self.reaction,
        };
        *slot = clamp_score(score);
    }

    fn clamped(self) -> Self {
        Self {
            speed: clamp_score(self.speed),
            strength: clamp_score(self.strength),
            endurance: clamp_score(self.endurance),
            skill: clamp_score(self.skill),
            reaction: clamp_score(self.reaction),
        }
    }
}

/// Weighted overall score, rounded to a whole number
///
/// Weighting happens in integer percent so that sums like 70.5 are exact
/// before rounding.
pub fn overall_score(scores: &ModuleScores) -> u32 {
    let s = scores.clamped();
    let weighted = s.speed * SPEED_WEIGHT as f32
        + s.strength * STRENGTH_WEIGHT as f32
        + s.endurance * ENDURANCE_WEIGHT as f32
        + s.skill * SKILL_WEIGHT as f32
        + s.reaction * REACTION_WEIGHT as f32;
    clamp_score((weighted / 100.0).round()) as u32
}

/// Percentile band for an overall score
pub fn percentile(overall: u32) -> u32 {
    let overall = overall as f32;
    PERCENTILE_BANDS
        .iter()
        .find(|(min, _)| overall >= *min)
        .map_or(FLOOR_PERCENTILE, |(_, p)| *p)
}

/// Rank within `total_athletes` implied by a percentile
pub fn national_rank(percentile: u32, total_athletes: u32) -> u32 {
    let fraction = 1.0 - percentile.min(100) as f64 / 100.0;
    (total_athletes as f64 * fraction).round() as u32
}

/// Full composite result for a set of module scores
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeScore {
    pub modules: ModuleScores,
    pub overall: u32,
    pub percentile: u32,
    pub national_rank: u32,
}

impl CompositeScore {
    pub fn compute(modules: ModuleScores, total_athletes: u32) -> Self {
        let modules = modules.clamped();
        let overall = overall_score(&modules);
        let percentile = percentile(overall);
        Self {
            modules,
            overall,
            percentile,
            national_rank: national_rank(percentile, total_athletes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ModuleScores {
        ModuleScores {
            speed: 80.0,
            strength: 70.0,
            endurance: 60.0,
            skill: 90.0,
            reaction: 50.0,
        }
    }

    #[test]
    fn test_overall_score() {
        // 20 + 17.5 + 12 + 13.5 + 7.5 = 70.5
        assert_eq!(overall_score(&sample()), 71);
        assert_eq!(percentile(71), 72);
    }

    #[test]
    fn test_percentile_bands() {
        assert_eq!(percentile(100), 99);
        assert_eq!(percentile(95), 99);
        assert_eq!(percentile(94), 95);
        assert_eq!(percentile(80), 85);
        assert_eq!(percentile(69), 55);
        assert_eq!(percentile(50), 40);
        assert_eq!(percentile(40), 25);
        assert_eq!(percentile(39), 10);
        assert_eq!(percentile(0), 10);
    }

    #[test]
    fn test_national_rank() {
        assert_eq!(national_rank(72, 10_000), 2800);
        assert_eq!(national_rank(99, 10_000), 100);
        assert_eq!(national_rank(10, 500), 450);
    }

    fn breakdown(module: ScoreModule, score: f32) -> ScoreBreakdown {
        ScoreBreakdown {
            module,
            score,
            components: Default::default(),
        }
    }

    #[test]
    fn test_module_composites() {
        let m = ModuleScores::from_breakdowns(&[
            breakdown(ScoreModule::Speed, 90.0),
            breakdown(ScoreModule::Speed, 70.0),
            breakdown(ScoreModule::Strength, 60.0),
            breakdown(ScoreModule::Strength, 120.0),
            breakdown(ScoreModule::Endurance, 55.0),
        ]);
        assert_eq!(m.get(ScoreModule::Speed), 80.0);
        assert_eq!(m.get(ScoreModule::Strength), 80.0);
        assert_eq!(m.get(ScoreModule::Endurance), 55.0);
        assert_eq!(m.get(ScoreModule::Skill), 0.0);
    }

    #[test]
    fn test_set_clamps() {
        let mut m = ModuleScores::default();
        m.set(ScoreModule::Reaction, 140.0);
        assert_eq!(m.get(ScoreModule::Reaction), 100.0);
    }

    #[test]
    fn test_composite_clamps_inputs() {
        let wild = ModuleScores {
            speed: 150.0,
            strength: -20.0,
            ..sample()
        };
        let c = CompositeScore::compute(wild, 10_000);
        assert_eq!(c.modules.speed, 100.0);
        assert_eq!(c.modules.strength, 0.0);
        assert!(c.overall <= 100);
    }
}
