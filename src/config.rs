//! Session configuration
//!
//! Only session parameters live here. Detector thresholds are fixed
//! constants next to the detectors that use them.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Sprint distance, selects the benchmark band table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SprintDistance {
    #[default]
    #[serde(rename = "30m")]
    Meters30,
    #[serde(rename = "50m")]
    Meters50,
    #[serde(rename = "100m")]
    Meters100,
}

impl SprintDistance {
    pub fn meters(&self) -> f32 {
        match self {
            SprintDistance::Meters30 => 30.0,
            SprintDistance::Meters50 => 50.0,
            SprintDistance::Meters100 => 100.0,
        }
    }
}

/// Per-session parameters supplied by the host
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssessmentConfig {
    /// Benchmark table for sprint scoring
    pub sprint_distance: SprintDistance,

    /// Population used to derive national rank from percentile
    pub total_athletes: u32,

    /// Metres per normalized image unit (combat velocities)
    pub meters_per_unit: f32,

    /// Stimulus/response rounds in a reaction challenge
    pub reaction_rounds: u32,

    /// Pause between reaction rounds
    pub reaction_cooldown_ms: f64,

    /// Standing frames collected before a vertical jump is armed
    pub calibration_frames: u32,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            sprint_distance: SprintDistance::default(),
            total_athletes: 10_000,
            meters_per_unit: 2.0,
            reaction_rounds: 5,
            reaction_cooldown_ms: 1500.0,
            calibration_frames: 30,
        }
    }
}

impl AssessmentConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks: [(&'static str, f64); 4] = [
            ("totalAthletes", self.total_athletes as f64),
            ("metersPerUnit", self.meters_per_unit as f64),
            ("reactionRounds", self.reaction_rounds as f64),
            ("calibrationFrames", self.calibration_frames as f64),
        ];
        for (field, value) in checks {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.reaction_cooldown_ms < 0.0 {
            return Err(ConfigError::Negative {
                field: "reactionCooldownMs",
                value: self.reaction_cooldown_ms,
            });
        }
        Ok(())
    }
}
