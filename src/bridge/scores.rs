//! Stateless scoring entry points

use wasm_bindgen::prelude::*;

use super::convert::{from_js_or_default, to_js};
use crate::config::AssessmentConfig;
use crate::scoring::{evaluate_badges, level_for, CompositeScore, ModuleScores, StatsSnapshot};

/// Overall score, percentile and rank for `{speed, strength, endurance, skill, reaction}`
#[wasm_bindgen(js_name = compositeScore)]
pub fn composite_score(
    module_scores: JsValue,
    total_athletes: Option<u32>,
) -> Result<JsValue, JsValue> {
    let modules: ModuleScores = from_js_or_default(module_scores)?;
    let total = total_athletes.unwrap_or(AssessmentConfig::default().total_athletes);
    to_js(&CompositeScore::compute(modules, total))
}

/// Badges earned by a stats snapshot; unknown stats never earn a badge
#[wasm_bindgen(js_name = evaluateBadges)]
pub fn evaluate_badges_js(stats: JsValue) -> Result<JsValue, JsValue> {
    let stats: StatsSnapshot = from_js_or_default(stats)?;
    to_js(&evaluate_badges(&stats))
}

/// `{xp, level, progress}` for a cumulative XP total
#[wasm_bindgen(js_name = levelFor)]
pub fn level_for_js(xp: u32) -> Result<JsValue, JsValue> {
    to_js(&level_for(xp))
}
