//! Assess Web - pose-driven fitness assessment
//!
//! Turns per-frame body landmarks into rep and event counts, form scores,
//! cheat-detection verdicts and composite athletic scores.
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

pub mod activity;
pub mod config;
pub mod error;
pub mod physics;
pub mod pipeline;
pub mod pose;
pub mod record;
pub mod scoring;
pub mod validity;

mod bridge;

use wasm_bindgen::prelude::*;

pub use activity::{ActivityKind, ActivitySession, FrameContext, Phase};
pub use bridge::{composite_score, evaluate_badges_js, level_for_js, AssessmentSession};
pub use config::{AssessmentConfig, SprintDistance};
pub use pipeline::{AssessmentPipeline, FrameOutcome};
pub use record::{MemoryRecordStore, RecordStore, SessionRecord};
pub use validity::{CheatReport, ValidityGuard};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Route `log` output to the browser console
///
/// `level` is one of "trace", "debug", "info", "warn", "error";
/// anything else means "info".
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: &str) {
    let log_level = match level.to_ascii_lowercase().as_str() {
        "trace" => log::Level::Trace,
        "debug" => log::Level::Debug,
        "warn" => log::Level::Warn,
        "error" => log::Level::Error,
        _ => log::Level::Info,
    };
    wasm_logger::init(wasm_logger::Config::new(log_level));
    log::info!("assess-web {} logging at {}", env!("CARGO_PKG_VERSION"), log_level);
}

#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
