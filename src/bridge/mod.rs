//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod convert;
mod scores;
mod session;

pub use scores::{composite_score, evaluate_badges_js, level_for_js};
pub use session::AssessmentSession;
