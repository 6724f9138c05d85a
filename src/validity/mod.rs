//! Validity guard: per-frame cheat and environment checks
//!
//! Re-exports only. All logic in submodules.

pub mod brightness;
pub mod framing;
pub mod guard;
pub mod issues;
pub mod malpractice;
pub mod video_cut;

pub use brightness::{sample_luma, RgbaFrame, SAMPLE_WINDOW};
pub use guard::{CheatReport, ValidityGuard};
pub use issues::{Alert, Warning};
pub use malpractice::check_malpractice;
pub use video_cut::ValidityState;
