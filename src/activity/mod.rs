//! Activity detection
//!
//! Re-exports only. All logic in submodules.

pub mod broad_jump;
pub mod combat;
pub mod detector;
pub mod kind;
pub mod pushups;
pub mod reaction;
pub mod session;
pub mod situps;
pub mod squats;
pub mod state;
pub mod timing;
pub mod vertical_jump;
pub mod wall_sit;

pub use detector::{
    clamp_score, CompletedEvent, Detector, DisplayMetrics, FrameContext, Phase, SessionSummary,
    StepOutput,
};
pub use kind::{ActivityKind, ScoreModule};
pub use session::ActivitySession;
pub use state::ActivityState;
