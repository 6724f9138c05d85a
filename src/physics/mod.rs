//! Physics module - geometric primitives and motion signals
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod points;
mod velocity;
mod window;

pub use angles::{angle_at_vertex, quality_band, QualityBand, DEFAULT_BAND_TOLERANCE};
pub use points::{distance, midpoint, inclination};
pub use velocity::{SpeedTracker, ReversalCounter, DEAD_ZONE};
pub use window::RollingWindow;
