//! Per-session memory for the checks that compare against the last frame
//!
//! One instance per running session. Nothing here is global, so two
//! assessments side by side never see each other's frames.

use crate::physics::distance;
use crate::pose::NamedPose;

/// Displacement between consecutive frames that indicates a splice
pub const CUT_DISPLACEMENT: f32 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Snapshot {
    nose: (f32, f32),
    left_shoulder: (f32, f32),
}

#[derive(Clone, Debug, Default)]
pub struct ValidityState {
    previous: Option<Snapshot>,
    last_luma: Option<f32>,
}

impl ValidityState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare against the previous frame, then remember this one
    ///
    /// Returns true when the nose or left shoulder jumped further than a
    /// person can move in one frame.
    pub fn check_video_cut(&mut self, pose: &NamedPose) -> bool {
        let current = Snapshot {
            nose: pose.nose.position(),
            left_shoulder: pose.left_shoulder.position(),
        };
        let cut = self.previous.map_or(false, |prev| {
            distance(prev.nose, current.nose) > CUT_DISPLACEMENT
                || distance(prev.left_shoulder, current.left_shoulder) > CUT_DISPLACEMENT
        });
        if cut {
            log::warn!("video cut: pose jumped between consecutive frames");
        }
        self.previous = Some(current);
        cut
    }

    /// Swap in the latest brightness reading, returning the previous one
    pub fn replace_luma(&mut self, luma: f32) -> Option<f32> {
        self.last_luma.replace(luma)
    }

    pub fn last_luma(&self) -> Option<f32> {
        self.last_luma
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
