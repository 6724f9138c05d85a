//! Raw landmark representation
//!
//! Landmarks arrive from the pose model in its fixed 33-point topology,
//! normalized to the frame (0-1) with a per-point visibility confidence.

use serde::{Deserialize, Serialize};

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const LANDMARK_COUNT: usize = 33;

pub const NOSE: usize = 0;
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;
pub const LEFT_HEEL: usize = 29;
pub const RIGHT_HEEL: usize = 30;
pub const LEFT_FOOT_INDEX: usize = 31;
pub const RIGHT_FOOT_INDEX: usize = 32;

/// Values per landmark in a flat host buffer (x, y, visibility)
pub const VALUES_PER_LANDMARK: usize = 3;

// ============================================================================
// LANDMARK DATA STRUCTURE
// ============================================================================

/// A single tracked keypoint (normalized coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,          // 0-1 normalized
    pub y: f32,          // 0-1 normalized, grows downward
    pub visibility: f32, // 0-1 confidence
}

impl Landmark {
    pub fn new(x: f32, y: f32, visibility: f32) -> Self {
        Self { x, y, visibility }
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn is_visible(&self, threshold: f32) -> bool {
        self.visibility > threshold
    }
}

/// Decode a flat `[x0, y0, v0, x1, y1, v1, ...]` buffer
///
/// A trailing partial triple is dropped.
pub fn landmarks_from_flat(data: &[f32]) -> Vec<Landmark> {
    data.chunks_exact(VALUES_PER_LANDMARK)
        .map(|chunk| Landmark::new(chunk[0], chunk[1], chunk[2]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_decoding() {
        let data = [0.1, 0.2, 0.9, 0.3, 0.4, 0.5, 0.7];
        let landmarks = landmarks_from_flat(&data);
        assert_eq!(landmarks.len(), 2);
        assert_eq!(landmarks[1], Landmark::new(0.3, 0.4, 0.5));
    }
}
