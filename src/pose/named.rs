//! Named-joint projection of a landmark frame

use super::landmarks::*;
use crate::physics::{angle_at_vertex, midpoint};

/// Read-only per-frame view of the 17 joints the detectors use
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NamedPose {
    pub nose: Landmark,
    pub left_shoulder: Landmark,
    pub right_shoulder: Landmark,
    pub left_elbow: Landmark,
    pub right_elbow: Landmark,
    pub left_wrist: Landmark,
    pub right_wrist: Landmark,
    pub left_hip: Landmark,
    pub right_hip: Landmark,
    pub left_knee: Landmark,
    pub right_knee: Landmark,
    pub left_ankle: Landmark,
    pub right_ankle: Landmark,
    pub left_heel: Landmark,
    pub right_heel: Landmark,
    pub left_foot_index: Landmark,
    pub right_foot_index: Landmark,
}

/// Map a raw landmark list to named joints
///
/// Returns `None` ("no pose") when fewer than 33 landmarks were supplied;
/// the caller skips the frame and carries on with the next one.
pub fn extract_named(landmarks: &[Landmark]) -> Option<NamedPose> {
    if landmarks.len() < LANDMARK_COUNT {
        log::debug!(
            "skipping frame: {} landmarks (expected {})",
            landmarks.len(),
            LANDMARK_COUNT
        );
        return None;
    }

    Some(NamedPose {
        nose: landmarks[NOSE],
        left_shoulder: landmarks[LEFT_SHOULDER],
        right_shoulder: landmarks[RIGHT_SHOULDER],
        left_elbow: landmarks[LEFT_ELBOW],
        right_elbow: landmarks[RIGHT_ELBOW],
        left_wrist: landmarks[LEFT_WRIST],
        right_wrist: landmarks[RIGHT_WRIST],
        left_hip: landmarks[LEFT_HIP],
        right_hip: landmarks[RIGHT_HIP],
        left_knee: landmarks[LEFT_KNEE],
        right_knee: landmarks[RIGHT_KNEE],
        left_ankle: landmarks[LEFT_ANKLE],
        right_ankle: landmarks[RIGHT_ANKLE],
        left_heel: landmarks[LEFT_HEEL],
        right_heel: landmarks[RIGHT_HEEL],
        left_foot_index: landmarks[LEFT_FOOT_INDEX],
        right_foot_index: landmarks[RIGHT_FOOT_INDEX],
    })
}

impl NamedPose {
    /// Knee angles (hip→knee→ankle), left then right
    pub fn knee_angles(&self) -> (f32, f32) {
        (
            angle_at_vertex(
                self.left_hip.position(),
                self.left_knee.position(),
                self.left_ankle.position(),
            ),
            angle_at_vertex(
                self.right_hip.position(),
                self.right_knee.position(),
                self.right_ankle.position(),
            ),
        )
    }

    /// Elbow angles (shoulder→elbow→wrist), left then right
    pub fn elbow_angles(&self) -> (f32, f32) {
        (
            angle_at_vertex(
                self.left_shoulder.position(),
                self.left_elbow.position(),
                self.left_wrist.position(),
            ),
            angle_at_vertex(
                self.right_shoulder.position(),
                self.right_elbow.position(),
                self.right_wrist.position(),
            ),
        )
    }

    /// Torso fold angles at the hip (knee→hip→shoulder), left then right
    pub fn hip_angles(&self) -> (f32, f32) {
        (
            angle_at_vertex(
                self.left_knee.position(),
                self.left_hip.position(),
                self.left_shoulder.position(),
            ),
            angle_at_vertex(
                self.right_knee.position(),
                self.right_hip.position(),
                self.right_shoulder.position(),
            ),
        )
    }

    /// Body-line straightness (shoulder→hip→ankle), averaged over both sides
    pub fn body_line_angle(&self) -> f32 {
        let left = angle_at_vertex(
            self.left_shoulder.position(),
            self.left_hip.position(),
            self.left_ankle.position(),
        );
        let right = angle_at_vertex(
            self.right_shoulder.position(),
            self.right_hip.position(),
            self.right_ankle.position(),
        );
        (left + right) / 2.0
    }

    pub fn shoulder_mid(&self) -> (f32, f32) {
        midpoint(self.left_shoulder.position(), self.right_shoulder.position())
    }

    pub fn hip_mid(&self) -> (f32, f32) {
        midpoint(self.left_hip.position(), self.right_hip.position())
    }

    pub fn ankle_mid(&self) -> (f32, f32) {
        midpoint(self.left_ankle.position(), self.right_ankle.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::fixtures::standing_pose;

    #[test]
    fn test_short_input_is_no_pose() {
        let landmarks = vec![Landmark::new(0.5, 0.5, 1.0); 32];
        assert!(extract_named(&landmarks).is_none());
        assert!(extract_named(&[]).is_none());
    }

    #[test]
    fn test_named_joints_follow_topology() {
        let mut landmarks = vec![Landmark::default(); LANDMARK_COUNT];
        landmarks[NOSE] = Landmark::new(0.5, 0.1, 0.9);
        landmarks[RIGHT_FOOT_INDEX] = Landmark::new(0.6, 0.95, 0.4);
        let pose = extract_named(&landmarks).unwrap();
        assert_eq!(pose.nose, landmarks[NOSE]);
        assert_eq!(pose.right_foot_index, landmarks[RIGHT_FOOT_INDEX]);
    }

    #[test]
    fn test_standing_pose_angles() {
        let pose = standing_pose();
        let (left, right) = pose.knee_angles();
        assert!(left > 175.0 && right > 175.0);
        // Shoulders sit slightly wider than hips, so the line bends a few degrees
        assert!(pose.body_line_angle() > 170.0);
    }
}
