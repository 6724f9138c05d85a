//! Posture sanity check for the selected activity

use crate::activity::ActivityKind;
use crate::physics::inclination;
use crate::pose::NamedPose;

/// Torso inclination above which the body counts as upright
pub const UPRIGHT_INCLINATION: f32 = 60.0;
/// Torso inclination below which the body counts as lying down
pub const LYING_INCLINATION: f32 = 30.0;
/// Knee angle above which the legs count as straight
pub const STRAIGHT_KNEE: f32 = 160.0;
/// Knee angle above which a sit-up athlete is standing rather than seated
pub const STANDING_KNEE: f32 = 150.0;

/// Describe why the pose does not fit `kind`, if it doesn't
pub fn check_malpractice(pose: &NamedPose, kind: ActivityKind) -> Option<&'static str> {
    let torso = inclination(pose.shoulder_mid(), pose.hip_mid());
    let (left_knee, right_knee) = pose.knee_angles();
    let knees = (left_knee + right_knee) / 2.0;

    match kind {
        ActivityKind::PushUps if torso > UPRIGHT_INCLINATION => {
            Some("standing upright during push-ups")
        }
        ActivityKind::Squats if torso < LYING_INCLINATION => Some("lying down during squats"),
        ActivityKind::SitUps if torso > UPRIGHT_INCLINATION && knees > STANDING_KNEE => {
            Some("standing during sit-ups")
        }
        ActivityKind::WallSit if knees > STRAIGHT_KNEE => Some("legs straight during wall-sit"),
        ActivityKind::BroadJump
        | ActivityKind::VerticalJump
        | ActivityKind::Sprint
        | ActivityKind::Agility
        | ActivityKind::Punch
        | ActivityKind::Kick
        | ActivityKind::Reaction
            if torso < LYING_INCLINATION =>
        {
            Some("lying down instead of standing")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::fixtures::{knee_pose, lying_pose, plank_pose, situp_pose, standing_pose};

    #[test]
    fn test_pushups_expect_horizontal_torso() {
        assert!(check_malpractice(&plank_pose(160.0), ActivityKind::PushUps).is_none());
        assert!(check_malpractice(&standing_pose(), ActivityKind::PushUps).is_some());
    }

    #[test]
    fn test_squats_expect_upright_torso() {
        assert!(check_malpractice(&knee_pose(90.0), ActivityKind::Squats).is_none());
        assert!(check_malpractice(&plank_pose(160.0), ActivityKind::Squats).is_some());
    }

    #[test]
    fn test_situps_flag_standing() {
        assert!(check_malpractice(&situp_pose(60.0), ActivityKind::SitUps).is_none());
        assert!(check_malpractice(&lying_pose(), ActivityKind::SitUps).is_none());
        assert!(check_malpractice(&standing_pose(), ActivityKind::SitUps).is_some());
    }

    #[test]
    fn test_wall_sit_expects_bent_knees() {
        assert!(check_malpractice(&knee_pose(90.0), ActivityKind::WallSit).is_none());
        assert!(check_malpractice(&standing_pose(), ActivityKind::WallSit).is_some());
    }

    #[test]
    fn test_standing_tests_flag_lying() {
        for kind in [ActivityKind::BroadJump, ActivityKind::VerticalJump, ActivityKind::Kick] {
            assert!(check_malpractice(&standing_pose(), kind).is_none());
            assert!(check_malpractice(&lying_pose(), kind).is_some());
        }
    }
}
