//! Geometry-only checks: presence, extra person, camera placement

use super::issues::{Alert, Warning};
use crate::physics::midpoint;
use crate::pose::{Landmark, NamedPose};

/// Visibility a landmark needs to count as present
pub const VISIBILITY_THRESHOLD: f32 = 0.3;
/// Visible framing points needed to treat a person as present
pub const MIN_VISIBLE_POINTS: usize = 3;
/// Shoulder or hip width beyond which two bodies are likely merged
pub const MAX_BODY_WIDTH: f32 = 0.6;

pub const CENTER_MIN_X: f32 = 0.1;
pub const CENTER_MAX_X: f32 = 0.9;
pub const TOO_CLOSE_Y: f32 = 0.05;
pub const TOO_FAR_SPAN: f32 = 0.1;

fn framing_points(pose: &NamedPose) -> [Landmark; 9] {
    [
        pose.nose,
        pose.left_shoulder,
        pose.right_shoulder,
        pose.left_hip,
        pose.right_hip,
        pose.left_knee,
        pose.right_knee,
        pose.left_ankle,
        pose.right_ankle,
    ]
}

/// Count of the nine framing points that are visible
pub fn visible_points(pose: &NamedPose) -> usize {
    framing_points(pose)
        .iter()
        .filter(|l| l.is_visible(VISIBILITY_THRESHOLD))
        .count()
}

/// Presence check. Returns true when enough of the body is in view.
pub fn check_framing(
    pose: Option<&NamedPose>,
    warnings: &mut Vec<Warning>,
    alerts: &mut Vec<Alert>,
) -> bool {
    let visible = pose.map_or(0, visible_points);
    match visible {
        0 => {
            warnings.push(Warning::NoPerson);
            false
        }
        n if n < MIN_VISIBLE_POINTS => {
            alerts.push(Alert::PoorFraming);
            false
        }
        _ => true,
    }
}

fn wide(a: &Landmark, b: &Landmark) -> bool {
    a.is_visible(VISIBILITY_THRESHOLD)
        && b.is_visible(VISIBILITY_THRESHOLD)
        && (a.x - b.x).abs() > MAX_BODY_WIDTH
}

/// Shoulders or hips spread wider than one body can be
pub fn has_extra_person(pose: &NamedPose) -> bool {
    wide(&pose.left_shoulder, &pose.right_shoulder) || wide(&pose.left_hip, &pose.right_hip)
}

/// Camera placement warnings based on where the nose sits
pub fn check_camera_angle(pose: &NamedPose, warnings: &mut Vec<Warning>) {
    let nose = &pose.nose;
    if !nose.is_visible(VISIBILITY_THRESHOLD) {
        warnings.push(Warning::FaceHidden);
        return;
    }

    if nose.x < CENTER_MIN_X || nose.x > CENTER_MAX_X {
        warnings.push(Warning::OffCenter);
    }
    if nose.y < TOO_CLOSE_Y {
        warnings.push(Warning::TooClose);
    }

    let hips_visible = pose.left_hip.is_visible(VISIBILITY_THRESHOLD)
        && pose.right_hip.is_visible(VISIBILITY_THRESHOLD);
    if hips_visible {
        let hip = midpoint(pose.left_hip.position(), pose.right_hip.position());
        if (hip.1 - nose.y).abs() < TOO_FAR_SPAN {
            warnings.push(Warning::TooFar);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::fixtures::standing_pose;

    fn hide(l: &mut Landmark) {
        l.visibility = 0.1;
    }

    #[test]
    fn test_presence() {
        let (mut w, mut a) = (Vec::new(), Vec::new());
        assert!(check_framing(Some(&standing_pose()), &mut w, &mut a));
        assert!(w.is_empty() && a.is_empty());

        assert!(!check_framing(None, &mut w, &mut a));
        assert_eq!(w, vec![Warning::NoPerson]);
    }

    #[test]
    fn test_partial_body_is_poor_framing() {
        let mut pose = standing_pose();
        for l in [
            &mut pose.left_shoulder,
            &mut pose.right_shoulder,
            &mut pose.left_hip,
            &mut pose.right_hip,
            &mut pose.left_knee,
            &mut pose.right_knee,
            &mut pose.left_ankle,
        ] {
            hide(l);
        }
        assert_eq!(visible_points(&pose), 2);
        let (mut w, mut a) = (Vec::new(), Vec::new());
        assert!(!check_framing(Some(&pose), &mut w, &mut a));
        assert_eq!(a, vec![Alert::PoorFraming]);
    }

    #[test]
    fn test_extra_person() {
        let mut pose = standing_pose();
        assert!(!has_extra_person(&pose));
        pose.left_shoulder.x = 0.1;
        pose.right_shoulder.x = 0.8;
        assert!(has_extra_person(&pose));
    }

    #[test]
    fn test_camera_angle() {
        let mut warnings = Vec::new();
        check_camera_angle(&standing_pose(), &mut warnings);
        assert!(warnings.is_empty());

        let mut pose = standing_pose();
        pose.nose.x = 0.95;
        pose.nose.y = 0.02;
        check_camera_angle(&pose, &mut warnings);
        assert_eq!(warnings, vec![Warning::OffCenter, Warning::TooClose]);

        let mut far = standing_pose();
        far.nose.y = 0.5;
        warnings.clear();
        check_camera_angle(&far, &mut warnings);
        assert_eq!(warnings, vec![Warning::TooFar]);

        let mut faceless = standing_pose();
        hide(&mut faceless.nose);
        warnings.clear();
        check_camera_angle(&faceless, &mut warnings);
        assert_eq!(warnings, vec![Warning::FaceHidden]);
    }
}
