//! Synthetic skeletons for detector tests

use super::landmarks::*;
use super::named::{extract_named, NamedPose};

const VIS: f32 = 0.9;

fn lm(x: f32, y: f32) -> Landmark {
    Landmark::new(x, y, VIS)
}

/// Direction at `degrees` away from straight-up, rotating towards +x
fn bend(degrees: f32) -> (f32, f32) {
    let r = degrees.to_radians();
    (r.sin(), -r.cos())
}

/// Upright, facing the camera, centred, arms hanging
pub fn standing_pose() -> NamedPose {
    NamedPose {
        nose: lm(0.5, 0.15),
        left_shoulder: lm(0.42, 0.3),
        right_shoulder: lm(0.58, 0.3),
        left_elbow: lm(0.41, 0.43),
        right_elbow: lm(0.59, 0.43),
        left_wrist: lm(0.40, 0.56),
        right_wrist: lm(0.60, 0.56),
        left_hip: lm(0.45, 0.55),
        right_hip: lm(0.55, 0.55),
        left_knee: lm(0.45, 0.72),
        right_knee: lm(0.55, 0.72),
        left_ankle: lm(0.45, 0.9),
        right_ankle: lm(0.55, 0.9),
        left_heel: lm(0.44, 0.92),
        right_heel: lm(0.56, 0.92),
        left_foot_index: lm(0.46, 0.94),
        right_foot_index: lm(0.54, 0.94),
    }
}

/// Standing pose with both knees bent to `degrees`
pub fn knee_pose(degrees: f32) -> NamedPose {
    knee_pose_asymmetric(degrees, degrees)
}

pub fn knee_pose_asymmetric(left_degrees: f32, right_degrees: f32) -> NamedPose {
    let mut pose = standing_pose();
    let shin = 0.18;
    let (lx, ly) = bend(left_degrees);
    let (rx, ry) = bend(right_degrees);
    pose.left_ankle = lm(pose.left_knee.x + lx * shin, pose.left_knee.y + ly * shin);
    pose.right_ankle = lm(pose.right_knee.x + rx * shin, pose.right_knee.y + ry * shin);
    pose
}

/// Horizontal plank with both elbows at `degrees`
pub fn plank_pose(elbow_degrees: f32) -> NamedPose {
    let mut pose = standing_pose();
    pose.nose = lm(0.2, 0.5);
    pose.left_shoulder = lm(0.3, 0.5);
    pose.right_shoulder = lm(0.3, 0.5);
    pose.left_hip = lm(0.55, 0.5);
    pose.right_hip = lm(0.55, 0.5);
    pose.left_knee = lm(0.68, 0.5);
    pose.right_knee = lm(0.68, 0.5);
    pose.left_ankle = lm(0.8, 0.5);
    pose.right_ankle = lm(0.8, 0.5);

    let upper_arm = 0.12;
    let forearm = 0.12;
    let elbow = lm(0.3, 0.5 + upper_arm);
    let (wx, wy) = bend(elbow_degrees);
    let wrist = lm(elbow.x + wx * forearm, elbow.y + wy * forearm);
    pose.left_elbow = elbow;
    pose.right_elbow = elbow;
    pose.left_wrist = wrist;
    pose.right_wrist = wrist;
    pose
}

/// Plank with hips dropped so the shoulder-hip-ankle line sags
pub fn sagging_plank_pose(elbow_degrees: f32) -> NamedPose {
    let mut pose = plank_pose(elbow_degrees);
    pose.left_hip = lm(0.55, 0.62);
    pose.right_hip = lm(0.55, 0.62);
    pose
}

/// Lying on the back, knees bent, torso folded to `hip_degrees` at the hip
pub fn situp_pose(hip_degrees: f32) -> NamedPose {
    situp_pose_asymmetric(hip_degrees, hip_degrees)
}

pub fn situp_pose_asymmetric(left_degrees: f32, right_degrees: f32) -> NamedPose {
    let mut pose = standing_pose();
    let hip = (0.5, 0.75);
    let torso = 0.25;
    pose.left_hip = lm(hip.0, hip.1);
    pose.right_hip = lm(hip.0, hip.1);
    pose.left_knee = lm(hip.0 + 0.18, hip.1 - 0.1);
    pose.right_knee = lm(hip.0 + 0.18, hip.1 - 0.1);
    pose.left_ankle = lm(hip.0 + 0.32, hip.1);
    pose.right_ankle = lm(hip.0 + 0.32, hip.1);

    // Rotate the knee direction by the requested fold to place each shoulder
    let knee_heading = (-0.1f32).atan2(0.18);
    let place = |degrees: f32| {
        let heading = knee_heading - degrees.to_radians();
        lm(hip.0 + torso * heading.cos(), hip.1 + torso * heading.sin())
    };
    pose.left_shoulder = place(left_degrees);
    pose.right_shoulder = place(right_degrees);
    pose.nose = lm(pose.left_shoulder.x - 0.05, pose.left_shoulder.y - 0.03);
    pose
}

/// Lying flat on the floor, body horizontal
pub fn lying_pose() -> NamedPose {
    situp_pose(175.0)
}

/// Translate every joint by (dx, dy)
pub fn shifted(pose: NamedPose, dx: f32, dy: f32) -> NamedPose {
    let mv = |l: Landmark| Landmark::new(l.x + dx, l.y + dy, l.visibility);
    NamedPose {
        nose: mv(pose.nose),
        left_shoulder: mv(pose.left_shoulder),
        right_shoulder: mv(pose.right_shoulder),
        left_elbow: mv(pose.left_elbow),
        right_elbow: mv(pose.right_elbow),
        left_wrist: mv(pose.left_wrist),
        right_wrist: mv(pose.right_wrist),
        left_hip: mv(pose.left_hip),
        right_hip: mv(pose.right_hip),
        left_knee: mv(pose.left_knee),
        right_knee: mv(pose.right_knee),
        left_ankle: mv(pose.left_ankle),
        right_ankle: mv(pose.right_ankle),
        left_heel: mv(pose.left_heel),
        right_heel: mv(pose.right_heel),
        left_foot_index: mv(pose.left_foot_index),
        right_foot_index: mv(pose.right_foot_index),
    }
}

/// Expand a named pose back into a full 33-point frame
pub fn to_landmarks(pose: &NamedPose) -> Vec<Landmark> {
    let mut landmarks = vec![Landmark::new(pose.nose.x, pose.nose.y, 0.0); LANDMARK_COUNT];
    landmarks[NOSE] = pose.nose;
    landmarks[LEFT_SHOULDER] = pose.left_shoulder;
    landmarks[RIGHT_SHOULDER] = pose.right_shoulder;
    landmarks[LEFT_ELBOW] = pose.left_elbow;
    landmarks[RIGHT_ELBOW] = pose.right_elbow;
    landmarks[LEFT_WRIST] = pose.left_wrist;
    landmarks[RIGHT_WRIST] = pose.right_wrist;
    landmarks[LEFT_HIP] = pose.left_hip;
    landmarks[RIGHT_HIP] = pose.right_hip;
    landmarks[LEFT_KNEE] = pose.left_knee;
    landmarks[RIGHT_KNEE] = pose.right_knee;
    landmarks[LEFT_ANKLE] = pose.left_ankle;
    landmarks[RIGHT_ANKLE] = pose.right_ankle;
    landmarks[LEFT_HEEL] = pose.left_heel;
    landmarks[RIGHT_HEEL] = pose.right_heel;
    landmarks[LEFT_FOOT_INDEX] = pose.left_foot_index;
    landmarks[RIGHT_FOOT_INDEX] = pose.right_foot_index;
    landmarks
}

#[test]
fn test_fixture_angles_match_request() {
    let (left, right) = knee_pose(90.0).knee_angles();
    assert!((left - 90.0).abs() < 0.1 && (right - 90.0).abs() < 0.1);

    let (left, _) = plank_pose(95.0).elbow_angles();
    assert!((left - 95.0).abs() < 0.1);
    assert!(plank_pose(170.0).body_line_angle() > 175.0);
    assert!(sagging_plank_pose(170.0).body_line_angle() < 150.0);

    let (left, _) = situp_pose(60.0).hip_angles();
    assert!((left - 60.0).abs() < 0.1);

    let round_trip = extract_named(&to_landmarks(&standing_pose())).unwrap();
    assert_eq!(round_trip, standing_pose());
}
