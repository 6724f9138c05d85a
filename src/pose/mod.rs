//! Pose module - landmark decoding and named-joint projection
//!
//! Re-exports only. All logic in submodules.

mod landmarks;
mod named;

#[cfg(test)]
pub(crate) mod fixtures;

pub use landmarks::{
    landmarks_from_flat,
    Landmark,
    LANDMARK_COUNT, VALUES_PER_LANDMARK,
    NOSE, LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE, RIGHT_KNEE,
    LEFT_ANKLE, RIGHT_ANKLE,
    LEFT_HEEL, RIGHT_HEEL,
    LEFT_FOOT_INDEX, RIGHT_FOOT_INDEX,
};
pub use named::{extract_named, NamedPose};
