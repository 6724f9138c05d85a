//! Point primitives in normalized image coordinates

use nalgebra::Point2;

fn to_point(p: (f32, f32)) -> Point2<f32> {
    Point2::new(p.0, p.1)
}

/// Euclidean distance in normalized coordinate units
pub fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    nalgebra::distance(&to_point(a), &to_point(b))
}

/// Component-wise average of two points
pub fn midpoint(a: (f32, f32), b: (f32, f32)) -> (f32, f32) {
    let mid = nalgebra::center(&to_point(a), &to_point(b));
    (mid.x, mid.y)
}

/// Torso inclination from horizontal, in degrees
///
/// 0° = lying flat, 90° = standing upright. Used by malpractice checks
/// that only care about how vertical the shoulder→hip line is.
pub fn inclination(upper: (f32, f32), lower: (f32, f32)) -> f32 {
    let dx = (upper.0 - lower.0).abs();
    let dy = (upper.1 - lower.1).abs();
    dy.atan2(dx).to_degrees()
}
