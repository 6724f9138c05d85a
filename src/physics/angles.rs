//! Joint angle calculation and quality banding
//!
//! Angles are measured at a vertex joint between two limb segments,
//! e.g. hip→knee→ankle gives the knee angle.

use serde::Serialize;

/// Calculate the angle at vertex `b` in degrees
///
/// Uses the difference of the two segment headings:
/// `|atan2(c - b) - atan2(a - b)|`, folded back into `[0, 180]`.
///
/// - 180° = fully straight (a, b, c collinear)
/// - 90° = right angle
pub fn angle_at_vertex(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> f32 {
    let heading_c = (c.1 - b.1).atan2(c.0 - b.0);
    let heading_a = (a.1 - b.1).atan2(a.0 - b.0);

    let degrees = (heading_c - heading_a).abs().to_degrees();

    if degrees > 180.0 {
        360.0 - degrees
    } else {
        degrees
    }
}

/// Default tolerance (degrees) for the warning band around a target range
pub const DEFAULT_BAND_TOLERANCE: f32 = 15.0;

/// Form quality classification for a continuous joint angle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityBand {
    Good,
    Warning,
    Bad,
}

impl QualityBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityBand::Good => "good",
            QualityBand::Warning => "warning",
            QualityBand::Bad => "bad",
        }
    }
}

/// Classify `value` against the target range `[min, max]`
///
/// Inside the range is good, within `tolerance` outside it is a warning,
/// anything further is bad.
pub fn quality_band(value: f32, min: f32, max: f32, tolerance: f32) -> QualityBand {
    if value >= min && value <= max {
        QualityBand::Good
    } else if value >= min - tolerance && value <= max + tolerance {
        QualityBand::Warning
    } else {
        QualityBand::Bad
    }
}
