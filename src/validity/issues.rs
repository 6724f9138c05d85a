//! Warning and alert vocabulary shared by every check

use serde::Serialize;

/// Advisory finding, never invalidates the frame on its own
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Warning {
    NoPerson,
    FaceHidden,
    OffCenter,
    TooClose,
    TooFar,
    LowLight,
    LightingUnstable,
}

impl Warning {
    pub fn message(&self) -> &'static str {
        match self {
            Warning::NoPerson => "No person detected",
            Warning::FaceHidden => "Face not visible",
            Warning::OffCenter => "Move to the centre of the frame",
            Warning::TooClose => "Step back from the camera",
            Warning::TooFar => "Move closer to the camera",
            Warning::LowLight => "Lighting is too dark",
            Warning::LightingUnstable => "Lighting changed suddenly",
        }
    }
}

/// Critical finding, the frame is invalid while any alert is raised
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Alert {
    PoorFraming,
    ExtraPerson,
    VideoCut,
    Malpractice,
}

impl Alert {
    pub fn message(&self) -> &'static str {
        match self {
            Alert::PoorFraming => "Body is not fully in frame",
            Alert::ExtraPerson => "Another person may be in frame",
            Alert::VideoCut => "Video discontinuity detected",
            Alert::Malpractice => "Posture does not match the selected test",
        }
    }
}
