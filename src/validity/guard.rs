//! Composite validity verdict for one frame
//!
//! Every check runs fresh each frame. Nothing latches: a clean frame
//! after a flagged one is valid again, and the caller decides whether
//! an alert should stop the test.

use serde::Serialize;

use super::brightness::{LIGHTING_JUMP, LOW_LIGHT_LUMA};
use super::framing::{check_camera_angle, check_framing, has_extra_person};
use super::issues::{Alert, Warning};
use super::malpractice::check_malpractice;
use super::video_cut::ValidityState;
use crate::activity::ActivityKind;
use crate::error::SampleError;
use crate::pose::NamedPose;

/// Validity verdict for one frame
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheatReport {
    pub is_valid: bool,
    pub warnings: Vec<Warning>,
    pub alerts: Vec<Alert>,
    pub should_show_red_overlay: bool,
}

impl CheatReport {
    fn from_findings(warnings: Vec<Warning>, alerts: Vec<Alert>) -> Self {
        let is_valid = alerts.is_empty();
        Self {
            is_valid,
            warnings,
            alerts,
            should_show_red_overlay: !is_valid,
        }
    }

    /// Human-readable lines for every finding, alerts first
    pub fn messages(&self) -> Vec<&'static str> {
        self.alerts
            .iter()
            .map(Alert::message)
            .chain(self.warnings.iter().map(Warning::message))
            .collect()
    }
}

/// Runs all validity checks for one session
#[derive(Clone, Debug, Default)]
pub struct ValidityGuard {
    state: ValidityState,
    pending_luma: Option<f32>,
}

impl ValidityGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand over the brightness sample for the next frame
    ///
    /// A failed sample is dropped: lighting is advisory, so the check
    /// simply reports nothing for that frame.
    pub fn observe_brightness(&mut self, sample: Result<f32, SampleError>) {
        match sample {
            Ok(luma) => self.pending_luma = Some(luma),
            Err(err) => {
                log::debug!("brightness check skipped: {}", err);
                self.pending_luma = None;
            }
        }
    }

    /// Run every check against the current frame
    pub fn run_cheat_detection(
        &mut self,
        pose: Option<&NamedPose>,
        kind: ActivityKind,
    ) -> CheatReport {
        let mut warnings = Vec::new();
        let mut alerts = Vec::new();

        if let Some(luma) = self.pending_luma.take() {
            self.check_lighting(luma, &mut warnings);
        }

        let present = check_framing(pose, &mut warnings, &mut alerts);
        if let (true, Some(pose)) = (present, pose) {
            if has_extra_person(pose) {
                alerts.push(Alert::ExtraPerson);
            }
            check_camera_angle(pose, &mut warnings);
            if self.state.check_video_cut(pose) {
                alerts.push(Alert::VideoCut);
            }
            if let Some(reason) = check_malpractice(pose, kind) {
                log::debug!("malpractice: {}", reason);
                alerts.push(Alert::Malpractice);
            }
        }

        CheatReport::from_findings(warnings, alerts)
    }

    fn check_lighting(&mut self, luma: f32, warnings: &mut Vec<Warning>) {
        if luma < LOW_LIGHT_LUMA {
            warnings.push(Warning::LowLight);
        }
        if let Some(previous) = self.state.replace_luma(luma) {
            if (luma - previous).abs() >= LIGHTING_JUMP {
                warnings.push(Warning::LightingUnstable);
            }
        }
    }

    pub fn reset(&mut self) {
        self.state.reset();
        self.pending_luma = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::fixtures::{knee_pose, plank_pose, standing_pose};

    #[test]
    fn test_clean_frame_is_valid() {
        let mut guard = ValidityGuard::new();
        let report = guard.run_cheat_detection(Some(&knee_pose(120.0)), ActivityKind::Squats);
        assert!(report.is_valid);
        assert!(!report.should_show_red_overlay);
        assert!(report.warnings.is_empty() && report.alerts.is_empty());
    }

    #[test]
    fn test_no_person_is_only_a_warning() {
        let mut guard = ValidityGuard::new();
        let report = guard.run_cheat_detection(None, ActivityKind::Squats);
        assert!(report.is_valid);
        assert_eq!(report.warnings, vec![Warning::NoPerson]);
    }

    #[test]
    fn test_malpractice_invalidates_without_latching() {
        let mut guard = ValidityGuard::new();
        let report = guard.run_cheat_detection(Some(&standing_pose()), ActivityKind::PushUps);
        assert!(!report.is_valid);
        assert!(report.should_show_red_overlay);
        assert!(report.alerts.contains(&Alert::Malpractice));

        // A different guard so the posture switch is not read as a cut
        let mut guard = ValidityGuard::new();
        let report = guard.run_cheat_detection(Some(&plank_pose(160.0)), ActivityKind::PushUps);
        assert!(!report.alerts.contains(&Alert::Malpractice));
    }

    #[test]
    fn test_recovers_after_cut() {
        let mut guard = ValidityGuard::new();
        let mut moved = standing_pose();
        moved.nose.x = 0.85;
        guard.run_cheat_detection(Some(&standing_pose()), ActivityKind::Squats);
        let cut = guard.run_cheat_detection(Some(&moved), ActivityKind::Squats);
        assert_eq!(cut.alerts, vec![Alert::VideoCut]);
        let after = guard.run_cheat_detection(Some(&moved), ActivityKind::Squats);
        assert!(after.is_valid);
    }

    #[test]
    fn test_lighting_checks() {
        let mut guard = ValidityGuard::new();
        let pose = standing_pose();

        guard.observe_brightness(Ok(20.0));
        let dark = guard.run_cheat_detection(Some(&pose), ActivityKind::Sprint);
        assert_eq!(dark.warnings, vec![Warning::LowLight]);
        assert!(dark.is_valid);

        guard.observe_brightness(Ok(90.0));
        let jump = guard.run_cheat_detection(Some(&pose), ActivityKind::Sprint);
        assert_eq!(jump.warnings, vec![Warning::LightingUnstable]);

        guard.observe_brightness(Err(SampleError::Unavailable("detached canvas".into())));
        let skipped = guard.run_cheat_detection(Some(&pose), ActivityKind::Sprint);
        assert!(skipped.warnings.is_empty());
    }
}
