//! Per-session frame pipeline
//!
//! landmarks → named pose → (activity session, validity guard). The two
//! branches never see each other's output; the caller merges them.

use serde::Serialize;

use crate::activity::{
    ActivityKind, ActivitySession, CompletedEvent, DisplayMetrics, FrameContext, SessionSummary,
};
use crate::config::AssessmentConfig;
use crate::error::{ConfigError, SampleError};
use crate::pose::{extract_named, Landmark};
use crate::record::SessionRecord;
use crate::validity::{CheatReport, ValidityGuard};

/// Everything one frame produced
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameOutcome {
    /// `None` when the frame carried no usable pose
    pub metrics: Option<DisplayMetrics>,
    pub event: Option<CompletedEvent>,
    pub validity: CheatReport,
}

/// One running assessment
pub struct AssessmentPipeline {
    config: AssessmentConfig,
    session: ActivitySession,
    guard: ValidityGuard,
    frames: u64,
    skipped: u64,
}

impl AssessmentPipeline {
    pub fn new(kind: ActivityKind, config: AssessmentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            session: ActivitySession::new(kind, &config),
            guard: ValidityGuard::new(),
            config,
            frames: 0,
            skipped: 0,
        })
    }

    pub fn kind(&self) -> ActivityKind {
        self.session.kind()
    }

    pub fn config(&self) -> &AssessmentConfig {
        &self.config
    }

    pub fn session(&self) -> &ActivitySession {
        &self.session
    }

    /// Frames processed and frames skipped for lack of a pose
    pub fn frame_counts(&self) -> (u64, u64) {
        (self.frames, self.skipped)
    }

    /// Brightness reading for the next frame's lighting check
    pub fn observe_brightness(&mut self, sample: Result<f32, SampleError>) {
        self.guard.observe_brightness(sample);
    }

    pub fn process_frame(&mut self, landmarks: &[Landmark], ctx: &FrameContext) -> FrameOutcome {
        self.frames += 1;
        let pose = extract_named(landmarks);
        let validity = self.guard.run_cheat_detection(pose.as_ref(), self.kind());

        let Some(pose) = pose else {
            self.skipped += 1;
            return FrameOutcome {
                metrics: None,
                event: None,
                validity,
            };
        };

        let output = self.session.apply(&pose, ctx);
        FrameOutcome {
            metrics: Some(output.metrics),
            event: output.event,
            validity,
        }
    }

    pub fn summary(&self) -> SessionSummary {
        self.session.summary()
    }

    /// End the session and score it
    pub fn finish(self) -> SessionRecord {
        let kind = self.kind();
        let record = SessionRecord::from_summary(kind, self.session.summary(), &self.config);
        log::info!(
            "{} session finished: {} events, score {:.0}, {} of {} frames skipped",
            kind.as_str(),
            record.reps,
            record.score_breakdown.score,
            self.skipped,
            self.frames
        );
        record
    }
}
