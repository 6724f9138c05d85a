//! One running activity plus its accumulated counters

use super::detector::*;
use super::kind::ActivityKind;
use super::state::ActivityState;
use crate::config::AssessmentConfig;
use crate::pose::NamedPose;

/// Accumulates reps and form scores around an [`ActivityState`]
#[derive(Clone, Debug)]
pub struct ActivitySession {
    state: ActivityState,
    rep_count: u32,
    form_scores: Vec<f32>,
    first_frame_ms: Option<f64>,
    last_frame_ms: f64,
}

impl ActivitySession {
    pub fn new(kind: ActivityKind, config: &AssessmentConfig) -> Self {
        log::info!("starting {} session", kind.as_str());
        Self {
            state: ActivityState::new(kind, config),
            rep_count: 0,
            form_scores: Vec::new(),
            first_frame_ms: None,
            last_frame_ms: 0.0,
        }
    }

    pub fn kind(&self) -> ActivityKind {
        self.state.kind()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn rep_count(&self) -> u32 {
        self.rep_count
    }

    pub fn form_scores(&self) -> &[f32] {
        &self.form_scores
    }

    /// Time between the first and latest processed frame
    pub fn elapsed_ms(&self) -> f64 {
        self.first_frame_ms
            .map_or(0.0, |first| (self.last_frame_ms - first).max(0.0))
    }

    /// Feed one pose through the detector and fold any completed event in
    pub fn apply(&mut self, pose: &NamedPose, ctx: &FrameContext) -> StepOutput {
        self.first_frame_ms.get_or_insert(ctx.timestamp_ms);
        self.last_frame_ms = ctx.timestamp_ms;

        let (next, mut output) = self.state.step(pose, ctx);
        self.state = next;

        if let Some(event) = &output.event {
            self.rep_count += 1;
            self.form_scores.push(event.form_score);
            log::info!(
                "{} #{}: {} = {:.1} (form {:.0})",
                self.kind().as_str(),
                self.rep_count,
                event.label,
                event.value,
                event.form_score
            );
        }

        output.metrics.rep_count = self.rep_count;
        output
    }

    /// Raw metrics for scoring
    pub fn summary(&self) -> SessionSummary {
        let mut summary = SessionSummary {
            reps: self.rep_count,
            form_scores: self.form_scores.clone(),
            duration_ms: self.elapsed_ms(),
            ..SessionSummary::default()
        };
        self.state.summarize(&mut summary);
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::fixtures::{knee_pose, standing_pose};
    use crate::pose::Landmark;

    fn run(session: &mut ActivitySession, poses: &[NamedPose]) -> Vec<u32> {
        poses
            .iter()
            .enumerate()
            .map(|(i, pose)| {
                session
                    .apply(pose, &FrameContext::at(i as f64 * 33.0))
                    .metrics
                    .rep_count
            })
            .collect()
    }

    #[test]
    fn test_rep_count_is_monotonic() {
        let mut session = ActivitySession::new(ActivityKind::Squats, &AssessmentConfig::default());
        let mut poses = Vec::new();
        for _ in 0..3 {
            poses.push(knee_pose(170.0));
            poses.push(knee_pose(130.0));
            poses.push(knee_pose(85.0));
            poses.push(knee_pose(130.0));
            poses.push(knee_pose(170.0));
        }
        let counts = run(&mut session, &poses);
        assert!(counts.windows(2).all(|w| w[1] >= w[0]));
        assert_eq!(session.rep_count(), 3);
        assert_eq!(session.form_scores().len(), 3);
    }

    #[test]
    fn test_summary_carries_duration() {
        let mut session = ActivitySession::new(ActivityKind::Sprint, &AssessmentConfig::default());
        run(&mut session, &vec![standing_pose(); 31]);
        let summary = session.summary();
        assert_eq!(summary.duration_ms, 990.0);
        assert_eq!(summary.strides, Some(0));
        assert_eq!(summary.reps, 0);
    }

    fn jump_pose(hip: (f32, f32), ankle_x: f32) -> NamedPose {
        let mut pose = standing_pose();
        pose.left_hip = Landmark::new(hip.0, hip.1, 0.9);
        pose.right_hip = pose.left_hip;
        pose.left_ankle.x = ankle_x;
        pose.right_ankle.x = ankle_x;
        pose
    }

    #[test]
    fn test_leaning_landing_earns_nothing() {
        let mut session =
            ActivitySession::new(ActivityKind::BroadJump, &AssessmentConfig::default());
        let poses = [
            jump_pose((0.30, 0.55), 0.30),
            jump_pose((0.35, 0.50), 0.35),
            jump_pose((0.50, 0.54), 0.30),
            jump_pose((0.50, 0.54), 0.30),
        ];
        let counts = run(&mut session, &poses);
        assert_eq!(counts, vec![0, 0, 0, 0]);
        assert!(session.form_scores().is_empty());

        let summary = session.summary();
        assert_eq!(summary.reps, 0);
        assert_eq!(summary.best_distance_cm, None);
    }
}
