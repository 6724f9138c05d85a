//! Whole-session runs through the public pipeline

use assess_web::activity::{ActivityKind, FrameContext, Phase, ScoreModule};
use assess_web::pose::*;
use assess_web::record::{MemoryRecordStore, RecordStore};
use assess_web::validity::Alert;
use assess_web::{AssessmentConfig, AssessmentPipeline, SessionRecord};

const FRAME_MS: f64 = 33.0;

/// Upright skeleton, knees bent to `knee_degrees`, shifted by (dx, dy)
fn skeleton(knee_degrees: f32, dx: f32, dy: f32) -> Vec<Landmark> {
    let mut frame = vec![Landmark::new(0.5, 0.15, 0.0); LANDMARK_COUNT];
    let mut put = |index: usize, x: f32, y: f32| {
        frame[index] = Landmark::new(x + dx, y + dy, 0.9);
    };
    put(NOSE, 0.5, 0.15);
    put(LEFT_SHOULDER, 0.42, 0.3);
    put(RIGHT_SHOULDER, 0.58, 0.3);
    put(LEFT_ELBOW, 0.41, 0.43);
    put(RIGHT_ELBOW, 0.59, 0.43);
    put(LEFT_WRIST, 0.40, 0.56);
    put(RIGHT_WRIST, 0.60, 0.56);
    put(LEFT_HIP, 0.45, 0.55);
    put(RIGHT_HIP, 0.55, 0.55);
    put(LEFT_KNEE, 0.45, 0.72);
    put(RIGHT_KNEE, 0.55, 0.72);

    let r = knee_degrees.to_radians();
    let (sx, sy) = (r.sin() * 0.18, -r.cos() * 0.18);
    put(LEFT_ANKLE, 0.45 + sx, 0.72 + sy);
    put(RIGHT_ANKLE, 0.55 + sx, 0.72 + sy);
    put(LEFT_HEEL, 0.44 + sx, 0.74 + sy);
    put(RIGHT_HEEL, 0.56 + sx, 0.74 + sy);
    put(LEFT_FOOT_INDEX, 0.46 + sx, 0.76 + sy);
    put(RIGHT_FOOT_INDEX, 0.54 + sx, 0.76 + sy);
    frame
}

fn standing() -> Vec<Landmark> {
    skeleton(180.0, 0.0, 0.0)
}

fn pipeline(kind: ActivityKind, config: AssessmentConfig) -> AssessmentPipeline {
    AssessmentPipeline::new(kind, config).expect("valid config")
}

fn run(pipeline: &mut AssessmentPipeline, frames: &[Vec<Landmark>]) -> Vec<f32> {
    let start = pipeline.frame_counts().0;
    frames
        .iter()
        .enumerate()
        .filter_map(|(i, frame)| {
            let ctx = FrameContext::at((start as usize + i) as f64 * FRAME_MS);
            pipeline.process_frame(frame, &ctx).event.map(|e| e.value)
        })
        .collect()
}

#[test]
fn squat_session_scores_endurance() {
    let mut squats = pipeline(ActivityKind::Squats, AssessmentConfig::default());
    let mut frames = Vec::new();
    for _ in 0..3 {
        for angle in [170.0, 140.0, 110.0, 85.0, 110.0, 140.0, 170.0] {
            frames.push(skeleton(angle, 0.0, 0.0));
        }
    }
    let depths = run(&mut squats, &frames);
    assert_eq!(depths.len(), 3);
    assert!(depths.iter().all(|d| *d > 60.0));

    let record = squats.finish();
    assert_eq!(record.reps, 3);
    assert_eq!(record.score_breakdown.module, ScoreModule::Endurance);
    assert_eq!(record.xp_earned, 30);
    assert!(record.score_breakdown.score > 0.0 && record.score_breakdown.score <= 100.0);
}

#[test]
fn half_squats_never_count() {
    let mut squats = pipeline(ActivityKind::Squats, AssessmentConfig::default());
    let frames: Vec<_> = (0..10)
        .flat_map(|_| [skeleton(170.0, 0.0, 0.0), skeleton(110.0, 0.0, 0.0)])
        .collect();
    assert!(run(&mut squats, &frames).is_empty());
    assert_eq!(squats.session().rep_count(), 0);
}

#[test]
fn vertical_jump_measures_height() {
    let config = AssessmentConfig::default();
    let calibration = config.calibration_frames as usize;
    let mut jump = pipeline(ActivityKind::VerticalJump, config);

    let mut frames = vec![standing(); calibration];
    for dy in [-0.05, -0.10, -0.15, -0.10, -0.05, 0.0] {
        frames.push(skeleton(180.0, 0.0, dy));
    }
    let heights = run(&mut jump, &frames);
    assert_eq!(heights.len(), 1);
    assert!((heights[0] - 37.5).abs() < 0.05);

    let record = jump.finish();
    assert_eq!(record.score_breakdown.module, ScoreModule::Strength);
    assert!((record.distance_cm.unwrap_or(0.0) - 37.5).abs() < 0.05);
}

#[test]
fn reaction_timeout_resolves_once() {
    let config = AssessmentConfig {
        reaction_rounds: 1,
        ..AssessmentConfig::default()
    };
    let mut reaction = pipeline(ActivityKind::Reaction, config);
    let frames = vec![standing(); 300];
    let events = run(&mut reaction, &frames);
    assert_eq!(events, vec![3000.0]);
    assert_eq!(reaction.session().phase(), Phase::Result);

    let record = reaction.finish();
    assert_eq!(record.score_breakdown.module, ScoreModule::Reaction);
    assert_eq!(record.score_breakdown.score, 0.0);
}

#[test]
fn validity_runs_alongside_detection() {
    let mut pushups = pipeline(ActivityKind::PushUps, AssessmentConfig::default());
    let outcome = pushups.process_frame(&standing(), &FrameContext::at(0.0));
    assert!(!outcome.validity.is_valid);
    assert!(outcome.validity.alerts.contains(&Alert::Malpractice));
    assert!(outcome.metrics.is_some());

    let cut = pushups.process_frame(&skeleton(180.0, 0.35, 0.0), &FrameContext::at(33.0));
    assert!(cut.validity.alerts.contains(&Alert::VideoCut));

    let short = pushups.process_frame(&standing()[..20], &FrameContext::at(66.0));
    assert!(short.metrics.is_none());
    assert_eq!(pushups.frame_counts(), (3, 1));
}

#[test]
fn unknown_selector_falls_back_to_squats() {
    let kind = ActivityKind::from_selector("underwater basket weaving");
    assert_eq!(kind, ActivityKind::Squats);
    let p = pipeline(kind, AssessmentConfig::default());
    assert_eq!(p.kind(), ActivityKind::Squats);
}

#[test]
fn finished_sessions_queue_while_offline() {
    let mut store = MemoryRecordStore::new(false);
    let records: Vec<SessionRecord> = [ActivityKind::Squats, ActivityKind::Sprint]
        .into_iter()
        .map(|kind| {
            let mut p = pipeline(kind, AssessmentConfig::default());
            run(&mut p, &vec![standing(); 10]);
            p.finish()
        })
        .collect();

    for record in records {
        store.store(record).expect("fresh id");
    }
    assert_eq!(store.pending().len(), 2);
    assert!(store.drain_queue().is_empty());

    store.set_online(true);
    let sent = store.drain_queue();
    assert_eq!(sent.len(), 2);
    for record in &sent {
        store.mark_transmitted(record.id).expect("stored id");
    }
    assert!(store.pending().is_empty());
}

#[test]
fn sessions_roll_up_into_composite() {
    use assess_web::scoring::{CompositeScore, ModuleScores};

    let breakdowns: Vec<_> = [ActivityKind::Squats, ActivityKind::Reaction]
        .into_iter()
        .map(|kind| {
            let mut p = pipeline(kind, AssessmentConfig::default());
            run(&mut p, &vec![standing(); 10]);
            p.finish().score_breakdown
        })
        .collect();

    let modules = ModuleScores::from_breakdowns(&breakdowns);
    assert_eq!(modules.get(ScoreModule::Speed), 0.0);
    let composite = CompositeScore::compute(modules, 10_000);
    assert!(composite.overall <= 100);
    assert_eq!(composite.percentile, 10);
}
