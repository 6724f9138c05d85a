//! Combat punch and kick detection
//!
//! Both detectors are idle → active → idle machines with a start
//! threshold stricter than the end threshold. An active strike that runs
//! past its duration ceiling resolves to "no event" instead of hanging.

use super::detector::*;
use crate::physics::SpeedTracker;
use crate::pose::NamedPose;

// ============================================================================
// PUNCH
// ============================================================================

/// Wrist speed (m/s) that starts a punch
pub const PUNCH_START_SPEED: f32 = 2.0;
/// Wrist speed (m/s) that ends a punch
pub const PUNCH_END_SPEED: f32 = 0.8;
/// Peak speed a punch must reach to count
pub const PUNCH_MIN_PEAK: f32 = 1.5;
/// Punches lasting this long are discarded
pub const PUNCH_MAX_DURATION_MS: f64 = 1000.0;
/// Peak speed scored as 100 form
const ELITE_PUNCH_SPEED: f32 = 10.0;

/// Which hand threw the strike
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub fn name(&self) -> &'static str {
        match self {
            Hand::Left => "LEFT",
            Hand::Right => "RIGHT",
        }
    }
}

#[derive(Clone, Debug)]
pub struct PunchDetector {
    phase: Phase,
    left: SpeedTracker,
    right: SpeedTracker,
    started_at: f64,
    peak_speed: f32,
    hand: Hand,
    /// Cleared by a timeout until the wrist slows down again
    armed: bool,
    best_peak: Option<f32>,
}

impl PunchDetector {
    pub fn new(meters_per_unit: f32) -> Self {
        Self {
            phase: Phase::Idle,
            left: SpeedTracker::new(meters_per_unit),
            right: SpeedTracker::new(meters_per_unit),
            started_at: 0.0,
            peak_speed: 0.0,
            hand: Hand::Right,
            armed: true,
            best_peak: None,
        }
    }

    pub fn best_peak(&self) -> Option<f32> {
        self.best_peak
    }

    pub fn advance(
        &self,
        left_wrist: (f32, f32),
        right_wrist: (f32, f32),
        timestamp_ms: f64,
    ) -> (Self, StepOutput) {
        let mut next = self.clone();
        let left_speed = next.left.update(left_wrist, timestamp_ms);
        let right_speed = next.right.update(right_wrist, timestamp_ms);
        let (speed, hand) = if left_speed > right_speed {
            (left_speed, Hand::Left)
        } else {
            (right_speed, Hand::Right)
        };
        let mut event = None;

        match self.phase {
            Phase::Idle if !self.armed => {
                next.armed = speed < PUNCH_END_SPEED;
            }
            Phase::Idle => {
                if speed > PUNCH_START_SPEED {
                    next.phase = Phase::Punching;
                    next.started_at = timestamp_ms;
                    next.peak_speed = speed;
                    next.hand = hand;
                }
            }
            Phase::Punching => {
                next.peak_speed = next.peak_speed.max(speed);
                let duration = timestamp_ms - next.started_at;

                if duration >= PUNCH_MAX_DURATION_MS {
                    log::debug!("punch timed out after {:.0}ms", duration);
                    next.phase = Phase::Idle;
                    next.armed = false;
                } else if speed < PUNCH_END_SPEED {
                    next.phase = Phase::Idle;
                    if next.peak_speed > PUNCH_MIN_PEAK {
                        let peak = next.peak_speed;
                        next.best_peak = Some(next.best_peak.map_or(peak, |b| b.max(peak)));
                        log::info!("{} punch: {:.2} m/s", next.hand.name(), peak);
                        event = Some(CompletedEvent {
                            label: "punch",
                            value: peak,
                            form_score: clamp_score(peak / ELITE_PUNCH_SPEED * 100.0),
                        });
                    }
                }
            }
            _ => next.phase = Phase::Idle,
        }

        let mut metrics = DisplayMetrics::new(next.phase).readout("speed", speed);
        if let Some(best) = next.best_peak {
            metrics = metrics.readout("bestSpeed", best);
        }

        (next, StepOutput { metrics, event })
    }
}

impl Detector for PunchDetector {
    fn phase(&self) -> Phase {
        self.phase
    }

    fn step(&self, pose: &NamedPose, ctx: &FrameContext) -> (Self, StepOutput) {
        self.advance(
            pose.left_wrist.position(),
            pose.right_wrist.position(),
            ctx.timestamp_ms,
        )
    }

    fn summarize(&self, summary: &mut SessionSummary) {
        summary.peak_velocity_mps = self.best_peak;
    }
}

// ============================================================================
// KICK
// ============================================================================

/// Ankle lift (fraction of body height) that starts a kick
pub const KICK_START_LIFT: f32 = 0.15;
/// Ankle lift that ends a kick
pub const KICK_END_LIFT: f32 = 0.08;
/// Peak lift a kick must reach to count
pub const KICK_MIN_PEAK: f32 = 0.10;
/// Kicks lasting this long are discarded
pub const KICK_MAX_DURATION_MS: f64 = 2000.0;
/// Baseline tracking rate while standing
const BASELINE_ALPHA: f32 = 0.1;
/// Body heights below this are treated as unmeasurable
const MIN_BODY_HEIGHT: f32 = 0.05;

#[derive(Clone, Debug)]
pub struct KickDetector {
    phase: Phase,
    /// Standing ankle height (image y) and nose-to-ankle height
    baseline: Option<(f32, f32)>,
    started_at: f64,
    peak_lift: f32,
    /// Cleared by a timeout until the leg comes back down
    armed: bool,
    best_lift: Option<f32>,
}

impl KickDetector {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            baseline: None,
            started_at: 0.0,
            peak_lift: 0.0,
            armed: true,
            best_lift: None,
        }
    }

    /// Best lift as a percentage of body height
    pub fn best_lift_pct(&self) -> Option<f32> {
        self.best_lift.map(|l| l * 100.0)
    }

    pub fn advance(
        &self,
        nose_y: f32,
        left_ankle_y: f32,
        right_ankle_y: f32,
        timestamp_ms: f64,
    ) -> (Self, StepOutput) {
        let mut next = self.clone();
        // Higher ankle has the smaller image y
        let ankle_y = left_ankle_y.min(right_ankle_y);

        let (floor_y, body_height) = match self.baseline {
            Some(b) => b,
            None => {
                let floor_y = left_ankle_y.max(right_ankle_y);
                let standing = (floor_y, floor_y - nose_y);
                next.baseline = Some(standing);
                standing
            }
        };

        let lift = if body_height > MIN_BODY_HEIGHT {
            ((floor_y - ankle_y) / body_height).max(0.0)
        } else {
            0.0
        };
        let mut event = None;

        match self.phase {
            Phase::Idle if !self.armed => {
                next.armed = lift < KICK_END_LIFT;
            }
            Phase::Idle => {
                if lift > KICK_START_LIFT {
                    next.phase = Phase::Kicking;
                    next.started_at = timestamp_ms;
                    next.peak_lift = lift;
                } else if lift < KICK_END_LIFT && self.baseline.is_some() {
                    let standing_y = left_ankle_y.max(right_ankle_y);
                    let height = standing_y - nose_y;
                    next.baseline = Some((
                        floor_y + (standing_y - floor_y) * BASELINE_ALPHA,
                        body_height + (height - body_height) * BASELINE_ALPHA,
                    ));
                }
            }
            Phase::Kicking => {
                next.peak_lift = next.peak_lift.max(lift);
                let duration = timestamp_ms - next.started_at;

                if duration >= KICK_MAX_DURATION_MS {
                    log::debug!("kick timed out after {:.0}ms", duration);
                    next.phase = Phase::Idle;
                    next.armed = false;
                } else if lift < KICK_END_LIFT {
                    next.phase = Phase::Idle;
                    if next.peak_lift > KICK_MIN_PEAK {
                        let peak = next.peak_lift;
                        next.best_lift = Some(next.best_lift.map_or(peak, |b| b.max(peak)));
                        log::info!("kick: {:.0}% of body height", peak * 100.0);
                        event = Some(CompletedEvent {
                            label: "kick",
                            value: peak * 100.0,
                            form_score: clamp_score(peak * 200.0),
                        });
                    }
                }
            }
            _ => next.phase = Phase::Idle,
        }

        let mut metrics = DisplayMetrics::new(next.phase).readout("liftPct", lift * 100.0);
        if let Some(best) = next.best_lift_pct() {
            metrics = metrics.readout("bestLiftPct", best);
        }

        (next, StepOutput { metrics, event })
    }
}

impl Default for KickDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for KickDetector {
    fn phase(&self) -> Phase {
        self.phase
    }

    fn step(&self, pose: &NamedPose, ctx: &FrameContext) -> (Self, StepOutput) {
        self.advance(
            pose.nose.y,
            pose.left_ankle.y,
            pose.right_ankle.y,
            ctx.timestamp_ms,
        )
    }

    fn summarize(&self, summary: &mut SessionSummary) {
        summary.peak_lift_pct = self.best_lift_pct();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: f64 = 33.0;

    fn punch_run(xs: &[f32]) -> (PunchDetector, Vec<CompletedEvent>) {
        let mut detector = PunchDetector::new(2.0);
        let mut events = Vec::new();
        for (i, &x) in xs.iter().enumerate() {
            let (next, out) = detector.advance((0.4, 0.5), (x, 0.5), i as f64 * FRAME_MS);
            events.extend(out.event);
            detector = next;
        }
        (detector, events)
    }

    #[test]
    fn test_punch_reports_peak_velocity() {
        // 0.066 units per 33ms at 2 m/unit = 4 m/s
        let (detector, events) = punch_run(&[0.6, 0.6, 0.666, 0.732, 0.74, 0.742]);
        assert_eq!(events.len(), 1);
        assert!((events[0].value - 4.0).abs() < 0.01);
        assert_eq!(detector.phase(), Phase::Idle);
        assert!(detector.best_peak().is_some());
    }

    #[test]
    fn test_slow_reach_is_not_a_punch() {
        let xs: Vec<f32> = (0..20).map(|i| 0.6 + i as f32 * 0.01).collect();
        let (_, events) = punch_run(&xs);
        assert!(events.is_empty());
    }

    #[test]
    fn test_endless_punch_times_out_without_event() {
        // Keeps moving fast for well over a second
        let xs: Vec<f32> = (0..40).map(|i| if i % 2 == 0 { 0.4 } else { 0.5 }).collect();
        let (detector, events) = punch_run(&xs);
        assert!(events.is_empty());
        assert_eq!(detector.phase(), Phase::Idle);
    }

    fn kick_run(frames: &[f32]) -> (KickDetector, Vec<CompletedEvent>) {
        let mut detector = KickDetector::new();
        let mut events = Vec::new();
        for (i, &right_ankle) in frames.iter().enumerate() {
            let (next, out) = detector.advance(0.1, 0.9, right_ankle, i as f64 * FRAME_MS);
            events.extend(out.event);
            detector = next;
        }
        (detector, events)
    }

    #[test]
    fn test_kick_reports_lift_percentage() {
        // Body height 0.8, lift 0.24 → 30%
        let (detector, events) = kick_run(&[0.9, 0.9, 0.75, 0.66, 0.8, 0.88, 0.9]);
        assert_eq!(events.len(), 1);
        assert!((events[0].value - 30.0).abs() < 0.01);
        assert!((events[0].form_score - 60.0).abs() < 0.01);
        assert_eq!(detector.phase(), Phase::Idle);
    }

    #[test]
    fn test_knee_raise_below_start_is_ignored() {
        let (_, events) = kick_run(&[0.9, 0.85, 0.82, 0.85, 0.9]);
        assert!(events.is_empty());
    }

    #[test]
    fn test_held_leg_times_out() {
        let mut frames = vec![0.9];
        frames.extend(std::iter::repeat(0.7).take(70));
        frames.push(0.9);
        let (_, events) = kick_run(&frames);
        assert!(events.is_empty());
    }
}
