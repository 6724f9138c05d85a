//! Velocity tracking and direction-reversal counting
//!
//! Frame-to-frame displacement scaled by the real elapsed time between
//! frames, plus a dead-zone reversal counter for stride/direction events.

use super::points::distance;

/// Movement smaller than this (normalized units) never counts as a reversal
pub const DEAD_ZONE: f32 = 0.01;

/// Speed tracker for a single point, in metres per second
#[derive(Clone, Debug)]
pub struct SpeedTracker {
    /// Previous position and its timestamp (ms)
    last: Option<((f32, f32), f64)>,
    /// Metres per normalized image unit
    meters_per_unit: f32,
}

impl SpeedTracker {
    pub fn new(meters_per_unit: f32) -> Self {
        Self {
            last: None,
            meters_per_unit,
        }
    }

    /// Update with new position, returns speed in m/s
    ///
    /// Returns 0 on the first sample and whenever the clock did not advance.
    pub fn update(&mut self, pos: (f32, f32), timestamp_ms: f64) -> f32 {
        let speed = match self.last {
            Some((prev, prev_t)) if timestamp_ms > prev_t => {
                let dt_seconds = ((timestamp_ms - prev_t) / 1000.0) as f32;
                distance(prev, pos) * self.meters_per_unit / dt_seconds
            }
            _ => 0.0,
        };
        self.last = Some((pos, timestamp_ms));
        speed
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}

/// Direction of travel along one axis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Increasing,
    Decreasing,
}

/// Counts sign reversals of a 1-D signal beyond a dead zone
///
/// The signal has to move more than `DEAD_ZONE` back from its last
/// extreme before a reversal is registered, so tracking jitter at a
/// turning point is counted once.
#[derive(Clone, Debug, Default)]
pub struct ReversalCounter {
    /// Furthest value reached in the current direction
    extreme: Option<f32>,
    direction: Option<Direction>,
    reversals: u32,
}

impl ReversalCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a sample, returns true if it completed a reversal
    pub fn update(&mut self, value: f32) -> bool {
        let extreme = match self.extreme {
            Some(e) => e,
            None => {
                self.extreme = Some(value);
                return false;
            }
        };

        match self.direction {
            None => {
                if value - extreme > DEAD_ZONE {
                    self.direction = Some(Direction::Increasing);
                    self.extreme = Some(value);
                } else if extreme - value > DEAD_ZONE {
                    self.direction = Some(Direction::Decreasing);
                    self.extreme = Some(value);
                }
                false
            }
            Some(Direction::Increasing) => {
                if value > extreme {
                    self.extreme = Some(value);
                    false
                } else if extreme - value > DEAD_ZONE {
                    self.direction = Some(Direction::Decreasing);
                    self.extreme = Some(value);
                    self.reversals += 1;
                    true
                } else {
                    false
                }
            }
            Some(Direction::Decreasing) => {
                if value < extreme {
                    self.extreme = Some(value);
                    false
                } else if value - extreme > DEAD_ZONE {
                    self.direction = Some(Direction::Increasing);
                    self.extreme = Some(value);
                    self.reversals += 1;
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn count(&self) -> u32 {
        self.reversals
    }
}
