//! Benchmark times for the timed tests

use serde::Serialize;

use crate::activity::clamp_score;
use crate::config::SprintDistance;

/// Named performance tier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BenchmarkBand {
    Elite,
    Good,
    Average,
    Poor,
    BelowPoor,
}

impl BenchmarkBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            BenchmarkBand::Elite => "elite",
            BenchmarkBand::Good => "good",
            BenchmarkBand::Average => "average",
            BenchmarkBand::Poor => "poor",
            BenchmarkBand::BelowPoor => "belowPoor",
        }
    }
}

/// Upper time bound (seconds) of each band, lower is better
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Benchmark {
    pub elite: f32,
    pub good: f32,
    pub average: f32,
    pub poor: f32,
}

pub const SPRINT_30M: Benchmark = Benchmark {
    elite: 4.0,
    good: 4.4,
    average: 4.8,
    poor: 5.4,
};

pub const SPRINT_50M: Benchmark = Benchmark {
    elite: 6.0,
    good: 6.6,
    average: 7.2,
    poor: 8.0,
};

pub const SPRINT_100M: Benchmark = Benchmark {
    elite: 11.0,
    good: 12.5,
    average: 14.0,
    poor: 16.0,
};

/// T-test agility drill
pub const T_TEST: Benchmark = Benchmark {
    elite: 9.5,
    good: 10.5,
    average: 11.5,
    poor: 12.5,
};

pub fn sprint_benchmark(distance: SprintDistance) -> Benchmark {
    match distance {
        SprintDistance::Meters30 => SPRINT_30M,
        SprintDistance::Meters50 => SPRINT_50M,
        SprintDistance::Meters100 => SPRINT_100M,
    }
}

impl Benchmark {
    pub fn band(&self, time_s: f32) -> BenchmarkBand {
        if time_s <= self.elite {
            BenchmarkBand::Elite
        } else if time_s <= self.good {
            BenchmarkBand::Good
        } else if time_s <= self.average {
            BenchmarkBand::Average
        } else if time_s <= self.poor {
            BenchmarkBand::Poor
        } else {
            BenchmarkBand::BelowPoor
        }
    }

    /// Piecewise-linear score through the band boundaries
    ///
    /// elite → 100, good → 80, average → 60, poor → 40, then down to 0
    /// at one and a half times the poor time.
    pub fn time_score(&self, time_s: f32) -> f32 {
        let knots = [
            (self.elite, 100.0),
            (self.good, 80.0),
            (self.average, 60.0),
            (self.poor, 40.0),
            (self.poor * 1.5, 0.0),
        ];
        if time_s <= knots[0].0 {
            return 100.0;
        }
        for pair in knots.windows(2) {
            let ((t0, s0), (t1, s1)) = (pair[0], pair[1]);
            if time_s <= t1 {
                let f = (time_s - t0) / (t1 - t0);
                return clamp_score(s0 + (s1 - s0) * f);
            }
        }
        0.0
    }
}

/// Band for a time against the given benchmark
pub fn benchmark_band(benchmark: &Benchmark, time_s: f32) -> BenchmarkBand {
    benchmark.band(time_s)
}
