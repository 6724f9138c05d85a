//! Score aggregation
//!
//! Re-exports only. All logic in submodules.

pub mod badges;
pub mod benchmarks;
pub mod composite;
pub mod formulas;
pub mod progression;
pub mod session;

pub use badges::{evaluate_badges, Badge, StatsSnapshot, BADGES};
pub use benchmarks::{benchmark_band, sprint_benchmark, Benchmark, BenchmarkBand, T_TEST};
pub use composite::{national_rank, overall_score, percentile, CompositeScore, ModuleScores};
pub use formulas::{
    accuracy_score, beep_score, consistency, fatigue_rate, jump_power, mean_score, pushup_score,
    reaction_score, sprint_score,
};
pub use progression::{level_for, xp_for_session, LevelProgress, Progression};
pub use session::{score_session, ScoreBreakdown};
