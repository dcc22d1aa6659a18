// Compatibility scoring engine.
// Pure computation only: no I/O, no logging, no shared state.

pub mod compatibility;
pub mod grade;
pub mod ranking;

pub use compatibility::{
    score_compatibility, CompatibilityResult, CompatibilityScorer, MatchedSkill, ScoreBreakdown,
    WeightedScorer,
};
pub use grade::Grade;
pub use ranking::{rank_roles, RankedRole};
