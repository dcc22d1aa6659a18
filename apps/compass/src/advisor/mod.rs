// Advisor: the calling layer around the scorer.
// Ranks catalog roles for a student, builds dashboards, serves roadmaps and progress.

pub mod handlers;
pub mod models;
