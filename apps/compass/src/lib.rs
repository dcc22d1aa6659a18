//! Career Compass — compatibility scoring between student profiles and career roles.
//!
//! The core is [`scoring::score_compatibility`], a pure function producing a
//! bounded 0–100 score, a letter grade and a per-factor breakdown. Around it sit
//! the role catalog, learning roadmaps and the advisor operations used by the CLI.

pub mod advisor;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod models;
pub mod roadmap;
pub mod scoring;
pub mod state;

pub use catalog::RoleCatalog;
pub use errors::AppError;
pub use models::profile::{Proficiency, ProfileInput, UserProfile};
pub use models::role::RoleDefinition;
pub use scoring::{score_compatibility, CompatibilityResult, CompatibilityScorer, Grade};
pub use state::AppState;
