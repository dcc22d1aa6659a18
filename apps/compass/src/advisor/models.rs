use serde::{Deserialize, Serialize};

use crate::models::role::{DemandLevel, Difficulty, RoleDefinition};
use crate::roadmap::progress::RoadmapProgress;
use crate::roadmap::Roadmap;
use crate::scoring::{CompatibilityResult, RankedRole};

/// One entry of a student's recommendation list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRecommendation {
    pub role_name: String,
    pub category: String,
    pub description: String,
    pub salary_range: String,
    pub demand: DemandLevel,
    pub difficulty: Difficulty,
    pub remote_friendly: bool,
    pub compatibility: CompatibilityResult,
}

impl From<RankedRole<'_>> for RoleRecommendation {
    fn from(ranked: RankedRole<'_>) -> Self {
        let role = ranked.role;
        Self {
            role_name: role.role_name.clone(),
            category: role.category.clone(),
            description: role.description.clone(),
            salary_range: role.salary_range.clone(),
            demand: role.demand_level,
            difficulty: role.difficulty,
            remote_friendly: role.remote_friendly,
            compatibility: ranked.compatibility,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub user_name: String,
    pub roles: Vec<RoleRecommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleScoreSummary {
    pub name: String,
    pub score: u32,
}

/// Per-student row of a dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentSummary {
    pub name: String,
    pub career_goal: String,
    pub current_year: i32,
    pub specialization: String,
    pub roles: Vec<RoleScoreSummary>,
    /// Skill names in sorted order.
    pub skills: Vec<String>,
    /// Interest areas, sorted and de-duplicated.
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapResponse {
    pub role: RoleDefinition,
    pub roadmap: Roadmap,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub role_name: String,
    #[serde(flatten)]
    pub progress: RoadmapProgress,
}
