use serde::{Deserialize, Serialize};

use crate::models::deserialize_list;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandLevel {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthRate {
    Steady,
    Fast,
    #[serde(rename = "Very Fast")]
    VeryFast,
}

impl GrowthRate {
    pub fn is_fast(self) -> bool {
        matches!(self, GrowthRate::Fast | GrowthRate::VeryFast)
    }
}

/// How much prior work experience a role expects.
///
/// `Preferred` appears in catalog data alongside the three canonical levels;
/// only `Required` affects scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceRequirement {
    Required,
    Preferred,
    #[serde(rename = "Some preferred")]
    SomePreferred,
    #[serde(rename = "Not required")]
    NotRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// A career role in the catalog. Immutable once loaded.
///
/// `related_specializations`, `tech_stack` and `related_internships` accept
/// either a JSON list or a comma-delimited string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleDefinition {
    pub role_name: String,
    pub category: String,
    pub primary_specialization: String,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub related_specializations: Vec<String>,
    /// Required skills, in the order they are checked.
    #[serde(default, deserialize_with = "deserialize_list")]
    pub tech_stack: Vec<String>,
    pub demand_level: DemandLevel,
    pub growth_rate: GrowthRate,
    pub entry_friendly: bool,
    pub remote_friendly: bool,
    pub experience_required: ExperienceRequirement,
    pub difficulty: Difficulty,

    // Descriptive fields, shown to students but never scored.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub salary_range: String,
    #[serde(default)]
    pub avg_salary: u32,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub related_internships: Vec<String>,
    #[serde(default = "default_true")]
    pub transferable_skills: bool,
    #[serde(default)]
    pub specialization_heavy: bool,
}

fn default_true() -> bool {
    true
}

impl RoleDefinition {
    pub fn is_related_specialization(&self, specialization: &str) -> bool {
        self.related_specializations
            .iter()
            .any(|s| s == specialization)
    }
}
