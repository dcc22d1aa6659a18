use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Specialization recorded for a student who has not picked one yet.
pub const NOT_SET: &str = "Not Set";
pub const FIRST_JOB: &str = "First Job";
pub const THREE_MONTHS: &str = "3 months";
pub const SIX_MONTHS: &str = "6 months";
pub const DEFAULT_CURRENT_YEAR: i32 = 3;

/// Specializations a student can choose from.
pub const SPECIALIZATIONS: &[&str] = &[
    "Software Engineering",
    "AI & ML",
    "Cloud Computing",
    "Data Science",
    "Cyber Security",
    "Computer Networks",
    "Mobile Computing",
];

/// Self-reported skill level. Unknown labels, and non-string values such as
/// `null` or numbers, collapse to `Beginner`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum Proficiency {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Proficiency {
    pub fn parse(level: &str) -> Self {
        match level {
            "Advanced" => Proficiency::Advanced,
            "Intermediate" => Proficiency::Intermediate,
            _ => Proficiency::Beginner,
        }
    }

    /// Fraction of a required skill's points awarded at this level.
    pub fn weight(self) -> f64 {
        match self {
            Proficiency::Advanced => 1.0,
            Proficiency::Intermediate => 0.8,
            Proficiency::Beginner => 0.5,
        }
    }

    /// Suffix shown next to a matched skill, e.g. `Python (Advanced ✓)`.
    pub fn annotation(self) -> &'static str {
        match self {
            Proficiency::Advanced => "Advanced ✓",
            Proficiency::Intermediate => "Good ✓",
            Proficiency::Beginner => "Basic",
        }
    }
}

impl From<serde_json::Value> for Proficiency {
    fn from(level: serde_json::Value) -> Self {
        level.as_str().map(Proficiency::parse).unwrap_or_default()
    }
}

/// A student's profile as seen by the scorer. All defaults are already applied.
///
/// Deserializing goes through [`ProfileInput`], so partial JSON is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ProfileInput")]
pub struct UserProfile {
    pub name: String,
    pub specialization: String,
    pub skills: BTreeMap<String, Proficiency>,
    pub interest_areas: BTreeSet<String>,
    pub career_goal: String,
    pub timeline: String,
    pub current_year: i32,
}

impl UserProfile {
    pub fn has_skills(&self) -> bool {
        !self.skills.is_empty()
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        ProfileInput::default().into_profile()
    }
}

/// Raw profile as supplied by a caller; every field may be missing or null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileInput {
    pub name: Option<String>,
    pub specialization: Option<String>,
    pub skills: Option<BTreeMap<String, Proficiency>>,
    pub interest_areas: Option<Vec<String>>,
    pub career_goal: Option<String>,
    pub timeline: Option<String>,
    pub current_year: Option<i32>,
}

impl ProfileInput {
    /// Applies the scoring defaults: goal "First Job", timeline "6 months", year 3.
    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            name: self.name.unwrap_or_default(),
            specialization: self.specialization.unwrap_or_else(|| NOT_SET.to_string()),
            skills: self.skills.unwrap_or_default(),
            interest_areas: self.interest_areas.unwrap_or_default().into_iter().collect(),
            career_goal: self.career_goal.unwrap_or_else(|| FIRST_JOB.to_string()),
            timeline: self.timeline.unwrap_or_else(|| SIX_MONTHS.to_string()),
            current_year: self.current_year.unwrap_or(DEFAULT_CURRENT_YEAR),
        }
    }
}

impl From<ProfileInput> for UserProfile {
    fn from(input: ProfileInput) -> Self {
        input.into_profile()
    }
}
