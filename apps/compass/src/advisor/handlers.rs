use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::advisor::models::{
    ProgressResponse, RecommendationResponse, RoadmapResponse, RoleRecommendation,
    RoleScoreSummary, StudentSummary,
};
use crate::catalog::CatalogEntry;
use crate::errors::AppError;
use crate::models::profile::{UserProfile, SPECIALIZATIONS};
use crate::models::role::RoleDefinition;
use crate::roadmap::progress::RoadmapProgress;
use crate::scoring::{rank_roles, CompatibilityResult};
use crate::state::AppState;

fn find_entry<'a>(state: &'a AppState, role_name: &str) -> Result<&'a CatalogEntry, AppError> {
    state
        .catalog
        .find(role_name)
        .ok_or_else(|| AppError::NotFound(format!("Role '{role_name}' not found")))
}

/// Top `config.top_roles` roles for `profile`, best first.
pub fn recommend(state: &AppState, profile: &UserProfile) -> RecommendationResponse {
    let ranked = rank_roles(state.scorer.as_ref(), profile, state.catalog.roles());
    info!(
        "Scored {} roles for '{}' (best: {})",
        ranked.len(),
        profile.name,
        ranked
            .first()
            .map(|r| format!("{} {}", r.role.role_name, r.compatibility.score))
            .unwrap_or_else(|| "none".to_string())
    );

    let roles = ranked
        .into_iter()
        .take(state.config.top_roles)
        .map(RoleRecommendation::from)
        .collect();

    RecommendationResponse {
        user_name: profile.name.clone(),
        roles,
    }
}

/// Full breakdown for a single named role.
pub fn score_role(
    state: &AppState,
    profile: &UserProfile,
    role_name: &str,
) -> Result<CompatibilityResult, AppError> {
    let entry = find_entry(state, role_name)?;
    let result = state.scorer.score(profile, &entry.role);
    debug!(role = role_name, score = result.score, grade = %result.grade, "role scored");
    Ok(result)
}

pub fn role_details(state: &AppState, role_name: &str) -> Result<RoleDefinition, AppError> {
    Ok(find_entry(state, role_name)?.role.clone())
}

/// Role plus its roadmap, with resource links filled in for every topic.
pub fn roadmap(state: &AppState, role_name: &str) -> Result<RoadmapResponse, AppError> {
    let entry = find_entry(state, role_name)?;
    Ok(RoadmapResponse {
        role: entry.role.clone(),
        roadmap: entry.roadmap.with_resource_links(),
    })
}

/// Top roles per student. Students without any skills are skipped.
pub fn dashboard(state: &AppState, students: &[UserProfile]) -> Vec<StudentSummary> {
    let summaries: Vec<StudentSummary> = students
        .iter()
        .filter(|student| {
            if !student.has_skills() {
                debug!("Skipping '{}': no skills on profile", student.name);
            }
            student.has_skills()
        })
        .map(|student| {
            let roles = rank_roles(state.scorer.as_ref(), student, state.catalog.roles())
                .into_iter()
                .take(state.config.dashboard_top_roles)
                .map(|ranked| RoleScoreSummary {
                    name: ranked.role.role_name.clone(),
                    score: ranked.compatibility.score,
                })
                .collect();

            StudentSummary {
                name: student.name.clone(),
                career_goal: student.career_goal.clone(),
                current_year: student.current_year,
                specialization: student.specialization.clone(),
                roles,
                skills: student.skills.keys().cloned().collect(),
                interests: student.interest_areas.iter().cloned().collect(),
            }
        })
        .collect();

    info!(
        "Dashboard built for {} of {} students",
        summaries.len(),
        students.len()
    );
    summaries
}

pub fn progress(
    state: &AppState,
    role_name: &str,
    completed: &BTreeSet<u32>,
) -> Result<ProgressResponse, AppError> {
    let entry = find_entry(state, role_name)?;
    Ok(ProgressResponse {
        role_name: entry.role.role_name.clone(),
        progress: RoadmapProgress::compute(&entry.roadmap, completed),
    })
}

pub fn specializations() -> Vec<String> {
    SPECIALIZATIONS.iter().map(|s| s.to_string()).collect()
}
