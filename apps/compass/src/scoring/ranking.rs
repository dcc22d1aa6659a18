use crate::models::profile::UserProfile;
use crate::models::role::RoleDefinition;
use crate::scoring::compatibility::{CompatibilityResult, CompatibilityScorer};

/// A role paired with its compatibility result for one profile.
#[derive(Debug, Clone)]
pub struct RankedRole<'a> {
    pub role: &'a RoleDefinition,
    pub compatibility: CompatibilityResult,
}

/// Scores every role and sorts descending by score.
///
/// The sort is stable, so equal scores keep their input order.
pub fn rank_roles<'a, I>(
    scorer: &dyn CompatibilityScorer,
    profile: &UserProfile,
    roles: I,
) -> Vec<RankedRole<'a>>
where
    I: IntoIterator<Item = &'a RoleDefinition>,
{
    let mut ranked: Vec<RankedRole<'a>> = roles
        .into_iter()
        .map(|role| RankedRole {
            role,
            compatibility: scorer.score(profile, role),
        })
        .collect();
    ranked.sort_by(|a, b| b.compatibility.score.cmp(&a.compatibility.score));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::Proficiency;
    use crate::models::role::{DemandLevel, Difficulty, ExperienceRequirement, GrowthRate};
    use crate::scoring::compatibility::WeightedScorer;

    fn make_role(name: &str, tech_stack: &[&str]) -> RoleDefinition {
        RoleDefinition {
            role_name: name.to_string(),
            category: "Cloud Computing".to_string(),
            primary_specialization: "Cloud Computing".to_string(),
            related_specializations: vec![],
            tech_stack: tech_stack.iter().map(|s| s.to_string()).collect(),
            demand_level: DemandLevel::High,
            growth_rate: GrowthRate::Steady,
            entry_friendly: true,
            remote_friendly: false,
            experience_required: ExperienceRequirement::NotRequired,
            difficulty: Difficulty::Intermediate,
            description: String::new(),
            salary_range: String::new(),
            avg_salary: 0,
            related_internships: vec![],
            transferable_skills: true,
            specialization_heavy: false,
        }
    }

    #[test]
    fn test_roles_sorted_descending() {
        let roles = vec![
            make_role("Low", &["Go", "Kotlin", "Swift"]),
            make_role("High", &["Python"]),
        ];
        let mut profile = UserProfile::default();
        profile
            .skills
            .insert("Python".to_string(), Proficiency::Advanced);

        let ranked = rank_roles(&WeightedScorer, &profile, &roles);
        assert_eq!(ranked[0].role.role_name, "High");
        assert_eq!(ranked[1].role.role_name, "Low");
        assert!(ranked[0].compatibility.score > ranked[1].compatibility.score);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let roles = vec![
            make_role("First", &[]),
            make_role("Second", &[]),
            make_role("Third", &[]),
        ];
        let ranked = rank_roles(&WeightedScorer, &UserProfile::default(), &roles);
        let names: Vec<_> = ranked.iter().map(|r| r.role.role_name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_empty_catalog_ranks_nothing() {
        let roles: Vec<RoleDefinition> = vec![];
        let ranked = rank_roles(&WeightedScorer, &UserProfile::default(), &roles);
        assert!(ranked.is_empty());
    }
}
