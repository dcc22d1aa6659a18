//! Compatibility scoring — measures how well a student profile fits a career role.
//!
//! Five additive factors plus bonuses minus penalties, clamped to 0–100:
//!
//! | factor          | max | floor |
//! |-----------------|-----|-------|
//! | specialization  | 30  | 5     |
//! | skills          | 45  | 0     |
//! | interest        | 20  | 5     |
//! | goal / timeline | 5   | 1     |
//!
//! Bonuses add up to 10 under the current rule set; that ceiling is not clamped.

use serde::{Deserialize, Serialize};

use crate::models::profile::{Proficiency, UserProfile, FIRST_JOB, SIX_MONTHS, THREE_MONTHS};
use crate::models::role::{DemandLevel, Difficulty, ExperienceRequirement, RoleDefinition};
use crate::scoring::grade::Grade;

const SPECIALIZATION_EXACT: u32 = 30;
const SPECIALIZATION_RELATED: u32 = 15;
const SPECIALIZATION_FLOOR: u32 = 5;

const SKILLS_MAX: u32 = 45;

const INTEREST_EXACT: u32 = 20;
const INTEREST_RELATED: u32 = 10;
const INTEREST_FLOOR: u32 = 5;

const GOALS_MAX: u32 = 5;
const FIRST_JOB_POINTS: u32 = 3;
const TIMELINE_FIT_POINTS: u32 = 2;
const TIMELINE_STRETCH_POINTS: u32 = 1;

const DEMAND_BONUS: u32 = 3;
const GROWTH_BONUS: u32 = 2;
const REMOTE_BONUS: u32 = 2;
const EARLY_CAREER_BONUS: u32 = 3;
const EARLY_CAREER_MAX_YEAR: i32 = 2;

const MISSING_SKILLS_PENALTY: u32 = 5;
const MISSING_SKILLS_THRESHOLD: usize = 3;
const EXPERIENCE_PENALTY: u32 = 3;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// A required skill covered by one of the student's skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedSkill {
    pub required_skill: String,
    pub user_skill: String,
    pub proficiency: Proficiency,
    /// Display form, e.g. `Python (Advanced ✓)`.
    pub label: String,
}

/// Per-factor explanation of a compatibility score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub specialization: u32,
    pub specialization_reason: String,
    pub skills: u32,
    pub skills_reason: String,
    pub matched_skills: Vec<MatchedSkill>,
    pub missing_skills: Vec<String>,
    pub interest: u32,
    pub interest_reason: String,
    pub goals: u32,
    pub goals_reason: String,
    pub bonuses: u32,
    pub bonus_list: Vec<String>,
    pub penalties: u32,
    pub penalty_list: Vec<String>,
}

/// Full result of scoring one profile against one role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub score: u32, // 0 – 100
    pub grade: Grade,
    pub match_level: String,
    pub breakdown: ScoreBreakdown,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The compatibility scorer trait. Callers hold it as `Arc<dyn CompatibilityScorer>`
/// so the scoring backend can be swapped without touching them.
///
/// Implementations must be total: every profile/role pair yields a result.
pub trait CompatibilityScorer: Send + Sync {
    fn score(&self, profile: &UserProfile, role: &RoleDefinition) -> CompatibilityResult;
}

/// Default multi-factor scorer. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedScorer;

impl CompatibilityScorer for WeightedScorer {
    fn score(&self, profile: &UserProfile, role: &RoleDefinition) -> CompatibilityResult {
        score_compatibility(profile, role)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores `profile` against `role`. Pure and deterministic.
pub fn score_compatibility(profile: &UserProfile, role: &RoleDefinition) -> CompatibilityResult {
    let (specialization, specialization_reason) = specialization_factor(profile, role);
    let skills = skill_factor(profile, role);
    let (interest, interest_reason) = interest_factor(profile, role);
    let (goals, goals_reason) = goal_factor(profile, role);
    let bonuses = collect_bonuses(profile, role);
    let penalties = collect_penalties(role, skills.missing.len());

    let raw = i64::from(specialization)
        + i64::from(skills.points)
        + i64::from(interest)
        + i64::from(goals)
        + i64::from(bonuses.points)
        - i64::from(penalties.points);
    let score = u32::try_from(raw.clamp(0, 100)).unwrap_or(0);
    let grade = Grade::from_score(score);

    CompatibilityResult {
        score,
        grade,
        match_level: grade.match_level().to_string(),
        breakdown: ScoreBreakdown {
            specialization,
            specialization_reason,
            skills: skills.points,
            skills_reason: skills.reason,
            matched_skills: skills.matched,
            missing_skills: skills.missing,
            interest,
            interest_reason,
            goals,
            goals_reason,
            bonuses: bonuses.points,
            bonus_list: bonuses.reasons,
            penalties: penalties.points,
            penalty_list: penalties.reasons,
        },
    }
}

fn specialization_factor(profile: &UserProfile, role: &RoleDefinition) -> (u32, String) {
    let spec = &profile.specialization;
    if *spec == role.primary_specialization {
        (SPECIALIZATION_EXACT, format!("Perfect match for {spec}"))
    } else if role.is_related_specialization(spec) {
        (SPECIALIZATION_RELATED, format!("Good match for {spec}"))
    } else {
        (
            SPECIALIZATION_FLOOR,
            "Can transition to this role".to_string(),
        )
    }
}

struct SkillFactor {
    points: u32,
    reason: String,
    matched: Vec<MatchedSkill>,
    missing: Vec<String>,
}

/// Bidirectional case-insensitive substring match against each required skill.
/// User skills are visited in key order; the first hit wins.
fn skill_factor(profile: &UserProfile, role: &RoleDefinition) -> SkillFactor {
    let required = &role.tech_stack;
    if required.is_empty() {
        return SkillFactor {
            points: 0,
            reason: "No required skills listed for this role".to_string(),
            matched: vec![],
            missing: vec![],
        };
    }

    let skill_value = f64::from(SKILLS_MAX) / required.len() as f64;
    let mut raw = 0.0_f64;
    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for req_skill in required {
        let req_lower = req_skill.to_lowercase();
        let hit = profile.skills.iter().find(|(user_skill, _)| {
            let user_lower = user_skill.to_lowercase();
            req_lower.contains(&user_lower) || user_lower.contains(&req_lower)
        });

        match hit {
            Some((user_skill, &proficiency)) => {
                raw += skill_value * proficiency.weight();
                matched.push(MatchedSkill {
                    required_skill: req_skill.clone(),
                    user_skill: user_skill.clone(),
                    proficiency,
                    label: format!("{user_skill} ({})", proficiency.annotation()),
                });
            }
            None => missing.push(req_skill.clone()),
        }
    }

    let points = raw.round().clamp(0.0, f64::from(SKILLS_MAX)) as u32;
    let reason = format!(
        "Matched {} of {} required skills",
        matched.len(),
        required.len()
    );

    SkillFactor {
        points,
        reason,
        matched,
        missing,
    }
}

fn interest_factor(profile: &UserProfile, role: &RoleDefinition) -> (u32, String) {
    let interests = &profile.interest_areas;
    if interests.contains(&role.category) {
        (
            INTEREST_EXACT,
            format!("Perfect match with your {} interest", role.category),
        )
    } else if interests
        .iter()
        .any(|interest| role.category.contains(interest.as_str()))
    {
        (INTEREST_RELATED, "Related to your interests".to_string())
    } else {
        (
            INTEREST_FLOOR,
            "Good career exploration opportunity".to_string(),
        )
    }
}

fn goal_factor(profile: &UserProfile, role: &RoleDefinition) -> (u32, String) {
    let mut points = 0;
    let mut reasons = Vec::new();

    if profile.career_goal == FIRST_JOB && role.entry_friendly {
        points += FIRST_JOB_POINTS;
        reasons.push("Entry-friendly role suits a first job".to_string());
    }

    let timeline = profile.timeline.as_str();
    let fits_timeline = match timeline {
        THREE_MONTHS => role.difficulty == Difficulty::Beginner,
        SIX_MONTHS => matches!(
            role.difficulty,
            Difficulty::Beginner | Difficulty::Intermediate
        ),
        _ => false,
    };
    if fits_timeline {
        points += TIMELINE_FIT_POINTS;
        reasons.push(format!("Achievable within {timeline}"));
    } else {
        points += TIMELINE_STRETCH_POINTS;
        reasons.push(format!("May need longer than {timeline}"));
    }

    (points.min(GOALS_MAX), reasons.join("; "))
}

struct Adjustment {
    points: u32,
    reasons: Vec<String>,
}

impl Adjustment {
    fn new() -> Self {
        Self {
            points: 0,
            reasons: Vec::new(),
        }
    }

    fn apply(&mut self, points: u32, reason: String) {
        self.points += points;
        self.reasons.push(reason);
    }
}

fn collect_bonuses(profile: &UserProfile, role: &RoleDefinition) -> Adjustment {
    let mut bonus = Adjustment::new();
    if role.demand_level == DemandLevel::VeryHigh {
        bonus.apply(
            DEMAND_BONUS,
            format!("🔥 Very high market demand (+{DEMAND_BONUS})"),
        );
    }
    if role.growth_rate.is_fast() {
        bonus.apply(
            GROWTH_BONUS,
            format!("🚀 Fast growing field (+{GROWTH_BONUS})"),
        );
    }
    if role.remote_friendly {
        bonus.apply(
            REMOTE_BONUS,
            format!("🏢 Remote work friendly (+{REMOTE_BONUS})"),
        );
    }
    if role.entry_friendly && profile.current_year <= EARLY_CAREER_MAX_YEAR {
        bonus.apply(
            EARLY_CAREER_BONUS,
            format!("🎓 Perfect for early career (+{EARLY_CAREER_BONUS})"),
        );
    }
    bonus
}

fn collect_penalties(role: &RoleDefinition, missing_count: usize) -> Adjustment {
    let mut penalty = Adjustment::new();
    if missing_count >= MISSING_SKILLS_THRESHOLD {
        penalty.apply(
            MISSING_SKILLS_PENALTY,
            format!("⚠️ Missing {missing_count} critical skills (-{MISSING_SKILLS_PENALTY})"),
        );
    }
    if !role.entry_friendly && role.experience_required == ExperienceRequirement::Required {
        penalty.apply(
            EXPERIENCE_PENALTY,
            format!("⚠️ Experience preferred (-{EXPERIENCE_PENALTY})"),
        );
    }
    penalty
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::ProfileInput;
    use crate::models::role::GrowthRate;
    use std::collections::BTreeMap;

    fn make_role(tech_stack: &[&str]) -> RoleDefinition {
        RoleDefinition {
            role_name: "Test Role".to_string(),
            category: "Software Engineering".to_string(),
            primary_specialization: "Software Engineering".to_string(),
            related_specializations: vec!["CSE".to_string(), "IT".to_string()],
            tech_stack: tech_stack.iter().map(|s| s.to_string()).collect(),
            demand_level: DemandLevel::Medium,
            growth_rate: GrowthRate::Steady,
            entry_friendly: false,
            remote_friendly: false,
            experience_required: ExperienceRequirement::NotRequired,
            difficulty: Difficulty::Advanced,
            description: String::new(),
            salary_range: String::new(),
            avg_salary: 0,
            related_internships: vec![],
            transferable_skills: true,
            specialization_heavy: false,
        }
    }

    fn make_profile(skills: &[(&str, &str)]) -> UserProfile {
        ProfileInput {
            skills: Some(
                skills
                    .iter()
                    .map(|(name, level)| (name.to_string(), Proficiency::parse(level)))
                    .collect::<BTreeMap<_, _>>(),
            ),
            ..ProfileInput::default()
        }
        .into_profile()
    }

    #[test]
    fn test_scenario_all_bonuses_no_skills() {
        let mut role = make_role(&[]);
        role.entry_friendly = true;
        role.difficulty = Difficulty::Beginner;
        role.demand_level = DemandLevel::VeryHigh;
        role.growth_rate = GrowthRate::Fast;
        role.remote_friendly = true;

        let mut profile = make_profile(&[]);
        profile.specialization = "Software Engineering".to_string();
        profile.interest_areas.insert("Software Engineering".to_string());
        profile.timeline = THREE_MONTHS.to_string();
        profile.current_year = 1;

        let result = score_compatibility(&profile, &role);
        let b = &result.breakdown;
        assert_eq!(b.specialization, 30);
        assert_eq!(b.skills, 0);
        assert_eq!(b.interest, 20);
        assert_eq!(b.goals, 5);
        assert_eq!(b.bonuses, 10);
        assert_eq!(b.bonus_list.len(), 4);
        assert_eq!(b.penalties, 0);
        assert_eq!(result.score, 65);
        assert_eq!(result.grade, Grade::B);
        assert_eq!(result.match_level, "✓ Decent Match");
    }

    #[test]
    fn test_raw_total_above_hundred_is_clamped() {
        let mut role = make_role(&["Python", "SQL"]);
        role.entry_friendly = true;
        role.difficulty = Difficulty::Beginner;
        role.demand_level = DemandLevel::VeryHigh;
        role.growth_rate = GrowthRate::VeryFast;
        role.remote_friendly = true;

        let mut profile = make_profile(&[("Python", "Advanced"), ("SQL", "Advanced")]);
        profile.specialization = "Software Engineering".to_string();
        profile.interest_areas.insert("Software Engineering".to_string());
        profile.timeline = THREE_MONTHS.to_string();
        profile.current_year = 1;

        let result = score_compatibility(&profile, &role);
        let b = &result.breakdown;
        // 30 + 45 + 20 + 5 + 10 = 110
        assert_eq!(
            (b.specialization, b.skills, b.interest, b.goals, b.bonuses),
            (30, 45, 20, 5, 10)
        );
        assert_eq!(b.penalties, 0);
        assert_eq!(result.score, 100);
        assert_eq!(result.grade, Grade::APlus);
        assert_eq!(result.match_level, "🌟 Excellent Match");
    }

    #[test]
    fn test_scenario_unrelated_profile_with_experience_penalty() {
        let mut role = make_role(&["Kubernetes", "Terraform"]);
        role.experience_required = ExperienceRequirement::Required;

        let mut profile = make_profile(&[]);
        profile.specialization = "Mobile Computing".to_string();

        let result = score_compatibility(&profile, &role);
        let b = &result.breakdown;
        assert_eq!(b.specialization, 5);
        assert_eq!(b.skills, 0);
        assert_eq!(b.missing_skills, vec!["Kubernetes", "Terraform"]);
        assert_eq!(b.interest, 5);
        assert_eq!(b.goals, 1);
        assert_eq!(b.bonuses, 0);
        assert_eq!(b.penalties, 3);
        assert_eq!(b.penalty_list, vec!["⚠️ Experience preferred (-3)"]);
        assert_eq!(result.score, 8);
        assert_eq!(result.grade, Grade::C);
    }

    #[test]
    fn test_proficiency_weighting_rounds_half_up() {
        let role = make_role(&["Python", "SQL"]);
        let profile = make_profile(&[("Python", "Advanced"), ("SQL", "Intermediate")]);

        let result = score_compatibility(&profile, &role);
        // 22.5 + 22.5 * 0.8 = 40.5 → 41
        assert_eq!(result.breakdown.skills, 41);
        assert!(result.breakdown.missing_skills.is_empty());
        assert_eq!(
            result.breakdown.matched_skills[0].label,
            "Python (Advanced ✓)"
        );
        assert_eq!(result.breakdown.matched_skills[1].label, "SQL (Good ✓)");
    }

    #[test]
    fn test_beginner_and_unknown_levels_get_half_credit() {
        let role = make_role(&["Git"]);
        let beginner = score_compatibility(&make_profile(&[("Git", "Beginner")]), &role);
        let unknown = score_compatibility(&make_profile(&[("Git", "Guru")]), &role);
        // 45 * 0.5 = 22.5 → 23
        assert_eq!(beginner.breakdown.skills, 23);
        assert_eq!(unknown.breakdown.skills, 23);
        assert_eq!(beginner.breakdown.matched_skills[0].label, "Git (Basic)");
    }

    #[test]
    fn test_skill_match_is_case_insensitive_both_directions() {
        let role = make_role(&["Machine Learning", "SQL"]);
        // "machine learning" ⊂ "Machine Learning Ops"; "sql" ⊂ "PostgreSQL"
        let profile = make_profile(&[
            ("machine learning ops", "Advanced"),
            ("PostgreSQL", "Advanced"),
        ]);
        let result = score_compatibility(&profile, &role);
        assert_eq!(result.breakdown.skills, 45);
        assert_eq!(result.breakdown.matched_skills.len(), 2);
        assert_eq!(
            result.breakdown.matched_skills[1].user_skill,
            "PostgreSQL"
        );
    }

    #[test]
    fn test_first_user_skill_in_key_order_wins() {
        let role = make_role(&["Java"]);
        // "Java" and "JavaScript" both match; keys are visited in sorted order.
        let profile = make_profile(&[("JavaScript", "Beginner"), ("Java", "Advanced")]);
        let result = score_compatibility(&profile, &role);
        assert_eq!(result.breakdown.matched_skills[0].user_skill, "Java");
        assert_eq!(result.breakdown.skills, 45);
    }

    #[test]
    fn test_three_missing_skills_trigger_penalty() {
        let role = make_role(&["AWS", "Azure", "GCP"]);
        let result = score_compatibility(&make_profile(&[]), &role);
        assert_eq!(result.breakdown.missing_skills.len(), 3);
        assert_eq!(result.breakdown.penalties, 5);
        assert_eq!(
            result.breakdown.penalty_list,
            vec!["⚠️ Missing 3 critical skills (-5)"]
        );
    }

    #[test]
    fn test_empty_tech_stack_has_no_skill_lists() {
        let result = score_compatibility(&make_profile(&[("Rust", "Advanced")]), &make_role(&[]));
        assert_eq!(result.breakdown.skills, 0);
        assert!(result.breakdown.matched_skills.is_empty());
        assert!(result.breakdown.missing_skills.is_empty());
    }

    #[test]
    fn test_related_specialization_scores_fifteen() {
        let mut profile = make_profile(&[]);
        profile.specialization = "CSE".to_string();
        let result = score_compatibility(&profile, &make_role(&[]));
        assert_eq!(result.breakdown.specialization, 15);
        assert_eq!(result.breakdown.specialization_reason, "Good match for CSE");
    }

    #[test]
    fn test_partial_interest_scores_ten() {
        let mut role = make_role(&[]);
        role.category = "AI/ML".to_string();
        let mut profile = make_profile(&[]);
        profile.interest_areas.insert("ML".to_string());
        let result = score_compatibility(&profile, &role);
        assert_eq!(result.breakdown.interest, 10);
        assert_eq!(result.breakdown.interest_reason, "Related to your interests");
    }

    #[test]
    fn test_six_month_timeline_fits_intermediate_role() {
        let mut role = make_role(&[]);
        role.difficulty = Difficulty::Intermediate;
        role.entry_friendly = true;
        let result = score_compatibility(&make_profile(&[]), &role);
        // default goal "First Job" (+3), default timeline "6 months" (+2)
        assert_eq!(result.breakdown.goals, 5);
    }

    #[test]
    fn test_unrecognised_timeline_gets_one_point() {
        let mut profile = make_profile(&[]);
        profile.timeline = "12 months".to_string();
        profile.career_goal = "Switch Careers".to_string();
        let mut role = make_role(&[]);
        role.difficulty = Difficulty::Beginner;
        let result = score_compatibility(&profile, &role);
        assert_eq!(result.breakdown.goals, 1);
    }

    #[test]
    fn test_early_career_bonus_needs_year_two_or_less() {
        let mut role = make_role(&[]);
        role.entry_friendly = true;
        let mut profile = make_profile(&[]);
        profile.current_year = 2;
        let early = score_compatibility(&profile, &role);
        profile.current_year = 3;
        let late = score_compatibility(&profile, &role);
        assert_eq!(early.breakdown.bonuses, 3);
        assert_eq!(late.breakdown.bonuses, 0);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let role = make_role(&["Python", "SQL", "Git"]);
        let profile = make_profile(&[("python", "Intermediate")]);
        assert_eq!(
            score_compatibility(&profile, &role),
            score_compatibility(&profile, &role)
        );
    }

    #[test]
    fn test_weighted_scorer_matches_free_function() {
        let role = make_role(&["Python"]);
        let profile = make_profile(&[("Python", "Advanced")]);
        let scorer: &dyn CompatibilityScorer = &WeightedScorer;
        assert_eq!(
            scorer.score(&profile, &role),
            score_compatibility(&profile, &role)
        );
    }
}
