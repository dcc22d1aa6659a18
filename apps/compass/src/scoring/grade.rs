use serde::{Deserialize, Serialize};

/// Letter grade attached to a compatibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    C,
    #[serde(rename = "C+")]
    CPlus,
    B,
    #[serde(rename = "B+")]
    BPlus,
    A,
    #[serde(rename = "A+")]
    APlus,
}

/// Minimum score for each grade, checked highest-first.
const GRADE_THRESHOLDS: &[(u32, Grade)] = &[
    (90, Grade::APlus),
    (85, Grade::A),
    (75, Grade::BPlus),
    (65, Grade::B),
    (55, Grade::CPlus),
];

impl Grade {
    pub fn from_score(score: u32) -> Self {
        GRADE_THRESHOLDS
            .iter()
            .find(|(threshold, _)| score >= *threshold)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::C)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
        }
    }

    /// Human label shown next to the grade.
    pub fn match_level(self) -> &'static str {
        match self {
            Grade::APlus => "🌟 Excellent Match",
            Grade::A => "✅ Strong Match",
            Grade::BPlus => "👍 Good Match",
            Grade::B => "✓ Decent Match",
            Grade::CPlus => "○ Fair Match",
            Grade::C => "⚠️ Moderate Match",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
