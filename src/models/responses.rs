use serde::{Deserialize, Serialize};

use crate::models::domain::JobPosting;

/// Qualitative tier for a total score, shared by the label and the display
/// color so the core stays UI-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchTier {
    Excellent,
    Good,
    Fair,
}

impl MatchTier {
    /// Tier thresholds: >= 80 Excellent, >= 60 Good, otherwise Fair.
    pub fn from_total(total: u8) -> Self {
        if total >= 80 {
            MatchTier::Excellent
        } else if total >= 60 {
            MatchTier::Good
        } else {
            MatchTier::Fair
        }
    }

    /// Qualitative label shown next to the score.
    pub fn label(&self) -> &'static str {
        match self {
            MatchTier::Excellent => "Excellent",
            MatchTier::Good => "Good",
            MatchTier::Fair => "Fair",
        }
    }
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-job score decomposition.
///
/// The sub-score maxima are exposed as constants so the presentation layer
/// can render progress bars without hard-coding the formula caps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    #[serde(rename = "skillScore")]
    pub skill_score: u8,
    #[serde(rename = "experienceScore")]
    pub experience_score: u8,
    #[serde(rename = "trackScore")]
    pub track_score: u8,
    pub total: u8,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
}

impl MatchBreakdown {
    pub const SKILL_MAX: u8 = 60;
    pub const EXPERIENCE_MAX: u8 = 20;
    pub const TRACK_MAX: u8 = 20;

    /// Breakdown for a job that earned nothing (e.g. the user has no skills).
    pub fn zeroed() -> Self {
        Self {
            skill_score: 0,
            experience_score: 0,
            track_score: 0,
            total: 0,
            matched_skills: Vec::new(),
        }
    }

    pub fn tier(&self) -> MatchTier {
        MatchTier::from_total(self.total)
    }
}

/// A job posting paired with its score decomposition and tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch {
    pub job: JobPosting,
    pub breakdown: MatchBreakdown,
    pub tier: MatchTier,
}
