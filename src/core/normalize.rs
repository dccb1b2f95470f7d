use std::collections::HashSet;

use crate::models::{ProficiencyLevel, ProficiencyTier, SkillRecord};

/// Canonical view of a user's skill set for one scoring pass.
///
/// Skill names are compared lower-cased; duplicate records collapse into the
/// name set but still count toward the proficiency average, matching how the
/// records were entered.
#[derive(Debug, Clone)]
pub struct SkillProfile {
    names: HashSet<String>,
    avg_proficiency: f64,
    record_count: usize,
}

impl SkillProfile {
    /// Normalize a user's skill records. Never fails; malformed records were
    /// already degraded to conservative defaults at the boundary.
    pub fn from_records(records: &[SkillRecord]) -> Self {
        let names: HashSet<String> = records
            .iter()
            .map(|r| r.skill_name.to_lowercase())
            .collect();

        // 0.0 is the "unscored" sentinel for an empty skill set
        let avg_proficiency = if records.is_empty() {
            0.0
        } else {
            let sum: u32 = records.iter().map(|r| u32::from(r.proficiency.rank())).sum();
            f64::from(sum) / records.len() as f64
        };

        Self {
            names,
            avg_proficiency,
            record_count: records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    /// Membership check against an already lower-cased skill name.
    pub fn has_skill(&self, name_lower: &str) -> bool {
        self.names.contains(name_lower)
    }

    /// Mean proficiency rank over all records; 0.0 when the set is empty.
    pub fn avg_proficiency(&self) -> f64 {
        self.avg_proficiency
    }

    /// Qualitative classification of the average, for the profile summary.
    pub fn avg_level(&self) -> ProficiencyTier {
        ProficiencyTier::from_avg(self.avg_proficiency)
    }

    /// Average proficiency as a percentage of the maximum rank, rounded
    /// half-up. 0 for an empty skill set.
    pub fn proficiency_percent(&self) -> u8 {
        let max_rank = f64::from(ProficiencyLevel::Professional.rank());
        (self.avg_proficiency / max_rank * 100.0).round() as u8
    }
}

/// Lower-case a job's required skill list for membership comparison,
/// preserving order.
pub fn normalize_skill_names(skills: &[String]) -> Vec<String> {
    skills.iter().map(|s| s.to_lowercase()).collect()
}
