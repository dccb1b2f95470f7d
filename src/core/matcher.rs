use tracing::debug;

use crate::core::normalize::SkillProfile;
use crate::core::scoring::score_job;
use crate::models::{JobPosting, MatchTier, RankedMatch, SkillRecord};

/// Result of a recommendation pass
#[derive(Debug)]
pub struct RecommendationResult {
    pub matches: Vec<RankedMatch>,
    pub total_jobs: usize,
}

/// Recommendation orchestrator - runs the scoring pipeline over a job catalog
///
/// # Pipeline Stages
/// 1. Normalize the user's skill records into a comparable profile
/// 2. Score every job (skill overlap, experience, track alignment)
/// 3. Rank by total descending, ties keeping input order
/// 4. Truncate to the requested top-N
#[derive(Debug, Clone)]
pub struct Matcher {
    default_top_n: usize,
}

impl Matcher {
    pub const DEFAULT_TOP_N: usize = 3;

    pub fn new(default_top_n: usize) -> Self {
        Self { default_top_n }
    }

    /// Produce the top-N recommendations using the configured default N.
    pub fn recommend(&self, skills: &[SkillRecord], jobs: &[JobPosting]) -> RecommendationResult {
        self.recommend_top(skills, jobs, self.default_top_n)
    }

    /// Produce the top `limit` recommendations for one (skills, jobs)
    /// snapshot.
    ///
    /// Pure and referentially transparent: both inputs are read once and
    /// cloned into the output, so callers may mutate their lists the moment
    /// this returns. A user with no skills yields all-zero totals and the
    /// ranking degenerates to input order - valid output, not an error.
    pub fn recommend_top(
        &self,
        skills: &[SkillRecord],
        jobs: &[JobPosting],
        limit: usize,
    ) -> RecommendationResult {
        let total_jobs = jobs.len();
        let profile = SkillProfile::from_records(skills);

        let mut ranked: Vec<RankedMatch> = jobs
            .iter()
            .map(|job| {
                let breakdown = score_job(&profile, job);
                RankedMatch {
                    tier: MatchTier::from_total(breakdown.total),
                    job: job.clone(),
                    breakdown,
                }
            })
            .collect();

        // sort_by is stable, so equal totals keep their input order; the
        // source behavior defines no secondary tie-break key
        ranked.sort_by(|a, b| b.breakdown.total.cmp(&a.breakdown.total));
        ranked.truncate(limit);

        debug!(
            total_jobs,
            returned = ranked.len(),
            avg_proficiency = profile.avg_proficiency(),
            "ranked job recommendations"
        );

        RecommendationResult {
            matches: ranked,
            total_jobs,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOP_N)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JobLevel, ProficiencyLevel};

    fn job(id: &str, skills: &[&str], level: JobLevel) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            title: format!("Job {}", id),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            level,
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn skills(names: &[(&str, ProficiencyLevel)]) -> Vec<SkillRecord> {
        names
            .iter()
            .map(|(name, level)| SkillRecord::new(*name, *level))
            .collect()
    }

    #[test]
    fn test_recommend_ranks_by_total_descending() {
        let matcher = Matcher::default();
        let user = skills(&[("python", ProficiencyLevel::Expert)]);
        let catalog = vec![
            job("1", &["Go", "Kubernetes"], JobLevel::Senior),
            job("2", &["Python"], JobLevel::EntryLevel),
            job("3", &["Python", "SQL"], JobLevel::EntryLevel),
        ];

        let result = matcher.recommend(&user, &catalog);

        assert_eq!(result.total_jobs, 3);
        assert_eq!(result.matches[0].job.id, "2");
        for pair in result.matches.windows(2) {
            assert!(pair[0].breakdown.total >= pair[1].breakdown.total);
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let matcher = Matcher::new(3);
        let user = skills(&[("python", ProficiencyLevel::Expert)]);
        // Identical jobs score identically; stable sort must keep 1 before 2
        let catalog = vec![
            job("1", &["Python", "SQL"], JobLevel::EntryLevel),
            job("2", &["Python", "SQL"], JobLevel::EntryLevel),
            job("3", &["Python"], JobLevel::EntryLevel),
        ];

        let result = matcher.recommend(&user, &catalog);

        assert_eq!(result.matches[0].job.id, "3");
        assert_eq!(result.matches[1].job.id, "1");
        assert_eq!(result.matches[2].job.id, "2");
    }

    #[test]
    fn test_respects_limit() {
        let matcher = Matcher::default();
        let user = skills(&[("python", ProficiencyLevel::Expert)]);
        let catalog: Vec<JobPosting> = (0..10)
            .map(|i| job(&i.to_string(), &["Python"], JobLevel::EntryLevel))
            .collect();

        let result = matcher.recommend(&user, &catalog);

        assert_eq!(result.matches.len(), 3);
        assert_eq!(result.total_jobs, 10);
    }

    #[test]
    fn test_empty_skill_set_degenerates_to_input_order() {
        let matcher = Matcher::new(3);
        let catalog = vec![
            job("a", &["Python"], JobLevel::Senior),
            job("b", &["SQL"], JobLevel::EntryLevel),
            job("c", &[], JobLevel::MidLevel),
            job("d", &["Go"], JobLevel::EntryLevel),
        ];

        let result = matcher.recommend(&[], &catalog);

        assert_eq!(result.matches.len(), 3);
        let ids: Vec<&str> = result.matches.iter().map(|m| m.job.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        for m in &result.matches {
            assert_eq!(m.breakdown.total, 0);
            assert_eq!(m.tier, MatchTier::Fair);
        }
    }

    #[test]
    fn test_empty_catalog() {
        let matcher = Matcher::default();
        let user = skills(&[("python", ProficiencyLevel::Expert)]);
        let result = matcher.recommend(&user, &[]);
        assert!(result.matches.is_empty());
        assert_eq!(result.total_jobs, 0);
    }

    #[test]
    fn test_idempotent_over_same_snapshot() {
        let matcher = Matcher::new(5);
        let user = skills(&[
            ("python", ProficiencyLevel::Intermediate),
            ("sql", ProficiencyLevel::Beginner),
        ]);
        let catalog = vec![
            job("1", &["Python", "SQL"], JobLevel::MidLevel),
            job("2", &["Python"], JobLevel::Senior),
            job("3", &["Rust"], JobLevel::EntryLevel),
        ];

        let first = matcher.recommend(&user, &catalog);
        let second = matcher.recommend(&user, &catalog);

        let ids = |r: &RecommendationResult| -> Vec<String> {
            r.matches.iter().map(|m| m.job.id.clone()).collect()
        };
        assert_eq!(ids(&first), ids(&second));
        for (a, b) in first.matches.iter().zip(second.matches.iter()) {
            assert_eq!(a.breakdown, b.breakdown);
        }
    }
}
