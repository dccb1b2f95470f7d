use crate::core::normalize::{normalize_skill_names, SkillProfile};
use crate::models::{JobLevel, JobPosting, MatchBreakdown};

/// Score how many of a job's required skills the user already has.
///
/// Returns the 0-60 sub-score and the matched skills (lower-cased, in job
/// order). A job listing zero required skills scores 0: there is no overlap
/// to claim with nothing.
///
/// Rounding is half-up (`f64::round` rounds halves away from zero, which is
/// half-up for non-negative ratios).
pub fn skill_overlap_score(profile: &SkillProfile, job_skills: &[String]) -> (u8, Vec<String>) {
    if job_skills.is_empty() {
        return (0, Vec::new());
    }

    let normalized = normalize_skill_names(job_skills);
    let matched: Vec<String> = normalized
        .into_iter()
        .filter(|s| profile.has_skill(s))
        .collect();

    let ratio = matched.len() as f64 / job_skills.len() as f64;
    let score = (ratio * f64::from(MatchBreakdown::SKILL_MAX)).round() as u8;

    (score, matched)
}

/// Score whether the user's overall proficiency meets the job's level.
///
/// Full credit when the average meets or exceeds the required rank, then a
/// discrete step function on the shortfall. Boundary values at exactly 1 and
/// 2 fall into the more generous bucket.
pub fn experience_score(avg_proficiency: f64, level: JobLevel) -> u8 {
    let required = f64::from(level.rank());
    if avg_proficiency >= required {
        return MatchBreakdown::EXPERIENCE_MAX;
    }

    let diff = required - avg_proficiency;
    if diff <= 1.0 {
        12
    } else if diff <= 2.0 {
        5
    } else {
        0
    }
}

/// Score breadth of overlap independent of raw count, so jobs with very few
/// required skills are not over-rewarded.
pub fn track_score(matched_count: usize, required_count: usize) -> u8 {
    if matched_count == 0 {
        0
    } else if matched_count as f64 >= required_count as f64 * 0.5 {
        MatchBreakdown::TRACK_MAX
    } else {
        10
    }
}

/// Compute the full score decomposition for one job.
///
/// A user with no recorded skills gets an all-zero breakdown for every job;
/// that is valid output, not an error.
pub fn score_job(profile: &SkillProfile, job: &JobPosting) -> MatchBreakdown {
    if profile.is_empty() {
        return MatchBreakdown::zeroed();
    }

    let (skill_score, matched_skills) = skill_overlap_score(profile, &job.skills);
    let experience_score = experience_score(profile.avg_proficiency(), job.level);
    let track_score = track_score(matched_skills.len(), job.skills.len());

    MatchBreakdown {
        skill_score,
        experience_score,
        track_score,
        total: skill_score + experience_score + track_score,
        matched_skills,
    }
}
