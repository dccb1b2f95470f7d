use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use validator::Validate;

use crate::error::{json_kind, EngineError};
use crate::models::domain::{JobPosting, SkillRecord};

/// A scoring request: the user's skills, the job catalog, and how many
/// recommendations to return.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[serde(rename = "userSkills", alias = "user_skills", default)]
    pub user_skills: Vec<SkillRecord>,
    #[serde(default)]
    pub jobs: Vec<JobPosting>,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1))]
    pub limit: usize,
}

fn default_limit() -> usize {
    3
}

impl MatchRequest {
    /// Build a request from raw collaborator payloads.
    ///
    /// The data-fetching layer hands over whatever the upstream API returned,
    /// so both lists go through the lenient ingestion path.
    pub fn from_values(
        skills: &Value,
        jobs: &Value,
        limit: usize,
    ) -> Result<Self, EngineError> {
        Ok(Self {
            user_skills: skills_from_value(skills)?,
            jobs: jobs_from_value(jobs)?,
            limit,
        })
    }
}

/// Interpret a raw JSON value as a list of job postings.
///
/// `null` stands in for a missing list and yields an empty catalog. A value
/// of any other non-array shape is a contract violation and fails fast.
/// Malformed elements degrade to default records instead of failing the batch.
pub fn jobs_from_value(value: &Value) -> Result<Vec<JobPosting>, EngineError> {
    lenient_list(value, "an array of job postings")
}

/// Interpret a raw JSON value as a list of skill records, with the same
/// tolerance rules as [`jobs_from_value`].
pub fn skills_from_value(value: &Value) -> Result<Vec<SkillRecord>, EngineError> {
    lenient_list(value, "an array of skill records")
}

fn lenient_list<T>(value: &Value, expected: &'static str) -> Result<Vec<T>, EngineError>
where
    T: serde::de::DeserializeOwned + Default,
{
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => Ok(items
            .iter()
            .map(|item| {
                serde_json::from_value(item.clone()).unwrap_or_else(|e| {
                    warn!("malformed record degraded to default: {}", e);
                    T::default()
                })
            })
            .collect()),
        other => Err(EngineError::InvalidInputShape {
            expected,
            found: json_kind(other),
        }),
    }
}
