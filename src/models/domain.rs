use serde::{Deserialize, Deserializer, Serialize};

/// Self-assessed proficiency for a single skill, ranked 1-4.
///
/// Unknown or missing labels degrade to `Beginner` so a malformed record
/// can only lower a score, never fail the computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum ProficiencyLevel {
    #[default]
    Beginner,
    Intermediate,
    Expert,
    Professional,
}

impl ProficiencyLevel {
    /// Numeric rank used by the experience formula (Beginner = 1).
    pub fn rank(&self) -> u8 {
        match self {
            ProficiencyLevel::Beginner => 1,
            ProficiencyLevel::Intermediate => 2,
            ProficiencyLevel::Expert => 3,
            ProficiencyLevel::Professional => 4,
        }
    }

    /// Parse a label case-insensitively, falling back to `Beginner`.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("professional") {
            ProficiencyLevel::Professional
        } else if label.eq_ignore_ascii_case("expert") {
            ProficiencyLevel::Expert
        } else if label.eq_ignore_ascii_case("intermediate") {
            ProficiencyLevel::Intermediate
        } else {
            ProficiencyLevel::Beginner
        }
    }
}

/// Required seniority of a job posting, ranked 1-3.
///
/// Missing or unrecognized levels degrade to `EntryLevel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum JobLevel {
    #[default]
    #[serde(rename = "Entry Level")]
    EntryLevel,
    #[serde(rename = "Mid Level")]
    MidLevel,
    Senior,
}

impl JobLevel {
    /// Numeric rank used by the experience formula (Entry Level = 1).
    pub fn rank(&self) -> u8 {
        match self {
            JobLevel::EntryLevel => 1,
            JobLevel::MidLevel => 2,
            JobLevel::Senior => 3,
        }
    }

    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("senior") {
            JobLevel::Senior
        } else if label.eq_ignore_ascii_case("mid level") {
            JobLevel::MidLevel
        } else {
            JobLevel::EntryLevel
        }
    }
}

/// Qualitative classification of a user's average proficiency, shown on the
/// profile summary next to the skill count.
///
/// `Unscored` covers the 0.0 sentinel of an empty skill set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProficiencyTier {
    Professional,
    Expert,
    Intermediate,
    Beginner,
    #[serde(rename = "N/A")]
    Unscored,
}

impl ProficiencyTier {
    /// Tier thresholds on the 1-4 rank average: >= 3.5 Professional,
    /// >= 2.5 Expert, >= 1.5 Intermediate, > 0 Beginner, else unscored.
    pub fn from_avg(avg_proficiency: f64) -> Self {
        if avg_proficiency >= 3.5 {
            ProficiencyTier::Professional
        } else if avg_proficiency >= 2.5 {
            ProficiencyTier::Expert
        } else if avg_proficiency >= 1.5 {
            ProficiencyTier::Intermediate
        } else if avg_proficiency > 0.0 {
            ProficiencyTier::Beginner
        } else {
            ProficiencyTier::Unscored
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProficiencyTier::Professional => "Professional",
            ProficiencyTier::Expert => "Expert",
            ProficiencyTier::Intermediate => "Intermediate",
            ProficiencyTier::Beginner => "Beginner",
            ProficiencyTier::Unscored => "N/A",
        }
    }
}

impl std::fmt::Display for ProficiencyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One skill on a user profile. Created and edited by the profile layer;
/// read-only to the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SkillRecord {
    #[serde(rename = "skillName", alias = "skill_name", default)]
    pub skill_name: String,
    #[serde(default, deserialize_with = "lenient_proficiency")]
    pub proficiency: ProficiencyLevel,
}

impl SkillRecord {
    pub fn new(skill_name: impl Into<String>, proficiency: ProficiencyLevel) -> Self {
        Self {
            skill_name: skill_name.into(),
            proficiency,
        }
    }
}

/// A job posting as supplied by the data-fetching layer.
///
/// Immutable for the duration of a scoring pass; the engine never mutates
/// or retains references into it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct JobPosting {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_level")]
    pub level: JobLevel,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Accept any JSON value for a proficiency field; only a recognized string
/// label raises the rank above the conservative default.
fn lenient_proficiency<'de, D>(deserializer: D) -> Result<ProficiencyLevel, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(label) => ProficiencyLevel::from_label(&label),
        _ => ProficiencyLevel::default(),
    })
}

/// Same tolerance for the job level field.
fn lenient_level<'de, D>(deserializer: D) -> Result<JobLevel, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(label) => JobLevel::from_label(&label),
        _ => JobLevel::default(),
    })
}

/// Job ids arrive as strings or numbers depending on the upstream store.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}
