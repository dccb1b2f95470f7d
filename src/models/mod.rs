// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{JobLevel, JobPosting, ProficiencyLevel, ProficiencyTier, SkillRecord};
pub use requests::{jobs_from_value, skills_from_value, MatchRequest};
pub use responses::{MatchBreakdown, MatchTier, RankedMatch};
