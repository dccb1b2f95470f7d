// Core algorithm exports
pub mod matcher;
pub mod normalize;
pub mod scoring;

pub use matcher::{Matcher, RecommendationResult};
pub use normalize::{normalize_skill_names, SkillProfile};
pub use scoring::{experience_score, score_job, skill_overlap_score, track_score};
