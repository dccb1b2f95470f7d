//! JobMatch Engine - deterministic job-match scoring for career dashboards
//!
//! This library computes a 0-100 compatibility score between a user's
//! recorded skills and each posting in a job catalog, decomposed into skill
//! overlap (0-60), experience adequacy (0-20), and track alignment (0-20),
//! then ranks the catalog and returns the top-N recommendations.
//!
//! The engine is pure, synchronous, and stateless: it reads a snapshot of
//! caller-owned input and allocates caller-owned output, so concurrent
//! invocations need no coordination.

pub mod config;
pub mod core;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use crate::core::{Matcher, RecommendationResult, SkillProfile};
pub use crate::error::EngineError;
pub use crate::models::{
    JobLevel, JobPosting, MatchBreakdown, MatchRequest, MatchTier, ProficiencyLevel,
    ProficiencyTier, RankedMatch, SkillRecord,
};
