//! Candidate analytics: data model, store, aggregation, narrative, and the
//! sort/filter view pipeline

pub mod candidate;
pub mod narrative;
pub mod skills;
pub mod store;
pub mod view;

pub use candidate::{Candidate, Gender, RecommendationResult};
pub use skills::{aggregate_skills, SkillFrequency};
pub use store::CandidateStore;
pub use view::SortField;
