//! Talent dashboard: candidate analytics pipeline for recruiter shortlists

pub mod api;
pub mod chart;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod output;
pub mod processing;

pub use config::Config;
pub use dashboard::Dashboard;
pub use error::{Result, TalentDashError};
