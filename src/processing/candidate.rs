//! Candidate data model as received from the recommendation backend

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One ranked creator record. Immutable once received: the view pipeline
/// reorders and subsets sequences of candidates but never edits the records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    pub name: String,
    #[serde(default, deserialize_with = "de_gender")]
    pub gender: Option<Gender>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub job_types: Option<String>,
    /// Comma-delimited free-text skill tokens
    #[serde(default, deserialize_with = "de_opt_string")]
    pub skills: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub software: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub platforms: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub content_verticals: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub past_creators: Option<String>,
    #[serde(default, deserialize_with = "de_opt_rate")]
    pub monthly_rate: Option<String>,
    #[serde(default, deserialize_with = "de_opt_rate")]
    pub hourly_rate: Option<String>,
    pub score: f64,
    pub views: u64,
}

/// The ordered sequence returned by one recommend call; backend order is the
/// initial ranking.
pub type RecommendationResult = Vec<Candidate>;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::Other => write!(f, "Other"),
        }
    }
}

/// The backend emits empty strings for missing text fields; normalize those
/// to `None` so the display and export layers see one shape for absent data.
fn de_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn de_gender<'de, D>(deserializer: D) -> Result<Option<Gender>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(Gender::parse))
}

/// Rates are numeric-as-string, but the backend may emit raw JSON numbers
/// when the source column parsed cleanly. Accept both.
fn de_opt_rate<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
