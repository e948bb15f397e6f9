//! Backend boundary: the job query input struct, the backend trait, the
//! reqwest client, and the upload session state machine

use crate::error::Result;
use crate::processing::candidate::RecommendationResult;
use async_trait::async_trait;
use serde::Serialize;
use std::str::FromStr;

pub mod client;
pub mod upload;

pub use client::HttpBackend;
pub use upload::{UploadSession, UploadState};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BudgetType {
    Monthly,
    Hourly,
}

impl FromStr for BudgetType {
    type Err = crate::error::TalentDashError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(BudgetType::Monthly),
            "hourly" => Ok(BudgetType::Hourly),
            other => Err(crate::error::TalentDashError::InvalidInput(format!(
                "Unknown budget type: {}. Supported: monthly, hourly",
                other
            ))),
        }
    }
}

/// Validated job query, built from plain caller-supplied data. The core
/// pipeline only ever sees this struct; it never reads input fields itself.
#[derive(Debug, Clone, Serialize)]
pub struct JobQuery {
    pub title: String,
    pub description: String,
    pub budget_type: BudgetType,
    pub budget_value: f64,
    pub preferred_locations: Vec<String>,
    pub remote_allowed: bool,
    pub preferred_gender: Option<String>,
}

impl JobQuery {
    /// Build a query from raw form-style inputs. An unparsable budget falls
    /// back to 0 (recovered locally, never an error); locations are comma
    /// split, trimmed, and emptied entries dropped; an empty gender means
    /// unset.
    pub fn from_form(
        title: &str,
        description: &str,
        budget_raw: &str,
        budget_type: BudgetType,
        locations_raw: &str,
        gender: Option<&str>,
    ) -> Self {
        let budget_value = budget_raw.trim().parse::<f64>().unwrap_or(0.0);
        let preferred_locations = locations_raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let preferred_gender = gender
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_string);

        Self {
            title: title.to_string(),
            description: description.to_string(),
            budget_type,
            budget_value,
            preferred_locations,
            remote_allowed: true,
            preferred_gender,
        }
    }
}

/// The recommendation backend as seen by the dashboard. The two methods are
/// the only suspension points in the system.
#[async_trait]
pub trait TalentBackend: Send + Sync {
    /// `POST /recommend`: score the dataset against a job query and return
    /// the ranked candidates.
    async fn recommend(&self, query: &JobQuery) -> Result<RecommendationResult>;

    /// `POST /upload_csv`: replace the backend's candidate dataset. Returns
    /// the ingested row count.
    async fn upload_csv(&self, file_name: &str, bytes: Vec<u8>) -> Result<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_form_parses_locations() {
        let query = JobQuery::from_form(
            "Ad-hoc Job",
            "video editor",
            "1200",
            BudgetType::Monthly,
            " Berlin , , London ",
            Some("Female"),
        );

        assert_eq!(query.budget_value, 1200.0);
        assert_eq!(query.preferred_locations, vec!["Berlin", "London"]);
        assert_eq!(query.preferred_gender.as_deref(), Some("Female"));
        assert!(query.remote_allowed);
    }

    #[test]
    fn test_unparsable_budget_defaults_to_zero() {
        let query =
            JobQuery::from_form("t", "d", "lots", BudgetType::Hourly, "", None);
        assert_eq!(query.budget_value, 0.0);
        assert!(query.preferred_locations.is_empty());
    }

    #[test]
    fn test_empty_gender_is_unset() {
        let query = JobQuery::from_form("t", "d", "0", BudgetType::Monthly, "", Some("  "));
        assert_eq!(query.preferred_gender, None);
    }

    #[test]
    fn test_query_wire_format() {
        let query = JobQuery::from_form("t", "d", "10", BudgetType::Hourly, "Paris", None);
        let json = serde_json::to_value(&query).unwrap();

        assert_eq!(json["budget_type"], "hourly");
        assert_eq!(json["preferred_gender"], serde_json::Value::Null);
        assert_eq!(json["preferred_locations"][0], "Paris");
    }

    #[test]
    fn test_budget_type_parse() {
        assert_eq!("Monthly".parse::<BudgetType>().unwrap(), BudgetType::Monthly);
        assert!("weekly".parse::<BudgetType>().is_err());
    }
}
