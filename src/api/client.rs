//! HTTP client for the recommendation backend

use crate::api::{JobQuery, TalentBackend};
use crate::config::BackendConfig;
use crate::error::{Result, TalentDashError};
use crate::processing::candidate::{Candidate, RecommendationResult};
use async_trait::async_trait;
use log::debug;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::time::Duration;

/// The single point of entry for all backend calls. Failures are converted
/// into `Network` (transport) or `Backend` (well-formed error response)
/// variants; the caller turns those into user-visible status text.
#[derive(Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct RecommendResponse {
    #[serde(default)]
    candidates: Option<Vec<Candidate>>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    rows: Option<u64>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TalentDashError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Pull a `message` out of an error body if there is one, otherwise
    /// surface the raw text.
    fn backend_error(status: reqwest::StatusCode, body: &str) -> TalentDashError {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|e| e.message)
            .unwrap_or_else(|_| format!("HTTP {}: {}", status, body));
        TalentDashError::Backend(message)
    }
}

#[async_trait]
impl TalentBackend for HttpBackend {
    async fn recommend(&self, query: &JobQuery) -> Result<RecommendationResult> {
        let url = format!("{}/recommend", self.base_url);
        let response = self.client.post(&url).json(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::backend_error(status, &body));
        }

        let parsed: RecommendResponse = response.json().await?;
        match parsed.candidates {
            Some(candidates) => {
                debug!("Recommend returned {} candidates", candidates.len());
                Ok(candidates)
            }
            // The backend reports "no dataset loaded" as a message-only body
            None => Err(TalentDashError::Backend(
                parsed
                    .message
                    .unwrap_or_else(|| "Backend returned no candidates".to_string()),
            )),
        }
    }

    async fn upload_csv(&self, file_name: &str, bytes: Vec<u8>) -> Result<u64> {
        let url = format!("{}/upload_csv", self.base_url);
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("text/csv")
            .map_err(|e| TalentDashError::Network(e.to_string()))?;
        let form = Form::new().part("file", part);

        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::backend_error(status, &body));
        }

        let parsed: UploadResponse = response.json().await?;
        match parsed.rows {
            Some(rows) => {
                debug!("Upload ingested {} rows", rows);
                Ok(rows)
            }
            None => Err(TalentDashError::Backend(
                parsed
                    .message
                    .unwrap_or_else(|| "Upload response carried no row count".to_string()),
            )),
        }
    }
}
