//! Error handling for the talent dashboard

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TalentDashError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid sort field: {0}. Supported: score, views")]
    InvalidSortField(String),

    #[error("Upload already in progress")]
    UploadInProgress,

    #[error("Export error: {0}")]
    Export(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TalentDashError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for TalentDashError {
    fn from(err: anyhow::Error) -> Self {
        TalentDashError::Backend(err.to_string())
    }
}

/// Transport failures surface with the underlying error text
impl From<reqwest::Error> for TalentDashError {
    fn from(err: reqwest::Error) -> Self {
        TalentDashError::Network(err.to_string())
    }
}

impl From<csv::Error> for TalentDashError {
    fn from(err: csv::Error) -> Self {
        TalentDashError::Export(err.to_string())
    }
}
