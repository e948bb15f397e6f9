//! Upload session state machine

use crate::api::TalentBackend;
use crate::error::{Result, TalentDashError};
use log::info;

/// `Idle → Uploading → {Success, Error}`, re-armed on the next submission.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadState {
    Idle,
    Uploading,
    Success { rows: u64 },
    Error { message: String },
}

/// Drives one dataset upload at a time. A submission while another is in
/// flight is rejected, so two requests never race for the same displayed
/// message. No automatic retry.
#[derive(Debug, Default)]
pub struct UploadSession {
    state: UploadState,
}

impl Default for UploadState {
    fn default() -> Self {
        UploadState::Idle
    }
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    /// Transient status string reflecting the current state.
    pub fn message(&self) -> String {
        match &self.state {
            UploadState::Idle => String::new(),
            UploadState::Uploading => "⏳ Uploading...".to_string(),
            UploadState::Success { rows } => format!(
                "✅ Dataset uploaded successfully! Candidates reloaded: {}",
                rows
            ),
            UploadState::Error { message } => format!("❌ {}", message),
        }
    }

    /// Submit a file to the backend. Backend rejections and transport
    /// failures both land in `Error` with a user-visible message; only a
    /// concurrent submission surfaces as an `Err`.
    pub async fn submit(
        &mut self,
        backend: &dyn TalentBackend,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<&UploadState> {
        if self.state == UploadState::Uploading {
            return Err(TalentDashError::UploadInProgress);
        }

        self.state = UploadState::Uploading;

        self.state = match backend.upload_csv(file_name, bytes).await {
            Ok(rows) => {
                info!("Uploaded {}: {} rows", file_name, rows);
                UploadState::Success { rows }
            }
            Err(TalentDashError::Backend(message)) => UploadState::Error { message },
            Err(e) => UploadState::Error {
                message: format!("Error uploading dataset: {}", e),
            },
        };

        Ok(&self.state)
    }
}
