//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Selection Types** - Files staged for upload
//! - **API Types** - Upload and progress endpoint responses
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::MIB;

// =============================================================================
// Selection Types
// =============================================================================

/// One file staged for upload.
///
/// `C` is the content handle: a `web_sys::File` in the browser.
#[derive(Clone, Debug, PartialEq)]
pub struct FileEntry<C> {
    /// Stable id assigned by the selection, used as render key
    pub id: u64,
    /// File name as reported by the browser
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Binary content
    pub content: C,
}

impl<C> FileEntry<C> {
    /// Creates an entry that has not been placed in a selection yet.
    pub fn new(name: impl Into<String>, size: u64, content: C) -> Self {
        Self {
            id: 0,
            name: name.into(),
            size,
            content,
        }
    }
}

impl From<web_sys::File> for FileEntry<web_sys::File> {
    fn from(file: web_sys::File) -> Self {
        let size = file.size().max(0.0) as u64;
        Self::new(file.name(), size, file)
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Response from the dashboard upload endpoint.
///
/// The server answers with this shape for both success and failure, the
/// latter usually with a 4xx/5xx status.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    pub redirect_url: Option<String>,
    pub error: Option<String>,
    /// Endpoint reporting real compression progress, when the server has one
    pub progress_url: Option<String>,
}

/// An upload the server accepted.
#[derive(Clone, Debug, PartialEq)]
pub struct AcceptedUpload {
    pub redirect_url: String,
    pub progress_url: Option<String>,
}

impl UploadResponse {
    /// Splits the response into an accepted upload or the error to show.
    pub fn into_result(self) -> AppResult<AcceptedUpload> {
        if !self.success {
            let message = self
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| "Upload failed".to_string());
            return Err(AppError::Server(message));
        }

        let redirect_url = self
            .redirect_url
            .filter(|u| !u.is_empty())
            .ok_or(AppError::MissingRedirect)?;

        Ok(AcceptedUpload {
            redirect_url,
            progress_url: self.progress_url.filter(|u| !u.is_empty()),
        })
    }
}

/// Job status reported by the progress endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Processing,
    Completed,
    Error,
}

/// One reply from the progress endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProgressReport {
    pub status: JobStatus,
    #[serde(default)]
    pub progress: Option<f64>,
    pub redirect_url: Option<String>,
    pub message: Option<String>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// The `Display` text is exactly what the error banner shows.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// Submit pressed with nothing selected.
    #[error("Please select files to compress")]
    EmptySelection,

    /// The batch would push the selection over the ceiling.
    #[error("Total file size ({:.2} MB) exceeds maximum limit of {}MB", as_mib(.total), .limit_mib)]
    SizeExceeded { total: u64, limit_mib: u64 },

    /// Request could not be sent or the reply was not JSON.
    #[error("Network error: {0}")]
    Network(String),

    /// The server refused the upload.
    #[error("{0}")]
    Server(String),

    /// Success reply with nowhere to go.
    #[error("Server response did not include a redirect URL")]
    MissingRedirect,

    /// The progress endpoint reported a failed job.
    #[error("{0}")]
    Compression(String),

    /// The progress endpoint never reported completion.
    #[error("Compression is taking longer than expected, please check your results later")]
    ProgressTimeout,

    /// Clipboard write rejected.
    #[error("Failed to copy link: {0}")]
    Clipboard(String),

    /// Page markup is missing something we rely on.
    #[error("Page error: {0}")]
    Page(String),
}

fn as_mib(bytes: &u64) -> f64 {
    *bytes as f64 / MIB as f64
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_upload_uses_server_message() {
        let json = r#"{"error": "Total file size (120.00 MB) exceeds maximum limit of 100MB"}"#;
        let response: UploadResponse = serde_json::from_str(json).unwrap();

        let err = response.into_result().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Total file size (120.00 MB) exceeds maximum limit of 100MB"
        );
    }

    #[test]
    fn test_failed_upload_without_message_falls_back() {
        let response: UploadResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(response.into_result().unwrap_err().to_string(), "Upload failed");
    }

    #[test]
    fn test_successful_upload() {
        let json = r#"{"success": true, "redirect_url": "/compression/results/7/"}"#;
        let response: UploadResponse = serde_json::from_str(json).unwrap();

        let accepted = response.into_result().unwrap();
        assert_eq!(accepted.redirect_url, "/compression/results/7/");
        assert_eq!(accepted.progress_url, None);
    }

    #[test]
    fn test_success_without_redirect_is_an_error() {
        let response: UploadResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(response.into_result(), Err(AppError::MissingRedirect));
    }

    #[test]
    fn test_progress_report_deserialization() {
        let json = r#"{"status": "processing", "progress": 50}"#;
        let report: ProgressReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.status, JobStatus::Processing);
        assert_eq!(report.progress, Some(50.0));

        let json = r#"{"status": "error", "message": "File not found"}"#;
        let report: ProgressReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.status, JobStatus::Error);
        assert_eq!(report.message.as_deref(), Some("File not found"));
    }

    #[test]
    fn test_size_exceeded_message() {
        let err = AppError::SizeExceeded {
            total: 60 * MIB + MIB / 2,
            limit_mib: 50,
        };
        assert_eq!(
            err.to_string(),
            "Total file size (60.50 MB) exceeds maximum limit of 50MB"
        );
    }
}
