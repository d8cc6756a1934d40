//! Multipart upload of the selection to the dashboard endpoint.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::{CSRF_FIELD, FILES_FIELD};
use crate::{AppError, AppResult, UploadResponse};

/// Posts every file plus the CSRF token in one request.
///
/// The body is parsed as JSON whatever the status code, since the server
/// reports refusals as JSON with a 4xx/5xx status.
pub async fn upload_files(files: &[File], csrf_token: &str, endpoint: &str) -> AppResult<UploadResponse> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Network(format!("Failed to create FormData: {:?}", e)))?;

    for file in files {
        form_data
            .append_with_blob_and_filename(FILES_FIELD, file, &file.name())
            .map_err(|e| AppError::Network(format!("Failed to append file: {:?}", e)))?;
    }
    form_data
        .append_with_str(CSRF_FIELD, csrf_token)
        .map_err(|e| AppError::Network(format!("Failed to append CSRF token: {:?}", e)))?;

    log::info!("📤 Uploading {} file(s) to {}", files.len(), endpoint);

    let request = Request::post(endpoint)
        .body(form_data)
        .map_err(|e| AppError::Network(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        log::warn!("Upload endpoint answered {}", response.status());
    }

    response
        .json::<UploadResponse>()
        .await
        .map_err(|e| AppError::Network(e.to_string()))
}
