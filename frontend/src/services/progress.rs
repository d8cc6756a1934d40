//! Progress reporting between an accepted upload and the redirect.
//!
//! Servers that expose a progress endpoint are polled and the bar follows
//! their reports. Without one, the legacy timed script runs instead.

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use crate::config::{MAX_PROGRESS_POLLS, PROGRESS_POLL_INTERVAL_MS};
use crate::state::{poll_until_done, scripted_progress, ProgressSnapshot};
use crate::{AcceptedUpload, AppError, AppResult, ProgressReport};

/// Fetches one report from the progress endpoint.
pub async fn fetch_progress(url: &str) -> AppResult<ProgressReport> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    // 404 still carries a JSON report with status "error"
    response
        .json::<ProgressReport>()
        .await
        .map_err(|e| AppError::Network(e.to_string()))
}

/// Reports progress through `show` until the job is done and returns the
/// URL to navigate to.
pub async fn follow_progress(
    accepted: AcceptedUpload,
    show: impl Fn(ProgressSnapshot),
) -> AppResult<String> {
    let AcceptedUpload {
        redirect_url,
        progress_url,
    } = accepted;

    match progress_url {
        Some(url) => poll_progress(&url, redirect_url, show).await,
        None => {
            run_script(show).await;
            Ok(redirect_url)
        }
    }
}

async fn poll_progress(
    progress_url: &str,
    fallback_redirect: String,
    show: impl Fn(ProgressSnapshot),
) -> AppResult<String> {
    poll_until_done(
        MAX_PROGRESS_POLLS,
        fallback_redirect,
        || fetch_progress(progress_url),
        || TimeoutFuture::new(PROGRESS_POLL_INTERVAL_MS),
        show,
    )
    .await
}

// Timed, not reported: the server may finish before or after this.
async fn run_script(show: impl Fn(ProgressSnapshot)) {
    for step in scripted_progress() {
        show(step.snapshot);
        TimeoutFuture::new(step.hold_ms).await;
    }
}
