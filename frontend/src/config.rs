//! Application configuration.
//!
//! Compile-time settings for the Compressor frontend. Values that differ per
//! page (upload endpoint, download URL) come from data attributes on the
//! mount elements, see [`crate::services::page`].

/// Bytes in one MiB, used for limits and human readable totals.
pub const MIB: u64 = 1024 * 1024;

/// Maximum combined size of the selection (in bytes).
///
/// 50 MB limit, checked before anything is sent.
pub const MAX_TOTAL_SIZE: u64 = 50 * MIB;

/// How long the legacy progress script shows the "compressing" step.
pub const SCRIPTED_COMPRESS_HOLD_MS: u32 = 2_000;

/// How long the legacy progress script shows 100% before redirecting.
pub const SCRIPTED_REDIRECT_HOLD_MS: u32 = 1_000;

/// Delay between progress endpoint polls.
pub const PROGRESS_POLL_INTERVAL_MS: u32 = 1_000;

/// Poll budget before giving up on a compression job.
pub const MAX_PROGRESS_POLLS: u32 = 120;

/// Delay before the download control reports the file as deleted.
pub const DOWNLOAD_NOTICE_DELAY_MS: u32 = 1_500;

/// How long the copy-link control shows its confirmation.
pub const COPY_FEEDBACK_MS: u32 = 2_000;

/// Name of the hidden CSRF input rendered by the server.
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";

/// Multipart field carrying each selected file.
pub const FILES_FIELD: &str = "files";

// =============================================================================
// Mount points
// =============================================================================

/// Element hosting the upload dashboard.
pub const DASHBOARD_MOUNT_ID: &str = "dashboardApp";

/// Attribute on the dashboard mount carrying the upload endpoint.
pub const DASHBOARD_URL_ATTR: &str = "data-dashboard-url";

/// Element hosting the results view.
pub const RESULTS_MOUNT_ID: &str = "resultsApp";

/// Attribute carrying the one-shot download URL.
pub const DOWNLOAD_URL_ATTR: &str = "data-download-url";

/// Optional attribute with the compressed file name.
pub const FILENAME_ATTR: &str = "data-filename";
