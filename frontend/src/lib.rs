//! Compressor - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend mounted into the server-rendered pages of the
//! Compressor dashboard.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dashboard page (#dashboardApp, data-dashboard-url)          │
//! │  └── UploadPanel                                             │
//! │      ├── DropZone / FileList   (selection, 50MB ceiling)     │
//! │      ├── ProgressSection       (poll or legacy script)       │
//! │      └── ErrorBanner                                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Results page (#resultsApp, data-download-url)               │
//! │  └── ResultsPanel                                            │
//! │      ├── download link (one shot) + DeletionNotice           │
//! │      └── copy-link button                                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (FileEntry, UploadResponse, AppError, etc.)
//! - [`state`] - View models: selection, upload phases, result controls
//! - [`components`] - UI components
//! - [`services`] - Upload, progress polling, clipboard, page access

use leptos::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod format;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Types
pub use types::{
    // Selection
    FileEntry,
    // API
    AcceptedUpload, JobStatus, ProgressReport, UploadResponse,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::{ResultsPanel, UploadPanel};

use config::{
    DASHBOARD_MOUNT_ID, DASHBOARD_URL_ATTR, DOWNLOAD_URL_ATTR, FILENAME_ATTR, RESULTS_MOUNT_ID,
};
use services::{mount_point, required_attribute};

// =============================================================================
// Application Entry Point
// =============================================================================

/// Sets up logging and mounts whichever controller the page has room for.
#[wasm_bindgen]
pub fn boot() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Compressor - Starting Leptos App");

    let mounted = mount_dashboard() | mount_results();
    if !mounted {
        log::debug!("No Compressor mount point on this page");
    }
}

fn mount_dashboard() -> bool {
    let Some(root) = mount_point(DASHBOARD_MOUNT_ID) else {
        return false;
    };

    match required_attribute(&root, DASHBOARD_URL_ATTR) {
        Ok(endpoint) => {
            mount_to(root, move || view! { <UploadPanel endpoint=endpoint/> });
            true
        }
        Err(e) => {
            log::error!("Dashboard not mounted: {}", e);
            false
        }
    }
}

fn mount_results() -> bool {
    let Some(root) = mount_point(RESULTS_MOUNT_ID) else {
        return false;
    };

    match required_attribute(&root, DOWNLOAD_URL_ATTR) {
        Ok(download_url) => {
            let filename = root.get_attribute(FILENAME_ATTR).filter(|f| !f.is_empty());
            mount_to(root, move || {
                view! { <ResultsPanel download_url=download_url filename=filename/> }
            });
            true
        }
        Err(e) => {
            log::error!("Results panel not mounted: {}", e);
            false
        }
    }
}
