//! UI Components for the Compressor dashboard.
//!
//! # Upload page
//! - [`UploadPanel`] - Selection, submission and progress
//! - [`DropZone`] - Drag & drop target with the file picker
//! - [`FileList`] - Staged files with remove buttons
//! - [`ProgressSection`] - Upload and compression progress bar
//! - [`ErrorBanner`] - Inline error message
//!
//! # Results page
//! - [`ResultsPanel`] - One-shot download and copy-link controls
//! - [`DeletionNotice`] - Banner confirming the server-side deletion

mod drop_zone;
mod error;
mod file_list;
mod notice;
mod progress;
mod results;
mod upload;

pub use drop_zone::*;
pub use error::*;
pub use file_list::*;
pub use notice::*;
pub use progress::*;
pub use results::*;
pub use upload::*;
