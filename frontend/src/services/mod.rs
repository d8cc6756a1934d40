//! Browser and backend services.
//!
//! # Services
//!
//! - [`upload`] - Multipart upload to the dashboard endpoint
//! - [`progress`] - Progress polling and the legacy progress script
//! - [`clipboard`] - Clipboard writes for the copy-link control
//! - [`page`] - Mount points, CSRF token and navigation

pub mod clipboard;
pub mod page;
pub mod progress;
pub mod upload;

pub use clipboard::*;
pub use page::*;
pub use progress::*;
pub use upload::*;
