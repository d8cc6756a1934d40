//! View models behind the components.
//!
//! Everything here is plain Rust with no browser calls, so the rules of the
//! dashboard are tested natively.
//!
//! - [`selection`] - Staged files and the size ceiling
//! - [`upload`] - Upload phases and progress
//! - [`result`] - Download and copy-link controls

pub mod result;
pub mod selection;
pub mod upload;

pub use result::*;
pub use selection::*;
pub use upload::*;
