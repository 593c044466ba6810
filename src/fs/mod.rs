//! Filesystem module.
//!
//! Provides:
//! - Download filename derivation
//! - Path and directory management

pub mod naming;
pub mod paths;

pub use naming::{download_filename, filename_from_url, media_format, sanitize_path_component};
pub use paths::{ensure_dir, ensure_parent_dir};
