//! Download module for CSV-driven media retrieval.
//!
//! This module provides:
//! - The download run loop over an extracted media CSV
//! - Streaming file downloads

pub mod media;
pub mod run;

pub use media::fetch_to_file;
pub use run::download_from_csv;
