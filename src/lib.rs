//! Facebook Page Archiver - archive a Facebook page's posts and media.
//!
//! This library walks the Graph API's paginated collections, normalizes
//! nested attachment structures into flat CSV datasets, and downloads the
//! referenced media files.
//!
//! # Features
//!
//! - Media-attachment extraction across posts, profile photos, and albums
//! - Posts extraction with content-identity deduplication
//! - Composite-key merging with last-write-wins across traversal paths
//! - Ordered, fixed-schema CSV datasets
//! - CSV-driven media downloading with deterministic filenames
//!
//! # Example
//!
//! ```no_run
//! use facebook_page_archiver::{
//!     api::{Endpoints, GraphClient},
//!     config::Config,
//!     extract::MediaExtractor,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let client = GraphClient::new()?;
//!     let endpoints = Endpoints::new(&config.graph)?;
//!
//!     let extractor = MediaExtractor::new(
//!         &client,
//!         &endpoints,
//!         "access-token",
//!         &config.extract.accepted_types,
//!     );
//!     let records = extractor.run("page-id").await?;
//!
//!     // ... persist the dataset
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod download;
pub mod error;
pub mod extract;
pub mod fs;
pub mod output;

// Re-exports for convenience
pub use api::{Endpoints, GraphClient};
pub use config::{Config, RunMode};
pub use dataset::{MediaRecord, PostRecord};
pub use error::{Error, Result};
pub use extract::{MediaExtractor, PostsExtractor};
