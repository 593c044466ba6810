//! Graph API module.
//!
//! This module provides:
//! - HTTP client for the Graph REST API
//! - Typed request builders for the endpoints the pipelines use
//! - API response types

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::GraphClient;
pub use endpoints::Endpoints;
pub use types::*;
