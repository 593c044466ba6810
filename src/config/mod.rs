//! Configuration module.
//!
//! This module handles:
//! - Default configuration and per-concern sections
//! - Access-token loading from the environment / `.env`
//! - Run modes
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{
    load_dotenv, AccountConfig, ColumnMap, Config, DownloadOptions, ExtractOptions, GraphSettings,
    PageConfig, ACCESS_TOKEN_ENV,
};
pub use modes::RunMode;
pub use validation::validate_config;
