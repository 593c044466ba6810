//! Configuration structures and environment loading.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::config::modes::RunMode;
use crate::error::{Error, Result};

/// Environment variable holding the Graph API access token.
pub const ACCESS_TOKEN_ENV: &str = "FB_PAGE_ACCESS_TOKEN";

/// Main configuration structure.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub mode: RunMode,
    pub page: PageConfig,
    pub account: AccountConfig,
    pub graph: GraphSettings,
    pub extract: ExtractOptions,
    pub download: DownloadOptions,
}

/// Page targeting configuration.
#[derive(Debug, Clone, Default)]
pub struct PageConfig {
    /// Id of the page to extract from.
    pub page_id: Option<String>,
}

/// Account credentials configuration.
#[derive(Debug, Clone, Default)]
pub struct AccountConfig {
    /// Graph API page access token.
    pub access_token: String,
}

/// Graph API endpoint settings.
#[derive(Debug, Clone)]
pub struct GraphSettings {
    pub base_url: String,
    pub api_version: String,
}

/// Extraction options.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Attachment types that produce media records.
    pub accepted_types: HashSet<String>,

    /// Output CSV path; defaults per run mode when unset.
    pub output_path: Option<PathBuf>,
}

/// Downloader options.
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    /// Media types eligible for download.
    pub accepted_types: HashSet<String>,

    /// Lowercased file extensions eligible for download.
    pub supported_formats: HashSet<String>,

    /// Header names of the input CSV columns.
    pub columns: ColumnMap,

    /// Input CSV produced by a media extraction run.
    pub input_path: PathBuf,

    /// Directory downloaded files are written into (flat, no subfolders).
    pub media_directory: PathBuf,
}

/// Configurable column names of the downloader's input CSV.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    pub post_id: String,
    pub created_unix_timestamp: String,
    pub media_id: String,
    pub media_type: String,
    pub media_url: String,
}

/// Attachment types the pipelines treat as media.
fn default_accepted_types() -> HashSet<String> {
    [
        "album",
        "photo",
        "cover_photo",
        "profile_media",
        "animated_image_autoplay",
        "video",
        "video_inline",
        "video_autoplay",
        "music",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// File formats the downloader knows how to store.
fn default_supported_formats() -> HashSet<String> {
    ["jpeg", "jpg", "png", "mp3", "mp4"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            base_url: "https://graph.facebook.com".to_string(),
            api_version: "v20.0".to_string(),
        }
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            accepted_types: default_accepted_types(),
            output_path: None,
        }
    }
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            accepted_types: default_accepted_types(),
            supported_formats: default_supported_formats(),
            columns: ColumnMap::default(),
            input_path: PathBuf::from("output/facebook_page_media.csv"),
            media_directory: PathBuf::from("output/media"),
        }
    }
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            post_id: "id".to_string(),
            created_unix_timestamp: "created_unix_timestamp".to_string(),
            media_id: "media_id".to_string(),
            media_type: "media_type".to_string(),
            media_url: "media_url".to_string(),
        }
    }
}

impl Config {
    /// Get the page id, or fail with a configuration error.
    pub fn page_id(&self) -> Result<&str> {
        self.page
            .page_id
            .as_deref()
            .ok_or_else(|| Error::MissingConfig("page id (--page-id)".to_string()))
    }

    /// Effective output CSV path for the current run mode.
    pub fn output_path(&self) -> PathBuf {
        self.extract.output_path.clone().unwrap_or_else(|| {
            PathBuf::from(match self.mode {
                RunMode::Posts => "output/facebook_page_posts.csv",
                _ => "output/facebook_page_media.csv",
            })
        })
    }
}

/// Load `.env` into the process environment so both clap's env-backed
/// arguments and direct reads see it. A missing file is not an error.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}
