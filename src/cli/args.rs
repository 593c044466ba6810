//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, RunMode};

/// Facebook page archiver CLI.
#[derive(Parser, Debug)]
#[command(
    name = "facebook-page-archiver",
    version,
    about = "Archive a Facebook page's posts and media via the Graph API",
    long_about = "Extract post and media-attachment information from a Facebook page into CSV \
                  datasets, and download the referenced media files.\n\n\
                  Requires a page access token in the FB_PAGE_ACCESS_TOKEN environment variable \
                  (a .env file is honored)."
)]
pub struct Args {
    /// Run mode (defaults to media extraction).
    #[arg(long, value_enum)]
    pub mode: Option<RunModeArg>,

    /// Facebook page's ID (media and posts modes).
    #[arg(short, long)]
    pub page_id: Option<String>,

    /// Graph API page access token.
    #[arg(short, long, env = "FB_PAGE_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// The output CSV file for extraction modes.
    #[arg(short, long)]
    pub output_filename: Option<PathBuf>,

    /// The input CSV file containing the media attachment URLs (download mode).
    #[arg(short, long)]
    pub input_filename: Option<PathBuf>,

    /// The folder downloaded media is saved into (download mode).
    #[arg(short = 'd', long = "directory")]
    pub output_directory: Option<PathBuf>,

    /// The column name where the post ID is stored (download mode).
    #[arg(long)]
    pub column_post_id: Option<String>,

    /// The column name where the post UNIX timestamp is stored (download mode).
    #[arg(long)]
    pub column_created_unix_timestamp: Option<String>,

    /// The column name where the media ID is stored (download mode).
    #[arg(long)]
    pub column_attachment_id: Option<String>,

    /// The column name where the media type is stored (download mode).
    #[arg(long)]
    pub column_attachment_type: Option<String>,

    /// The column name where the media URL is stored (download mode).
    #[arg(long)]
    pub column_attachment_media_url: Option<String>,

    /// Graph API version segment.
    #[arg(long)]
    pub api_version: Option<String>,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI run mode argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RunModeArg {
    /// Extract the media-attachment dataset to CSV.
    Media,
    /// Extract the posts dataset to CSV.
    Posts,
    /// Download files referenced by a previously extracted media CSV.
    Download,
}

impl From<RunModeArg> for RunMode {
    fn from(arg: RunModeArg) -> Self {
        match arg {
            RunModeArg::Media => RunMode::Media,
            RunModeArg::Posts => RunMode::Posts,
            RunModeArg::Download => RunMode::Download,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.mode = mode.into();
        }

        if let Some(page_id) = self.page_id {
            config.page.page_id = Some(page_id);
        }

        if let Some(token) = self.token {
            config.account.access_token = token;
        }

        if let Some(output) = self.output_filename {
            config.extract.output_path = Some(output);
        }

        if let Some(input) = self.input_filename {
            config.download.input_path = input;
        }

        if let Some(directory) = self.output_directory {
            config.download.media_directory = directory;
        }

        if let Some(name) = self.column_post_id {
            config.download.columns.post_id = name;
        }

        if let Some(name) = self.column_created_unix_timestamp {
            config.download.columns.created_unix_timestamp = name;
        }

        if let Some(name) = self.column_attachment_id {
            config.download.columns.media_id = name;
        }

        if let Some(name) = self.column_attachment_type {
            config.download.columns.media_type = name;
        }

        if let Some(name) = self.column_attachment_media_url {
            config.download.columns.media_url = name;
        }

        if let Some(version) = self.api_version {
            config.graph.api_version = version;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> Args {
        Args {
            mode: None,
            page_id: None,
            token: None,
            output_filename: None,
            input_filename: None,
            output_directory: None,
            column_post_id: None,
            column_created_unix_timestamp: None,
            column_attachment_id: None,
            column_attachment_type: None,
            column_attachment_media_url: None,
            api_version: None,
            debug: false,
        }
    }

    #[test]
    fn test_merge_overrides_only_given_values() {
        let mut merged = args();
        merged.mode = Some(RunModeArg::Download);
        merged.column_post_id = Some("post".to_string());
        merged.output_directory = Some(PathBuf::from("media/"));

        let mut config = Config::default();
        merged.merge_into_config(&mut config);

        assert_eq!(config.mode, RunMode::Download);
        assert_eq!(config.download.columns.post_id, "post");
        assert_eq!(config.download.columns.media_url, "media_url");
        assert_eq!(config.download.media_directory, PathBuf::from("media/"));
        assert_eq!(
            config.download.input_path,
            PathBuf::from("output/facebook_page_media.csv")
        );
    }

    #[test]
    fn test_merge_extraction_settings() {
        let mut merged = args();
        merged.page_id = Some("12345".to_string());
        merged.token = Some("EAAB-token".to_string());
        merged.api_version = Some("v21.0".to_string());

        let mut config = Config::default();
        merged.merge_into_config(&mut config);

        assert_eq!(config.mode, RunMode::Media);
        assert_eq!(config.page.page_id.as_deref(), Some("12345"));
        assert_eq!(config.account.access_token, "EAAB-token");
        assert_eq!(config.graph.api_version, "v21.0");
    }
}
