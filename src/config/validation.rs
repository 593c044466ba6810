//! Configuration validation logic.

use regex::Regex;

use crate::config::loader::{ColumnMap, Config, ACCESS_TOKEN_ENV};
use crate::config::modes::RunMode;
use crate::error::{Error, Result};

/// Page ids: numeric ids or page usernames.
const PAGE_ID_PATTERN: &str = r"^[A-Za-z0-9._-]+$";

/// Validate the configuration for the selected run mode.
pub fn validate_config(config: &Config) -> Result<()> {
    match config.mode {
        RunMode::Media | RunMode::Posts => {
            validate_token(&config.account.access_token)?;
            validate_page_id(config.page.page_id.as_deref())?;
        }
        RunMode::Download => {
            validate_columns(&config.download.columns)?;
        }
    }

    Ok(())
}

/// Validate the access token.
pub fn validate_token(token: &str) -> Result<()> {
    if token.is_empty() {
        return Err(Error::MissingConfig(format!(
            "The access token is missing. Define it in a .env file as {}",
            ACCESS_TOKEN_ENV
        )));
    }

    Ok(())
}

/// Validate the page id.
pub fn validate_page_id(page_id: Option<&str>) -> Result<()> {
    let Some(page_id) = page_id else {
        return Err(Error::MissingConfig("page id (--page-id)".to_string()));
    };

    if page_id.is_empty() {
        return Err(Error::MissingConfig("page id (--page-id)".to_string()));
    }

    let pattern = Regex::new(PAGE_ID_PATTERN).unwrap();
    if !pattern.is_match(page_id) {
        return Err(Error::ConfigValidation {
            field: "page_id".to_string(),
            message: format!(
                "Page id '{}' contains invalid characters. Only alphanumeric, dots, underscores, and hyphens allowed.",
                page_id
            ),
        });
    }

    Ok(())
}

/// Validate the downloader column mapping.
pub fn validate_columns(columns: &ColumnMap) -> Result<()> {
    let names = [
        ("column_post_id", &columns.post_id),
        (
            "column_created_unix_timestamp",
            &columns.created_unix_timestamp,
        ),
        ("column_attachment_id", &columns.media_id),
        ("column_attachment_type", &columns.media_type),
        ("column_attachment_media_url", &columns.media_url),
    ];

    for (field, name) in names {
        if name.trim().is_empty() {
            return Err(Error::ConfigValidation {
                field: field.to_string(),
                message: "Column name cannot be empty".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_page_ids() {
        assert!(validate_page_id(Some("123456789")).is_ok());
        assert!(validate_page_id(Some("some.page-name_1")).is_ok());
    }

    #[test]
    fn test_invalid_page_ids() {
        assert!(validate_page_id(None).is_err());
        assert!(validate_page_id(Some("")).is_err());
        assert!(validate_page_id(Some("page/../../etc")).is_err());
        assert!(validate_page_id(Some("page id")).is_err());
    }

    #[test]
    fn test_missing_token() {
        assert!(validate_token("").is_err());
        assert!(validate_token("EAAB-token-value").is_ok());
    }

    #[test]
    fn test_empty_column_name() {
        let mut columns = ColumnMap::default();
        assert!(validate_columns(&columns).is_ok());

        columns.media_url = "  ".to_string();
        assert!(validate_columns(&columns).is_err());
    }

    #[test]
    fn test_validate_config_per_mode() {
        let mut config = Config::default();

        // Extraction modes need token and page id.
        config.mode = RunMode::Media;
        assert!(validate_config(&config).is_err());

        config.account.access_token = "EAAB-token-value".to_string();
        config.page.page_id = Some("123".to_string());
        assert!(validate_config(&config).is_ok());

        // Download mode only needs a sane column mapping.
        let mut config = Config::default();
        config.mode = RunMode::Download;
        assert!(validate_config(&config).is_ok());
    }
}
