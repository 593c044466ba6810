//! Filename derivation for downloaded media.

use chrono::{Local, TimeZone};
use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::{Error, Result};

/// Date format embedded in download filenames.
const FILENAME_DATE_FORMAT: &str = "%Y-%m-%d_%H.%M.%S";

/// Extract the original filename from a media URL: the final path segment,
/// percent-decoded.
pub fn filename_from_url(url: &Url) -> String {
    let segment = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or("");

    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

/// File extension of a filename: the text after the last dot, or the whole
/// name when no dot is present. The caller checks the result against the
/// supported-format set either way.
pub fn media_format(filename: &str) -> &str {
    filename.rsplit('.').next().unwrap_or(filename)
}

/// Deterministic destination filename for a media row:
/// `"{post_id} {media_id} {local date}.{extension}"`.
pub fn download_filename(
    post_id: &str,
    media_id: &str,
    timestamp: i64,
    extension: &str,
) -> Result<String> {
    Ok(format!(
        "{} {} {}.{}",
        sanitize_path_component(post_id)?,
        sanitize_path_component(media_id)?,
        format_timestamp(timestamp)?,
        sanitize_path_component(extension)?,
    ))
}

/// Render a row's UNIX timestamp in local time for the filename.
pub fn format_timestamp(timestamp: i64) -> Result<String> {
    Local
        .timestamp_opt(timestamp, 0)
        .earliest()
        .map(|dt| dt.format(FILENAME_DATE_FORMAT).to_string())
        .ok_or_else(|| Error::InvalidTimestamp {
            value: timestamp.to_string(),
            message: "out of range for a local datetime".to_string(),
        })
}

/// Sanitize a filename component, replacing problematic characters.
///
/// Returns an error on path traversal patterns and null bytes; the values
/// come from CSV fields, not from trusted code.
pub fn sanitize_path_component(name: &str) -> Result<String> {
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed: '{}'",
            name
        )));
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Path component cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}
