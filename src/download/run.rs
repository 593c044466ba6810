//! CSV-driven media downloading.

use std::path::Path;

use url::Url;

use crate::api::GraphClient;
use crate::config::DownloadOptions;
use crate::dataset::reader::{read_rows, DownloadRow};
use crate::download::media::fetch_to_file;
use crate::error::{Error, Result};
use crate::fs::naming::{download_filename, filename_from_url, media_format};
use crate::fs::paths::ensure_dir;
use crate::output::{print_info, print_warning};

/// Download every eligible row of a previously extracted media CSV.
///
/// Returns the number of files downloaded successfully. Per-file failures
/// are reported and skipped; only reading the CSV itself (or creating the
/// output directory) is fatal.
pub async fn download_from_csv(
    client: &GraphClient,
    options: &DownloadOptions,
    input: &Path,
    output_directory: &Path,
) -> Result<u64> {
    ensure_dir(output_directory)?;

    let rows = read_rows(input, &options.columns)?;
    let total = rows.len();
    let mut successful: u64 = 0;

    for (index, row) in rows.iter().enumerate() {
        if !options.accepted_types.contains(row.media_type.as_str()) {
            continue;
        }

        let Some(media_url) = row.media_url.as_deref() else {
            continue;
        };

        let filename = match destination_filename(row, media_url, options) {
            Ok(Some(filename)) => filename,
            Ok(None) => continue,
            Err(e) => {
                print_warning(&format!(
                    "[{}][{}/{}] Skipping {}: {}",
                    row.post_id,
                    index + 1,
                    total,
                    row.media_id,
                    e
                ));
                continue;
            }
        };

        let save_path = output_directory.join(&filename);
        match fetch_to_file(client, media_url, &save_path).await {
            Ok(()) => {
                print_info(&format!(
                    "[{}][{}/{}] Media {} downloaded correctly: {}",
                    row.post_id,
                    index + 1,
                    total,
                    row.media_id,
                    filename
                ));
                successful += 1;
            }
            Err(e) => {
                print_warning(&format!(
                    "[{}][{}/{}] Couldn't download {}: {}",
                    row.post_id,
                    index + 1,
                    total,
                    row.media_id,
                    e
                ));
            }
        }
    }

    Ok(successful)
}

/// Decide the destination filename for a row.
///
/// `Ok(None)` means the row is filtered out (unsupported format); an error
/// means the row is malformed and should be reported and skipped.
fn destination_filename(
    row: &DownloadRow,
    media_url: &str,
    options: &DownloadOptions,
) -> Result<Option<String>> {
    let parsed = Url::parse(media_url)
        .map_err(|e| Error::Download(format!("invalid media URL {}: {}", media_url, e)))?;

    let source_name = filename_from_url(&parsed);
    let extension = media_format(&source_name);
    if !options
        .supported_formats
        .contains(extension.to_lowercase().as_str())
    {
        return Ok(None);
    }

    let Some(timestamp) = row.created_unix_timestamp else {
        return Err(Error::Download(format!(
            "row for media {} has an unparseable timestamp",
            row.media_id
        )));
    };

    download_filename(&row.post_id, &row.media_id, timestamp, extension).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, LocalResult, TimeZone};

    fn options() -> DownloadOptions {
        DownloadOptions::default()
    }

    fn row(url: &str, timestamp: Option<i64>) -> DownloadRow {
        DownloadRow {
            post_id: "123".to_string(),
            created_unix_timestamp: timestamp,
            media_id: "456".to_string(),
            media_type: "photo".to_string(),
            media_url: Some(url.to_string()),
        }
    }

    fn local_timestamp(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> i64 {
        match Local.with_ymd_and_hms(y, mo, d, h, mi, s) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.timestamp(),
            LocalResult::None => panic!("invalid local datetime"),
        }
    }

    #[test]
    fn test_destination_filename_matches_schema() {
        let timestamp = local_timestamp(2024, 3, 5, 10, 0, 0);
        let row = row("https://cdn.example.com/media/photo.jpg", Some(timestamp));

        let filename = destination_filename(&row, row.media_url.as_deref().unwrap(), &options())
            .unwrap()
            .unwrap();
        assert_eq!(filename, "123 456 2024-03-05_10.00.00.jpg");
    }

    #[test]
    fn test_unsupported_format_is_filtered() {
        let row = row("https://cdn.example.com/media/clip.webm", Some(0));

        let result =
            destination_filename(&row, row.media_url.as_deref().unwrap(), &options()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_dotless_filename_is_filtered() {
        let row = row("https://cdn.example.com/media/noextension", Some(0));

        let result =
            destination_filename(&row, row.media_url.as_deref().unwrap(), &options()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_extension_case_preserved_but_checked_lowercased() {
        let timestamp = local_timestamp(2024, 3, 5, 10, 0, 0);
        let row = row("https://cdn.example.com/media/photo.JPG", Some(timestamp));

        let filename = destination_filename(&row, row.media_url.as_deref().unwrap(), &options())
            .unwrap()
            .unwrap();
        assert!(filename.ends_with(".JPG"));
    }

    #[test]
    fn test_missing_timestamp_is_an_error() {
        let row = row("https://cdn.example.com/media/photo.jpg", None);

        assert!(
            destination_filename(&row, row.media_url.as_deref().unwrap(), &options()).is_err()
        );
    }

    #[test]
    fn test_invalid_url_is_an_error() {
        let row = row("not a url", Some(0));

        assert!(
            destination_filename(&row, row.media_url.as_deref().unwrap(), &options()).is_err()
        );
    }

    #[test]
    fn test_percent_encoded_source_filename() {
        let timestamp = local_timestamp(2024, 3, 5, 10, 0, 0);
        let row = row(
            "https://cdn.example.com/media/my%20photo.png",
            Some(timestamp),
        );

        let filename = destination_filename(&row, row.media_url.as_deref().unwrap(), &options())
            .unwrap()
            .unwrap();
        assert!(filename.ends_with(".png"));
    }
}
