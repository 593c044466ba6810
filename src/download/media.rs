//! Media file streaming to disk.

use std::path::Path;

use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::GraphClient;
use crate::error::{Error, Result};

/// Minimum file size to show a progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Stream a media URL to the given path.
///
/// An existing file at the path is truncated and rewritten, so re-running
/// against an unchanged source leaves identical content behind.
pub async fn fetch_to_file(client: &GraphClient, url: &str, output_path: &Path) -> Result<()> {
    let response = client.download_file(url).await?;

    let content_length = response.content_length();
    let progress = content_length
        .filter(|length| *length > PROGRESS_THRESHOLD)
        .map(|length| {
            let bar = ProgressBar::new(length);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                    .unwrap()
                    .progress_chars("#>-"),
            );
            bar
        });

    let mut file = File::create(output_path).await?;
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;

        if let Some(ref bar) = progress {
            bar.set_position(downloaded);
        }
    }

    file.flush().await?;

    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    Ok(())
}
