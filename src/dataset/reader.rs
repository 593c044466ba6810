//! Column-mapped CSV reading for the downloader.
//!
//! The downloader accepts any CSV carrying the five columns it needs; the
//! header names are configurable, so rows are projected through a resolved
//! index mapping instead of serde field names.

use std::path::Path;

use csv::StringRecord;

use crate::config::ColumnMap;
use crate::error::{Error, Result};

/// One downloadable row, projected through the configured column mapping.
#[derive(Debug, Clone)]
pub struct DownloadRow {
    pub post_id: String,
    /// `None` when the timestamp field could not be parsed.
    pub created_unix_timestamp: Option<i64>,
    pub media_id: String,
    pub media_type: String,
    /// `None` when the URL field is empty.
    pub media_url: Option<String>,
}

/// Read every row of the CSV, in file order.
pub fn read_rows(path: &Path, columns: &ColumnMap) -> Result<Vec<DownloadRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let indices = ColumnIndices::resolve(&headers, columns)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(indices.project(&record?));
    }

    Ok(rows)
}

/// Column positions resolved against the file's header row.
struct ColumnIndices {
    post_id: usize,
    created_unix_timestamp: usize,
    media_id: usize,
    media_type: usize,
    media_url: usize,
}

impl ColumnIndices {
    fn resolve(headers: &StringRecord, columns: &ColumnMap) -> Result<Self> {
        Ok(Self {
            post_id: find_column(headers, &columns.post_id)?,
            created_unix_timestamp: find_column(headers, &columns.created_unix_timestamp)?,
            media_id: find_column(headers, &columns.media_id)?,
            media_type: find_column(headers, &columns.media_type)?,
            media_url: find_column(headers, &columns.media_url)?,
        })
    }

    fn project(&self, record: &StringRecord) -> DownloadRow {
        let url = field(record, self.media_url);

        DownloadRow {
            post_id: field(record, self.post_id),
            created_unix_timestamp: parse_timestamp(&field(record, self.created_unix_timestamp)),
            media_id: field(record, self.media_id),
            media_type: field(record, self.media_type),
            media_url: if url.is_empty() { None } else { Some(url) },
        }
    }
}

fn find_column(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| Error::Config(format!("Input file is missing column '{}'", name)))
}

fn field(record: &StringRecord, index: usize) -> String {
    record.get(index).unwrap_or_default().to_string()
}

/// Accept both integer and legacy float-formatted timestamps.
fn parse_timestamp(value: &str) -> Option<i64> {
    if let Ok(seconds) = value.parse::<i64>() {
        return Some(seconds);
    }

    value
        .parse::<f64>()
        .ok()
        .filter(|seconds| seconds.is_finite())
        .map(|seconds| seconds as i64)
}
