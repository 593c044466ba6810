//! Field normalization shared by both extraction pipelines.

use chrono::DateTime;

/// Timestamp format of Graph `created_time` fields.
pub const GRAPH_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Parse a Graph `created_time` string into UNIX seconds.
pub fn parse_created_time(value: &str) -> Result<i64, chrono::ParseError> {
    DateTime::parse_from_str(value, GRAPH_TIME_FORMAT).map(|dt| dt.timestamp())
}

/// Normalize free text for the tabular output: newlines become spaces and a
/// trailing comma is appended. Downstream consumers of the historical CSV
/// datasets expect this exact shape.
pub fn tabular_text(value: &str) -> String {
    format!("{},", value.replace('\n', " "))
}
