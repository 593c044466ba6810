//! Normalized dataset records.
//!
//! Serde field order IS the CSV column order; the column constants below
//! must stay in lockstep with the struct fields.

use serde::{Deserialize, Serialize};

/// Column schema of the media dataset.
pub const MEDIA_COLUMNS: [&str; 11] = [
    "id",
    "created_time",
    "created_unix_timestamp",
    "permalink_url",
    "media_id",
    "media_page_url",
    "media_title",
    "media_description",
    "media_type",
    "media_url",
    "error",
];

/// Column schema of the posts dataset.
pub const POST_COLUMNS: [&str; 7] = [
    "id",
    "created_time",
    "created_unix_timestamp",
    "message",
    "story",
    "is_published",
    "permalink_url",
];

/// One media attachment row of the media dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRecord {
    /// Owning post/story id.
    pub id: String,
    pub created_time: String,
    pub created_unix_timestamp: i64,
    pub permalink_url: String,
    pub media_id: Option<String>,
    pub media_page_url: Option<String>,
    pub media_title: Option<String>,
    pub media_description: Option<String>,
    pub media_type: String,
    pub media_url: Option<String>,
    /// Resolution diagnostic; a populated value means the row is partial,
    /// not that it was dropped.
    pub error: Option<String>,
}

/// One row of the posts dataset.
///
/// `Hash`/`Eq` over the ordered field set is the dedup identity: any two
/// records with identical field values collapse to one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: String,
    pub created_time: String,
    pub created_unix_timestamp: i64,
    pub message: Option<String>,
    pub story: Option<String>,
    pub is_published: Option<bool>,
    pub permalink_url: String,
}
