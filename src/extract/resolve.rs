//! Media resolution: turning raw attachment and photo nodes into records.

use std::collections::HashSet;

use serde_json::Value;
use thiserror::Error;

use crate::api::types::{ImageVariant, PhotoNode};
use crate::dataset::MediaRecord;
use crate::extract::normalize::{parse_created_time, tabular_text};

/// Media type recorded for photo-sourced records.
const PHOTO_MEDIA_TYPE: &str = "photo";

/// A record-level resolution failure.
///
/// Rendered into the record's `error` column; never aborts the surrounding
/// traversal.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("attachment field '{0}' is not a string")]
    NotAString(&'static str),

    #[error("invalid created_time '{value}': {message}")]
    Timestamp { value: String, message: String },

    #[error("expected exactly one image variant matching {width}x{height}, found {matches}")]
    AmbiguousVariant {
        width: u32,
        height: u32,
        matches: usize,
    },
}

/// Identity of the post that owns a set of attachments.
#[derive(Debug, Clone)]
pub struct PostContext {
    pub id: String,
    pub created_time: String,
    pub created_unix_timestamp: i64,
    pub permalink_url: String,
}

/// Resolve a flattened attachment node into a media record.
///
/// Nodes whose `type` is missing or outside `accepted_types` produce no
/// record. Extraction failures past that point are captured into the
/// record's `error` field, keeping whatever fields were already resolved.
pub fn resolve_attachment(
    ctx: &PostContext,
    node: &Value,
    accepted_types: &HashSet<String>,
) -> Option<MediaRecord> {
    let media_type = node.get("type").and_then(Value::as_str)?;
    if !accepted_types.contains(media_type) {
        return None;
    }

    let mut record = MediaRecord {
        id: ctx.id.clone(),
        created_time: ctx.created_time.clone(),
        created_unix_timestamp: ctx.created_unix_timestamp,
        permalink_url: ctx.permalink_url.clone(),
        media_id: None,
        media_page_url: None,
        media_title: None,
        media_description: None,
        media_type: media_type.to_string(),
        media_url: None,
        error: None,
    };

    if let Err(e) = extract_attachment_fields(&mut record, node) {
        record.error = Some(e.to_string());
    }

    Some(record)
}

/// Field-by-field extraction; bails on the first malformed field, leaving
/// earlier fields in place.
fn extract_attachment_fields(
    record: &mut MediaRecord,
    node: &Value,
) -> Result<(), ResolveError> {
    if let Some(title) = string_field(node, "title")? {
        record.media_title = Some(tabular_text(title));
    }

    if let Some(description) = string_field(node, "description")? {
        record.media_description = Some(tabular_text(description));
    }

    if let Some(target) = node.get("target") {
        record.media_id = string_field(target, "id")?.map(str::to_owned);
        record.media_page_url = string_field(target, "url")?.map(str::to_owned);
    }

    if let Some(media) = node.get("media") {
        record.media_url = match string_field(media, "source")? {
            Some(source) => Some(source.to_owned()),
            None => match media.get("image") {
                Some(image) => string_field(image, "src")?.map(str::to_owned),
                None => None,
            },
        };
    }

    Ok(())
}

/// Look up an optional string field, flagging present-but-mistyped values.
fn string_field<'a>(
    node: &'a Value,
    field: &'static str,
) -> Result<Option<&'a str>, ResolveError> {
    match node.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or(ResolveError::NotAString(field)),
    }
}

/// Resolve a photo node into a media record with `media_type` "photo".
///
/// Timestamp and variant-match failures are captured into `error`; the
/// record is emitted regardless, with `created_unix_timestamp` falling back
/// to 0 so it still keys and sorts deterministically.
pub fn resolve_photo(photo: &PhotoNode) -> MediaRecord {
    let mut record = MediaRecord {
        id: photo.page_story_id.clone().unwrap_or_default(),
        created_time: photo.created_time.clone(),
        created_unix_timestamp: 0,
        permalink_url: photo.link.clone().unwrap_or_default(),
        media_id: Some(photo.id.clone()),
        media_page_url: photo.link.clone(),
        media_title: photo.name.as_deref().map(tabular_text),
        media_description: photo.alt_text.as_deref().map(tabular_text),
        media_type: PHOTO_MEDIA_TYPE.to_string(),
        media_url: None,
        error: None,
    };

    if let Err(e) = extract_photo_fields(&mut record, photo) {
        record.error = Some(e.to_string());
    }

    record
}

fn extract_photo_fields(record: &mut MediaRecord, photo: &PhotoNode) -> Result<(), ResolveError> {
    record.created_unix_timestamp =
        parse_created_time(&photo.created_time).map_err(|e| ResolveError::Timestamp {
            value: photo.created_time.clone(),
            message: e.to_string(),
        })?;

    // The canonical rendition is the one whose dimensions equal the photo's
    // own; anything else is ambiguous.
    let matching: Vec<&ImageVariant> = photo
        .images
        .iter()
        .filter(|image| image.width == photo.width && image.height == photo.height)
        .collect();

    match matching.as_slice() {
        [variant] => {
            record.media_url = variant.source.clone();
            Ok(())
        }
        other => Err(ResolveError::AmbiguousVariant {
            width: photo.width,
            height: photo.height,
            matches: other.len(),
        }),
    }
}
