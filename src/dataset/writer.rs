//! CSV dataset serialization.

use std::path::Path;

use serde::Serialize;

use crate::dataset::record::{MediaRecord, PostRecord, MEDIA_COLUMNS, POST_COLUMNS};
use crate::error::Result;
use crate::fs::paths::ensure_parent_dir;

/// Write the ordered media dataset with its fixed column schema.
pub fn write_media_csv(path: &Path, records: &[MediaRecord]) -> Result<()> {
    write_records(path, &MEDIA_COLUMNS, records)
}

/// Write the ordered posts dataset with its fixed column schema.
pub fn write_posts_csv(path: &Path, records: &[PostRecord]) -> Result<()> {
    write_records(path, &POST_COLUMNS, records)
}

/// Header row first (even for an empty dataset), then one row per record in
/// dataset order. `None` fields serialize as empty.
fn write_records<T: Serialize>(path: &Path, columns: &[&str], records: &[T]) -> Result<()> {
    ensure_parent_dir(path)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(columns)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}
