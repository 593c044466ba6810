//! Cross-path record merging and deduplication.

use std::collections::{HashMap, HashSet};

use crate::dataset::{MediaRecord, PostRecord};

/// Composite identity of a media record across traversal paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaKey {
    media_id: Option<String>,
    created_unix_timestamp: i64,
}

impl MediaKey {
    /// Key of the given record.
    pub fn of(record: &MediaRecord) -> Self {
        Self {
            media_id: record.media_id.clone(),
            created_unix_timestamp: record.created_unix_timestamp,
        }
    }
}

/// Deduplicated media dataset keyed by [`MediaKey`].
///
/// Insertion is last-write-wins: when two traversal paths produce the same
/// key, the record folded in later replaces the earlier one wholesale. The
/// media pipeline relies on this by absorbing paths in a fixed order —
/// posts, then profile photos, then albums.
#[derive(Debug, Default)]
pub struct MediaSet {
    records: HashMap<MediaKey, MediaRecord>,
}

impl MediaSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any existing record with the same key.
    pub fn insert(&mut self, record: MediaRecord) {
        self.records.insert(MediaKey::of(&record), record);
    }

    /// Fold a traversal path's records into the set, in order.
    pub fn absorb<I: IntoIterator<Item = MediaRecord>>(&mut self, records: I) {
        for record in records {
            self.insert(record);
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Extract the dataset ordered ascending by creation timestamp.
    pub fn into_sorted(self) -> Vec<MediaRecord> {
        let mut records: Vec<MediaRecord> = self.records.into_values().collect();
        records.sort_by_key(|record| record.created_unix_timestamp);
        records
    }
}

/// Deduplicated posts dataset.
///
/// Posts have no stable sub-key beyond the fields themselves, so identity is
/// the full field set: two records collapse only when every field matches.
#[derive(Debug, Default)]
pub struct PostSet {
    records: HashSet<PostRecord>,
}

impl PostSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: PostRecord) {
        self.records.insert(record);
    }

    pub fn absorb<I: IntoIterator<Item = PostRecord>>(&mut self, records: I) {
        for record in records {
            self.insert(record);
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Extract the dataset ordered ascending by creation timestamp.
    pub fn into_sorted(self) -> Vec<PostRecord> {
        let mut records: Vec<PostRecord> = self.records.into_iter().collect();
        records.sort_by_key(|record| record.created_unix_timestamp);
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media_record(media_id: Option<&str>, timestamp: i64, media_type: &str) -> MediaRecord {
        MediaRecord {
            id: "123_456".to_string(),
            created_time: "2024-03-05T10:00:00+0000".to_string(),
            created_unix_timestamp: timestamp,
            permalink_url: "https://facebook.com/123_456".to_string(),
            media_id: media_id.map(str::to_owned),
            media_page_url: None,
            media_title: None,
            media_description: None,
            media_type: media_type.to_string(),
            media_url: None,
            error: None,
        }
    }

    fn post_record(id: &str, timestamp: i64, message: Option<&str>) -> PostRecord {
        PostRecord {
            id: id.to_string(),
            created_time: "2024-03-05T10:00:00+0000".to_string(),
            created_unix_timestamp: timestamp,
            message: message.map(str::to_owned),
            story: None,
            is_published: Some(true),
            permalink_url: "https://facebook.com/post".to_string(),
        }
    }

    #[test]
    fn test_later_path_wins_on_key_collision() {
        let mut set = MediaSet::new();
        set.absorb(vec![media_record(Some("m1"), 100, "photo")]);
        set.absorb(vec![media_record(Some("m1"), 100, "cover_photo")]);

        let records = set.into_sorted();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].media_type, "cover_photo");
    }

    #[test]
    fn test_distinct_keys_are_kept() {
        let mut set = MediaSet::new();
        set.insert(media_record(Some("m1"), 100, "photo"));
        set.insert(media_record(Some("m1"), 200, "photo"));
        set.insert(media_record(Some("m2"), 100, "photo"));
        set.insert(media_record(None, 100, "photo"));

        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_into_sorted_orders_by_timestamp() {
        let mut set = MediaSet::new();
        set.insert(media_record(Some("m3"), 300, "photo"));
        set.insert(media_record(Some("m1"), 100, "photo"));
        set.insert(media_record(Some("m2"), 200, "photo"));

        let timestamps: Vec<i64> = set
            .into_sorted()
            .iter()
            .map(|r| r.created_unix_timestamp)
            .collect();
        assert_eq!(timestamps, vec![100, 200, 300]);
    }

    #[test]
    fn test_no_duplicate_keys_survive() {
        let mut set = MediaSet::new();
        for _ in 0..3 {
            set.absorb(vec![
                media_record(Some("m1"), 100, "photo"),
                media_record(Some("m2"), 200, "photo"),
            ]);
        }

        let records = set.into_sorted();
        let keys: HashSet<MediaKey> = records.iter().map(MediaKey::of).collect();
        assert_eq!(keys.len(), records.len());
    }

    #[test]
    fn test_posts_exact_duplicates_collapse() {
        let mut set = PostSet::new();
        set.absorb(vec![
            post_record("p1", 100, Some("hello")),
            post_record("p1", 100, Some("hello")),
        ]);

        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_posts_differing_fields_are_kept() {
        let mut set = PostSet::new();
        set.insert(post_record("p1", 100, Some("hello")));
        set.insert(post_record("p1", 100, Some("edited")));

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_posts_sorted_by_timestamp() {
        let mut set = PostSet::new();
        set.insert(post_record("p2", 200, None));
        set.insert(post_record("p1", 100, None));

        let sorted = set.into_sorted();
        let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }
}
