//! Graph API response type definitions.

use serde::Deserialize;
use serde_json::Value;

/// One page of a paginated Graph collection.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default)]
    pub paging: Option<Paging>,
}

/// Paging block carrying the cursor to the next page.
#[derive(Debug, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub next: Option<String>,
}

/// Nested `{ "data": [...] }` collection wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct DataList<T> {
    #[serde(default)]
    pub data: Vec<T>,
}

/// Bare object reference from a `fields=id` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectRef {
    pub id: String,
}

/// Photo reference from the page photos listing (posts pipeline).
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoRef {
    pub id: String,
    #[serde(default)]
    pub page_story_id: Option<String>,
}

/// Post detail response for the media pipeline.
///
/// Attachments stay raw [`Value`] subtrees: their shape varies per media
/// type and nesting level, and a malformed attachment must degrade a single
/// record rather than fail the whole page parse.
#[derive(Debug, Clone, Deserialize)]
pub struct PostDetails {
    pub id: String,
    pub created_time: String,
    #[serde(default)]
    pub permalink_url: Option<String>,
    #[serde(default)]
    pub attachments: Option<DataList<Value>>,
}

/// A post from the page feed (posts pipeline).
#[derive(Debug, Clone, Deserialize)]
pub struct FeedPost {
    pub id: String,
    pub created_time: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub story: Option<String>,
    #[serde(default)]
    pub is_published: Option<bool>,
    #[serde(default)]
    pub permalink_url: Option<String>,
}

/// A photo node from an album photos listing.
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoNode {
    pub id: String,
    #[serde(default)]
    pub page_story_id: Option<String>,
    #[serde(default)]
    pub created_time: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub images: Vec<ImageVariant>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

/// One rendition of a photo.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageVariant {
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub source: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_with_cursor() {
        let body = r#"{
            "data": [{"id": "1"}, {"id": "2"}],
            "paging": {"next": "https://example.com/page2", "previous": "https://example.com/page0"}
        }"#;

        let page: Page<ObjectRef> = serde_json::from_str(body).unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(
            page.paging.unwrap().next.as_deref(),
            Some("https://example.com/page2")
        );
    }

    #[test]
    fn test_parse_page_without_paging() {
        let page: Page<ObjectRef> = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(page.data.is_empty());
        assert!(page.paging.is_none());
    }

    #[test]
    fn test_parse_post_details_without_attachments() {
        let body = r#"{
            "id": "123_456",
            "created_time": "2024-03-05T10:00:00+0000",
            "permalink_url": "https://facebook.com/123_456"
        }"#;

        let post: PostDetails = serde_json::from_str(body).unwrap();
        assert!(post.attachments.is_none());
    }

    #[test]
    fn test_parse_photo_node() {
        let body = r#"{
            "id": "789",
            "page_story_id": "123_789",
            "created_time": "2024-03-05T10:00:00+0000",
            "name": "A photo",
            "images": [
                {"width": 720, "height": 480, "source": "https://cdn.example.com/photo.jpg"}
            ],
            "link": "https://facebook.com/photo/789",
            "width": 720,
            "height": 480
        }"#;

        let photo: PhotoNode = serde_json::from_str(body).unwrap();
        assert_eq!(photo.images.len(), 1);
        assert_eq!(photo.width, 720);
        assert_eq!(photo.page_story_id.as_deref(), Some("123_789"));
    }
}
