//! Typed Graph API request builders.
//!
//! Entity ids and the access token are substituted as URL path segments and
//! query parameters, so values are always percent-encoded and can never
//! collide with other parts of the request.

use url::Url;

use crate::config::GraphSettings;
use crate::error::{Error, Result};

/// Field list for `fields=id` object listings.
const ID_FIELDS: &str = "id";

/// Fields requested for feed posts and post details in the posts pipeline.
const FEED_FIELDS: &str = "id,message,story,created_time,permalink_url,is_published";

/// Fields requested for the page photos listing in the posts pipeline.
const PHOTO_REF_FIELDS: &str = "id,page_story_id";

/// Fields requested for post details in the media pipeline.
const ATTACHMENT_FIELDS: &str = "id,created_time,permalink_url,attachments";

/// Fields requested for album/entity photo nodes.
const PHOTO_FIELDS: &str =
    "id,page_story_id,created_time,name,alt_text,images,link,height,width";

/// Request builders for the Graph endpoints used by the pipelines.
pub struct Endpoints {
    base: Url,
    version: String,
}

impl Endpoints {
    /// Create builders for the configured Graph base URL and API version.
    pub fn new(settings: &GraphSettings) -> Result<Self> {
        let base = Url::parse(&settings.base_url)?;
        if base.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "Invalid Graph base URL: {}",
                settings.base_url
            )));
        }

        Ok(Self {
            base,
            version: settings.api_version.clone(),
        })
    }

    /// Page posts listing, ids only.
    pub fn page_post_ids(&self, page_id: &str, token: &str) -> Url {
        self.with_query(self.edge(page_id, "posts"), ID_FIELDS, token)
    }

    /// Page feed with full post fields.
    pub fn page_feed(&self, page_id: &str, token: &str) -> Url {
        self.with_query(self.edge(page_id, "feed"), FEED_FIELDS, token)
    }

    /// Page photos listing with story references.
    pub fn page_photo_refs(&self, page_id: &str, token: &str) -> Url {
        self.with_query(self.edge(page_id, "photos"), PHOTO_REF_FIELDS, token)
    }

    /// Page albums listing, ids only.
    pub fn page_albums(&self, page_id: &str, token: &str) -> Url {
        self.with_query(self.edge(page_id, "albums"), ID_FIELDS, token)
    }

    /// Photos of an album, or of the page itself (profile photos).
    pub fn entity_photos(&self, entity_id: &str, token: &str) -> Url {
        self.with_query(self.edge(entity_id, "photos"), PHOTO_FIELDS, token)
    }

    /// Single post with its attachment tree (media pipeline).
    pub fn post_attachments(&self, post_id: &str, token: &str) -> Url {
        self.with_query(self.object(post_id), ATTACHMENT_FIELDS, token)
    }

    /// Single post with feed fields (posts pipeline).
    pub fn post_details(&self, post_id: &str, token: &str) -> Url {
        self.with_query(self.object(post_id), FEED_FIELDS, token)
    }

    /// URL addressing a single object: `{base}/{version}/{id}`.
    fn object(&self, id: &str) -> Url {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .expect("base URL validated at construction")
            .pop_if_empty()
            .push(&self.version)
            .push(id);
        url
    }

    /// URL addressing an edge of an object: `{base}/{version}/{id}/{edge}`.
    fn edge(&self, id: &str, edge: &str) -> Url {
        let mut url = self.object(id);
        url.path_segments_mut()
            .expect("base URL validated at construction")
            .push(edge);
        url
    }

    fn with_query(&self, mut url: Url, fields: &str, token: &str) -> Url {
        url.query_pairs_mut()
            .append_pair("fields", fields)
            .append_pair("access_token", token);
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> Endpoints {
        Endpoints::new(&GraphSettings::default()).unwrap()
    }

    #[test]
    fn test_page_post_ids_url() {
        let url = endpoints().page_post_ids("12345", "secret");
        assert_eq!(
            url.as_str(),
            "https://graph.facebook.com/v20.0/12345/posts?fields=id&access_token=secret"
        );
    }

    #[test]
    fn test_entity_photos_url() {
        let url = endpoints().entity_photos("67890", "secret");
        assert_eq!(url.path(), "/v20.0/67890/photos");
        assert!(url
            .query()
            .unwrap()
            .contains("fields=id%2Cpage_story_id%2Ccreated_time"));
    }

    #[test]
    fn test_id_is_percent_encoded() {
        // A hostile id cannot escape its path segment.
        let url = endpoints().post_attachments("a/b?c", "secret");
        assert_eq!(url.path(), "/v20.0/a%2Fb%3Fc");
    }

    #[test]
    fn test_token_is_percent_encoded() {
        let url = endpoints().page_feed("12345", "se&cret=x");
        assert!(url.query().unwrap().contains("access_token=se%26cret%3Dx"));
    }

    #[test]
    fn test_placeholder_like_values_stay_literal() {
        // Ids that look like template placeholders are plain data here.
        let url = endpoints().page_albums("page_id", "fb_access_token");
        assert_eq!(url.path(), "/v20.0/page_id/albums");
        assert!(url
            .query()
            .unwrap()
            .contains("access_token=fb_access_token"));
    }

    #[test]
    fn test_custom_api_version() {
        let settings = GraphSettings {
            base_url: "https://graph.facebook.com".to_string(),
            api_version: "v21.0".to_string(),
        };
        let url = Endpoints::new(&settings).unwrap().page_feed("1", "t");
        assert!(url.path().starts_with("/v21.0/"));
    }

    #[test]
    fn test_invalid_base_url() {
        let settings = GraphSettings {
            base_url: "not a url".to_string(),
            api_version: "v20.0".to_string(),
        };
        assert!(Endpoints::new(&settings).is_err());
    }
}
