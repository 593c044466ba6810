//! Media-attachment extraction pipeline.

use std::collections::HashSet;

use crate::api::types::{ObjectRef, PhotoNode, PostDetails};
use crate::api::{Endpoints, GraphClient};
use crate::dataset::MediaRecord;
use crate::error::{Error, Result};
use crate::extract::cursor::CursorWalker;
use crate::extract::flatten::flatten_nested;
use crate::extract::merge::MediaSet;
use crate::extract::normalize::parse_created_time;
use crate::extract::resolve::{resolve_attachment, resolve_photo, PostContext};

/// Children key of the attachment tree.
const SUBATTACHMENTS_FIELD: &str = "subattachments";

/// Extracts the media dataset of a page.
///
/// Traversal paths run strictly in the order posts → profile photos →
/// albums; on key collisions the later path's record wins.
pub struct MediaExtractor<'a> {
    client: &'a GraphClient,
    endpoints: &'a Endpoints,
    token: &'a str,
    accepted_types: &'a HashSet<String>,
}

impl<'a> MediaExtractor<'a> {
    pub fn new(
        client: &'a GraphClient,
        endpoints: &'a Endpoints,
        token: &'a str,
        accepted_types: &'a HashSet<String>,
    ) -> Self {
        Self {
            client,
            endpoints,
            token,
            accepted_types,
        }
    }

    /// Run the full extraction, returning the merged dataset ordered by
    /// creation timestamp.
    pub async fn run(&self, page_id: &str) -> Result<Vec<MediaRecord>> {
        let mut dataset = MediaSet::new();

        self.collect_post_attachments(page_id, &mut dataset).await?;

        // The page object itself serves its profile photos as an album.
        self.collect_entity_photos(page_id, &mut dataset).await?;

        self.collect_albums(page_id, &mut dataset).await?;

        Ok(dataset.into_sorted())
    }

    /// Walk the page's posts and resolve each post's attachment tree.
    async fn collect_post_attachments(&self, page_id: &str, dataset: &mut MediaSet) -> Result<()> {
        let mut walker = CursorWalker::new(
            self.client,
            self.endpoints.page_post_ids(page_id, self.token),
        );

        while let Some(posts) = walker.next_page::<ObjectRef>().await? {
            for post_ref in &posts {
                let details: PostDetails = self
                    .client
                    .fetch(self.endpoints.post_attachments(&post_ref.id, self.token))
                    .await?;

                let records = post_media_records(&details, self.accepted_types)?;
                tracing::info!(
                    "Processed post {} ({} media records)",
                    post_ref.id,
                    records.len()
                );
                for record in &records {
                    if let Some(error) = &record.error {
                        tracing::warn!(
                            "Attachment {} of post {} resolved with error: {}",
                            record.media_id.as_deref().unwrap_or("<unknown>"),
                            post_ref.id,
                            error
                        );
                    }
                }
                dataset.absorb(records);
            }
        }

        Ok(())
    }

    /// Walk the page's albums, absorbing each album's photos.
    async fn collect_albums(&self, page_id: &str, dataset: &mut MediaSet) -> Result<()> {
        let mut walker = CursorWalker::new(
            self.client,
            self.endpoints.page_albums(page_id, self.token),
        );

        while let Some(albums) = walker.next_page::<ObjectRef>().await? {
            for album in &albums {
                self.collect_entity_photos(&album.id, dataset).await?;
            }
        }

        Ok(())
    }

    /// Walk the photos of one album (or of the page itself).
    async fn collect_entity_photos(&self, entity_id: &str, dataset: &mut MediaSet) -> Result<()> {
        let mut walker = CursorWalker::new(
            self.client,
            self.endpoints.entity_photos(entity_id, self.token),
        );

        let mut photo_count = 0usize;
        while let Some(photos) = walker.next_page::<PhotoNode>().await? {
            photo_count += photos.len();
            for photo in &photos {
                let record = resolve_photo(photo);
                match &record.error {
                    Some(error) => {
                        tracing::warn!("Photo {} resolved with error: {}", photo.id, error)
                    }
                    None => tracing::debug!("Processed photo {}", photo.id),
                }
                dataset.insert(record);
            }
        }

        tracing::info!("Processed {} photos of {}", photo_count, entity_id);
        Ok(())
    }
}

/// Flatten and resolve every attachment of one post.
///
/// An unparseable post timestamp aborts the traversal path: without it the
/// records cannot be keyed or ordered.
fn post_media_records(
    details: &PostDetails,
    accepted_types: &HashSet<String>,
) -> Result<Vec<MediaRecord>> {
    let ctx = PostContext {
        id: details.id.clone(),
        created_time: details.created_time.clone(),
        created_unix_timestamp: parse_created_time(&details.created_time).map_err(|e| {
            Error::InvalidTimestamp {
                value: details.created_time.clone(),
                message: e.to_string(),
            }
        })?,
        permalink_url: details.permalink_url.clone().unwrap_or_default(),
    };

    let mut records = Vec::new();
    if let Some(attachments) = &details.attachments {
        for attachment in &attachments.data {
            for node in flatten_nested(Some(attachment), SUBATTACHMENTS_FIELD) {
                if let Some(record) = resolve_attachment(&ctx, node, accepted_types) {
                    records.push(record);
                }
            }
        }
    }

    Ok(records)
}
