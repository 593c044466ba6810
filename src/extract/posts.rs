//! Posts extraction pipeline.

use crate::api::types::{FeedPost, PhotoRef};
use crate::api::{Endpoints, GraphClient};
use crate::dataset::PostRecord;
use crate::error::{Error, Result};
use crate::extract::cursor::CursorWalker;
use crate::extract::merge::PostSet;
use crate::extract::normalize::{parse_created_time, tabular_text};

/// Extracts the posts dataset of a page.
pub struct PostsExtractor<'a> {
    client: &'a GraphClient,
    endpoints: &'a Endpoints,
    token: &'a str,
}

impl<'a> PostsExtractor<'a> {
    pub fn new(client: &'a GraphClient, endpoints: &'a Endpoints, token: &'a str) -> Self {
        Self {
            client,
            endpoints,
            token,
        }
    }

    /// Run the full extraction, returning the deduplicated dataset ordered
    /// by creation timestamp.
    pub async fn run(&self, page_id: &str) -> Result<Vec<PostRecord>> {
        let mut dataset = PostSet::new();

        self.collect_feed(page_id, &mut dataset).await?;
        self.collect_photo_stories(page_id, &mut dataset).await?;

        Ok(dataset.into_sorted())
    }

    /// Walk the page feed.
    async fn collect_feed(&self, page_id: &str, dataset: &mut PostSet) -> Result<()> {
        let mut walker =
            CursorWalker::new(self.client, self.endpoints.page_feed(page_id, self.token));

        while let Some(posts) = walker.next_page::<FeedPost>().await? {
            for post in &posts {
                tracing::info!("Processed post {}", post.id);
                dataset.insert(post_record(post)?);
            }
        }

        Ok(())
    }

    /// Profile photos surface stories the feed listing omits; fetch the
    /// backing post of each photo.
    async fn collect_photo_stories(&self, page_id: &str, dataset: &mut PostSet) -> Result<()> {
        let mut walker = CursorWalker::new(
            self.client,
            self.endpoints.page_photo_refs(page_id, self.token),
        );

        while let Some(photos) = walker.next_page::<PhotoRef>().await? {
            for photo in &photos {
                let Some(story_id) = photo.page_story_id.as_deref() else {
                    tracing::warn!("Photo {} has no backing story, skipping", photo.id);
                    continue;
                };

                let post: FeedPost = self
                    .client
                    .fetch(self.endpoints.post_details(story_id, self.token))
                    .await?;
                tracing::info!("Processed photo story {}", post.id);
                dataset.insert(post_record(&post)?);
            }
        }

        Ok(())
    }
}

/// Normalize one feed post into a dataset record.
fn post_record(post: &FeedPost) -> Result<PostRecord> {
    Ok(PostRecord {
        id: post.id.clone(),
        created_time: post.created_time.clone(),
        created_unix_timestamp: parse_created_time(&post.created_time).map_err(|e| {
            Error::InvalidTimestamp {
                value: post.created_time.clone(),
                message: e.to_string(),
            }
        })?,
        message: post.message.as_deref().map(tabular_text),
        story: post.story.as_deref().map(tabular_text),
        is_published: post.is_published,
        permalink_url: post.permalink_url.clone().unwrap_or_default(),
    })
}
