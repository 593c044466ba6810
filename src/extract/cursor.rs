//! Paging cursor traversal.

use serde::de::DeserializeOwned;
use url::Url;

use crate::api::types::Page;
use crate::api::GraphClient;
use crate::error::Result;

/// Walks a paginated Graph collection by following `paging.next` cursors.
///
/// Each [`next_page`](CursorWalker::next_page) call performs one GET and
/// yields that page's `data` collection; an absent or empty cursor ends the
/// traversal. Transport failures propagate immediately — there is no retry.
pub struct CursorWalker<'a> {
    client: &'a GraphClient,
    next: Option<Url>,
}

impl<'a> CursorWalker<'a> {
    /// Start a traversal at the given collection URL.
    pub fn new(client: &'a GraphClient, start: Url) -> Self {
        Self {
            client,
            next: Some(start),
        }
    }

    /// Fetch the next page, or `None` once the collection is exhausted.
    ///
    /// A page with an empty `data` collection and no further cursor is a
    /// normal end of traversal, not an error.
    pub async fn next_page<T: DeserializeOwned>(&mut self) -> Result<Option<Vec<T>>> {
        let Some(url) = self.next.take() else {
            return Ok(None);
        };

        let page: Page<T> = self.client.fetch(url).await?;

        self.next = match page.paging.and_then(|paging| paging.next) {
            Some(cursor) if !cursor.is_empty() => Some(Url::parse(&cursor)?),
            _ => None,
        };

        Ok(Some(page.data))
    }
}
