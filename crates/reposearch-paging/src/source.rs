//! Paging source over a repository search backend.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use reposearch_core::error::InvalidInputError;
use reposearch_core::{
    LoadParams, LoadResult, Page, PageKey, PagingSource, PagingState, Repo, Result, SearchClient,
    SearchQuery,
};

/// Number of items the search API returns per page.
pub const PAGE_SIZE: u32 = 50;

/// Loads pages of repositories matching one query.
///
/// Keys are 1-based page indices of a result set paged by [`PAGE_SIZE`]. A
/// load of `n * PAGE_SIZE` items covers `n` of those pages, so the next key
/// advances by `n`.
pub struct RepoPagingSource<C: ?Sized> {
    client: Arc<C>,
    query: SearchQuery,
}

impl<C: SearchClient + ?Sized> RepoPagingSource<C> {
    pub fn new(client: Arc<C>, query: SearchQuery) -> Self {
        Self { client, query }
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    async fn fetch(&self, params: LoadParams<PageKey>) -> Result<Page<PageKey, Repo>> {
        let step = page_step(params.load_size)?;
        let current = params.key.unwrap_or(PageKey::STARTING);

        let response = self
            .client
            .search_repos(&self.query.api_query(), current.get(), params.load_size)
            .await?;

        let repos = response.items;
        debug!(page = %current, items = repos.len(), total = response.total_count, "search page received");

        let next_key = if repos.is_empty() {
            None
        } else {
            Some(current.advance(step))
        };

        Ok(Page::new(repos, current.prev(), next_key))
    }
}

/// Number of [`PAGE_SIZE`] pages covered by one load.
///
/// Sizes that are not a positive multiple of [`PAGE_SIZE`] are rejected:
/// truncating them would make the next key drift from the remote paging, and
/// a size below [`PAGE_SIZE`] would never advance at all.
fn page_step(load_size: u32) -> Result<u32> {
    if load_size == 0 || load_size % PAGE_SIZE != 0 {
        return Err(InvalidInputError::LoadSize {
            load_size,
            reason: format!("must be a positive multiple of {}", PAGE_SIZE),
        }
        .into());
    }
    Ok(load_size / PAGE_SIZE)
}

#[async_trait]
impl<C> PagingSource for RepoPagingSource<C>
where
    C: SearchClient + ?Sized + 'static,
{
    type Key = PageKey;
    type Item = Repo;

    #[instrument(skip(self), fields(query = %self.query))]
    async fn load(&self, params: LoadParams<PageKey>) -> LoadResult<PageKey, Repo> {
        self.fetch(params).await.into()
    }

    /// The page nearest the anchor: one past its previous key, or one before
    /// its next key on the first page.
    fn refresh_key(&self, state: &PagingState<PageKey, Repo>) -> Option<PageKey> {
        let anchor = state.anchor_position?;
        let page = state.closest_page_to_position(anchor)?;
        page.prev_key
            .map(PageKey::next)
            .or_else(|| page.next_key.and_then(PageKey::prev))
    }

    fn initial_key(&self) -> Option<PageKey> {
        Some(PageKey::STARTING)
    }
}
