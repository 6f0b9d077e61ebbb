//! Paging source trait.

use std::fmt::Debug;
use std::hash::Hash;

use async_trait::async_trait;

use crate::paging::{LoadParams, LoadResult, PagingState};

/// Turns keyed load requests into pages.
///
/// A source is bound to one query for its whole life. The pager replaces it
/// with a fresh instance on invalidation and asks the new one where to
/// resume via [`PagingSource::refresh_key`].
#[async_trait]
pub trait PagingSource: Send + Sync + 'static {
    /// Key identifying a page.
    type Key: Copy + Eq + Ord + Hash + Debug + Send + Sync + 'static;
    /// Item type held in pages.
    type Item: Clone + Debug + Send + Sync + 'static;

    /// Load one page. Failures are reported as [`LoadResult::Error`], never
    /// by panicking.
    async fn load(&self, params: LoadParams<Self::Key>) -> LoadResult<Self::Key, Self::Item>;

    /// Key to reload from after invalidation, or `None` to start over.
    fn refresh_key(&self, state: &PagingState<Self::Key, Self::Item>) -> Option<Self::Key>;

    /// Key that a load without a key actually fetches, if the source has a
    /// fixed start.
    fn initial_key(&self) -> Option<Self::Key> {
        None
    }
}
