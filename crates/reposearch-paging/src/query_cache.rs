//! Memoizes the live stream of the most recent query.

use tokio_util::sync::CancellationToken;
use tracing::debug;

use reposearch_core::SearchQuery;

use crate::handle::PagingHandle;

/// A stream handle the cache can ask whether it is still running.
pub trait LiveStream: Clone {
    fn is_live(&self) -> bool;
}

impl<T> LiveStream for PagingHandle<T> {
    fn is_live(&self) -> bool {
        !self.is_closed()
    }
}

/// The cached stream for one query.
#[derive(Debug)]
pub struct QueryCacheEntry<H> {
    query: SearchQuery,
    handle: H,
    scope: CancellationToken,
}

impl<H> QueryCacheEntry<H> {
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }
}

/// Single-slot cache from query to live stream.
///
/// Every stream is created under a child of the cache's scope. Switching to
/// a different query cancels the previous stream's scope, which stops its
/// pager and abandons its in-flight loads.
#[derive(Debug)]
pub struct QueryCache<H> {
    scope: CancellationToken,
    current: Option<QueryCacheEntry<H>>,
}

impl<H: LiveStream> QueryCache<H> {
    pub fn new(scope: CancellationToken) -> Self {
        Self {
            scope,
            current: None,
        }
    }

    /// Return the cached stream for `query`, or build one with `create`.
    ///
    /// `create` receives the query and the cancellation scope the new stream
    /// must run under.
    pub fn resolve<F>(&mut self, query: &SearchQuery, create: F) -> H
    where
        F: FnOnce(&SearchQuery, CancellationToken) -> H,
    {
        if let Some(entry) = &self.current
            && entry.query == *query
            && !entry.scope.is_cancelled()
            && entry.handle.is_live()
        {
            debug!(%query, "reusing cached search stream");
            return entry.handle.clone();
        }

        self.clear();

        let scope = self.scope.child_token();
        let handle = create(query, scope.clone());
        self.current = Some(QueryCacheEntry {
            query: query.clone(),
            handle: handle.clone(),
            scope,
        });
        handle
    }

    /// The current entry, if any.
    pub fn current(&self) -> Option<&QueryCacheEntry<H>> {
        self.current.as_ref()
    }

    /// The query of the current entry.
    pub fn current_query(&self) -> Option<&SearchQuery> {
        self.current.as_ref().map(|e| &e.query)
    }

    /// Drop the current entry and cancel its stream.
    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            debug!(query = %previous.query, "detaching previous search stream");
            previous.scope.cancel();
        }
    }
}
