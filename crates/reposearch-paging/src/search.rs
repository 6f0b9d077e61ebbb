//! Search orchestration: one live paged stream per query.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use reposearch_core::{Repo, Result, SearchClient, SearchQuery};

use crate::handle::PagingHandle;
use crate::query_cache::QueryCache;
use crate::repository::RepoRepository;

/// Resolves user queries to paged streams, reusing the stream of a repeated
/// query.
///
/// All streams run under this value's scope and are cancelled when it is
/// dropped.
pub struct RepoSearch<C: ?Sized> {
    repository: RepoRepository<C>,
    cache: QueryCache<PagingHandle<Repo>>,
    scope: CancellationToken,
}

impl<C> RepoSearch<C>
where
    C: SearchClient + ?Sized + 'static,
{
    pub fn new(repository: RepoRepository<C>) -> Self {
        let scope = CancellationToken::new();
        Self {
            repository,
            cache: QueryCache::new(scope.clone()),
            scope,
        }
    }

    /// Search with the default paging configuration.
    pub fn with_client(client: Arc<C>) -> Self {
        Self::new(RepoRepository::new(client))
    }

    /// The stream for `query`. Surrounding whitespace is ignored and an
    /// empty query is rejected.
    pub fn search(&mut self, query: &str) -> Result<PagingHandle<Repo>> {
        let query = SearchQuery::new(query)?;
        let repository = &self.repository;
        Ok(self
            .cache
            .resolve(&query, |q, scope| repository.search_stream(q.clone(), scope)))
    }

    /// The query whose stream is currently cached.
    pub fn current_query(&self) -> Option<&SearchQuery> {
        self.cache.current_query()
    }
}

impl<C: ?Sized> Drop for RepoSearch<C> {
    fn drop(&mut self) {
        self.scope.cancel();
    }
}
