//! Entry point turning a query into a paged stream of repositories.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;

use reposearch_core::{Repo, SearchClient, SearchQuery};

use crate::config::PagingConfig;
use crate::handle::PagingHandle;
use crate::pager::Pager;
use crate::source::{PAGE_SIZE, RepoPagingSource};

/// Creates pagers over one search backend.
pub struct RepoRepository<C: ?Sized> {
    client: Arc<C>,
    config: PagingConfig,
}

impl<C> RepoRepository<C>
where
    C: SearchClient + ?Sized + 'static,
{
    /// Repository loading [`PAGE_SIZE`] items per load.
    pub fn new(client: Arc<C>) -> Self {
        Self::with_config(client, PagingConfig::new(PAGE_SIZE))
    }

    pub fn with_config(client: Arc<C>, config: PagingConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &PagingConfig {
        &self.config
    }

    /// Start a pager for `query`, stopped when `cancel` fires.
    pub fn search_stream(&self, query: SearchQuery, cancel: CancellationToken) -> PagingHandle<Repo> {
        info!(%query, page_size = self.config.page_size, "starting search");
        let client = Arc::clone(&self.client);
        Pager::new(self.config, move || {
            RepoPagingSource::new(Arc::clone(&client), query.clone())
        })
        .start(cancel)
    }
}

impl<C: ?Sized> Clone for RepoRepository<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            config: self.config,
        }
    }
}
