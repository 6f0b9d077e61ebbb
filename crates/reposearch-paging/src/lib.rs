//! reposearch-paging - Incremental pagination over a paged search API.
//!
//! A [`Pager`] drives a [`PagingSource`](reposearch_core::PagingSource) in
//! three directions (refresh, prepend, append) and publishes
//! [`PagingSnapshot`]s to any number of subscribers. [`RepoSearch`] sits on
//! top and keeps the stream of the most recent query alive.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use reposearch_paging::RepoSearch;
//! # use reposearch_core::{SearchClient, SearchResponse};
//! # struct Client;
//! # #[async_trait::async_trait]
//! # impl SearchClient for Client {
//! #     async fn search_repos(&self, _: &str, _: u32, _: u32) -> reposearch_core::Result<SearchResponse> {
//! #         Ok(SearchResponse::default())
//! #     }
//! # }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut search = RepoSearch::with_client(Arc::new(Client));
//! let stream = search.search("paging")?;
//!
//! let snapshot = stream.wait_for(|s| !s.load_states().refresh.is_loading()).await?;
//! for repo in snapshot.iter() {
//!     println!("{} ({} stars)", repo.full_name, repo.stars);
//! }
//!
//! // Near the end of the list: load the next page.
//! stream.append();
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod handle;
mod pager;
mod query_cache;
mod repository;
mod search;
mod snapshot;
mod source;

pub use config::PagingConfig;
pub use error::PagerError;
pub use handle::{PagingHandle, SnapshotStream};
pub use pager::Pager;
pub use query_cache::{LiveStream, QueryCache, QueryCacheEntry};
pub use repository::RepoRepository;
pub use search::RepoSearch;
pub use snapshot::PagingSnapshot;
pub use source::{PAGE_SIZE, RepoPagingSource};
