//! reposearch-core - Core types and traits for paged repository search.
//!
//! Backends implement [`SearchClient`]; paging sources implement
//! [`PagingSource`] on top of a client and are driven by the pager in
//! `reposearch-paging`.

pub mod error;
pub mod paging;
pub mod traits;
pub mod types;

pub use error::Error;
pub use paging::{
    LoadError, LoadParams, LoadResult, LoadState, LoadStates, LoadType, Page, PagingState,
};
pub use traits::{PagingSource, SearchClient};
pub use types::{ApiUrl, Backend, PageKey, Repo, SearchQuery, SearchResponse};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
