//! Core reposearch types.
//!
//! These types enforce their invariants at construction time,
//! so invalid keys, queries and URLs cannot reach the pager.

mod api_url;
mod page_key;
mod query;
mod repo;

pub use api_url::{ApiUrl, Backend};
pub use page_key::PageKey;
pub use query::SearchQuery;
pub use repo::{Repo, SearchResponse};
