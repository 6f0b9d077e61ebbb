//! Remote search client trait.

use async_trait::async_trait;

use crate::Result;
use crate::types::SearchResponse;

/// A backend that answers one paged repository search at a time.
///
/// Implementations issue exactly one request per call and never retry;
/// failures are returned to the caller, which decides what to do with them.
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Search repositories.
    ///
    /// `page` is 1-based and `per_page` is the number of items per page.
    /// The query is sent as given; qualifiers are the caller's business.
    async fn search_repos(&self, query: &str, page: u32, per_page: u32)
    -> Result<SearchResponse>;
}
