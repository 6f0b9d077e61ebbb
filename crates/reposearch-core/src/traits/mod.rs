//! Core traits for search backends and paging sources.

mod search;
mod source;

pub use search::SearchClient;
pub use source::PagingSource;
