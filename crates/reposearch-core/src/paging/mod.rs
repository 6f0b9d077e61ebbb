//! Paging model shared by paging sources and the pager.
//!
//! A [`PagingSource`](crate::PagingSource) answers [`LoadParams`] with a
//! [`LoadResult`]; the pager tracks one [`LoadState`] per [`LoadType`] and
//! passes a [`PagingState`] back to the source when it needs a refresh key.

mod load_state;
mod params;
mod state;

pub use load_state::{LoadError, LoadState, LoadStates, LoadType};
pub use params::{LoadParams, LoadResult, Page};
pub use state::PagingState;
