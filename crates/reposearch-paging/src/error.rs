//! Pager errors.

use thiserror::Error;

/// Errors surfaced by a [`PagingHandle`](crate::PagingHandle).
///
/// Load failures never show up here; they are reported through
/// [`LoadState::Error`](reposearch_core::LoadState::Error) in snapshots.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PagerError {
    /// The pager task has stopped, either cancelled or with every handle gone.
    #[error("pager stopped")]
    Closed,
}
