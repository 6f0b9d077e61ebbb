//! reposearch-file - Offline repository search.
//!
//! [`FileSearchClient`] answers searches from a `repos.json` dump on disk
//! with the same paging contract as the GitHub API, which makes it usable
//! for demos, fixtures and working without network access.

mod client;
mod filter;

pub use client::{FileSearchClient, REPOS_FILE};
pub use filter::{Field, RepoFilter};
