//! reposearch-github - GitHub REST search client.
//!
//! [`GithubClient`] implements [`SearchClient`](reposearch_core::SearchClient)
//! against `GET /search/repositories` of the GitHub REST API or any
//! compatible server.

mod client;
mod endpoints;

pub use client::{DEFAULT_TIMEOUT, GithubClient};
