//! GitHub REST endpoint paths and wire types.

use serde::{Deserialize, Serialize};

/// Repository search.
pub const SEARCH_REPOSITORIES: &str = "search/repositories";

/// Media type GitHub recommends for REST calls.
pub const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";

/// Query string of a repository search.
#[derive(Debug, Serialize)]
pub struct SearchRepositoriesParams<'a> {
    pub q: &'a str,
    pub page: u32,
    pub per_page: u32,
}

/// Body GitHub sends with error statuses.
#[derive(Debug, Deserialize)]
pub struct GithubErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    pub documentation_url: Option<String>,
}
