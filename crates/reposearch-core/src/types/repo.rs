//! Repository search result types.

use serde::{Deserialize, Serialize};

/// A repository returned by a search.
///
/// Field names follow the GitHub REST API on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Repo {
    /// Numeric repository id.
    pub id: u64,

    /// Short name, e.g. `paging`.
    pub name: String,

    /// Owner-qualified name, e.g. `android/paging`.
    pub full_name: String,

    /// Free-form description, if the owner set one.
    #[serde(default)]
    pub description: Option<String>,

    /// Browser URL of the repository.
    #[serde(rename = "html_url")]
    pub url: String,

    /// Star count.
    #[serde(rename = "stargazers_count")]
    pub stars: u32,

    /// Fork count.
    #[serde(rename = "forks_count")]
    pub forks: u32,

    /// Primary language, if GitHub detected one.
    #[serde(default)]
    pub language: Option<String>,
}

impl Repo {
    /// Stable identity used to tell whether two results are the same
    /// repository; content changes are detected with `==`.
    pub fn identity(&self) -> &str {
        &self.full_name
    }

    /// Returns true if both values describe the same repository.
    pub fn same_repo(&self, other: &Repo) -> bool {
        self.identity() == other.identity()
    }
}

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Total number of matches reported by the backend.
    #[serde(default)]
    pub total_count: u64,

    /// True if the backend timed out before collecting every match.
    #[serde(default)]
    pub incomplete_results: bool,

    /// The repositories in this page.
    #[serde(default)]
    pub items: Vec<Repo>,
}
