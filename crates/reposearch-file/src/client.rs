//! Search client reading a repository dump from disk.

use std::cmp::Reverse;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use reposearch_core::error::InvalidInputError;
use reposearch_core::{ApiUrl, Repo, Result, SearchClient, SearchResponse};

use crate::filter::RepoFilter;

/// Name of the dump file inside the search root.
pub const REPOS_FILE: &str = "repos.json";

/// Either a bare array of repositories or a saved GitHub search response.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RepoDump {
    List(Vec<Repo>),
    Search { items: Vec<Repo> },
}

impl RepoDump {
    fn into_repos(self) -> Vec<Repo> {
        match self {
            RepoDump::List(repos) => repos,
            RepoDump::Search { items } => items,
        }
    }
}

/// Searches `<root>/repos.json`.
///
/// The dump is read on every search, so edits show up on the next load.
#[derive(Debug, Clone)]
pub struct FileSearchClient {
    root: PathBuf,
}

impl FileSearchClient {
    /// Create a client searching the dump in `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Create a client for a `file://` API location.
    pub fn from_api(api: &ApiUrl) -> Result<Self> {
        let root = api.dump_dir().ok_or_else(|| InvalidInputError::ApiUrl {
            value: api.to_string(),
            reason: "the file client needs a file:// URL".to_string(),
        })?;
        Ok(Self::new(root))
    }

    /// Get the root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the dump file path.
    pub fn repos_path(&self) -> PathBuf {
        self.root.join(REPOS_FILE)
    }

    async fn load_repos(&self) -> Result<Vec<Repo>> {
        let path = self.repos_path();
        let bytes = tokio::fs::read(&path).await?;
        let dump: RepoDump = serde_json::from_slice(&bytes)?;
        let repos = dump.into_repos();
        debug!(path = %path.display(), repos = repos.len(), "loaded repository dump");
        Ok(repos)
    }
}

fn validate_paging(page: u32, per_page: u32) -> Result<()> {
    if page == 0 {
        return Err(InvalidInputError::Other {
            message: "page is 1-based, got 0".to_string(),
        }
        .into());
    }
    if per_page == 0 {
        return Err(InvalidInputError::Other {
            message: "per_page must be positive".to_string(),
        }
        .into());
    }
    Ok(())
}

#[async_trait]
impl SearchClient for FileSearchClient {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    async fn search_repos(&self, query: &str, page: u32, per_page: u32) -> Result<SearchResponse> {
        validate_paging(page, per_page)?;

        let filter = RepoFilter::parse(query);
        let mut matches: Vec<Repo> = self
            .load_repos()
            .await?
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect();

        matches.sort_by(|a, b| {
            Reverse(a.stars)
                .cmp(&Reverse(b.stars))
                .then_with(|| a.full_name.cmp(&b.full_name))
        });

        let total_count = matches.len() as u64;
        let start = (page as usize - 1).saturating_mul(per_page as usize);
        let items: Vec<Repo> = matches
            .into_iter()
            .skip(start)
            .take(per_page as usize)
            .collect();

        debug!(page, items = items.len(), total = total_count, "file search");
        Ok(SearchResponse {
            total_count,
            incomplete_results: false,
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repos_path_is_under_root() {
        let client = FileSearchClient::new("/data/search");
        assert_eq!(client.repos_path(), PathBuf::from("/data/search/repos.json"));
    }

    #[test]
    fn from_api_requires_file_url() {
        assert!(FileSearchClient::from_api(&ApiUrl::github()).is_err());

        let api = ApiUrl::new("file:///data/search").unwrap();
        let client = FileSearchClient::from_api(&api).unwrap();
        assert_eq!(client.root(), Path::new("/data/search"));
    }

    #[test]
    fn rejects_zero_paging() {
        assert!(validate_paging(0, 50).is_err());
        assert!(validate_paging(1, 0).is_err());
        assert!(validate_paging(1, 50).is_ok());
    }

    #[test]
    fn dump_accepts_both_shapes() {
        let repo = serde_json::json!({
            "id": 1, "name": "a", "full_name": "o/a",
            "html_url": "https://github.com/o/a",
            "stargazers_count": 1, "forks_count": 0
        });

        let list: RepoDump = serde_json::from_value(serde_json::json!([repo.clone()])).unwrap();
        assert_eq!(list.into_repos().len(), 1);

        let search: RepoDump = serde_json::from_value(serde_json::json!({
            "total_count": 1,
            "items": [repo]
        }))
        .unwrap();
        assert_eq!(search.into_repos().len(), 1);
    }
}
