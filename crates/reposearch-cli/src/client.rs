//! Search backend selected by the API location.

use std::time::Duration;

use async_trait::async_trait;

use reposearch_core::{ApiUrl, Backend, Result, SearchClient, SearchResponse};
use reposearch_file::FileSearchClient;
use reposearch_github::GithubClient;

/// Search client wrapper for CLI use.
#[derive(Debug)]
pub enum CliClient {
    File(FileSearchClient),
    Github(GithubClient),
}

impl CliClient {
    /// `file://` locations search a local dump; REST locations go to GitHub.
    pub fn connect(api: &ApiUrl, timeout: Duration) -> Result<Self> {
        match api.backend() {
            Backend::Dump(dir) => Ok(CliClient::File(FileSearchClient::new(dir))),
            Backend::Rest => Ok(CliClient::Github(GithubClient::with_timeout(
                api.clone(),
                timeout,
            )?)),
        }
    }
}

#[async_trait]
impl SearchClient for CliClient {
    async fn search_repos(&self, query: &str, page: u32, per_page: u32) -> Result<SearchResponse> {
        match self {
            CliClient::File(client) => client.search_repos(query, page, per_page).await,
            CliClient::Github(client) => client.search_repos(query, page, per_page).await,
        }
    }
}
