//! HTTP client for the GitHub search API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};

use reposearch_core::error::{InvalidInputError, ProtocolError, TransportError};
use reposearch_core::{ApiUrl, Backend, Error, Result, SearchClient, SearchResponse};

use crate::endpoints::{
    ACCEPT_GITHUB_JSON, GithubErrorResponse, SEARCH_REPOSITORIES, SearchRepositoriesParams,
};

/// Request timeout used by [`GithubClient::new`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Searches repositories through a GitHub-compatible REST API.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    api: ApiUrl,
}

impl GithubClient {
    /// Create a client for `api` with the default timeout.
    pub fn new(api: ApiUrl) -> Result<Self> {
        Self::with_timeout(api, DEFAULT_TIMEOUT)
    }

    /// Create a client whose requests give up after `timeout`.
    ///
    /// Fails for non-HTTP locations such as `file://`.
    pub fn with_timeout(api: ApiUrl, timeout: Duration) -> Result<Self> {
        if api.backend() != &Backend::Rest {
            return Err(InvalidInputError::ApiUrl {
                value: api.to_string(),
                reason: "the GitHub client needs an http(s) URL".to_string(),
            }
            .into());
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_GITHUB_JSON));

        let http = reqwest::Client::builder()
            .user_agent(concat!("reposearch/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(transport_error)?;

        Ok(Self { http, api })
    }

    /// Returns the API location this client talks to.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        params: &SearchRepositoriesParams<'_>,
    ) -> Result<R> {
        let url = self.api.endpoint(path);
        debug!(%url, "GET");
        trace!(?params, "query parameters");

        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    async fn handle_response<R: DeserializeOwned>(&self, response: reqwest::Response) -> Result<R> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            let body = response.bytes().await.map_err(transport_error)?;
            Ok(serde_json::from_slice(&body)?)
        } else {
            Err(Error::Protocol(self.parse_error_response(response).await))
        }
    }

    async fn parse_error_response(&self, response: reqwest::Response) -> ProtocolError {
        let status = response.status().as_u16();

        match response.json::<GithubErrorResponse>().await {
            Ok(body) => ProtocolError::new(status, body.message),
            Err(_) => ProtocolError::new(status, None),
        }
    }
}

#[async_trait]
impl SearchClient for GithubClient {
    #[instrument(skip(self), fields(api = %self.api))]
    async fn search_repos(&self, query: &str, page: u32, per_page: u32) -> Result<SearchResponse> {
        let params = SearchRepositoriesParams {
            q: query,
            page,
            per_page,
        };
        let response: SearchResponse = self.get(SEARCH_REPOSITORIES, &params).await?;
        debug!(
            items = response.items.len(),
            total = response.total_count,
            incomplete = response.incomplete_results,
            "search response"
        );
        Ok(response)
    }
}

fn transport_error(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let api = ApiUrl::github();
        let client = GithubClient::new(api.clone()).unwrap();
        assert_eq!(client.api(), &api);
    }

    #[test]
    fn rejects_file_locations() {
        let api = ApiUrl::new("file:///tmp/repos").unwrap();
        let err = GithubClient::new(api).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
