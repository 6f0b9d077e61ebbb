//! Shared fakes for pager tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Semaphore;

use reposearch_core::error::TransportError;
use reposearch_core::{Repo, Result, SearchClient, SearchResponse};

/// How long a test waits for the pager before giving up.
pub const WAIT: Duration = Duration::from_secs(5);

/// One recorded `search_repos` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub query: String,
    pub page: u32,
    pub per_page: u32,
}

/// Search backend serving `total` repositories, with scripted failures and
/// an optional gate that holds every call until the test releases it.
pub struct FakeClient {
    total: usize,
    calls: Mutex<Vec<Call>>,
    failures: Mutex<HashMap<u32, VecDeque<String>>>,
    gate: Option<Semaphore>,
}

impl FakeClient {
    pub fn with_total(total: usize) -> Arc<Self> {
        Arc::new(Self {
            total,
            calls: Mutex::new(Vec::new()),
            failures: Mutex::new(HashMap::new()),
            gate: None,
        })
    }

    /// Like [`with_total`](Self::with_total) but every call waits for
    /// [`release`](Self::release).
    pub fn gated(total: usize) -> Arc<Self> {
        Arc::new(Self {
            total,
            calls: Mutex::new(Vec::new()),
            failures: Mutex::new(HashMap::new()),
            gate: Some(Semaphore::new(0)),
        })
    }

    /// Let `n` held calls through.
    pub fn release(&self, n: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(n);
        }
    }

    /// Make the next call for `page` fail with a connection error carrying
    /// `message`.
    pub fn fail_next(&self, page: u32, message: &str) {
        self.failures
            .lock()
            .unwrap()
            .entry(page)
            .or_default()
            .push_back(message.to_string());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn pages_requested(&self) -> Vec<u32> {
        self.calls().iter().map(|c| c.page).collect()
    }
}

#[async_trait]
impl SearchClient for FakeClient {
    async fn search_repos(&self, query: &str, page: u32, per_page: u32) -> Result<SearchResponse> {
        self.calls.lock().unwrap().push(Call {
            query: query.to_string(),
            page,
            per_page,
        });

        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }

        let failure = self
            .failures
            .lock()
            .unwrap()
            .get_mut(&page)
            .and_then(|q| q.pop_front());
        if let Some(message) = failure {
            return Err(TransportError::Connection { message }.into());
        }

        let start = ((page - 1) as usize) * per_page as usize;
        let end = (start + per_page as usize).min(self.total);
        let items = (start..end.max(start)).map(repo).collect();

        Ok(SearchResponse {
            total_count: self.total as u64,
            incomplete_results: false,
            items,
        })
    }
}

/// The `index`-th repository of a fake result set.
pub fn repo(index: usize) -> Repo {
    Repo {
        id: index as u64,
        name: format!("repo-{index}"),
        full_name: format!("owner/repo-{index}"),
        description: Some(format!("Repository number {index}")),
        url: format!("https://github.com/owner/repo-{index}"),
        stars: 1000u32.saturating_sub(index as u32),
        forks: 0,
        language: Some("Rust".to_string()),
    }
}

/// Await `future`, failing the test if it takes longer than [`WAIT`].
pub async fn within<F: Future>(future: F) -> F::Output {
    tokio::time::timeout(WAIT, future)
        .await
        .expect("timed out waiting for the pager")
}

/// Give the pager task a chance to process queued commands.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}
