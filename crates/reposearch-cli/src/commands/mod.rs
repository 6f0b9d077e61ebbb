//! Subcommand implementations.

pub mod browse;
pub mod config;
pub mod search;

use std::sync::Arc;

use anyhow::{Context, Result, bail};

use reposearch_paging::{PAGE_SIZE, PagingConfig, RepoRepository, RepoSearch};

use crate::client::CliClient;
use crate::settings;

/// Build a search over the configured backend.
///
/// `page_size` overrides the configured load size.
fn open_search(api: Option<&str>, page_size: Option<u32>) -> Result<RepoSearch<CliClient>> {
    let resolved = settings::resolve(api)?;
    let page_size = page_size.unwrap_or(resolved.page_size);
    if page_size == 0 || page_size % PAGE_SIZE != 0 {
        bail!("Page size must be a positive multiple of {}", PAGE_SIZE);
    }

    let client = CliClient::connect(&resolved.api, resolved.timeout)
        .with_context(|| format!("Failed to open search backend {}", resolved.api))?;
    tracing::info!(api = %resolved.api, page_size, "search backend ready");

    let repository = RepoRepository::with_config(Arc::new(client), PagingConfig::new(page_size));
    Ok(RepoSearch::new(repository))
}
