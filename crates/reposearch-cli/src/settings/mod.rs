//! Persisted settings and their resolution against flags and environment.

pub mod storage;
mod types;

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use reposearch_core::ApiUrl;

pub use types::Settings;

/// Environment variable overriding the configured API location.
pub const API_ENV: &str = "REPOSEARCH_API";

/// Settings after applying flag > environment > file > defaults.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub api: ApiUrl,
    pub page_size: u32,
    pub timeout: Duration,
}

/// Load the settings file and apply the `--api` flag and `REPOSEARCH_API`.
pub fn resolve(api_flag: Option<&str>) -> Result<Resolved> {
    let settings = storage::load()?;
    let env = std::env::var(API_ENV).ok().filter(|v| !v.trim().is_empty());
    resolve_with(settings, api_flag, env.as_deref())
}

fn resolve_with(settings: Settings, api_flag: Option<&str>, env: Option<&str>) -> Result<Resolved> {
    let (api, origin) = match (api_flag, env) {
        (Some(flag), _) => (flag, "flag"),
        (None, Some(env)) => (env, "environment"),
        (None, None) => (settings.api.as_str(), "settings"),
    };
    debug!(api, origin, "resolved API location");

    let api = ApiUrl::new(api).with_context(|| format!("Invalid API URL from {}", origin))?;

    Ok(Resolved {
        api,
        page_size: settings.page_size,
        timeout: Duration::from_secs(settings.timeout_secs),
    })
}
