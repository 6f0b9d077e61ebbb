//! Settings data.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use reposearch_core::ApiUrl;
use reposearch_paging::PAGE_SIZE;

/// User settings stored as JSON in the config directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Search API location.
    pub api: String,
    /// Items per load; a multiple of the API page size.
    pub page_size: u32,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiUrl::GITHUB.to_string(),
            page_size: PAGE_SIZE,
            timeout_secs: 30,
        }
    }
}

impl Settings {
    pub const KEYS: [&'static str; 3] = ["api", "page_size", "timeout_secs"];

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api" => Some(self.api.clone()),
            "page_size" => Some(self.page_size.to_string()),
            "timeout_secs" => Some(self.timeout_secs.to_string()),
            _ => None,
        }
    }

    /// Validate and store `value` under `key`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api" => {
                let api = ApiUrl::new(value)?;
                self.api = api.to_string();
            }
            "page_size" => {
                let size: u32 = value.parse()?;
                if size == 0 || size % PAGE_SIZE != 0 {
                    bail!("page_size must be a positive multiple of {}", PAGE_SIZE);
                }
                self.page_size = size;
            }
            "timeout_secs" => {
                let secs: u64 = value.parse()?;
                if secs == 0 {
                    bail!("timeout_secs must be positive");
                }
                self.timeout_secs = secs;
            }
            _ => bail!(
                "Unknown setting '{}' (expected one of: {})",
                key,
                Self::KEYS.join(", ")
            ),
        }
        Ok(())
    }
}
