//! Settings file location and persistence.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::debug;

use super::Settings;

/// Get the settings file path.
pub fn settings_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "reposearch").context("Could not determine config directory")?;
    Ok(dirs.config_dir().join("settings.json"))
}

/// Load settings, falling back to defaults when no file exists.
pub fn load() -> Result<Settings> {
    let path = settings_path()?;

    if !path.exists() {
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }

    let json = fs::read_to_string(&path).context("Failed to read settings file")?;
    serde_json::from_str(&json).context("Invalid settings file")
}

/// Save settings to disk.
pub fn save(settings: &Settings) -> Result<PathBuf> {
    let path = settings_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("Failed to create config directory")?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(&path, json).context("Failed to write settings file")?;
    debug!(path = %path.display(), "settings saved");

    Ok(path)
}
