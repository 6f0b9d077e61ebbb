//! Config subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::output;
use crate::settings::{self, storage};

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print the current settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change one setting (api, page_size, timeout_secs)
    Set { key: String, value: String },

    /// Print the settings file location
    Path,
}

pub fn handle(cmd: ConfigCommand) -> Result<()> {
    match cmd.command {
        ConfigSubcommand::Show { json } => show(json),
        ConfigSubcommand::Set { key, value } => set(&key, &value),
        ConfigSubcommand::Path => {
            println!("{}", storage::settings_path()?.display());
            Ok(())
        }
    }
}

fn show(json: bool) -> Result<()> {
    let settings = storage::load()?;
    if json {
        return output::json_pretty(&settings);
    }

    for key in settings::Settings::KEYS {
        if let Some(value) = settings.get(key) {
            output::field(key, &value);
        }
    }
    if let Ok(api) = std::env::var(settings::API_ENV) {
        output::field(&format!("{} (overrides api)", settings::API_ENV), &api);
    }
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut settings = storage::load()?;
    settings
        .set(key, value)
        .with_context(|| format!("Invalid value for {}", key))?;
    let path = storage::save(&settings)?;

    output::success(&format!("Set {} = {}", key, settings.get(key).unwrap_or_default()));
    output::field("File", &path.display().to_string());
    Ok(())
}
