//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::browse::BrowseArgs;
use crate::commands::config::ConfigCommand;
use crate::commands::search::SearchArgs;

/// Paged GitHub repository search.
#[derive(Parser, Debug)]
#[command(name = "reposearch")]
#[command(author, version = env!("REPOSEARCH_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Search API base URL (https://, or file:// for a local repos.json)
    #[arg(long, global = true)]
    pub api: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search repositories and print the loaded pages
    Search(SearchArgs),

    /// Page through results interactively, one command per line on stdin
    Browse(BrowseArgs),

    /// Show or change persisted settings
    Config(ConfigCommand),
}
