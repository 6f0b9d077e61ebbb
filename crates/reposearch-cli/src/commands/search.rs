//! Search command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;
use futures_util::StreamExt;

use reposearch_core::LoadState;

use crate::output;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Number of pages to load
    #[arg(long, default_value_t = 1)]
    pub pages: usize,

    /// Items per load, a multiple of 50 (defaults to the configured size)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// How many times to retry a failed load before giving up
    #[arg(long, default_value_t = 2)]
    pub retries: u32,

    /// Output repositories as JSON, one per line
    #[arg(long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: SearchArgs, api: Option<&str>) -> Result<()> {
    let mut search = super::open_search(api, args.page_size)?;
    let stream = search.search(&args.query).context("Invalid query")?;
    let mut updates = stream.subscribe();

    let mut printed = 0;
    let mut pages = 0;
    let mut retries_left = args.retries;

    while let Some(snapshot) = updates.next().await {
        let states = snapshot.load_states();
        if states.is_loading() {
            continue;
        }

        if let Some((load_type, err)) = states.first_error() {
            if retries_left == 0 {
                bail!("{} failed: {}", load_type, err);
            }
            retries_left -= 1;
            tracing::warn!(%load_type, error = %err, retries_left, "load failed, retrying");
            stream.retry();
            continue;
        }

        if snapshot.page_count() > pages {
            pages = snapshot.page_count();
            retries_left = args.retries;
        }

        for repo in snapshot.iter().skip(printed) {
            if args.pretty {
                output::json_pretty(repo)?;
            } else if args.json {
                output::json(repo)?;
            } else {
                output::repo(printed, repo);
            }
            printed += 1;
        }

        if pages >= args.pages || states.append != LoadState::INCOMPLETE {
            break;
        }
        stream.append();
    }

    let snapshot = stream.snapshot();
    if snapshot.is_empty() {
        eprintln!("{}", "No repositories found.".dimmed());
    } else if snapshot.load_states().append.end_of_pagination_reached() {
        eprintln!("{}", format!("{} repositories, end of results", snapshot.len()).dimmed());
    } else {
        eprintln!("{}", format!("{} repositories loaded", snapshot.len()).dimmed());
    }

    Ok(())
}
