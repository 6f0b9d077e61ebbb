//! Interactive browse command.
//!
//! Reads one command per line from stdin and drives the pager with it,
//! printing whatever the command caused to load.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use futures_util::StreamExt;
use tokio::io::{AsyncBufReadExt, BufReader};

use reposearch_core::Repo;
use reposearch_paging::{PagingHandle, PagingSnapshot, SnapshotStream};

use crate::output;

/// How long a command may stay without visible effect before it is treated
/// as a no-op.
const QUIET: Duration = Duration::from_millis(200);

const HELP: &str = "commands: n (next page), p (previous page), r (retry), i (invalidate), \
                    g <index> (go to item), s <query> (search), l (list), q (quit)";

#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// Initial search query
    pub query: String,

    /// Items per load, a multiple of 50 (defaults to the configured size)
    #[arg(long)]
    pub page_size: Option<u32>,
}

#[derive(Debug, PartialEq, Eq)]
enum Action {
    Next,
    Prev,
    Retry,
    Invalidate,
    Goto(usize),
    Search(String),
    List,
    Quit,
}

fn parse(line: &str) -> Option<Action> {
    let line = line.trim();
    let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    match cmd {
        "n" => Some(Action::Next),
        "p" => Some(Action::Prev),
        "r" => Some(Action::Retry),
        "i" => Some(Action::Invalidate),
        "g" => rest.parse().ok().map(Action::Goto),
        "s" if !rest.is_empty() => Some(Action::Search(rest.to_string())),
        "l" => Some(Action::List),
        "q" => Some(Action::Quit),
        _ => None,
    }
}

/// The stream currently being browsed and the last snapshot shown for it.
struct View {
    stream: PagingHandle<Repo>,
    updates: SnapshotStream<Repo>,
    shown: Option<Arc<PagingSnapshot<Repo>>>,
}

impl View {
    fn new(stream: PagingHandle<Repo>) -> Self {
        let updates = stream.subscribe();
        Self {
            stream,
            updates,
            shown: None,
        }
    }

    /// Wait for the pager to go idle, then print what changed.
    async fn settle(&mut self) {
        let mut latest: Option<Arc<PagingSnapshot<Repo>>> = None;
        loop {
            match tokio::time::timeout(QUIET, self.updates.next()).await {
                Ok(Some(snapshot)) => {
                    let idle = !snapshot.load_states().is_loading();
                    latest = Some(snapshot);
                    if idle {
                        break;
                    }
                }
                Ok(None) => break,
                Err(_) => {
                    if latest
                        .as_ref()
                        .is_none_or(|s| !s.load_states().is_loading())
                    {
                        break;
                    }
                }
            }
        }

        let snapshot = latest.unwrap_or_else(|| self.stream.snapshot());
        self.show(snapshot);
    }

    fn show(&mut self, snapshot: Arc<PagingSnapshot<Repo>>) {
        match &self.shown {
            Some(previous) if previous.session() == snapshot.session() => {
                let added = snapshot.len().saturating_sub(previous.len());
                let prepended = match (previous.get(0), snapshot.get(0)) {
                    (Some(before), Some(now)) => !before.same_repo(now),
                    _ => false,
                };
                if prepended {
                    print_range(&snapshot, 0, added);
                } else {
                    print_range(&snapshot, previous.len(), snapshot.len());
                }
            }
            _ => print_range(&snapshot, 0, snapshot.len()),
        }
        output::load_states(snapshot.load_states(), snapshot.len());
        self.shown = Some(snapshot);
    }
}

fn print_range(snapshot: &PagingSnapshot<Repo>, start: usize, end: usize) {
    for index in start..end {
        if let Some(repo) = snapshot.get(index) {
            output::repo(index, repo);
        }
    }
}

pub async fn run(args: BrowseArgs, api: Option<&str>) -> Result<()> {
    let mut search = super::open_search(api, args.page_size)?;
    let stream = search.search(&args.query).context("Invalid query")?;
    let mut view = View::new(stream);

    eprintln!("{}", HELP.dimmed());
    view.settle().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if line.trim().is_empty() {
            continue;
        }
        let Some(action) = parse(&line) else {
            output::error(&format!("Unknown command '{}'", line.trim()));
            eprintln!("{}", HELP.dimmed());
            continue;
        };

        match action {
            Action::Next => view.stream.append(),
            Action::Prev => view.stream.prepend(),
            Action::Retry => view.stream.retry(),
            Action::Invalidate => view.stream.refresh(),
            Action::Goto(index) => {
                match view.stream.snapshot().get(index) {
                    Some(repo) => output::repo(index, repo),
                    None => output::error(&format!("No item at {}", index)),
                }
                view.stream.access(index);
            }
            Action::Search(query) => match search.search(&query) {
                Ok(stream) if stream.same_stream(&view.stream) => {
                    eprintln!("{}", "Same query, keeping the live stream.".dimmed());
                    continue;
                }
                Ok(stream) => {
                    view = View::new(stream);
                }
                Err(err) => {
                    output::error(&err.to_string());
                    continue;
                }
            },
            Action::List => {
                let snapshot = view.stream.snapshot();
                print_range(&snapshot, 0, snapshot.len());
                output::load_states(snapshot.load_states(), snapshot.len());
                continue;
            }
            Action::Quit => break,
        }

        view.settle().await;
    }

    view.stream.cancel();
    Ok(())
}
