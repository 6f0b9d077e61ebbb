//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use reposearch_core::{LoadState, LoadStates, Repo};

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print one repository as a numbered line.
pub fn repo(index: usize, repo: &Repo) {
    let language = repo.language.as_deref().unwrap_or("-");
    println!(
        "{:>5}  {}  {} {}  {}",
        index.to_string().dimmed(),
        repo.full_name.bold(),
        "★".yellow(),
        repo.stars,
        language.cyan()
    );
    if let Some(description) = &repo.description {
        println!("       {}", description.dimmed());
    }
}

fn state(state: &LoadState) -> String {
    match state {
        LoadState::Loading => "loading".yellow().to_string(),
        LoadState::Error(err) => format!("{} ({})", "error".red(), err),
        LoadState::NotLoading {
            end_of_pagination_reached: true,
        } => "done".green().to_string(),
        LoadState::NotLoading { .. } => "idle".to_string(),
    }
}

/// Print the per-direction load states on stderr.
pub fn load_states(states: &LoadStates, items: usize) {
    eprintln!(
        "{} {}  {} {}  {} {}  {} {}",
        "items".dimmed(),
        items,
        "refresh".dimmed(),
        state(&states.refresh),
        "prepend".dimmed(),
        state(&states.prepend),
        "append".dimmed(),
        state(&states.append),
    );
}
