//! Settings persistence through the config subcommands.

mod common;

use common::Sandbox;

#[test]
fn test_config_show_defaults() {
    let sandbox = Sandbox::new();

    let stdout = sandbox.run_success(&["config", "show", "--json"]);
    let settings: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(settings["api"], "https://api.github.com");
    assert_eq!(settings["page_size"], 50);
    assert_eq!(settings["timeout_secs"], 30);
}

#[test]
fn test_config_set_persists() {
    let sandbox = Sandbox::new();

    sandbox.run_success(&["config", "set", "page_size", "100"]);

    let stdout = sandbox.run_success(&["config", "show", "--json"]);
    let settings: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(settings["page_size"], 100);

    let path = sandbox.run_success(&["config", "path"]);
    let path = std::path::PathBuf::from(path.trim());
    assert!(path.starts_with(sandbox.home()));
    assert!(path.exists());
}

#[test]
fn test_config_set_rejects_invalid_values() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["config", "set", "page_size", "42"]);
    assert!(!output.status.success());

    let output = sandbox.run(&["config", "set", "api", "http://example.com"]);
    assert!(!output.status.success());

    let output = sandbox.run(&["config", "set", "colour", "blue"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown setting"));
}

#[test]
fn test_configured_page_size_is_used_by_search() {
    let sandbox = Sandbox::with_repos(120);

    sandbox.run_success(&["config", "set", "page_size", "100"]);
    let stdout = sandbox.run_success(&["search", "crate", "--json"]);

    assert_eq!(common::json_lines(&stdout).len(), 100);
}
