#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use serde_json::{Value, json};
use tempfile::TempDir;
use url::Url;

/// A temporary HOME plus a search root holding `repos.json`.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("home")).unwrap();
        std::fs::create_dir_all(dir.path().join("repos")).unwrap();
        Self { dir }
    }

    /// Sandbox whose dump holds `count` repositories named `crate-000`...
    pub fn with_repos(count: u64) -> Self {
        let sandbox = Self::new();
        let repos: Vec<Value> = (0..count).map(repo_json).collect();
        sandbox.write_dump(&Value::Array(repos));
        sandbox
    }

    pub fn home(&self) -> PathBuf {
        self.dir.path().join("home")
    }

    pub fn repos_dir(&self) -> PathBuf {
        self.dir.path().join("repos")
    }

    pub fn api_url(&self) -> String {
        file_api_url(&self.repos_dir())
    }

    pub fn write_dump(&self, dump: &Value) {
        std::fs::write(
            self.repos_dir().join("repos.json"),
            serde_json::to_vec(dump).unwrap(),
        )
        .unwrap();
    }

    /// Run the CLI with isolated settings and the sandbox API in the environment.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args).output().expect("Failed to execute CLI")
    }

    /// Run the CLI and expect success.
    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Run the CLI feeding `input` on stdin.
    pub fn run_with_input(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to execute CLI");
        child
            .stdin
            .take()
            .unwrap()
            .write_all(input.as_bytes())
            .unwrap();
        child.wait_with_output().expect("Failed to wait for CLI")
    }

    fn command(&self, args: &[&str]) -> Command {
        let home = self.home();
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_reposearch"));
        cmd.args(args);
        cmd.env("HOME", &home);
        cmd.env("XDG_CONFIG_HOME", home.join("config"));
        cmd.env("REPOSEARCH_API", self.api_url());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("RUST_LOG");
        cmd
    }
}

pub fn file_api_url(path: &Path) -> String {
    Url::from_directory_path(path)
        .expect("Failed to convert path to file URL")
        .to_string()
}

pub fn repo_json(i: u64) -> Value {
    json!({
        "id": i,
        "name": format!("crate-{i:03}"),
        "full_name": format!("owner/crate-{i:03}"),
        "description": "a rust crate",
        "html_url": format!("https://github.com/owner/crate-{i:03}"),
        "stargazers_count": 1000 - i,
        "forks_count": 0,
        "language": "Rust"
    })
}

/// Parse JSON-lines output into values.
pub fn json_lines(stdout: &str) -> Vec<Value> {
    stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("line is JSON"))
        .collect()
}
