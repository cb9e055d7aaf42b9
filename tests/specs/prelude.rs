//! Shared helpers for CLI specs

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Nothing listens here; connections are refused immediately
pub const CLOSED_ENDPOINT: &str = "http://127.0.0.1:9";

/// The seqlog binary with diagnostics pinned to the default level
pub fn seqlog() -> Command {
    let mut cmd = Command::cargo_bin("seqlog").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// seqlog with a complete target on the command line
pub fn seqlog_targeted() -> Command {
    let mut cmd = seqlog();
    cmd.args([
        "--region",
        "us-east-1",
        "--log-group",
        "specs",
        "--endpoint",
        CLOSED_ENDPOINT,
        "--max-retries",
        "2",
    ]);
    cmd
}

/// Scratch directory for config files
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Project {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root and return its path
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }
}

pub fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
