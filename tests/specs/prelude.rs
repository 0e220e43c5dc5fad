//! Test helpers for behavioral specifications.
//!
//! Provides high-level DSL for testing laggard CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the laggard binary.
///
/// Threshold variables from the calling environment are cleared so specs
/// see the defaults unless they set them.
pub fn laggard_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("laggard"));
    cmd.env_remove("SLOW_TEST_REPORT_THRESHOLD")
        .env_remove("SLOW_TEST_FAIL_THRESHOLD")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Returns a command scanning `dir`.
pub fn scan(dir: &Path) -> Command {
    let mut cmd = laggard_cmd();
    cmd.arg("--reports-dir").arg(dir);
    cmd
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// The 80-column separator made of `c`.
pub fn rule(c: char) -> String {
    c.to_string().repeat(80)
}

/// A temporary reports directory built up file by file.
pub struct Reports {
    dir: TempDir,
}

impl Reports {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a report file from raw lines.
    pub fn file(&self, name: &str, lines: &[String]) -> &Self {
        let mut content = lines.join("\n");
        content.push('\n');
        std::fs::write(self.dir.path().join(name), content).unwrap();
        self
    }

    pub fn scan(&self) -> Command {
        scan(self.path())
    }
}

/// A passing `call` record.
pub fn call(nodeid: &str, duration: f64) -> String {
    record(nodeid, "call", "passed", duration, &[])
}

/// A `TestReport` record.
pub fn record(nodeid: &str, when: &str, outcome: &str, duration: f64, keywords: &[&str]) -> String {
    let keywords: serde_json::Map<String, serde_json::Value> =
        keywords.iter().map(|k| (k.to_string(), json!(1))).collect();
    json!({
        "nodeid": nodeid,
        "keywords": keywords,
        "outcome": outcome,
        "when": when,
        "duration": duration,
        "$report_type": "TestReport",
    })
    .to_string()
}
