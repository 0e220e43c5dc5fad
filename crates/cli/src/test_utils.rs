//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the laggard crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::io::Write;
use std::path::Path;

use serde_json::json;
use tempfile::{NamedTempFile, TempDir};

/// A passing `call` report line for `nodeid` taking `duration` seconds.
pub fn call_line(nodeid: &str, duration: f64) -> String {
    report_line(nodeid, "call", "passed", duration, &[])
}

/// A report line with full control over phase, outcome, and keywords.
pub fn report_line(
    nodeid: &str,
    when: &str,
    outcome: &str,
    duration: f64,
    keywords: &[&str],
) -> String {
    let keywords: serde_json::Map<String, serde_json::Value> =
        keywords.iter().map(|k| (k.to_string(), json!(1))).collect();
    json!({
        "nodeid": nodeid,
        "location": [nodeid, 0, nodeid],
        "keywords": keywords,
        "outcome": outcome,
        "longrepr": null,
        "when": when,
        "user_properties": [],
        "sections": [],
        "duration": duration,
        "$report_type": "TestReport",
    })
    .to_string()
}

/// Creates a temp reports directory from a list of (file name, lines) pairs.
///
/// # Example
///
/// ```ignore
/// let dir = temp_reports(&[
///     ("unit.jsonl", vec![call_line("tests/test_a.py::test_a", 12.0)]),
/// ]);
/// ```
pub fn temp_reports(files: &[(&str, Vec<String>)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, lines) in files {
        write_lines(&dir.path().join(name), lines);
    }
    dir
}

/// Writes `lines` to `path`, one per line.
pub fn write_lines(path: &Path, lines: &[String]) {
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(path, content).unwrap();
}

/// Creates a temp file with content using writeln! for each line.
///
/// Useful for tests that need explicit newlines.
pub fn temp_file_with_lines(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file.flush().unwrap();
    file
}
