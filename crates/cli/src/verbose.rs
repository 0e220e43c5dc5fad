// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose output logger for diagnostic information.
//!
//! Writes per-file scan details to stderr when `--verbose` is set, so that
//! stdout keeps only the summary.

use crate::aggregate::{DirScan, FileScan};
use crate::config::Thresholds;

/// Verbose output logger. Writes to stderr when enabled.
/// All output is conditional on verbose mode being enabled.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print a verbose line to stderr (indented as content under a section).
    pub fn log(&self, msg: &str) {
        if self.enabled {
            eprintln!("  {}", msg);
        }
    }

    /// Print a verbose section header.
    pub fn section(&self, title: &str) {
        if self.enabled {
            eprintln!("\n{}:", title);
        }
    }

    /// Print the thresholds and every scanned file.
    pub fn scan(&self, thresholds: &Thresholds, scan: &DirScan) {
        if !self.enabled {
            return;
        }
        self.section("Thresholds");
        self.log(&format!("report: {}s", thresholds.report));
        self.log(&format!("fail: {}s", thresholds.fail));

        self.section("Reports");
        if scan.files.is_empty() {
            self.log("no report files found");
        }
        for file in &scan.files {
            self.log(&file_summary(file));
        }
    }
}

/// One-line description of a file scan.
pub fn file_summary(file: &FileScan) -> String {
    if !file.found {
        return format!("{}: not found", file.path.display());
    }
    format!(
        "{}: {} lines, {} malformed, {} slow records, {} slow tests",
        file.path.display(),
        file.lines,
        file.malformed,
        file.qualifying,
        file.slow.len()
    )
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
