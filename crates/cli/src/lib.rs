// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! laggard: flags slow tests in pytest report logs.
//!
//! Reads every `*.jsonl` report in a directory, keeps the slowest `call`
//! duration of each test at or above the report threshold, prints them
//! slowest first, and fails when any reaches the fail threshold.

pub mod aggregate;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod record;
pub mod report;
pub mod verbose;

#[cfg(test)]
pub mod test_utils;

pub use aggregate::{DirScan, FileScan, SlowTests, scan_dir, scan_file};
pub use config::Thresholds;
pub use error::{Error, ExitCode, Result};
pub use report::Verdict;
