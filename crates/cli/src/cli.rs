// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::color::ColorMode;
use crate::config::{Thresholds, defaults, parse_threshold};

/// Flags slow tests in pytest report logs and fails when any is too slow
#[derive(Debug, Parser)]
#[command(name = "laggard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory containing pytest JSONL report files
    #[arg(long, value_name = "DIR")]
    pub reports_dir: PathBuf,

    /// List tests at or above this many seconds
    #[arg(
        long,
        value_name = "SECONDS",
        env = defaults::env::REPORT_THRESHOLD,
        default_value_t = defaults::threshold::REPORT,
        value_parser = parse_threshold,
    )]
    pub report_threshold: f64,

    /// Fail when a test takes at least this many seconds
    #[arg(
        long,
        value_name = "SECONDS",
        env = defaults::env::FAIL_THRESHOLD,
        default_value_t = defaults::threshold::FAIL,
        value_parser = parse_threshold,
    )]
    pub fail_threshold: f64,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Print per-file scan details to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.report_threshold, self.fail_threshold)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
