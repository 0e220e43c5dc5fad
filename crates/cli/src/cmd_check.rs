// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Slow test check: scan the reports directory and gate on the fail threshold.

use std::io::Write;

use anyhow::Context;
use termcolor::StandardStream;

use laggard::ExitCode;
use laggard::aggregate;
use laggard::cli::Cli;
use laggard::color::resolve_color;
use laggard::report;
use laggard::verbose::VerboseLogger;

/// Run the check and return the process exit code.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let thresholds = cli.thresholds();
    let verbose = VerboseLogger::new(cli.verbose);

    let scan = aggregate::scan_dir(&cli.reports_dir, &thresholds)
        .with_context(|| format!("failed to scan {}", cli.reports_dir.display()))?;
    verbose.scan(&thresholds, &scan);

    let stdout = StandardStream::stdout(resolve_color(cli.color, cli.no_color));
    let mut out = stdout.lock();

    for path in scan.missing() {
        writeln!(out, "Warning: {} not found, skipping", path.display())?;
    }

    let verdict = report::render(&mut out, &scan.slow, &thresholds)?;
    out.flush()?;

    tracing::debug!(
        "{} slow tests, {} at or above {}s",
        verdict.listed,
        verdict.failures,
        thresholds.fail
    );

    Ok(if verdict.passed() {
        ExitCode::Success
    } else {
        ExitCode::SlowTests
    })
}
