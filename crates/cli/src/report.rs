// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Slow test summary and the pass/fail verdict.
//!
//! Output format:
//!
//! ```text
//! ================================================================================
//!  70.00s  tests/test_model.py::test_train [FAIL]
//!  15.00s  tests/test_io.py::test_read
//! ```
//!
//! The separator is `=` when any test reached the fail threshold, `-`
//! otherwise. Text is identical with and without color.

use std::io::{self, Write};

use termcolor::{ColorSpec, WriteColor};

use crate::aggregate::SlowTests;
use crate::color::scheme;
use crate::config::Thresholds;

/// Width of the separator line.
pub const SEPARATOR_WIDTH: usize = 80;

/// Appended to tests at or above the fail threshold.
pub const FAIL_MARKER: &str = "[FAIL]";

/// Outcome of rendering the summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verdict {
    /// Tests listed in the summary.
    pub listed: usize,

    /// Tests at or above the fail threshold.
    pub failures: usize,
}

impl Verdict {
    pub fn passed(&self) -> bool {
        self.failures == 0
    }
}

/// One summary line.
#[derive(Debug, Clone, PartialEq)]
pub struct SlowEntry<'a> {
    pub nodeid: &'a str,
    pub duration: f64,
    pub failed: bool,
}

/// Entries sorted slowest first; ties are ordered by identifier.
pub fn sorted_entries<'a>(slow: &'a SlowTests, thresholds: &Thresholds) -> Vec<SlowEntry<'a>> {
    let mut entries: Vec<SlowEntry<'a>> = slow
        .iter()
        .map(|(nodeid, duration)| SlowEntry {
            nodeid,
            duration,
            failed: thresholds.is_failure(duration),
        })
        .collect();
    entries.sort_by(|a, b| {
        b.duration
            .total_cmp(&a.duration)
            .then_with(|| a.nodeid.cmp(b.nodeid))
    });
    entries
}

/// Line printed when no test reached the report threshold.
pub fn all_clear_message(thresholds: &Thresholds) -> String {
    format!(
        "All tests under {}s or properly marked with @pytest.mark.slow",
        seconds(thresholds.report)
    )
}

/// Write the summary to `out` and return the verdict.
pub fn render<W: WriteColor + ?Sized>(
    out: &mut W,
    slow: &SlowTests,
    thresholds: &Thresholds,
) -> io::Result<Verdict> {
    if slow.is_empty() {
        write_styled(out, &scheme::pass(), &all_clear_message(thresholds))?;
        writeln!(out)?;
        return Ok(Verdict::default());
    }

    let entries = sorted_entries(slow, thresholds);
    let verdict = Verdict {
        listed: entries.len(),
        failures: entries.iter().filter(|e| e.failed).count(),
    };

    let (rule, spec) = if verdict.passed() {
        ("-", scheme::separator_warn())
    } else {
        ("=", scheme::separator_fail())
    };
    write_styled(out, &spec, &rule.repeat(SEPARATOR_WIDTH))?;
    writeln!(out)?;

    for entry in &entries {
        write_styled(out, &scheme::duration(), &format!("{:6.2}s", entry.duration))?;
        write!(out, "  {}", entry.nodeid)?;
        if entry.failed {
            write!(out, " ")?;
            write_styled(out, &scheme::fail(), FAIL_MARKER)?;
        }
        writeln!(out)?;
    }

    Ok(verdict)
}

fn write_styled<W: WriteColor + ?Sized>(out: &mut W, spec: &ColorSpec, text: &str) -> io::Result<()> {
    out.set_color(spec)?;
    write!(out, "{}", text)?;
    out.reset()
}

/// Format seconds the way thresholds are usually written: `10.0`, `12.5`.
///
/// Extreme values use Rust's exponent form (`1e-5`, `1e16`) rather than a
/// signed two-digit exponent (`1e-05`, `1e+16`).
fn seconds(value: f64) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
