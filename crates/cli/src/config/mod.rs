// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Threshold configuration.
//!
//! Thresholds come from the command line or from the
//! `SLOW_TEST_REPORT_THRESHOLD` / `SLOW_TEST_FAIL_THRESHOLD` environment
//! variables (clap resolves both), falling back to [`defaults`].

pub mod defaults;

/// Duration thresholds, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Tests at or above this duration are listed.
    pub report: f64,

    /// Tests at or above this duration fail the build.
    pub fail: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            report: defaults::threshold::REPORT,
            fail: defaults::threshold::FAIL,
        }
    }
}

impl Thresholds {
    pub fn new(report: f64, fail: f64) -> Self {
        Self { report, fail }
    }

    /// Whether a duration is slow enough to be listed.
    pub fn is_reportable(&self, duration: f64) -> bool {
        duration >= self.report
    }

    /// Whether a duration is slow enough to fail the build.
    pub fn is_failure(&self, duration: f64) -> bool {
        duration >= self.fail
    }
}

/// Parse a threshold given on the command line or in the environment.
///
/// Any number is accepted, including `inf` (never fail) and negative values
/// (list every test). NaN is rejected since no duration compares against it.
pub fn parse_threshold(value: &str) -> Result<f64, String> {
    let seconds: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("`{value}` is not a number of seconds"))?;
    if seconds.is_nan() {
        return Err(format!("`{value}` is not a number of seconds"));
    }
    Ok(seconds)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
