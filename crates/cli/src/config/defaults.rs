// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! All default values are documented here for easy reference.
//! [`Thresholds`](super::Thresholds) and the CLI delegate to these constants.

/// Default duration thresholds, in seconds.
pub mod threshold {
    /// Minimum duration for a test to be listed (10s).
    pub const REPORT: f64 = 10.0;

    /// Minimum duration for a test to fail the build (60s).
    pub const FAIL: f64 = 60.0;
}

/// Environment variables that override the thresholds.
pub mod env {
    pub const REPORT_THRESHOLD: &str = "SLOW_TEST_REPORT_THRESHOLD";
    pub const FAIL_THRESHOLD: &str = "SLOW_TEST_FAIL_THRESHOLD";
}

/// Fixed values of the pytest report-log format.
pub mod report_log {
    /// Glob for report files inside the reports directory.
    pub const FILE_GLOB: &str = "*.jsonl";

    /// `$report_type` of a finished test phase.
    pub const TEST_REPORT: &str = "TestReport";

    /// `when` of the test body phase (setup and teardown are ignored).
    pub const CALL_PHASE: &str = "call";

    /// `outcome` of a skipped test.
    pub const SKIPPED: &str = "skipped";

    /// Keyword marking tests that hit an external model hub.
    ///
    /// These are slow for reasons outside the test suite's control.
    pub const EXCLUDED_KEYWORD: &str = "huggingface";

    /// Identifier used when a record has no `nodeid`.
    pub const UNKNOWN_NODEID: &str = "<unknown>";
}
