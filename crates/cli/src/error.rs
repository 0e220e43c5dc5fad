// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::io;
use std::path::PathBuf;

/// Errors that stop a scan.
///
/// Malformed report lines and missing report files are not errors; they are
/// skipped while scanning.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read reports directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read report {}", path.display())]
    ReadReport {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid report file glob `{glob}`")]
    Glob {
        glob: String,
        #[source]
        source: globset::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// No test reached the fail threshold.
    Success = 0,
    /// At least one test reached the fail threshold.
    SlowTests = 1,
    /// Usage error or unreadable input.
    Error = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}
