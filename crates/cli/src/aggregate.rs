// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Slow test aggregation across report files.
//!
//! Each report file is reduced to a [`SlowTests`] map, and the maps of every
//! file in the reports directory are merged. When a test shows up more than
//! once (reruns, several shards) the slowest observation wins.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};

use crate::config::Thresholds;
use crate::config::defaults::report_log;
use crate::error::{Error, Result};
use crate::record::TestRecord;

/// Maximum observed duration per test identifier.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SlowTests {
    durations: HashMap<String, f64>,
}

impl SlowTests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a duration, keeping the larger one if the test is already known.
    pub fn record(&mut self, nodeid: &str, duration: f64) {
        match self.durations.get_mut(nodeid) {
            Some(existing) => {
                if duration > *existing {
                    *existing = duration;
                }
            }
            None => {
                self.durations.insert(nodeid.to_string(), duration);
            }
        }
    }

    /// Merge another map into this one, keeping the larger duration per test.
    pub fn merge(&mut self, other: SlowTests) {
        for (nodeid, duration) in other.durations {
            match self.durations.entry(nodeid) {
                Entry::Occupied(mut entry) => {
                    if duration > *entry.get() {
                        entry.insert(duration);
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert(duration);
                }
            }
        }
    }

    pub fn get(&self, nodeid: &str) -> Option<f64> {
        self.durations.get(nodeid).copied()
    }

    pub fn len(&self) -> usize {
        self.durations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.durations.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Result of scanning one report file.
#[derive(Debug, Clone)]
pub struct FileScan {
    pub path: PathBuf,

    /// False if the file did not exist; the scan is then empty.
    pub found: bool,

    /// Lines read, including malformed ones.
    pub lines: usize,

    /// Lines that were not valid records.
    pub malformed: usize,

    /// Records that met the inclusion criteria.
    pub qualifying: usize,

    pub slow: SlowTests,
}

impl FileScan {
    fn missing(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            found: false,
            lines: 0,
            malformed: 0,
            qualifying: 0,
            slow: SlowTests::new(),
        }
    }
}

/// Scan one report file for tests at or above the report threshold.
///
/// A missing file yields an empty scan with `found == false`. Malformed
/// lines are counted and skipped.
pub fn scan_file(path: &Path, thresholds: &Thresholds) -> Result<FileScan> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(FileScan::missing(path)),
        Err(source) => {
            return Err(Error::ReadReport {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut scan = FileScan {
        found: true,
        ..FileScan::missing(path)
    };
    let reader = BufReader::new(file);
    for line in reader.split(b'\n') {
        let line = line.map_err(|source| Error::ReadReport {
            path: path.to_path_buf(),
            source,
        })?;
        scan.lines += 1;

        let Some(record) = TestRecord::parse(&line) else {
            scan.malformed += 1;
            continue;
        };
        if record.qualifies(thresholds) {
            scan.qualifying += 1;
            scan.slow.record(record.nodeid(), record.duration_secs());
        }
    }

    tracing::debug!(
        "{}: {} lines, {} malformed, {} slow",
        path.display(),
        scan.lines,
        scan.malformed,
        scan.slow.len()
    );
    Ok(scan)
}

/// Result of scanning a reports directory.
#[derive(Debug, Clone, Default)]
pub struct DirScan {
    /// Per-file scans, in path order.
    pub files: Vec<FileScan>,

    /// Merged map across all files.
    pub slow: SlowTests,
}

impl DirScan {
    /// Report files that disappeared before they could be read.
    pub fn missing(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().filter(|f| !f.found).map(|f| f.path.as_path())
    }
}

/// Scan every `*.jsonl` file directly inside `dir`.
///
/// A nonexistent directory contains no reports and yields an empty scan.
pub fn scan_dir(dir: &Path, thresholds: &Thresholds) -> Result<DirScan> {
    let mut scan = DirScan::default();
    for path in report_files(dir)? {
        let file = scan_file(&path, thresholds)?;
        scan.slow.merge(file.slow.clone());
        scan.files.push(file);
    }
    Ok(scan)
}

/// List report files in `dir`, sorted by path.
///
/// Directories are skipped. Dangling symlinks are kept so that the scan
/// reports them as missing.
pub fn report_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let matcher = report_matcher()?;
    let read_dir_err = |source: io::Error| Error::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!("reports directory {} does not exist", dir.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(read_dir_err(e)),
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(read_dir_err)?;
        if !matcher.is_match(entry.file_name()) {
            continue;
        }
        let path = entry.path();
        if path.is_dir() {
            tracing::debug!("skipping directory {}", path.display());
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

fn report_matcher() -> Result<GlobMatcher> {
    Glob::new(report_log::FILE_GLOB)
        .map(|glob| glob.compile_matcher())
        .map_err(|source| Error::Glob {
            glob: report_log::FILE_GLOB.to_string(),
            source,
        })
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
