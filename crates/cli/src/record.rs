// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test records from pytest report logs.
//!
//! Each line of a `--report-log` file is one JSON object. Only a handful of
//! fields matter here; everything else is ignored.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer};

use crate::config::Thresholds;
use crate::config::defaults::report_log;

/// One line of a report log.
///
/// Every field is optional on the wire so that unrelated record kinds
/// (session start, collect reports, warnings) still deserialize. The string
/// tags tolerate values of other types, which simply match nothing.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct TestRecord {
    /// Record kind, e.g. "TestReport" or "CollectReport".
    #[serde(rename = "$report_type", default, deserialize_with = "tag")]
    pub report_type: Option<String>,

    /// Lifecycle phase: "setup", "call", or "teardown".
    #[serde(default, deserialize_with = "tag")]
    pub when: Option<String>,

    /// "passed", "failed", or "skipped".
    #[serde(default, deserialize_with = "tag")]
    pub outcome: Option<String>,

    #[serde(default)]
    pub keywords: Keywords,

    /// Phase duration.
    pub duration: Option<Seconds>,

    pub nodeid: Option<String>,
}

impl TestRecord {
    /// Parse one report line, returning `None` if it is not a JSON record.
    pub fn parse(line: &[u8]) -> Option<Self> {
        match serde_json::from_slice(line) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::debug!("skipping malformed report line: {}", e);
                None
            }
        }
    }

    /// Duration in seconds, zero when absent.
    pub fn duration_secs(&self) -> f64 {
        self.duration.map_or(0.0, |d| d.0)
    }

    pub fn nodeid(&self) -> &str {
        self.nodeid.as_deref().unwrap_or(report_log::UNKNOWN_NODEID)
    }

    /// Whether this record reports the body of a test.
    pub fn is_test_call(&self) -> bool {
        self.report_type.as_deref() == Some(report_log::TEST_REPORT)
            && self.when.as_deref() == Some(report_log::CALL_PHASE)
    }

    pub fn is_skipped(&self) -> bool {
        self.outcome.as_deref() == Some(report_log::SKIPPED)
    }

    /// Whether the test carries the excluded keyword.
    pub fn is_excluded(&self) -> bool {
        self.keywords.contains(report_log::EXCLUDED_KEYWORD)
    }

    /// Whether this record counts toward the slow test map.
    pub fn qualifies(&self, thresholds: &Thresholds) -> bool {
        self.is_test_call()
            && !self.is_skipped()
            && !self.is_excluded()
            && thresholds.is_reportable(self.duration_secs())
    }
}

/// A string field, or `None` when it is absent, null, or not a string.
fn tag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}

/// A duration in seconds.
///
/// Report writers are not always strict about types, so besides numbers
/// this accepts numeric strings (`"75.5"`, empty meaning zero) and booleans.
/// Anything else makes the line malformed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "SecondsRepr")]
pub struct Seconds(pub f64);

impl From<f64> for Seconds {
    fn from(seconds: f64) -> Self {
        Self(seconds)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SecondsRepr {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl TryFrom<SecondsRepr> for Seconds {
    type Error = String;

    fn try_from(repr: SecondsRepr) -> Result<Self, Self::Error> {
        match repr {
            SecondsRepr::Number(n) => Ok(Seconds(n)),
            SecondsRepr::Bool(b) => Ok(Seconds(if b { 1.0 } else { 0.0 })),
            SecondsRepr::Text(s) if s.is_empty() => Ok(Seconds(0.0)),
            SecondsRepr::Text(s) => s
                .trim()
                .parse()
                .map(Seconds)
                .map_err(|_| format!("duration `{s}` is not a number")),
        }
    }
}

/// Test keywords (markers, node names, and so on), used as a set.
///
/// pytest writes them as an object mapping each keyword to `1`; a plain list
/// of strings is accepted too.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "KeywordsRepr")]
pub struct Keywords(HashSet<String>);

impl Keywords {
    pub fn contains(&self, keyword: &str) -> bool {
        self.0.contains(keyword)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Keywords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum KeywordsRepr {
    Map(serde_json::Map<String, serde_json::Value>),
    List(Vec<String>),
    Null(()),
}

impl From<KeywordsRepr> for Keywords {
    fn from(repr: KeywordsRepr) -> Self {
        match repr {
            KeywordsRepr::Map(map) => map.into_iter().map(|(k, _)| k).collect(),
            KeywordsRepr::List(list) => list.into_iter().collect(),
            KeywordsRepr::Null(()) => Keywords::default(),
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
