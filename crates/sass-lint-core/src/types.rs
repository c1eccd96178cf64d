//! Core types for detections and lint results.

use crate::ledger::{Fingerprint, Shape};
use crate::node::Node;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::PathBuf;

/// Severity level for detections.
///
/// Serialized as the integer used in rule configuration (`1` warning,
/// `2` error). `0` means "off" and never reaches a detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Severity {
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl Severity {
    /// Maps a configuration level to a severity; `0` (off) yields `None`.
    ///
    /// # Errors
    ///
    /// Returns the offending level if it is not 0, 1 or 2.
    pub fn from_level(level: i64) -> Result<Option<Self>, i64> {
        match level {
            0 => Ok(None),
            1 => Ok(Some(Self::Warning)),
            2 => Ok(Some(Self::Error)),
            other => Err(other),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, String> {
        match value {
            1 => Ok(Severity::Warning),
            2 => Ok(Severity::Error),
            other => Err(format!("invalid severity {other}, expected 1 or 2")),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A rule violation found in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    /// Line of the offense (1-indexed).
    pub line: usize,
    /// Column of the offense (1-indexed).
    pub column: usize,
    /// Rule name (e.g., "property-sort-order").
    pub rule_id: String,
    /// Human-readable message.
    pub message: String,
    /// Severity of this detection.
    pub severity: Severity,
    /// Fingerprint of the flagged node, used for de-duplication.
    #[serde(skip)]
    pub shape: Shape,
}

impl Detection {
    /// Creates a detection positioned at the start of `node`.
    #[must_use]
    pub fn new(
        rule_id: impl Into<String>,
        severity: Severity,
        node: &Node,
        message: impl Into<String>,
    ) -> Self {
        Self {
            line: node.start.line,
            column: node.start.column,
            rule_id: rule_id.into(),
            message: message.into(),
            severity,
            shape: Shape::of(node),
        }
    }

    /// Formats the detection as one report line.
    #[must_use]
    pub fn format(&self) -> String {
        format!(
            "  {}:{}  {}  {}  {}",
            self.line, self.column, self.severity, self.message, self.rule_id
        )
    }
}

impl Fingerprint for Detection {
    fn kind(&self) -> &str {
        &self.shape.kind
    }

    fn start_line(&self) -> usize {
        self.shape.start_line
    }

    fn end_line(&self) -> usize {
        self.shape.end_line
    }

    fn content_len(&self) -> usize {
        self.shape.content_len
    }
}

/// Orders detections line-major, column-minor, both ascending.
///
/// Suitable for the stable `sort_by`, so equal positions keep the order in
/// which rules reported them.
#[must_use]
pub fn sort_detects(a: &Detection, b: &Detection) -> Ordering {
    a.line.cmp(&b.line).then(a.column.cmp(&b.column))
}

/// Detections reported for a single file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    /// Path of the linted file.
    pub file_path: PathBuf,
    /// Detections in report order.
    pub messages: Vec<Detection>,
    /// Number of warning-level detections.
    pub warning_count: usize,
    /// Number of error-level detections.
    pub error_count: usize,
}

impl FileReport {
    /// Creates a report, ordering the detections and counting severities.
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>, mut messages: Vec<Detection>) -> Self {
        messages.sort_by(sort_detects);
        let error_count = messages
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        Self {
            file_path: file_path.into(),
            warning_count: messages.len() - error_count,
            error_count,
            messages,
        }
    }

    /// Returns true if any detection is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Formats the report for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!("{}\n", self.file_path.display());
        for detection in &self.messages {
            let _ = writeln!(output, "{}", detection.format());
        }
        output
    }
}

/// Result of linting one or more files.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// Per-file reports in discovery order.
    pub files: Vec<FileReport>,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of files linted.
    #[must_use]
    pub fn files_checked(&self) -> usize {
        self.files.len()
    }

    /// Iterates over every detection of every file.
    pub fn detections(&self) -> impl Iterator<Item = &Detection> {
        self.files.iter().flat_map(|f| f.messages.iter())
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.files.iter().any(FileReport::has_errors)
    }

    /// Counts detections by severity as `(errors, warnings)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize) {
        self.files.iter().fold((0, 0), |(errors, warnings), f| {
            (errors + f.error_count, warnings + f.warning_count)
        })
    }

    /// Adds file reports from another result.
    pub fn extend(&mut self, other: Self) {
        self.files.extend(other.files);
    }
}
