//! Structured logging contract for harness verify runs.
//!
//! Provides:
//! - [`LogEntry`]: canonical JSONL log record with required + optional fields.
//! - [`LogEmitter`]: writes JSONL lines to any writer (file or stdout).
//! - [`validate_log_line`]: validates a single JSONL line against the schema.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while emitting or validating log lines.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("schema: {0}")]
    Schema(#[from] serde_json::Error),
}

/// Severity level for log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Verification outcome attached to per-case entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
    Skip,
    Error,
}

/// Canonical JSONL log record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Timestamp (UTC), pinned by the caller for deterministic runs.
    pub timestamp: String,
    /// Severity.
    pub level: LogLevel,
    /// Event name (e.g. "case_verified", "run_complete").
    pub event: String,
    /// Campaign the entry belongs to.
    pub campaign: String,
    /// Case name for per-case events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case: Option<String>,
    /// Outcome for per-case events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    /// Free-form detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl LogEntry {
    /// Create a minimal entry.
    #[must_use]
    pub fn new(
        timestamp: impl Into<String>,
        level: LogLevel,
        event: impl Into<String>,
        campaign: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            level,
            event: event.into(),
            campaign: campaign.into(),
            case: None,
            outcome: None,
            detail: None,
        }
    }

    /// Attach a case name.
    #[must_use]
    pub fn with_case(mut self, case: impl Into<String>) -> Self {
        self.case = Some(case.into());
        self
    }

    /// Attach an outcome.
    #[must_use]
    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    /// Attach free-form detail.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Writes JSONL log lines to an underlying writer.
pub struct LogEmitter<W: Write> {
    out: W,
}

impl LogEmitter<File> {
    /// Open a log file for writing, truncating any previous contents.
    pub fn to_file(path: &Path) -> Result<Self, LogError> {
        Ok(Self {
            out: File::create(path)?,
        })
    }
}

impl<W: Write> LogEmitter<W> {
    /// Wrap an arbitrary writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Serialize `entry` as one JSONL line.
    pub fn emit(&mut self, entry: &LogEntry) -> Result<(), LogError> {
        let line = serde_json::to_string(entry)?;
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<(), LogError> {
        self.out.flush()?;
        Ok(())
    }
}

/// Parse and validate a single JSONL line against the log schema.
pub fn validate_log_line(line: &str) -> Result<LogEntry, LogError> {
    Ok(serde_json::from_str(line)?)
}
