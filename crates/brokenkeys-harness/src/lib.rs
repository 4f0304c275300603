//! Fixture harness for brokenkeys.
//!
//! This crate provides:
//! - Built-in scenario tables: the canonical demonstration cases plus
//!   degenerate-input cases, with their known-good counts
//! - Fixture capture: serialize the scenario tables as JSON fixture files
//! - Fixture verify: run fixture cases against `brokenkeys-core` and compare
//!   counts
//! - Mismatch explanation: per-word breakdown of a failed case
//! - Report generation: human-readable + machine-readable reports
//! - Structured logging: JSONL records for verify runs

#![forbid(unsafe_code)]

pub mod diff;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod scenarios;
pub mod structured_log;
pub mod verify;

pub use fixtures::{FixtureCase, FixtureError, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
