//! Report generation for verification results.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::verify::VerificationSummary;

/// SHA-256 of raw bytes, hex-encoded.
#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// Integrity record for one fixture file fed into a verify run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureDigest {
    /// Fixture file path as given to the harness.
    pub path: String,
    /// SHA-256 of the file contents, hex-encoded.
    pub sha256: String,
}

/// A verification report combining results and fixture integrity data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Report title.
    pub title: String,
    /// Timestamp (UTC).
    pub timestamp: String,
    /// Digests of the fixture files that were run.
    pub fixtures: Vec<FixtureDigest>,
    /// Verification summary.
    pub summary: VerificationSummary,
}

impl ConformanceReport {
    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!("- Total: {}\n", self.summary.total));
        out.push_str(&format!("- Passed: {}\n", self.summary.passed));
        out.push_str(&format!("- Failed: {}\n\n", self.summary.failed));

        if !self.fixtures.is_empty() {
            out.push_str("| Fixture | SHA-256 |\n");
            out.push_str("|---------|---------|\n");
            for f in &self.fixtures {
                out.push_str(&format!("| {} | {} |\n", f.path, f.sha256));
            }
            out.push('\n');
        }

        out.push_str("| Suite | Case | Expected | Actual | Status |\n");
        out.push_str("|-------|------|----------|--------|--------|\n");
        for r in &self.summary.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                r.suite, r.case_name, r.expected, r.actual, status
            ));
        }

        let failures: Vec<_> = self.summary.results.iter().filter(|r| !r.passed).collect();
        if !failures.is_empty() {
            out.push_str("\n## Failures\n");
            for r in failures {
                out.push_str(&format!("\n### {} / {}\n\n", r.suite, r.case_name));
                if let Some(diff) = &r.diff {
                    out.push_str("```\n");
                    out.push_str(diff);
                    out.push_str("```\n");
                }
            }
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}
