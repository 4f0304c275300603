//! Output comparison and verification.

use serde::{Deserialize, Serialize};

/// Result of verifying a single fixture case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Suite the case belongs to.
    pub suite: String,
    /// Name of the test case.
    pub case_name: String,
    /// Whether the case passed.
    pub passed: bool,
    /// Expected typeable-word count.
    pub expected: usize,
    /// Actual count from the implementation.
    pub actual: usize,
    /// Per-word explanation if the case failed.
    pub diff: Option<String>,
}

/// Aggregate verification summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    /// Total cases run.
    pub total: usize,
    /// Cases passed.
    pub passed: usize,
    /// Cases failed.
    pub failed: usize,
    /// Individual results.
    pub results: Vec<VerificationResult>,
}

impl VerificationSummary {
    /// Build a summary from a list of results.
    #[must_use]
    pub fn from_results(results: Vec<VerificationResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = total - passed;
        Self {
            total,
            passed,
            failed,
            results,
        }
    }

    /// Returns true if all cases passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, passed: bool) -> VerificationResult {
        VerificationResult {
            suite: String::from("smoke"),
            case_name: name.to_string(),
            passed,
            expected: 1,
            actual: usize::from(passed),
            diff: None,
        }
    }

    #[test]
    fn summary_counts_pass_and_fail() {
        let summary = VerificationSummary::from_results(vec![
            result("a", true),
            result("b", false),
            result("c", true),
        ]);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
        assert!(!summary.all_passed());
    }

    #[test]
    fn empty_summary_passes() {
        let summary = VerificationSummary::from_results(Vec::new());
        assert_eq!(summary.total, 0);
        assert!(summary.all_passed());
    }
}
