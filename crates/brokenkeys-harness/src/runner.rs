//! Test execution engine.

use brokenkeys_core::count_typeable;

use crate::diff;
use crate::fixtures::FixtureSet;
use crate::verify::VerificationResult;

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .map(|case| {
                let actual = count_typeable(&case.text, &case.broken_letters);
                let passed = actual == case.expected_count;
                let diff = if passed {
                    None
                } else {
                    Some(diff::render_diff(case, actual))
                };
                VerificationResult {
                    suite: fixture_set.suite.clone(),
                    case_name: case.name.clone(),
                    passed,
                    expected: case.expected_count,
                    actual,
                    diff,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runner_passes_known_good_cases() {
        let fixture = FixtureSet::from_json(
            r#"{
                "version":"v1",
                "suite":"smoke",
                "captured_at":"2026-08-07T00:00:00Z",
                "cases":[
                    {"name":"hello","text":"hello world","broken_letters":"ad","expected_count":1},
                    {"name":"leet","text":"leet code","broken_letters":"lt","expected_count":1},
                    {"name":"all_blocked","text":"leet code","broken_letters":"e","expected_count":0}
                ]
            }"#,
        )
        .expect("valid fixture json");

        let results = TestRunner::new("smoke").run(&fixture);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.passed));
        assert!(results.iter().all(|r| r.diff.is_none()));
    }

    #[test]
    fn runner_explains_failing_case() {
        let fixture = FixtureSet::from_json(
            r#"{
                "version":"v1",
                "suite":"smoke",
                "captured_at":"2026-08-07T00:00:00Z",
                "cases":[
                    {"name":"wrong","text":"leet code","broken_letters":"lt","expected_count":2}
                ]
            }"#,
        )
        .expect("valid fixture json");

        let results = TestRunner::new("smoke").run(&fixture);
        assert_eq!(results.len(), 1);
        assert!(!results[0].passed);
        assert_eq!(results[0].expected, 2);
        assert_eq!(results[0].actual, 1);
        let diff = results[0].diff.as_deref().expect("diff for failed case");
        assert!(diff.contains("blocked by 'l'"));
    }

    #[test]
    fn runner_tags_results_with_suite() {
        let fixture = FixtureSet::from_json(
            r#"{
                "version":"v1",
                "suite":"tagged",
                "captured_at":"2026-08-07T00:00:00Z",
                "cases":[
                    {"name":"empty","text":"","broken_letters":"a","expected_count":0}
                ]
            }"#,
        )
        .expect("valid fixture json");

        let results = TestRunner::new("smoke").run(&fixture);
        assert_eq!(results[0].suite, "tagged");
    }
}
