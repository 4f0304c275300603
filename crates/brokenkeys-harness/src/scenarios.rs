//! Built-in scenario tables.
//!
//! The canonical suite is the known-good oracle for this repository: the
//! three demonstration scenarios with their expected counts. The edge suite
//! pins degenerate inputs (empty text, empty broken set, separator
//! collapsing).

use crate::fixtures::{FixtureCase, FixtureSet};

/// Fixture schema version written by capture.
pub const FIXTURE_VERSION: &str = "v1";

const CAPTURED_AT: &str = "2026-08-07T00:00:00Z";

fn case(
    name: &str,
    text: &str,
    broken_letters: &str,
    expected_count: usize,
    detail: &str,
) -> FixtureCase {
    FixtureCase {
        name: name.to_string(),
        text: text.to_string(),
        broken_letters: broken_letters.to_string(),
        expected_count,
        detail: Some(detail.to_string()),
    }
}

/// The three demonstration scenarios, in driver order.
#[must_use]
pub fn canonical() -> FixtureSet {
    FixtureSet {
        version: FIXTURE_VERSION.to_string(),
        suite: String::from("canonical"),
        captured_at: CAPTURED_AT.to_string(),
        cases: vec![
            case(
                "hello_world_ad",
                "hello world",
                "ad",
                1,
                "\"hello\" typeable, \"world\" blocked by 'd'",
            ),
            case(
                "leet_code_lt",
                "leet code",
                "lt",
                1,
                "\"leet\" blocked by 'l', \"code\" typeable",
            ),
            case(
                "leet_code_e",
                "leet code",
                "e",
                0,
                "both words contain 'e'",
            ),
        ],
    }
}

/// Degenerate and separator-handling cases.
#[must_use]
pub fn edge_cases() -> FixtureSet {
    FixtureSet {
        version: FIXTURE_VERSION.to_string(),
        suite: String::from("edge"),
        captured_at: CAPTURED_AT.to_string(),
        cases: vec![
            case("empty_text", "", "xyz", 0, "no words to count"),
            case(
                "whitespace_only",
                " \t\n ",
                "a",
                0,
                "separators produce no empty words",
            ),
            case(
                "no_broken_keys",
                "the quick brown fox",
                "",
                4,
                "empty broken set leaves every word typeable",
            ),
            case(
                "collapsed_separators",
                "  leet \t code\n",
                "lt",
                1,
                "runs of whitespace act as one separator",
            ),
            case(
                "every_word_blocked",
                "aa ab ba",
                "a",
                0,
                "a single broken key can block the whole text",
            ),
        ],
    }
}

/// All built-in suites, in capture order.
#[must_use]
pub fn builtin_sets() -> Vec<FixtureSet> {
    vec![canonical(), edge_cases()]
}
