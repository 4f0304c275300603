//! Mismatch explanation for failed cases.
//!
//! Walks the text word by word and names the broken key that blocked each
//! untypeable word.

use brokenkeys_core::{BrokenKeys, blocking_key, words};

use crate::fixtures::FixtureCase;

/// Verdict for one word of a scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordVerdict<'a> {
    /// The word, borrowed from the input text.
    pub word: &'a str,
    /// First broken character hit while scanning, if any.
    pub blocked_by: Option<char>,
}

/// Breaks `text` down word by word against `broken`.
#[must_use]
pub fn word_verdicts<'a>(text: &'a str, broken: &BrokenKeys) -> Vec<WordVerdict<'a>> {
    words(text)
        .map(|word| WordVerdict {
            word,
            blocked_by: blocking_key(word, broken),
        })
        .collect()
}

/// Render an explanation of a count mismatch.
#[must_use]
pub fn render_diff(case: &FixtureCase, actual: usize) -> String {
    if actual == case.expected_count {
        return String::from("[identical]");
    }

    let broken = BrokenKeys::new(&case.broken_letters);
    let mut out = String::new();
    out.push_str(&format!(
        "expected {}, got {}\n",
        case.expected_count, actual
    ));
    for verdict in word_verdicts(&case.text, &broken) {
        match verdict.blocked_by {
            Some(key) => out.push_str(&format!("-{} (blocked by {:?})\n", verdict.word, key)),
            None => out.push_str(&format!("+{} (typeable)\n", verdict.word)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(text: &str, broken_letters: &str, expected_count: usize) -> FixtureCase {
        FixtureCase {
            name: String::from("case"),
            text: text.to_string(),
            broken_letters: broken_letters.to_string(),
            expected_count,
            detail: None,
        }
    }

    #[test]
    fn matching_counts_render_identical() {
        let case = fixture("leet code", "lt", 1);
        assert_eq!(render_diff(&case, 1), "[identical]");
    }

    #[test]
    fn mismatch_names_the_blocking_key() {
        let case = fixture("leet code", "lt", 2);
        let rendered = render_diff(&case, 1);
        assert!(rendered.contains("expected 2, got 1"));
        assert!(rendered.contains("-leet (blocked by 'l')"));
        assert!(rendered.contains("+code (typeable)"));
    }

    #[test]
    fn verdicts_cover_every_word() {
        let broken = BrokenKeys::new("e");
        let verdicts = word_verdicts("leet code okay", &broken);
        assert_eq!(verdicts.len(), 3);
        assert_eq!(verdicts[0].blocked_by, Some('e'));
        assert_eq!(verdicts[1].blocked_by, Some('e'));
        assert_eq!(verdicts[2].blocked_by, None);
    }
}
