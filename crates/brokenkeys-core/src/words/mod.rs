//! Whitespace word scanning.
//!
//! Splits a text into words on runs of whitespace. Unlike the classic
//! in-place tokenizers, the scanner borrows subslices of the input and
//! never allocates. Leading, trailing, and repeated separators produce no
//! empty words.

/// Returns an iterator over the whitespace-separated words of `text`.
///
/// One or more contiguous whitespace characters act as a single separator.
/// Leading and trailing whitespace produce no empty words; an empty or
/// all-whitespace text yields nothing.
#[must_use]
pub fn words(text: &str) -> Words<'_> {
    Words { rest: text }
}

/// Iterator over whitespace-separated words, borrowing from the input text.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        // Skip leading separators.
        let trimmed = self.rest.trim_start();
        if trimmed.is_empty() {
            self.rest = trimmed;
            return None;
        }

        // Scan to the end of the word.
        match trimmed.find(char::is_whitespace) {
            Some(end) => {
                self.rest = &trimmed[end..];
                Some(&trimmed[..end])
            }
            None => {
                self.rest = "";
                Some(trimmed)
            }
        }
    }
}
