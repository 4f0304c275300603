//! Word typeability: which words survive a set of broken keys.
//!
//! A word is typeable when none of its characters is a broken key. The
//! per-word check short-circuits on the first broken character found.

use crate::keyset::BrokenKeys;
use crate::words::words;

/// Returns the first broken character in `word`, in scan order.
///
/// `None` means every character of the word can still be typed.
#[must_use]
pub fn blocking_key(word: &str, broken: &BrokenKeys) -> Option<char> {
    word.chars().find(|&c| broken.is_broken(c))
}

/// Returns `true` if `word` contains no broken character.
#[inline]
#[must_use]
pub fn is_typeable(word: &str, broken: &BrokenKeys) -> bool {
    blocking_key(word, broken).is_none()
}

/// Counts the whitespace-separated words of `text` that can be fully typed
/// when the keys in `broken_letters` are broken.
///
/// An empty text has no words and counts 0; an empty broken-letter string
/// leaves every word typeable. The count is always between 0 and the number
/// of words in `text`, inclusive.
#[must_use]
pub fn count_typeable(text: &str, broken_letters: &str) -> usize {
    let broken = BrokenKeys::new(broken_letters);
    words(text).filter(|word| is_typeable(word, &broken)).count()
}
