//! The in-progress guess for the active row

use std::fmt;

/// Letters typed so far on the active row
///
/// Holds at most `capacity` uppercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    letters: String,
    capacity: usize,
}

impl Guess {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            letters: String::with_capacity(capacity),
            capacity,
        }
    }

    /// Add a letter, overwriting the last slot when already full
    ///
    /// `letter` must already be an uppercase ASCII letter.
    pub(crate) fn push_or_overwrite(&mut self, letter: char) {
        debug_assert!(letter.is_ascii_uppercase());
        if self.is_full() {
            self.letters.pop();
        }
        self.letters.push(letter);
    }

    pub(crate) fn pop(&mut self) -> Option<char> {
        self.letters.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.letters.clear();
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.letters
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() >= self.capacity
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters)
    }
}
