//! Letter hints for an on-screen keyboard
//!
//! Tracks the strongest verdict seen for every letter across submitted rows.

use super::Row;
use crate::core::Verdict;

/// Best verdict known for each letter A–Z
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardHints([Option<Verdict>; 26]);

impl KeyboardHints {
    /// Build hints from submitted rows
    #[must_use]
    pub fn from_rows(rows: &[Row]) -> Self {
        let mut hints = Self::default();
        for row in rows {
            for (&letter, &verdict) in row.word.letters().iter().zip(row.feedback.verdicts()) {
                hints.record(letter, verdict);
            }
        }
        hints
    }

    fn record(&mut self, letter: u8, verdict: Verdict) {
        if let Some(slot) = Self::slot(letter).and_then(|i| self.0.get_mut(i)) {
            *slot = (*slot).max(Some(verdict));
        }
    }

    fn slot(letter: u8) -> Option<usize> {
        letter
            .to_ascii_uppercase()
            .checked_sub(b'A')
            .map(usize::from)
            .filter(|&i| i < 26)
    }

    /// Strongest verdict for `letter`, or `None` if it has not been guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Verdict> {
        u8::try_from(letter)
            .ok()
            .and_then(Self::slot)
            .and_then(|i| self.0[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate};

    fn row(secret: &str, guess: &str) -> Row {
        let secret = Word::new(secret, 5).unwrap();
        let word = Word::new(guess, 5).unwrap();
        let feedback = evaluate(&secret, &word).unwrap();
        Row { word, feedback }
    }

    #[test]
    fn unguessed_letters_have_no_hint() {
        let hints = KeyboardHints::from_rows(&[]);
        assert_eq!(hints.get('A'), None);
        assert_eq!(hints.get('?'), None);
    }

    #[test]
    fn strongest_verdict_wins() {
        // RATES puts R, A and E in the wrong place; SLATE then places A and E
        let hints = KeyboardHints::from_rows(&[row("crane", "rates"), row("crane", "slate")]);

        assert_eq!(hints.get('A'), Some(Verdict::Correct));
        assert_eq!(hints.get('E'), Some(Verdict::Correct));
        assert_eq!(hints.get('R'), Some(Verdict::Present));
        assert_eq!(hints.get('S'), Some(Verdict::Absent));
        assert_eq!(hints.get('T'), Some(Verdict::Absent));
        assert_eq!(hints.get('a'), Some(Verdict::Correct));
        assert_eq!(hints.get('Z'), None);
    }

    #[test]
    fn later_weaker_verdict_does_not_downgrade() {
        // E is correct in CRANE@4, then absent as a duplicate in EERIE
        let hints = KeyboardHints::from_rows(&[row("crane", "crane"), row("crane", "eerie")]);
        assert_eq!(hints.get('E'), Some(Verdict::Correct));
    }
}
