//! Offline word source backed by word lists
//!
//! Uses the lists compiled into the binary by default, or any list the caller
//! loads from disk.

use super::{SourceError, WordSource};
use crate::core::Word;
use crate::wordlists::{ALLOWED, ANSWERS, loader::words_from_slice};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

const SECONDS_PER_DAY: u64 = 86_400;

/// How the secret is chosen from the answer list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretPick {
    /// Same word for everyone on a given (UTC) day
    Daily,
    /// Random word per game, optionally seeded for reproducible runs
    Random(Option<u64>),
}

enum Picker {
    Daily,
    Random(Mutex<StdRng>),
}

/// Word source that never touches the network
pub struct EmbeddedWordSource {
    answers: Vec<Word>,
    dictionary: FxHashSet<String>,
    picker: Picker,
}

impl EmbeddedWordSource {
    /// Build a source from explicit answer and guess-only lists
    ///
    /// Every answer is also accepted as a guess.
    ///
    /// # Errors
    /// Returns `SourceError::EmptyWordList` if `answers` is empty.
    pub fn new(
        answers: Vec<Word>,
        extra_guesses: &[Word],
        length: usize,
        pick: SecretPick,
    ) -> Result<Self, SourceError> {
        if answers.is_empty() {
            return Err(SourceError::EmptyWordList(length));
        }

        let dictionary = answers
            .iter()
            .chain(extra_guesses)
            .map(|w| w.text().to_string())
            .collect();

        let picker = match pick {
            SecretPick::Daily => Picker::Daily,
            SecretPick::Random(seed) => {
                let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
                Picker::Random(Mutex::new(rng))
            }
        };

        Ok(Self {
            answers,
            dictionary,
            picker,
        })
    }

    /// Build a source from the lists compiled into the binary
    ///
    /// # Errors
    /// Returns `SourceError::EmptyWordList` if no bundled answer has `length`
    /// letters.
    pub fn bundled(length: usize, pick: SecretPick) -> Result<Self, SourceError> {
        let answers = words_from_slice(ANSWERS, length);
        let allowed = words_from_slice(ALLOWED, length);
        Self::new(answers, &allowed, length, pick)
    }

    /// Number of distinct accepted guesses
    #[must_use]
    pub fn dictionary_size(&self) -> usize {
        self.dictionary.len()
    }

    fn pick_index(&self) -> usize {
        let count = self.answers.len();
        match &self.picker {
            Picker::Daily => {
                let days = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map_or(0, |d| d.as_secs() / SECONDS_PER_DAY);
                (days % count as u64) as usize
            }
            Picker::Random(rng) => rng.lock().random_range(0..count),
        }
    }
}

impl WordSource for EmbeddedWordSource {
    async fn fetch_word_of_day(&self) -> Result<String, SourceError> {
        let index = self.pick_index();
        debug!(index, answers = self.answers.len(), "picked offline secret");
        Ok(self.answers[index].text().to_string())
    }

    async fn check_valid_word(&self, candidate: &str) -> Result<bool, SourceError> {
        Ok(self.dictionary.contains(&candidate.to_ascii_uppercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        words_from_slice(list, 5)
    }

    #[tokio::test]
    async fn bundled_secret_comes_from_answers() {
        let source = EmbeddedWordSource::bundled(5, SecretPick::Random(Some(7))).unwrap();
        let secret = source.fetch_word_of_day().await.unwrap();

        assert!(
            ANSWERS
                .iter()
                .any(|a| a.eq_ignore_ascii_case(&secret))
        );
        assert!(source.check_valid_word(&secret).await.unwrap());
    }

    #[tokio::test]
    async fn seeded_picks_are_reproducible() {
        let a = EmbeddedWordSource::bundled(5, SecretPick::Random(Some(42))).unwrap();
        let b = EmbeddedWordSource::bundled(5, SecretPick::Random(Some(42))).unwrap();

        for _ in 0..5 {
            assert_eq!(
                a.fetch_word_of_day().await.unwrap(),
                b.fetch_word_of_day().await.unwrap()
            );
        }
    }

    #[tokio::test]
    async fn daily_pick_is_stable() {
        let source = EmbeddedWordSource::bundled(5, SecretPick::Daily).unwrap();
        let first = source.fetch_word_of_day().await.unwrap();
        let second = source.fetch_word_of_day().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn validity_is_case_insensitive_membership() {
        let source = EmbeddedWordSource::new(
            words(&["crane"]),
            &words(&["crate", "slate"]),
            5,
            SecretPick::Daily,
        )
        .unwrap();

        assert!(source.check_valid_word("crane").await.unwrap());
        assert!(source.check_valid_word("CRATE").await.unwrap());
        assert!(source.check_valid_word("Slate").await.unwrap());
        assert!(!source.check_valid_word("zzzzz").await.unwrap());
        assert_eq!(source.dictionary_size(), 3);
        assert_eq!(source.fetch_word_of_day().await.unwrap(), "CRANE");
    }

    #[test]
    fn empty_answer_list_is_rejected() {
        let result = EmbeddedWordSource::new(Vec::new(), &[], 5, SecretPick::Daily);
        assert!(matches!(result, Err(SourceError::EmptyWordList(5))));
    }

    #[test]
    fn bundled_lists_have_no_four_letter_answers() {
        let result = EmbeddedWordSource::bundled(4, SecretPick::Daily);
        assert!(matches!(result, Err(SourceError::EmptyWordList(4))));
    }
}
