//! Guess evaluation
//!
//! Scores a guess against the secret with proper handling of repeated letters.

use super::{Feedback, Verdict, Word};
use crate::error::GameError;

/// Calculate the feedback when `guess` is submitted against `secret`
///
/// # Algorithm
/// 1. Count every letter of the secret
/// 2. First pass: mark exact matches Correct and spend them from the counts
/// 3. Second pass: mark remaining positions Present while unspent copies remain,
///    otherwise Absent
///
/// The first pass must finish before the second starts, so an exactly placed
/// letter is never also claimed as Present elsewhere.
///
/// # Errors
/// Returns `GameError::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use wordly::core::{Verdict, Word, evaluate};
///
/// let secret = Word::new("crane", 5).unwrap();
/// let guess = Word::new("crate", 5).unwrap();
/// let feedback = evaluate(&secret, &guess).unwrap();
///
/// assert_eq!(feedback.verdicts()[3], Verdict::Absent);
/// assert_eq!(feedback.count_correct(), 4);
/// ```
pub fn evaluate(secret: &Word, guess: &Word) -> Result<Feedback, GameError> {
    if secret.len() != guess.len() {
        return Err(GameError::LengthMismatch {
            expected: secret.len(),
            actual: guess.len(),
        });
    }

    let mut verdicts = vec![Verdict::Absent; guess.len()];
    let mut remaining = secret.char_counts();

    // First pass: exact position matches
    for (i, (&g, &s)) in guess.letters().iter().zip(secret.letters()).enumerate() {
        if g == s {
            verdicts[i] = Verdict::Correct;
            if let Some(count) = remaining.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong position, letter still available
    for (i, &g) in guess.letters().iter().enumerate() {
        if verdicts[i] == Verdict::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&g)
            && *count > 0
        {
            verdicts[i] = Verdict::Present;
            *count -= 1;
        }
    }

    Ok(Feedback::new(verdicts))
}
