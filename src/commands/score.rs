//! Score command
//!
//! Scores a single guess against a given secret without playing a game.

use crate::core::{Feedback, Word, evaluate};
use crate::error::GameError;

/// Result of scoring a guess
pub struct ScoreResult {
    pub secret: String,
    pub guess: String,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if:
/// - Either word contains anything other than ASCII letters
/// - The words differ in length
pub fn score_words(secret: &str, guess: &str) -> Result<ScoreResult, String> {
    let secret_word =
        Word::new(secret, secret.len()).map_err(|e| format!("Invalid secret: {e}"))?;
    let guess_word = Word::new(guess, guess.len()).map_err(|e| format!("Invalid guess: {e}"))?;

    let feedback = evaluate(&secret_word, &guess_word).map_err(|e| match e {
        GameError::LengthMismatch { expected, actual } => {
            format!("Guess has {actual} letters but the secret has {expected}")
        }
        other => other.to_string(),
    })?;

    Ok(ScoreResult {
        secret: secret_word.text().to_string(),
        guess: guess_word.text().to_string(),
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict::{Absent, Correct};

    #[test]
    fn score_valid_pair() {
        let result = score_words("crane", "Crate").unwrap();
        assert_eq!(result.secret, "CRANE");
        assert_eq!(result.guess, "CRATE");
        assert_eq!(
            result.feedback.verdicts(),
            &[Correct, Correct, Correct, Absent, Correct]
        );
    }

    #[test]
    fn score_invalid_secret() {
        let result = score_words("cr4ne", "crate");
        assert!(result.is_err_and(|e| e.starts_with("Invalid secret")));
    }

    #[test]
    fn score_invalid_guess() {
        let result = score_words("crane", "cr@te");
        assert!(result.is_err_and(|e| e.starts_with("Invalid guess")));
    }

    #[test]
    fn score_words_longer_than_255_letters() {
        let secret = "a".repeat(256);
        let guess = format!("{}b", "a".repeat(255));
        let result = score_words(&secret, &guess).unwrap();

        assert_eq!(result.feedback.count_correct(), 255);
        assert_eq!(result.feedback.verdicts()[255], Absent);
    }

    #[test]
    fn score_length_mismatch() {
        let result = score_words("crane", "cranes");
        assert!(result.is_err_and(|e| e == "Guess has 6 letters but the secret has 5"));
    }
}
