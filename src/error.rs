//! Error types for the game core

use crate::core::WordError;
use crate::source::SourceError;
use thiserror::Error;

/// Errors surfaced by session construction, submission and evaluation
#[derive(Debug, Error)]
pub enum GameError {
    /// The word source returned a secret that cannot be played
    #[error("invalid secret {secret:?}: {reason}")]
    InvalidSecret { secret: String, reason: WordError },

    /// The word source could not be reached or returned garbage
    #[error("word source unavailable: {0}")]
    SourceUnavailable(#[from] SourceError),

    /// Evaluator called with a guess whose length differs from the secret
    #[error("length mismatch: secret has {expected} letters, guess has {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
