//! Game session state machine
//!
//! A session owns everything that changes during a game: the guess being
//! typed, the active row, the finished status and the rows submitted so far.
//! Hosts feed it discrete input events and render the data it exposes.

use super::{GameConfig, Guess};
use crate::core::{Feedback, Word, evaluate};
use crate::error::GameError;
use crate::source::{SourceError, WordSource};
use tracing::{debug, info, warn};

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Won,
    Lost,
}

impl SessionStatus {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// What happened to a letter or backspace event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// The guess changed
    Accepted,
    /// Not a letter, or nothing to delete
    Ignored,
    /// A submission is waiting on the word source
    Busy,
    /// The game is over
    Finished,
}

/// Outcome of submitting the current guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// Guess incomplete, game over, or a submission already in flight.
    /// Nothing was changed.
    NotReady,
    /// The word source does not know the word. Guess and row are untouched.
    InvalidWord,
    /// The guess was scored and the row advanced
    Evaluated {
        verdicts: Feedback,
        status: SessionStatus,
    },
}

/// One accepted guess with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub word: Word,
    pub feedback: Feedback,
}

/// A submission waiting for the word source's verdict
///
/// Obtained from [`Session::begin_submit`] and handed back to
/// [`Session::complete_submit`] once validation resolves.
#[derive(Debug)]
#[must_use]
pub struct PendingSubmit {
    word: Word,
}

impl PendingSubmit {
    /// The word to validate
    #[must_use]
    pub fn candidate(&self) -> &str {
        self.word.text()
    }
}

/// A single game against one secret
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    secret: Word,
    guess: Guess,
    row: usize,
    status: SessionStatus,
    busy: bool,
    history: Vec<Row>,
}

impl Session {
    /// Start a game against `secret`
    ///
    /// # Errors
    /// Returns `GameError::InvalidSecret` if the secret is not
    /// `config.answer_length` ASCII letters.
    pub fn new(secret: &str, config: GameConfig) -> Result<Self, GameError> {
        let secret = Word::new(secret, config.answer_length).map_err(|reason| {
            GameError::InvalidSecret {
                secret: secret.to_string(),
                reason,
            }
        })?;

        debug!(
            length = config.answer_length,
            rounds = config.rounds,
            "session started"
        );

        Ok(Self {
            config,
            secret,
            guess: Guess::new(config.answer_length),
            row: 0,
            status: SessionStatus::InProgress,
            busy: false,
            history: Vec::with_capacity(config.rounds),
        })
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn guess(&self) -> &Guess {
        &self.guess
    }

    /// Index of the active row (number of accepted guesses so far)
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    /// True while a submission is waiting on the word source
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// Accepted guesses in submission order
    #[must_use]
    pub fn history(&self) -> &[Row] {
        &self.history
    }

    fn input_gate(&self) -> Option<InputOutcome> {
        if self.status.is_finished() {
            Some(InputOutcome::Finished)
        } else if self.busy {
            Some(InputOutcome::Busy)
        } else {
            None
        }
    }

    /// Type a letter into the active row
    ///
    /// Letters are case-insensitive. When the row is already full the last
    /// letter is replaced.
    pub fn append_letter(&mut self, ch: char) -> InputOutcome {
        if let Some(outcome) = self.input_gate() {
            debug!(?outcome, %ch, "letter rejected");
            return outcome;
        }
        if !ch.is_ascii_alphabetic() {
            return InputOutcome::Ignored;
        }

        self.guess.push_or_overwrite(ch.to_ascii_uppercase());
        InputOutcome::Accepted
    }

    /// Delete the last letter of the active row
    pub fn backspace(&mut self) -> InputOutcome {
        if let Some(outcome) = self.input_gate() {
            debug!(?outcome, "backspace rejected");
            return outcome;
        }

        match self.guess.pop() {
            Some(_) => InputOutcome::Accepted,
            None => InputOutcome::Ignored,
        }
    }

    /// Lock the current guess for validation
    ///
    /// Returns `None` (and changes nothing) when the game is over, a
    /// submission is already in flight, or the guess is incomplete. Otherwise
    /// marks the session busy until [`Session::complete_submit`] is called.
    pub fn begin_submit(&mut self) -> Option<PendingSubmit> {
        if self.input_gate().is_some() || self.guess.len() != self.config.answer_length {
            return None;
        }

        let word = Word::new(self.guess.as_str(), self.config.answer_length).ok()?;
        self.busy = true;
        debug!(guess = %word, row = self.row, "validating guess");

        Some(PendingSubmit { word })
    }

    /// Apply the word source's answer to a pending submission
    ///
    /// # Errors
    /// Returns `GameError::SourceUnavailable` if validation failed. The guess
    /// is kept so the player can retry.
    pub fn complete_submit(
        &mut self,
        pending: PendingSubmit,
        validation: Result<bool, SourceError>,
    ) -> Result<SubmitResult, GameError> {
        debug_assert_eq!(pending.word.text(), self.guess.as_str());
        self.busy = false;

        match validation {
            Err(err) => {
                warn!(guess = %pending.word, error = %err, "word check failed");
                Err(GameError::SourceUnavailable(err))
            }
            Ok(false) => {
                info!(guess = %pending.word, "not a recognized word");
                Ok(SubmitResult::InvalidWord)
            }
            Ok(true) => self.apply_guess(pending.word),
        }
    }

    fn apply_guess(&mut self, word: Word) -> Result<SubmitResult, GameError> {
        let feedback = evaluate(&self.secret, &word)?;

        self.row += 1;
        self.guess.clear();
        self.status = if feedback.is_perfect() {
            SessionStatus::Won
        } else if self.row >= self.config.rounds {
            SessionStatus::Lost
        } else {
            SessionStatus::InProgress
        };

        info!(
            guess = %word,
            row = self.row,
            feedback = %feedback,
            status = ?self.status,
            "guess evaluated"
        );

        self.history.push(Row {
            word,
            feedback: feedback.clone(),
        });

        Ok(SubmitResult::Evaluated {
            verdicts: feedback,
            status: self.status,
        })
    }

    /// Submit the current guess, validating it with `source`
    ///
    /// # Errors
    /// Returns `GameError::SourceUnavailable` if the word source fails.
    pub async fn submit_guess<S: WordSource>(
        &mut self,
        source: &S,
    ) -> Result<SubmitResult, GameError> {
        let Some(pending) = self.begin_submit() else {
            return Ok(SubmitResult::NotReady);
        };

        let validation = source.check_valid_word(pending.candidate()).await;
        self.complete_submit(pending, validation)
    }
}
