//! Game session and its supporting types
//!
//! The session is the only stateful part of the game. It depends on a word
//! source through the [`crate::source::WordSource`] trait and never renders
//! anything itself.

mod config;
mod guess;
mod keyboard;
mod session;
mod stats;

pub use config::{ANSWER_LENGTH, GameConfig, ROUNDS};
pub use guess::Guess;
pub use keyboard::KeyboardHints;
pub use session::{InputOutcome, PendingSubmit, Row, Session, SessionStatus, SubmitResult};
pub use stats::Statistics;
