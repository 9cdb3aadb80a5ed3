//! Core domain types for the game
//!
//! Words, verdicts and the evaluator. Everything here is pure and has no
//! knowledge of sessions, word sources or rendering.

mod evaluator;
mod verdict;
mod word;

pub use evaluator::evaluate;
pub use verdict::{Feedback, Verdict};
pub use word::{Word, WordError};
