//! Wordly
//!
//! A terminal word-guessing game: find the hidden word in a fixed number of
//! tries, with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordly::core::{Verdict, Word, evaluate};
//!
//! let secret = Word::new("speed", 5).unwrap();
//! let guess = Word::new("erase", 5).unwrap();
//!
//! let feedback = evaluate(&secret, &guess).unwrap();
//! assert_eq!(feedback.verdicts()[0], Verdict::Present);
//! println!("{feedback}");
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Game session state machine
pub mod game;

// Secret and dictionary providers
pub mod source;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
