//! Bundled word lists
//!
//! Lists compiled into the binary so the game can run without a network.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
