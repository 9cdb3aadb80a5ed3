//! Shared helpers for integration tests.

pub mod mock_words_api;

pub use mock_words_api::{CapturedRequest, MockResponse, MockWordsApi};
