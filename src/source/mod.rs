//! Word sources
//!
//! A word source supplies the secret for a game and decides whether a
//! submitted guess is a recognized word. The session only talks to it through
//! the [`WordSource`] trait.

mod embedded;
mod http;

pub use embedded::{EmbeddedWordSource, SecretPick};
pub use http::{DEFAULT_API_URL, HttpConfig, HttpWordSource};

use std::future::Future;
use thiserror::Error;

/// Errors raised while talking to a word source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("word list has no {0}-letter answers")]
    EmptyWordList(usize),
}

/// Supplier of secrets and dictionary checks
///
/// Both operations are asynchronous and fallible. Returned futures are `Send`
/// so hosts can drive them on a background task.
pub trait WordSource: Send + Sync {
    /// Fetch the secret for today's game
    fn fetch_word_of_day(&self) -> impl Future<Output = Result<String, SourceError>> + Send;

    /// Check whether `candidate` is a recognized word
    fn check_valid_word(
        &self,
        candidate: &str,
    ) -> impl Future<Output = Result<bool, SourceError>> + Send;
}

/// Either of the bundled sources, chosen at runtime
pub enum AnySource {
    Embedded(EmbeddedWordSource),
    Http(HttpWordSource),
}

impl WordSource for AnySource {
    async fn fetch_word_of_day(&self) -> Result<String, SourceError> {
        match self {
            Self::Embedded(source) => source.fetch_word_of_day().await,
            Self::Http(source) => source.fetch_word_of_day().await,
        }
    }

    async fn check_valid_word(&self, candidate: &str) -> Result<bool, SourceError> {
        match self {
            Self::Embedded(source) => source.check_valid_word(candidate).await,
            Self::Http(source) => source.check_valid_word(candidate).await,
        }
    }
}
