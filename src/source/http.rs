//! HTTP word source
//!
//! Talks to a words API exposing `GET /word-of-the-day` and
//! `POST /validate-word`.

use super::{SourceError, WordSource};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default base URL of the words API
pub const DEFAULT_API_URL: &str = "https://words.dev-apis.com";

/// Connection settings for [`HttpWordSource`]
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{path}", base_url.trim_end_matches('/'))
}

#[derive(Debug, Deserialize)]
struct WordOfDayResponse {
    word: String,
}

#[derive(Debug, Serialize)]
struct ValidateRequest<'a> {
    word: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidateResponse {
    valid_word: bool,
}

/// Word source backed by the remote words API
pub struct HttpWordSource {
    client: Client,
    base_url: String,
}

impl HttpWordSource {
    /// Build a client for the configured API
    ///
    /// # Errors
    /// Returns `SourceError::Http` if the HTTP client cannot be constructed.
    pub fn new(config: HttpConfig) -> Result<Self, SourceError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    fn check_status(url: &str, response: &reqwest::Response) -> Result<(), SourceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        warn!(url, status = status.as_u16(), "word source returned error status");
        Err(SourceError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        })
    }
}

impl WordSource for HttpWordSource {
    async fn fetch_word_of_day(&self) -> Result<String, SourceError> {
        let url = self.url("word-of-the-day");
        debug!(%url, "fetching word of the day");

        let response = self.client.get(&url).send().await?;
        Self::check_status(&url, &response)?;

        let body: WordOfDayResponse = serde_json::from_str(&response.text().await?)?;
        Ok(body.word.trim().to_ascii_uppercase())
    }

    async fn check_valid_word(&self, candidate: &str) -> Result<bool, SourceError> {
        let url = self.url("validate-word");
        debug!(%url, candidate, "validating word");

        let response = self
            .client
            .post(&url)
            .json(&ValidateRequest { word: candidate })
            .send()
            .await?;
        Self::check_status(&url, &response)?;

        let body: ValidateResponse = serde_json::from_str(&response.text().await?)?;
        Ok(body.valid_word)
    }
}
