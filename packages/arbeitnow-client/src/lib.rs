//! Pure Arbeitnow job board API client.
//!
//! Fetches pages of raw listings from the public job board feed. The feed is
//! paginated and rate-limited; HTTP 429 responses are retried with
//! exponential backoff.
//!
//! API docs: <https://www.arbeitnow.com/api/job-board-api>

pub mod error;
pub mod types;

pub use error::{ArbeitnowError, Result};
pub use types::{ArbeitnowJob, JobBoardPage};

use std::time::Duration;

const BASE_URL: &str = "https://www.arbeitnow.com/api/job-board-api";

pub struct ArbeitnowClient {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
    backoff: Duration,
}

impl Default for ArbeitnowClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ArbeitnowClient {
    /// Create a client with default settings (20s timeout, 3 retries on 429).
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(20))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: BASE_URL.to_string(),
            max_retries: 3,
            backoff: Duration::from_secs(2),
        }
    }

    /// Override the endpoint URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Use a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Set the retry budget for rate-limited requests.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the initial backoff; doubles on each retry.
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Fetch one page of the feed (pages start at 1).
    ///
    /// An empty `data` array signals the end of the feed.
    pub async fn fetch_page(&self, page: u32) -> Result<JobBoardPage> {
        let mut attempt = 0;
        loop {
            tracing::debug!(page, attempt, "Fetching Arbeitnow page");
            let resp = self
                .client
                .get(&self.base_url)
                .query(&[("page", page)])
                .send()
                .await?;

            let status = resp.status();
            if status.as_u16() == 429 && attempt < self.max_retries {
                let sleep = self.backoff * 2u32.pow(attempt);
                tracing::warn!(page, attempt, sleep_ms = sleep.as_millis() as u64, "Rate limited, backing off");
                tokio::time::sleep(sleep).await;
                attempt += 1;
                continue;
            }
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                return Err(ArbeitnowError::Api {
                    status: status.as_u16(),
                    message: body,
                });
            }

            let body = resp.text().await?;
            let parsed: JobBoardPage = serde_json::from_str(&body)?;
            tracing::debug!(page, count = parsed.data.len(), "Fetched Arbeitnow page");
            return Ok(parsed);
        }
    }
}
