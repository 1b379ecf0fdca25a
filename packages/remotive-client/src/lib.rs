//! Pure Remotive REST API client.
//!
//! A minimal client for the Remotive public job board API. Fetches raw
//! listings; normalization lives downstream.
//!
//! API docs: <https://remotive.com/api/remote-jobs>
//!
//! # Example
//!
//! ```rust,ignore
//! use remotive_client::{RemotiveClient, RemotiveJob};
//!
//! let client = RemotiveClient::new();
//! let listings = client.fetch_listings(Some("embedded firmware")).await?;
//! for raw in &listings {
//!     if let Some(job) = RemotiveJob::from_raw(raw) {
//!         println!("{}", job.title.as_deref().unwrap_or("(untitled)"));
//!     }
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{RemotiveError, Result};
pub use types::{JobsPayload, RemotiveJob};

use serde_json::Value;
use std::time::Duration;

const BASE_URL: &str = "https://remotive.com/api/remote-jobs";

pub struct RemotiveClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for RemotiveClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RemotiveClient {
    /// Create a client with default settings (20s timeout, redirects on).
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(20))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: BASE_URL.to_string(),
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

    /// Fetch raw listings, optionally passing a free-text search query.
    pub async fn fetch_listings(&self, query: Option<&str>) -> Result<Vec<Value>> {
        let mut request = self.client.get(&self.base_url);
        if let Some(q) = query {
            request = request.query(&[("search", q)]);
        }

        tracing::debug!(query = ?query, "Fetching Remotive listings");
        let resp = request.send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RemotiveError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        let payload: JobsPayload = serde_json::from_str(&body)?;
        tracing::debug!(count = payload.jobs.len(), "Fetched Remotive listings");
        Ok(payload.jobs)
    }
}
