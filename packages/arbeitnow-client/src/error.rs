use thiserror::Error;

/// Errors returned by the Arbeitnow client.
#[derive(Debug, Error)]
pub enum ArbeitnowError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx response from the API after retries are exhausted.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected envelope.
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for Arbeitnow operations.
pub type Result<T> = std::result::Result<T, ArbeitnowError>;
