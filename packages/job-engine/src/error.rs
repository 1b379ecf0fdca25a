//! Typed errors for the job engine.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can tell
//! which upstream failed and react per source.

use thiserror::Error;

/// Errors a source adapter can surface.
///
/// The pipeline treats any of these as "this source contributed nothing";
/// they never abort a run.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Remotive fetch failed
    #[error("remotive: {0}")]
    Remotive(#[from] remotive_client::RemotiveError),

    /// Arbeitnow fetch failed
    #[error("arbeitnow: {0}")]
    Arbeitnow(#[from] arbeitnow_client::ArbeitnowError),

    /// Any other source failure (mock sources, future adapters)
    #[error("source error: {0}")]
    Other(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for source operations.
pub type SourceResult<T> = std::result::Result<T, SourceError>;
