//! Job posting normalization and aggregation.
//!
//! Fetches postings from public job APIs through pluggable source adapters,
//! normalizes them into one stable [`JobOpportunity`] schema, optionally
//! filters for electronics/hardware relevance, and merges everything
//! deterministically.
//!
//! # Example
//!
//! ```rust,ignore
//! use job_engine::{default_registry, fetch_all, FetchConfig};
//!
//! let config = FetchConfig::new()
//!     .with_query("embedded firmware")
//!     .with_limit(50)
//!     .filter_electronics();
//!
//! let outcome = fetch_all(&default_registry(), &config).await;
//! println!("{} jobs, {} sources failed", outcome.jobs.len(), outcome.failed_sources.len());
//! ```

pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod sources;
pub mod types;
pub mod util;

pub use error::{SourceError, SourceResult};
pub use pipeline::{fetch_all, FetchOutcome};
pub use sources::{default_registry, ArbeitnowSource, JobSource, MockSource, RemotiveSource};
pub use types::{FetchConfig, JobOpportunity, Seniority};
