//! Source adapters: one per upstream job API.
//!
//! Each adapter owns a pure wire client and maps the source-specific payload
//! into the normalized [`JobOpportunity`] schema. Adapters tolerate missing
//! optional fields, skip individual malformed listings, and never let one
//! bad record fail the batch.

pub mod arbeitnow;
pub mod mock;
pub mod remotive;

pub use arbeitnow::ArbeitnowSource;
pub use mock::MockSource;
pub use remotive::RemotiveSource;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::SourceResult;
use crate::types::{FetchConfig, JobOpportunity};

/// A job source: fetches upstream listings and returns normalized records.
///
/// One fetch per invocation; the returned batch is finite and already
/// normalized. Implementations must not panic on malformed upstream data.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Source identifier used in record ids and logs.
    fn name(&self) -> &'static str;

    /// Fetch and normalize up to `config.limit` records.
    async fn fetch(&self, config: &FetchConfig) -> SourceResult<Vec<JobOpportunity>>;
}

/// The fixed source registry, in priority order: Remotive first, then
/// Arbeitnow. Output order of a run is defined by this order, never by
/// response arrival.
pub fn default_registry() -> Vec<Box<dyn JobSource>> {
    vec![
        Box::new(RemotiveSource::new()),
        Box::new(ArbeitnowSource::new()),
    ]
}

/// First non-empty salary value among the given payload fields, or
/// `"unknown"`. Sources disagree on the field name, so callers pass their
/// own fallback chain.
pub(crate) fn salary_label<'a, I>(candidates: I) -> String
where
    I: IntoIterator<Item = Option<&'a Value>>,
{
    for value in candidates.into_iter().flatten() {
        match value {
            Value::Number(n) => return n.to_string(),
            Value::String(s) => {
                let s = s.trim();
                if !s.is_empty() {
                    return s.to_string();
                }
            }
            _ => {}
        }
    }
    "unknown".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn salary_label_fallback_chain() {
        let range = json!("60k-80k EUR");
        let number = json!(90000);
        let blank = json!("   ");

        assert_eq!(
            salary_label([None, Some(&range), Some(&number)]),
            "60k-80k EUR"
        );
        assert_eq!(salary_label([Some(&blank), Some(&number)]), "90000");
        assert_eq!(salary_label([None, None]), "unknown");
    }
}
