//! Pipeline orchestration: fetch every source, merge, cap.
//!
//! Sources run concurrently but results are collected in registry order, so
//! output is deterministic given fixed registry order and fixed upstream
//! responses. A failing source contributes nothing and never aborts the run.

use futures::future::join_all;
use std::collections::HashSet;
use tracing::{info, warn};

use crate::sources::JobSource;
use crate::types::{FetchConfig, JobOpportunity};

/// Result of one pipeline run.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// Merged, deduped, capped records in source-priority order.
    pub jobs: Vec<JobOpportunity>,

    /// Names of sources whose fetch failed.
    pub failed_sources: Vec<String>,
}

impl FetchOutcome {
    /// True when every source contributed.
    pub fn is_complete(&self) -> bool {
        self.failed_sources.is_empty()
    }
}

/// Fetch from all sources and merge.
///
/// Records are concatenated in registry order, deduped by id (first
/// occurrence wins; the same posting can be cross-posted to several boards),
/// and truncated to `config.limit`. Per-source relevance filtering has
/// already happened inside the adapters.
pub async fn fetch_all(sources: &[Box<dyn JobSource>], config: &FetchConfig) -> FetchOutcome {
    let results = join_all(sources.iter().map(|source| source.fetch(config))).await;

    let mut seen: HashSet<String> = HashSet::new();
    let mut jobs: Vec<JobOpportunity> = Vec::new();
    let mut failed_sources: Vec<String> = Vec::new();

    for (source, result) in sources.iter().zip(results) {
        match result {
            Ok(batch) => {
                info!(source = source.name(), count = batch.len(), "Source fetched");
                for job in batch {
                    if seen.insert(job.id.clone()) {
                        jobs.push(job);
                    }
                }
            }
            Err(e) => {
                warn!(source = source.name(), error = %e, "Source fetch failed, continuing");
                failed_sources.push(source.name().to_string());
            }
        }
    }

    jobs.truncate(config.limit);

    FetchOutcome {
        jobs,
        failed_sources,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::mock::{sample_job, MockSource};

    fn registry_of(sources: Vec<MockSource>) -> Vec<Box<dyn JobSource>> {
        sources
            .into_iter()
            .map(|s| Box::new(s) as Box<dyn JobSource>)
            .collect()
    }

    #[tokio::test]
    async fn merges_in_registry_order() {
        let sources = registry_of(vec![
            MockSource::new("first", vec![sample_job("first", 1), sample_job("first", 2)]),
            MockSource::new("second", vec![sample_job("second", 1)]),
        ]);

        let outcome = fetch_all(&sources, &FetchConfig::new()).await;

        assert!(outcome.is_complete());
        let order: Vec<&str> = outcome.jobs.iter().map(|j| j.source.as_str()).collect();
        assert_eq!(order, vec!["first", "first", "second"]);
    }

    #[tokio::test]
    async fn failed_source_does_not_abort_run() {
        let sources = registry_of(vec![
            MockSource::failing("down"),
            MockSource::new("up", vec![sample_job("up", 1)]),
        ]);

        let outcome = fetch_all(&sources, &FetchConfig::new()).await;

        assert_eq!(outcome.failed_sources, vec!["down"]);
        assert_eq!(outcome.jobs.len(), 1);
        assert_eq!(outcome.jobs[0].source, "up");
    }

    #[tokio::test]
    async fn respects_limit() {
        let jobs: Vec<_> = (0..10).map(|n| sample_job("first", n)).collect();
        let sources = registry_of(vec![
            MockSource::new("first", jobs),
            MockSource::new("second", vec![sample_job("second", 1)]),
        ]);

        let outcome = fetch_all(&sources, &FetchConfig::new().with_limit(4)).await;

        assert_eq!(outcome.jobs.len(), 4);
        assert!(outcome.jobs.iter().all(|j| j.source == "first"));
    }

    #[tokio::test]
    async fn dedupes_by_id_first_occurrence_wins() {
        let shared = sample_job("first", 1);
        let mut cross_posted = sample_job("second", 9);
        cross_posted.id = shared.id.clone();
        cross_posted.company_name = "Other Co".to_string();

        let sources = registry_of(vec![
            MockSource::new("first", vec![shared.clone()]),
            MockSource::new("second", vec![cross_posted, sample_job("second", 2)]),
        ]);

        let outcome = fetch_all(&sources, &FetchConfig::new()).await;

        assert_eq!(outcome.jobs.len(), 2);
        assert_eq!(outcome.jobs[0].company_name, shared.company_name);
        assert_eq!(outcome.jobs[1].source, "second");
    }

    #[tokio::test]
    async fn limit_zero_yields_nothing() {
        let sources = registry_of(vec![MockSource::new("first", vec![sample_job("first", 1)])]);
        let outcome = fetch_all(&sources, &FetchConfig::new().with_limit(0)).await;
        assert!(outcome.jobs.is_empty());
    }

    #[tokio::test]
    async fn filter_flag_reaches_sources() {
        let mut relevant = sample_job("first", 1);
        relevant.job_title = "FPGA Engineer".to_string();
        let irrelevant = sample_job("first", 2);

        let sources = registry_of(vec![MockSource::new("first", vec![relevant, irrelevant])]);

        let outcome = fetch_all(&sources, &FetchConfig::new().filter_electronics()).await;

        assert_eq!(outcome.jobs.len(), 1);
        assert_eq!(outcome.jobs[0].job_title, "FPGA Engineer");
    }
}
