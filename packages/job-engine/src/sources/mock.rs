//! Mock source for testing.
//!
//! Returns canned records or a configured failure, and records how often it
//! was fetched.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::error::{SourceError, SourceResult};
use crate::sources::JobSource;
use crate::types::{FetchConfig, JobOpportunity, Seniority};
use crate::util::stable_id;

pub struct MockSource {
    name: &'static str,
    jobs: Vec<JobOpportunity>,
    fail: bool,
    fetch_calls: Arc<RwLock<usize>>,
}

impl MockSource {
    /// A source that returns the given records.
    pub fn new(name: &'static str, jobs: Vec<JobOpportunity>) -> Self {
        Self {
            name,
            jobs,
            fail: false,
            fetch_calls: Arc::new(RwLock::new(0)),
        }
    }

    /// A source whose fetch always fails.
    pub fn failing(name: &'static str) -> Self {
        Self {
            name,
            jobs: Vec::new(),
            fail: true,
            fetch_calls: Arc::new(RwLock::new(0)),
        }
    }

    /// How many times `fetch` was called.
    pub fn fetch_call_count(&self) -> usize {
        *self.fetch_calls.read().unwrap()
    }
}

#[async_trait]
impl JobSource for MockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch(&self, config: &FetchConfig) -> SourceResult<Vec<JobOpportunity>> {
        *self.fetch_calls.write().unwrap() += 1;

        if self.fail {
            return Err(SourceError::Other(
                format!("{} is down", self.name).into(),
            ));
        }

        let mut jobs: Vec<JobOpportunity> = self
            .jobs
            .iter()
            .filter(|job| {
                !config.filter_electronics
                    || crate::normalize::is_electronics_role(&job.job_title, &job.description)
            })
            .cloned()
            .collect();
        jobs.truncate(config.limit);
        Ok(jobs)
    }
}

/// Build a minimal valid record for tests.
pub fn sample_job(source: &str, n: usize) -> JobOpportunity {
    let url = format!("https://{source}.example/jobs/{n}");
    JobOpportunity {
        id: stable_id(&[source, &url]),
        source: source.to_string(),
        company_name: format!("Company {n}"),
        job_title: format!("Engineer {n}"),
        job_url: url,
        location: "Remote".to_string(),
        remote: true,
        date_posted: None,
        seniority: Seniority::Unknown,
        function_keywords: Vec::new(),
        description: String::new(),
        requirements: Vec::new(),
        salary: "unknown".to_string(),
        raw: serde_json::Value::Null,
    }
}
