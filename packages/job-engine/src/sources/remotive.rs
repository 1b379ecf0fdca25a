//! Remotive source adapter.
//!
//! Remotive exposes a public JSON endpoint with free-text search. All
//! listings are remote by definition. Free APIs change; treat this as a
//! pluggable connector.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use tracing::debug;

use remotive_client::{RemotiveClient, RemotiveJob};

use crate::error::SourceResult;
use crate::normalize::{extract_function_keywords, extract_requirements, infer_seniority, is_electronics_role};
use crate::sources::{salary_label, JobSource};
use crate::types::{FetchConfig, JobOpportunity};
use crate::util::stable_id;

pub const SOURCE_NAME: &str = "remotive";

pub struct RemotiveSource {
    client: RemotiveClient,
}

impl Default for RemotiveSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RemotiveSource {
    pub fn new() -> Self {
        Self {
            client: RemotiveClient::new(),
        }
    }

    /// Use a pre-configured client (tests, custom endpoints).
    pub fn with_client(client: RemotiveClient) -> Self {
        Self { client }
    }
}

/// Map one raw listing to the normalized schema.
///
/// Returns `None` for malformed listings, listings missing any of
/// title/company/url, and listings rejected by the relevance filter.
fn normalize_listing(raw: &Value, config: &FetchConfig) -> Option<JobOpportunity> {
    let Some(job) = RemotiveJob::from_raw(raw) else {
        debug!(source = SOURCE_NAME, "Skipping malformed listing");
        return None;
    };

    let title = job.title.as_deref().unwrap_or("").trim().to_string();
    let company = job.company_name.as_deref().unwrap_or("").trim().to_string();
    let url = job.url.as_deref().unwrap_or("").trim().to_string();
    let description = job.description.as_deref().unwrap_or("").trim().to_string();

    if title.is_empty() || company.is_empty() || url.is_empty() {
        debug!(source = SOURCE_NAME, "Skipping listing without title/company/url");
        return None;
    }

    if config.filter_electronics && !is_electronics_role(&title, &description) {
        return None;
    }

    // "publication_date" looks like "2024-01-01T12:34:56"
    let date_posted = job
        .publication_date
        .as_deref()
        .and_then(|s| s.trim().get(..10))
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());

    let blob = format!("{}\n{}", title, description);
    let salary = salary_label([job.salary.as_ref(), job.compensation.as_ref()]);

    Some(JobOpportunity {
        id: stable_id(&[SOURCE_NAME, &url]),
        source: SOURCE_NAME.to_string(),
        company_name: company,
        location: job
            .candidate_required_location
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| "Remote".to_string()),
        remote: true,
        date_posted,
        seniority: infer_seniority(&title),
        function_keywords: extract_function_keywords(&blob),
        requirements: extract_requirements(&description),
        salary,
        job_title: title,
        job_url: url,
        description,
        raw: raw.clone(),
    })
}

#[async_trait]
impl JobSource for RemotiveSource {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn fetch(&self, config: &FetchConfig) -> SourceResult<Vec<JobOpportunity>> {
        let listings = self.client.fetch_listings(config.query.as_deref()).await?;

        // Soft cap: scan at most `limit` listings before filtering.
        let jobs: Vec<JobOpportunity> = listings
            .iter()
            .take(config.limit)
            .filter_map(|raw| normalize_listing(raw, config))
            .collect();

        debug!(source = SOURCE_NAME, count = jobs.len(), "Normalized listings");
        Ok(jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn listing() -> Value {
        json!({
            "title": "Senior Embedded Engineer",
            "company_name": "Acme Robotics",
            "url": "https://remotive.com/jobs/123",
            "description": "Work on firmware.\n- 5+ years embedded C\n- PCB debug experience",
            "candidate_required_location": "Europe",
            "publication_date": "2024-03-02T08:15:00",
            "salary": "$140k",
        })
    }

    #[test]
    fn maps_all_fields() {
        let config = FetchConfig::new();
        let job = normalize_listing(&listing(), &config).unwrap();

        assert_eq!(job.source, "remotive");
        assert_eq!(job.job_title, "Senior Embedded Engineer");
        assert_eq!(job.company_name, "Acme Robotics");
        assert_eq!(job.job_url, "https://remotive.com/jobs/123");
        assert_eq!(job.location, "Europe");
        assert!(job.remote);
        assert_eq!(
            job.date_posted,
            NaiveDate::from_ymd_opt(2024, 3, 2)
        );
        assert_eq!(job.salary, "$140k");
        assert_eq!(job.id, stable_id(&["remotive", "https://remotive.com/jobs/123"]));
        assert!(job.function_keywords.contains(&"embedded".to_string()));
        assert_eq!(job.requirements.len(), 2);
        assert_eq!(job.raw["title"], "Senior Embedded Engineer");
    }

    #[test]
    fn location_defaults_to_remote() {
        let mut raw = listing();
        raw.as_object_mut().unwrap().remove("candidate_required_location");
        let job = normalize_listing(&raw, &FetchConfig::new()).unwrap();
        assert_eq!(job.location, "Remote");
    }

    #[test]
    fn drops_listing_without_required_fields() {
        let mut raw = listing();
        raw["url"] = json!("   ");
        assert!(normalize_listing(&raw, &FetchConfig::new()).is_none());

        let mut raw = listing();
        raw.as_object_mut().unwrap().remove("title");
        assert!(normalize_listing(&raw, &FetchConfig::new()).is_none());
    }

    #[test]
    fn drops_malformed_listing() {
        let raw = json!({ "title": ["not", "a", "string"] });
        assert!(normalize_listing(&raw, &FetchConfig::new()).is_none());
    }

    #[test]
    fn relevance_filter_applies_when_enabled() {
        let mut raw = listing();
        raw["title"] = json!("Growth Marketer");
        raw["description"] = json!("Run campaigns.");

        assert!(normalize_listing(&raw, &FetchConfig::new()).is_some());
        assert!(normalize_listing(&raw, &FetchConfig::new().filter_electronics()).is_none());
    }

    #[test]
    fn bad_publication_date_becomes_none() {
        let mut raw = listing();
        raw["publication_date"] = json!("soon");
        let job = normalize_listing(&raw, &FetchConfig::new()).unwrap();
        assert!(job.date_posted.is_none());
    }
}
