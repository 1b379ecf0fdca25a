//! Arbeitnow source adapter.
//!
//! Arbeitnow paginates its public job board feed and has no search
//! parameter, so the query is applied client-side. Rate-limit retries live
//! in the wire client.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate};
use serde_json::Value;
use tracing::debug;

use arbeitnow_client::{ArbeitnowClient, ArbeitnowJob};

use crate::error::SourceResult;
use crate::normalize::{extract_function_keywords, extract_requirements, infer_seniority, is_electronics_role};
use crate::sources::{salary_label, JobSource};
use crate::types::{FetchConfig, JobOpportunity};
use crate::util::stable_id;

pub const SOURCE_NAME: &str = "arbeitnow";

/// Hard stop on pagination so a heavily filtered run cannot walk the feed
/// forever.
const MAX_PAGES: u32 = 50;

pub struct ArbeitnowSource {
    client: ArbeitnowClient,
}

impl Default for ArbeitnowSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ArbeitnowSource {
    pub fn new() -> Self {
        Self {
            client: ArbeitnowClient::new(),
        }
    }

    /// Use a pre-configured client (tests, custom endpoints).
    pub fn with_client(client: ArbeitnowClient) -> Self {
        Self { client }
    }
}

/// Normalize `created_at` variants to a date. The feed has carried ISO
/// strings, epoch seconds, and epoch milliseconds at different times.
fn parse_date_posted(created_at: Option<&Value>) -> Option<NaiveDate> {
    match created_at? {
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Some(dt.date_naive());
            }
            NaiveDate::parse_from_str(s.get(..10)?, "%Y-%m-%d").ok()
        }
        Value::Number(n) => {
            let mut ts = n.as_f64()?;
            if ts > 1e12 {
                ts /= 1000.0;
            }
            DateTime::from_timestamp(ts as i64, 0).map(|dt| dt.date_naive())
        }
        _ => None,
    }
}

/// Map one raw listing to the normalized schema.
///
/// `query` is the lowercased client-side search term, matched as a
/// substring of title + description.
fn normalize_listing(raw: &Value, config: &FetchConfig, query: Option<&str>) -> Option<JobOpportunity> {
    let Some(job) = ArbeitnowJob::from_raw(raw) else {
        debug!(source = SOURCE_NAME, "Skipping malformed listing");
        return None;
    };

    let title = job.title.as_deref().unwrap_or("").trim().to_string();
    let company = job.company_label().unwrap_or("").to_string();
    let url = job.url.as_deref().unwrap_or("").trim().to_string();
    let description = job.description.as_deref().unwrap_or("").trim().to_string();

    if title.is_empty() || company.is_empty() || url.is_empty() {
        debug!(source = SOURCE_NAME, "Skipping listing without title/company/url");
        return None;
    }

    if let Some(q) = query {
        let haystack = format!("{} {}", title.to_lowercase(), description.to_lowercase());
        if !haystack.contains(q) {
            return None;
        }
    }

    if config.filter_electronics && !is_electronics_role(&title, &description) {
        return None;
    }

    let date_posted = parse_date_posted(job.created_at.as_ref());
    let blob = format!("{}\n{}", title, description);
    let salary = salary_label([
        job.salary_range.as_ref(),
        job.salary.as_ref(),
        job.compensation.as_ref(),
    ]);

    Some(JobOpportunity {
        id: stable_id(&[SOURCE_NAME, &url]),
        source: SOURCE_NAME.to_string(),
        company_name: company,
        location: job
            .location
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| "Unknown".to_string()),
        remote: job.remote,
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
impl JobSource for ArbeitnowSource {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn fetch(&self, config: &FetchConfig) -> SourceResult<Vec<JobOpportunity>> {
        let query = config.query.as_ref().map(|q| q.trim().to_lowercase());
        let mut jobs: Vec<JobOpportunity> = Vec::new();
        let mut page = 1;

        while jobs.len() < config.limit && page <= MAX_PAGES {
            let batch = self.client.fetch_page(page).await?;
            if batch.is_empty() {
                break;
            }

            for raw in &batch.data {
                if let Some(job) = normalize_listing(raw, config, query.as_deref()) {
                    jobs.push(job);
                    if jobs.len() >= config.limit {
                        break;
                    }
                }
            }

            page += 1;
        }

        debug!(source = SOURCE_NAME, count = jobs.len(), pages = page - 1, "Normalized listings");
        Ok(jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn listing() -> Value {
        json!({
            "title": "Hardware Test Engineer",
            "company_name": "Volt GmbH",
            "url": "https://arbeitnow.com/jobs/abc",
            "description": "EMC lab work.\n- Run validation campaigns",
            "location": "Berlin",
            "remote": false,
            "created_at": 1709380800,
            "salary_range": "60k-75k EUR",
        })
    }

    #[test]
    fn maps_all_fields() {
        let job = normalize_listing(&listing(), &FetchConfig::new(), None).unwrap();

        assert_eq!(job.source, "arbeitnow");
        assert_eq!(job.company_name, "Volt GmbH");
        assert_eq!(job.location, "Berlin");
        assert!(!job.remote);
        assert_eq!(job.salary, "60k-75k EUR");
        assert_eq!(job.date_posted, NaiveDate::from_ymd_opt(2024, 3, 2));
        assert_eq!(job.id, stable_id(&["arbeitnow", "https://arbeitnow.com/jobs/abc"]));
    }

    #[test]
    fn company_falls_back_to_company_key() {
        let mut raw = listing();
        raw.as_object_mut().unwrap().remove("company_name");
        raw["company"] = json!("Fallback AG");
        let job = normalize_listing(&raw, &FetchConfig::new(), None).unwrap();
        assert_eq!(job.company_name, "Fallback AG");
    }

    #[test]
    fn location_defaults_to_unknown() {
        let mut raw = listing();
        raw["location"] = json!("");
        let job = normalize_listing(&raw, &FetchConfig::new(), None).unwrap();
        assert_eq!(job.location, "Unknown");
    }

    #[test]
    fn query_filters_client_side() {
        let raw = listing();
        assert!(normalize_listing(&raw, &FetchConfig::new(), Some("hardware")).is_some());
        assert!(normalize_listing(&raw, &FetchConfig::new(), Some("python")).is_none());
    }

    #[test]
    fn drops_listing_without_required_fields() {
        let mut raw = listing();
        raw.as_object_mut().unwrap().remove("url");
        assert!(normalize_listing(&raw, &FetchConfig::new(), None).is_none());
    }

    #[test]
    fn date_variants() {
        // epoch seconds
        assert_eq!(
            parse_date_posted(Some(&json!(1709380800))),
            NaiveDate::from_ymd_opt(2024, 3, 2)
        );
        // epoch milliseconds
        assert_eq!(
            parse_date_posted(Some(&json!(1709380800000_i64))),
            NaiveDate::from_ymd_opt(2024, 3, 2)
        );
        // RFC 3339
        assert_eq!(
            parse_date_posted(Some(&json!("2024-03-02T10:00:00+00:00"))),
            NaiveDate::from_ymd_opt(2024, 3, 2)
        );
        // ISO date prefix without timezone
        assert_eq!(
            parse_date_posted(Some(&json!("2024-03-02 10:00:00"))),
            NaiveDate::from_ymd_opt(2024, 3, 2)
        );
        // garbage
        assert_eq!(parse_date_posted(Some(&json!("yesterday"))), None);
        assert_eq!(parse_date_posted(Some(&json!(null))), None);
        assert_eq!(parse_date_posted(None), None);
    }
}
