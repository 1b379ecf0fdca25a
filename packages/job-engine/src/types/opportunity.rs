use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A normalized job record.
///
/// The product owns a *stable* schema regardless of the upstream source.
/// Field names are identical across sources; prefer adding fields over
/// changing existing ones once records start landing in storage. The
/// original payload is kept in `raw` so records can be re-parsed later
/// without re-fetching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobOpportunity {
    /// Deterministic id: sha256 of `source|url`.
    pub id: String,

    /// Source identifier, e.g. `"remotive"`.
    pub source: String,

    pub company_name: String,
    pub job_title: String,
    pub job_url: String,

    pub location: String,
    pub remote: bool,

    /// Posting date when the source provides one.
    pub date_posted: Option<NaiveDate>,

    pub seniority: Seniority,

    /// Electronics/hardware keyword hits from title+description,
    /// first-seen order, deduped.
    #[serde(default)]
    pub function_keywords: Vec<String>,

    #[serde(default)]
    pub description: String,

    /// Bullet-like lines extracted from the description.
    #[serde(default)]
    pub requirements: Vec<String>,

    /// Compensation info as provided by the source, or `"unknown"`.
    pub salary: String,

    /// Original upstream payload.
    #[serde(default)]
    pub raw: Value,
}

/// Seniority level inferred from the job title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seniority {
    Intern,
    Junior,
    Mid,
    Senior,
    Staff,
    Principal,
    Manager,
    Director,
    Vp,
    Cxo,
    Unknown,
}

impl Default for Seniority {
    fn default() -> Self {
        Seniority::Unknown
    }
}
