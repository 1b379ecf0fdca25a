use serde::Deserialize;
use serde_json::Value;

/// One page of the job board feed.
///
/// Listings stay as raw values; parse each with [`ArbeitnowJob::from_raw`]
/// so a single malformed entry never fails the page.
#[derive(Debug, Clone, Deserialize)]
pub struct JobBoardPage {
    #[serde(default)]
    pub data: Vec<Value>,
}

impl JobBoardPage {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Typed view of a single Arbeitnow listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ArbeitnowJob {
    pub title: Option<String>,
    pub company_name: Option<String>,
    /// Some feed variants carry `company` instead of `company_name`.
    pub company: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub remote: bool,
    /// ISO string or epoch seconds/milliseconds.
    pub created_at: Option<Value>,
    pub salary_range: Option<Value>,
    pub salary: Option<Value>,
    pub compensation: Option<Value>,
}

impl ArbeitnowJob {
    /// Parse a raw listing value into the typed view.
    pub fn from_raw(raw: &Value) -> Option<Self> {
        serde_json::from_value(raw.clone()).ok()
    }

    /// Company name with the `company` fallback applied.
    pub fn company_label(&self) -> Option<&str> {
        self.company_name
            .as_deref()
            .or(self.company.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
