use serde::Deserialize;
use serde_json::Value;

/// Envelope for the `/api/remote-jobs` response.
///
/// Listings are kept as raw values so one malformed entry never fails the
/// whole batch; parse each with [`RemotiveJob::from_raw`].
#[derive(Debug, Clone, Deserialize)]
pub struct JobsPayload {
    #[serde(default)]
    pub jobs: Vec<Value>,
}

/// Typed view of a single Remotive listing.
///
/// Every field is optional at the wire level; callers decide which fields
/// are required for their purposes.
#[derive(Debug, Clone, Deserialize)]
pub struct RemotiveJob {
    pub title: Option<String>,
    pub company_name: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub candidate_required_location: Option<String>,
    /// ISO-ish timestamp like `2024-01-01T12:34:56`.
    pub publication_date: Option<String>,
    pub salary: Option<Value>,
    pub compensation: Option<Value>,
}

impl RemotiveJob {
    /// Parse a raw listing value into the typed view.
    ///
    /// Returns `None` when the value is not an object or a field has an
    /// unexpected type, so callers can skip that listing and keep going.
    pub fn from_raw(raw: &Value) -> Option<Self> {
        serde_json::from_value(raw.clone()).ok()
    }
}
