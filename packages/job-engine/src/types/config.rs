/// Configuration for one fetch run.
///
/// Passed explicitly to sources and the pipeline; there is no global state.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Optional free-text query. Remotive gets it upstream as a search
    /// parameter; Arbeitnow has no search API so it is applied client-side.
    pub query: Option<String>,

    /// Soft cap on emitted records. Sources also use it to stop fetching
    /// early, so it bounds work as well as output size.
    pub limit: usize,

    /// Keep only electronics/hardware roles.
    pub filter_electronics: bool,
}

impl FetchConfig {
    pub fn new() -> Self {
        Self {
            query: None,
            limit: 20,
            filter_electronics: false,
        }
    }

    /// Set the search query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Set the record limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Enable the electronics relevance filter.
    pub fn filter_electronics(mut self) -> Self {
        self.filter_electronics = true;
        self
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chain() {
        let config = FetchConfig::new()
            .with_query("embedded firmware")
            .with_limit(5)
            .filter_electronics();

        assert_eq!(config.query.as_deref(), Some("embedded firmware"));
        assert_eq!(config.limit, 5);
        assert!(config.filter_electronics);
    }

    #[test]
    fn defaults() {
        let config = FetchConfig::default();
        assert!(config.query.is_none());
        assert_eq!(config.limit, 20);
        assert!(!config.filter_electronics);
    }
}
