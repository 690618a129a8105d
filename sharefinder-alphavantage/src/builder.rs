use sharefinder_core::Endpoints;

use crate::AlphaVantageConnector;

/// Builder for [`AlphaVantageConnector`].
pub struct AlphaVantageConnectorBuilder {
    api_key: String,
    base_url: String,
    http: Option<reqwest::Client>,
}

impl AlphaVantageConnectorBuilder {
    pub(crate) fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: Endpoints::DEFAULT_ALPHA_VANTAGE.to_string(),
            http: None,
        }
    }

    /// Override the host serving `/query`.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Reuse an existing HTTP client.
    #[must_use]
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> AlphaVantageConnector {
        AlphaVantageConnector {
            http: self.http.unwrap_or_default(),
            api_key: self.api_key,
            base_url: self.base_url,
        }
    }
}
