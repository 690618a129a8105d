use sharefinder_core::Endpoints;

use crate::FmpConnector;

/// Builder for [`FmpConnector`].
pub struct FmpConnectorBuilder {
    api_key: String,
    base_url: String,
    http: Option<reqwest::Client>,
}

impl FmpConnectorBuilder {
    pub(crate) fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: Endpoints::DEFAULT_FMP.to_string(),
            http: None,
        }
    }

    /// Override the API root (the parent of `/profile/{symbol}`).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Reuse an existing HTTP client (connection pool, proxy settings).
    #[must_use]
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> FmpConnector {
        FmpConnector {
            http: self.http.unwrap_or_default(),
            api_key: self.api_key,
            base_url: self.base_url,
        }
    }
}
