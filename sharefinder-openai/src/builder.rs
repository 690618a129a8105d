use sharefinder_core::Endpoints;

use crate::OpenAiConnector;

/// Builder for [`OpenAiConnector`].
pub struct OpenAiConnectorBuilder {
    api_key: String,
    base_url: String,
    model: String,
    http: Option<reqwest::Client>,
}

impl OpenAiConnectorBuilder {
    pub(crate) fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: Endpoints::DEFAULT_OPENAI.to_string(),
            model: OpenAiConnector::DEFAULT_MODEL.to_string(),
            http: None,
        }
    }

    /// Override the API root (the parent of `/chat/completions`).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Use a different chat model.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
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
    pub fn build(self) -> OpenAiConnector {
        OpenAiConnector {
            http: self.http.unwrap_or_default(),
            api_key: self.api_key,
            base_url: self.base_url,
            model: self.model,
        }
    }
}
