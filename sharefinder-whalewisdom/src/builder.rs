use std::sync::Arc;

use chrono::{DateTime, Utc};
use sharefinder_core::Endpoints;

use crate::{Clock, WhaleWisdomConnector};

/// Builder for [`WhaleWisdomConnector`].
pub struct WhaleWisdomConnectorBuilder {
    shared_key: String,
    secret_key: String,
    base_url: String,
    http: Option<reqwest::Client>,
    clock: Option<Clock>,
}

impl WhaleWisdomConnectorBuilder {
    pub(crate) fn new(shared_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            shared_key: shared_key.into(),
            secret_key: secret_key.into(),
            base_url: Endpoints::DEFAULT_WHALE_WISDOM.to_string(),
            http: None,
            clock: None,
        }
    }

    /// Override the host serving `/shell/command.json`.
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

    /// Replace the wall clock used for request timestamps.
    ///
    /// Signatures cover the timestamp, so a fixed clock makes requests
    /// reproducible.
    #[must_use]
    pub fn clock<F>(mut self, now: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        let clock: Clock = Arc::new(now);
        self.clock = Some(clock);
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> WhaleWisdomConnector {
        WhaleWisdomConnector {
            http: self.http.unwrap_or_default(),
            shared_key: self.shared_key,
            secret_key: self.secret_key,
            base_url: self.base_url,
            clock: self.clock.unwrap_or_else(|| Arc::new(Utc::now) as Clock),
        }
    }
}
