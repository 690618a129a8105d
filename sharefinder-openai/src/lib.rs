//! sharefinder-openai
//!
//! Estimate connector backed by a chat-completions endpoint. It is only
//! consulted when no structured provider produced a share count, and its
//! answer is shown verbatim: nothing here parses the text.
#![warn(missing_docs)]

mod builder;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sharefinder_core::connector::{EstimateProvider, FundConnector};
use sharefinder_core::http::send_json;
use sharefinder_core::{ConnectorKey, SharefinderError, Symbol};

pub use builder::OpenAiConnectorBuilder;

/// Connector for `OpenAI` chat completions.
pub struct OpenAiConnector {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage; 1],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Question sent for `symbol`.
#[must_use]
pub fn prompt(symbol: &Symbol) -> String {
    format!(
        "How many shares outstanding does the ETF {symbol} have as of the most recent data? \
         Include the fund name and source if known."
    )
}

impl OpenAiConnector {
    /// Static connector key.
    pub const KEY: ConnectorKey = ConnectorKey::new("sharefinder-openai");
    /// Model used unless the builder overrides it.
    pub const DEFAULT_MODEL: &'static str = "gpt-3.5-turbo";
    /// Sampling temperature.
    pub const TEMPERATURE: f32 = 0.5;
    /// Upper bound on generated tokens.
    pub const MAX_TOKENS: u32 = 300;

    /// Start a builder with the production endpoint.
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> OpenAiConnectorBuilder {
        OpenAiConnectorBuilder::new(api_key)
    }

    /// Connector with the production endpoint and default model.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder(api_key).build()
    }

    fn answer(symbol: &Symbol, resp: ChatResponse) -> Result<String, SharefinderError> {
        resp.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| SharefinderError::not_found(format!("estimate for {symbol}")))
    }
}

impl FundConnector for OpenAiConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "OpenAI"
    }

    fn as_estimate_provider(&self) -> Option<&dyn EstimateProvider> {
        Some(self as &dyn EstimateProvider)
    }
}

#[async_trait]
impl EstimateProvider for OpenAiConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "sharefinder_openai::estimate",
            skip(self, symbol),
            fields(symbol = %symbol, model = %self.model),
        )
    )]
    async fn estimate(&self, symbol: &Symbol) -> Result<String, SharefinderError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt(symbol),
            }],
            temperature: Self::TEMPERATURE,
            max_tokens: Self::MAX_TOKENS,
        };
        let req = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body);
        let resp: ChatResponse = send_json(Self::KEY.as_str(), req).await?;
        Self::answer(symbol, resp)
    }
}
