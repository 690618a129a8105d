//! sharefinder-alphavantage
//!
//! Connector for the Alpha Vantage company overview function
//! (`GET /query?function=OVERVIEW&symbol=...&apikey=...`). Every field in the
//! overview object is a string, and funds routinely report `"None"` for share
//! counts, so numeric fields are coerced leniently and garbage becomes absence.
//! The overview carries neither price nor website.
#![warn(missing_docs)]

mod builder;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use sharefinder_core::coerce::{int_from_value, or_absent};
use sharefinder_core::connector::{FundConnector, FundProfileProvider};
use sharefinder_core::http::send_json;
use sharefinder_core::{ConnectorKey, FundProfile, SharefinderError, Source, Symbol};

pub use builder::AlphaVantageConnectorBuilder;

/// Connector for Alpha Vantage.
pub struct AlphaVantageConnector {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct OverviewBody {
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "SharesOutstanding")]
    shares_outstanding: Option<Value>,
    #[serde(rename = "MarketCapitalization")]
    market_capitalization: Option<Value>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

impl OverviewBody {
    /// Alpha Vantage reports bad keys, throttling and demo-key limits with a
    /// 200 status and a single message field.
    fn provider_message(&self) -> Option<&str> {
        self.error_message
            .as_deref()
            .or(self.note.as_deref())
            .or(self.information.as_deref())
    }

    fn has_shares_field(&self) -> bool {
        match &self.shares_outstanding {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(_) => true,
        }
    }
}

impl AlphaVantageConnector {
    /// Static connector key.
    pub const KEY: ConnectorKey = Source::ProviderB.key();

    /// Start a builder with the production endpoint.
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> AlphaVantageConnectorBuilder {
        AlphaVantageConnectorBuilder::new(api_key)
    }

    /// Connector with the production endpoint and a fresh HTTP client.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder(api_key).build()
    }

    fn normalize(symbol: &Symbol, body: Value) -> Result<FundProfile, SharefinderError> {
        if !body.is_object() {
            return Err(SharefinderError::shape(
                Self::KEY.as_str(),
                "expected a JSON object",
            ));
        }
        let overview: OverviewBody = serde_json::from_value(body)
            .map_err(|e| SharefinderError::shape(Self::KEY.as_str(), e.to_string()))?;

        if let Some(msg) = overview.provider_message() {
            return Err(SharefinderError::shape(
                Self::KEY.as_str(),
                format!("provider message: {msg}"),
            ));
        }
        if !overview.has_shares_field() {
            return Err(SharefinderError::not_found(format!("overview for {symbol}")));
        }

        Ok(FundProfile::new(symbol, Source::ProviderB)
            .with_name(overview.name.as_deref())
            .with_shares(or_absent(int_from_value(
                "SharesOutstanding",
                overview.shares_outstanding.as_ref(),
            )))
            .with_market_cap(or_absent(int_from_value(
                "MarketCapitalization",
                overview.market_capitalization.as_ref(),
            ))))
    }
}

impl FundConnector for AlphaVantageConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Alpha Vantage"
    }

    fn source(&self) -> Option<Source> {
        Some(Source::ProviderB)
    }

    fn as_profile_provider(&self) -> Option<&dyn FundProfileProvider> {
        Some(self as &dyn FundProfileProvider)
    }
}

#[async_trait]
impl FundProfileProvider for AlphaVantageConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "sharefinder_alphavantage::fund_profile",
            skip(self, symbol),
            fields(symbol = %symbol),
        )
    )]
    async fn fund_profile(&self, symbol: &Symbol) -> Result<FundProfile, SharefinderError> {
        let req = self.http.get(format!("{}/query", self.base_url)).query(&[
            ("function", "OVERVIEW"),
            ("symbol", symbol.as_str()),
            ("apikey", self.api_key.as_str()),
        ]);
        let body: Value = send_json(Self::KEY.as_str(), req).await?;
        Self::normalize(symbol, body)
    }
}
