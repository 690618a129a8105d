//! sharefinder-fmp
//!
//! Connector for the Financial Modeling Prep company profile endpoint
//! (`GET /profile/{symbol}?apikey=...`). The endpoint answers with a JSON
//! array; the first element carries name, share count, market cap, price,
//! and website. This is the first source tried during fallback.
#![warn(missing_docs)]

mod builder;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use sharefinder_core::coerce::{decimal_from_value, int_from_value, or_absent};
use sharefinder_core::connector::{FundConnector, FundProfileProvider};
use sharefinder_core::http::send_json;
use sharefinder_core::{ConnectorKey, FundProfile, SharefinderError, Source, Symbol};

pub use builder::FmpConnectorBuilder;

/// Connector for Financial Modeling Prep.
pub struct FmpConnector {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileRow {
    company_name: Option<String>,
    shares_outstanding: Option<Value>,
    mkt_cap: Option<Value>,
    price: Option<Value>,
    website: Option<String>,
}

impl FmpConnector {
    /// Static connector key.
    pub const KEY: ConnectorKey = Source::ProviderA.key();

    /// Start a builder with the production endpoint.
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> FmpConnectorBuilder {
        FmpConnectorBuilder::new(api_key)
    }

    /// Connector with the production endpoint and a fresh HTTP client.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder(api_key).build()
    }

    fn normalize(symbol: &Symbol, body: Value) -> Result<FundProfile, SharefinderError> {
        let Value::Array(rows) = body else {
            return Err(SharefinderError::shape(
                Self::KEY.as_str(),
                "expected a JSON array of profiles",
            ));
        };
        let Some(first) = rows.into_iter().next() else {
            return Err(SharefinderError::not_found(format!("profile for {symbol}")));
        };
        let row: ProfileRow = serde_json::from_value(first)
            .map_err(|e| SharefinderError::shape(Self::KEY.as_str(), e.to_string()))?;

        Ok(FundProfile::new(symbol, Source::ProviderA)
            .with_name(row.company_name.as_deref())
            .with_shares(or_absent(int_from_value(
                "sharesOutstanding",
                row.shares_outstanding.as_ref(),
            )))
            .with_market_cap(or_absent(int_from_value("mktCap", row.mkt_cap.as_ref())))
            .with_price(or_absent(decimal_from_value("price", row.price.as_ref())))
            .with_website(row.website.as_deref()))
    }
}

impl FundConnector for FmpConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Financial Modeling Prep"
    }

    fn source(&self) -> Option<Source> {
        Some(Source::ProviderA)
    }

    fn as_profile_provider(&self) -> Option<&dyn FundProfileProvider> {
        Some(self as &dyn FundProfileProvider)
    }
}

#[async_trait]
impl FundProfileProvider for FmpConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "sharefinder_fmp::fund_profile",
            skip(self, symbol),
            fields(symbol = %symbol),
        )
    )]
    async fn fund_profile(&self, symbol: &Symbol) -> Result<FundProfile, SharefinderError> {
        let url = format!("{}/profile/{}", self.base_url, symbol);
        let req = self
            .http
            .get(url)
            .query(&[("apikey", self.api_key.as_str())]);
        let body: Value = send_json(Self::KEY.as_str(), req).await?;
        Self::normalize(symbol, body)
    }
}
