//! sharefinder-whalewisdom
//!
//! Connector for the `WhaleWisdom` shell API, the last structured source in
//! the fallback chain. A lookup is two signed `GET /shell/command.json` calls:
//! `fund --ticker=SYM` resolves the ticker to a filer id, then `holdings`
//! fetches column 14 for that filer, whose first cell is the share count.
//!
//! Every call carries `args` (the command as compact JSON), `api_shared_key`,
//! `timestamp`, and `api_sig`; see [`signing`].
#![warn(missing_docs)]

mod builder;
mod command;
/// Pure signature and timestamp helpers.
pub mod signing;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use sharefinder_core::coerce::int_from_value;
use sharefinder_core::connector::{FundConnector, FundProfileProvider};
use sharefinder_core::http::send_json;
use sharefinder_core::{ConnectorKey, FundProfile, SharefinderError, Source, Symbol};

pub use builder::WhaleWisdomConnectorBuilder;
use command::{FilerId, FundCommand, FundReply, HoldingsCommand};

type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Connector for `WhaleWisdom`.
pub struct WhaleWisdomConnector {
    http: reqwest::Client,
    shared_key: String,
    secret_key: String,
    base_url: String,
    clock: Clock,
}

impl WhaleWisdomConnector {
    /// Static connector key.
    pub const KEY: ConnectorKey = Source::ProviderC.key();

    /// Start a builder with the production endpoint.
    #[must_use]
    pub fn builder(
        shared_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> WhaleWisdomConnectorBuilder {
        WhaleWisdomConnectorBuilder::new(shared_key, secret_key)
    }

    /// Connector with the production endpoint, a fresh HTTP client and the
    /// system clock.
    #[must_use]
    pub fn new(shared_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self::builder(shared_key, secret_key).build()
    }

    async fn run<C: Serialize + Sync>(&self, command: &C) -> Result<Value, SharefinderError> {
        let args = serde_json::to_string(command)
            .map_err(|e| SharefinderError::InvalidArg(format!("command encoding: {e}")))?;
        let ts = signing::timestamp((self.clock)());
        let sig = signing::sign(&args, &ts, &self.secret_key)?;

        let req = self
            .http
            .get(format!("{}/shell/command.json", self.base_url))
            .query(&[
                ("args", args.as_str()),
                ("api_shared_key", self.shared_key.as_str()),
                ("timestamp", ts.as_str()),
                ("api_sig", sig.as_str()),
            ]);
        send_json(Self::KEY.as_str(), req).await
    }

    async fn filer_id(&self, symbol: &Symbol) -> Result<FilerId, SharefinderError> {
        let body = self.run(&FundCommand::new(symbol)).await?;
        if !body.is_object() {
            return Err(SharefinderError::shape(
                Self::KEY.as_str(),
                "expected a JSON object from the fund command",
            ));
        }
        let reply: FundReply = serde_json::from_value(body)
            .map_err(|e| SharefinderError::shape(Self::KEY.as_str(), e.to_string()))?;
        reply
            .filer_id()
            .ok_or_else(|| SharefinderError::not_found(format!("filer id for {symbol}")))
    }

    fn normalize_holdings(symbol: &Symbol, body: &Value) -> Result<FundProfile, SharefinderError> {
        if body.as_array().is_some_and(Vec::is_empty) {
            return Err(SharefinderError::not_found(format!("holdings for {symbol}")));
        }
        let Some(cell) = command::first_cell(body) else {
            return Err(SharefinderError::shape(
                Self::KEY.as_str(),
                "expected an array of holdings rows",
            ));
        };
        let shares = int_from_value("holdings[0][0]", Some(cell))?;
        let profile = FundProfile::new(symbol, Source::ProviderC).with_shares(shares);
        if profile.has_shares() {
            Ok(profile)
        } else {
            Err(SharefinderError::not_found(format!("share count for {symbol}")))
        }
    }
}

impl FundConnector for WhaleWisdomConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "WhaleWisdom"
    }

    fn source(&self) -> Option<Source> {
        Some(Source::ProviderC)
    }

    fn as_profile_provider(&self) -> Option<&dyn FundProfileProvider> {
        Some(self as &dyn FundProfileProvider)
    }
}

#[async_trait]
impl FundProfileProvider for WhaleWisdomConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "sharefinder_whalewisdom::fund_profile",
            skip(self, symbol),
            fields(symbol = %symbol),
        )
    )]
    async fn fund_profile(&self, symbol: &Symbol) -> Result<FundProfile, SharefinderError> {
        let filer_id = self.filer_id(symbol).await?;
        #[cfg(feature = "tracing")]
        tracing::debug!(?filer_id, "resolved filer id");

        let body = self.run(&HoldingsCommand::new(filer_id)).await?;
        Self::normalize_holdings(symbol, &body)
    }
}
