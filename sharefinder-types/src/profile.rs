//! Normalized fund record produced by provider connectors.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ConnectorKey, Symbol};

/// Which provider produced a [`FundProfile`].
///
/// Variants are listed in fallback priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Source {
    /// Financial Modeling Prep company profile endpoint.
    #[serde(rename = "FMP")]
    ProviderA,
    /// Alpha Vantage company overview endpoint.
    #[serde(rename = "Alpha Vantage")]
    ProviderB,
    /// `WhaleWisdom` signed holdings shell.
    #[serde(rename = "Whale Wisdom")]
    ProviderC,
}

impl Source {
    /// All structured sources in fallback order.
    pub const ALL: [Self; 3] = [Self::ProviderA, Self::ProviderB, Self::ProviderC];

    /// Human-facing provider name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ProviderA => "FMP",
            Self::ProviderB => "Alpha Vantage",
            Self::ProviderC => "Whale Wisdom",
        }
    }

    /// Stable connector key of the crate implementing this source.
    #[must_use]
    pub const fn key(self) -> ConnectorKey {
        match self {
            Self::ProviderA => ConnectorKey::new("sharefinder-fmp"),
            Self::ProviderB => ConnectorKey::new("sharefinder-alphavantage"),
            Self::ProviderC => ConnectorKey::new("sharefinder-whalewisdom"),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Common normalized result of a structured provider lookup.
///
/// Built fresh for every lookup and discarded after rendering. Use the
/// `with_*` setters to populate optional fields: they drop non-positive
/// counts and blank strings so that a present value is always meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundProfile {
    /// Display name; the ticker symbol when the provider has none.
    pub name: String,
    /// Total shares outstanding. Positive when present.
    pub shares_outstanding: Option<u64>,
    /// Market capitalization in currency units. Positive when present.
    pub market_cap: Option<u64>,
    /// Last price per share.
    pub price_per_share: Option<Decimal>,
    /// Official fund page.
    pub website: Option<String>,
    /// Provider that produced this record.
    pub source: Source,
}

impl FundProfile {
    /// Start a profile for `symbol` attributed to `source`, named after the symbol.
    #[must_use]
    pub fn new(symbol: &Symbol, source: Source) -> Self {
        Self {
            name: symbol.to_string(),
            shares_outstanding: None,
            market_cap: None,
            price_per_share: None,
            website: None,
            source,
        }
    }

    /// Replace the display name unless `name` is missing or blank.
    #[must_use]
    pub fn with_name(mut self, name: Option<&str>) -> Self {
        if let Some(n) = name.map(str::trim).filter(|n| !n.is_empty()) {
            self.name = n.to_string();
        }
        self
    }

    /// Set the share count; zero or negative counts become absence.
    #[must_use]
    pub fn with_shares(mut self, shares: Option<i64>) -> Self {
        self.shares_outstanding = positive(shares);
        self
    }

    /// Set the market cap; zero or negative values become absence.
    #[must_use]
    pub fn with_market_cap(mut self, market_cap: Option<i64>) -> Self {
        self.market_cap = positive(market_cap);
        self
    }

    /// Set the price per share; non-positive prices become absence.
    #[must_use]
    pub fn with_price(mut self, price: Option<Decimal>) -> Self {
        self.price_per_share = price.filter(|p| p.is_sign_positive() && !p.is_zero());
        self
    }

    /// Set the website unless it is missing or blank.
    #[must_use]
    pub fn with_website(mut self, website: Option<&str>) -> Self {
        self.website = website
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_string);
        self
    }

    /// Share count if present and positive.
    ///
    /// Fields are public, so this re-checks positivity rather than trusting
    /// that every writer went through [`FundProfile::with_shares`].
    #[must_use]
    pub fn usable_shares(&self) -> Option<u64> {
        self.shares_outstanding.filter(|s| *s > 0)
    }

    /// True when the record carries a usable share count.
    #[must_use]
    pub fn has_shares(&self) -> bool {
        self.usable_shares().is_some()
    }
}

fn positive(v: Option<i64>) -> Option<u64> {
    v.and_then(|n| u64::try_from(n).ok()).filter(|n| *n > 0)
}
