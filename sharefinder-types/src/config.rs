//! Configuration types shared by the orchestrator and connectors.

use serde::{Deserialize, Serialize};

/// Base URLs for every upstream service.
///
/// Defaults point at the public production hosts; tests and self-hosted
/// proxies override them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// Financial Modeling Prep API root (the `/profile/{symbol}` parent).
    pub fmp: String,
    /// Alpha Vantage host (the `/query` parent).
    pub alpha_vantage: String,
    /// `WhaleWisdom` host (the `/shell/command.json` parent).
    pub whale_wisdom: String,
    /// `OpenAI` API root (the `/chat/completions` parent).
    pub openai: String,
}

impl Endpoints {
    /// Default Financial Modeling Prep API root.
    pub const DEFAULT_FMP: &'static str = "https://financialmodelingprep.com/api/v3";
    /// Default Alpha Vantage host.
    pub const DEFAULT_ALPHA_VANTAGE: &'static str = "https://www.alphavantage.co";
    /// Default `WhaleWisdom` host.
    pub const DEFAULT_WHALE_WISDOM: &'static str = "https://whalewisdom.com";
    /// Default `OpenAI` API root.
    pub const DEFAULT_OPENAI: &'static str = "https://api.openai.com/v1";

    /// Environment variable overriding [`Endpoints::fmp`].
    pub const FMP_VAR: &'static str = "SHAREFINDER_FMP_URL";
    /// Environment variable overriding [`Endpoints::alpha_vantage`].
    pub const ALPHA_VANTAGE_VAR: &'static str = "SHAREFINDER_ALPHA_VANTAGE_URL";
    /// Environment variable overriding [`Endpoints::whale_wisdom`].
    pub const WHALE_WISDOM_VAR: &'static str = "SHAREFINDER_WHALE_WISDOM_URL";
    /// Environment variable overriding [`Endpoints::openai`].
    pub const OPENAI_VAR: &'static str = "SHAREFINDER_OPENAI_URL";

    /// Apply overrides from a lookup function (typically the environment).
    ///
    /// Blank values are ignored. Trailing slashes are stripped so connectors
    /// can append paths uniformly.
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |var: &str, slot: &mut String| {
            if let Some(v) = lookup(var).map(|v| v.trim().to_string())
                && !v.is_empty()
            {
                *slot = v;
            }
        };
        pick(Self::FMP_VAR, &mut self.fmp);
        pick(Self::ALPHA_VANTAGE_VAR, &mut self.alpha_vantage);
        pick(Self::WHALE_WISDOM_VAR, &mut self.whale_wisdom);
        pick(Self::OPENAI_VAR, &mut self.openai);
        for url in [
            &mut self.fmp,
            &mut self.alpha_vantage,
            &mut self.whale_wisdom,
            &mut self.openai,
        ] {
            while url.ends_with('/') {
                url.pop();
            }
        }
        self
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            fmp: Self::DEFAULT_FMP.to_string(),
            alpha_vantage: Self::DEFAULT_ALPHA_VANTAGE.to_string(),
            whale_wisdom: Self::DEFAULT_WHALE_WISDOM.to_string(),
            openai: Self::DEFAULT_OPENAI.to_string(),
        }
    }
}

/// Global configuration for the `Sharefinder` orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharefinderConfig {
    /// Ask the language model when no structured provider yields a share count.
    pub llm_fallback: bool,
    /// Upstream base URLs used when wiring connectors.
    pub endpoints: Endpoints,
}

impl Default for SharefinderConfig {
    fn default() -> Self {
        Self {
            llm_fallback: true,
            endpoints: Endpoints::default(),
        }
    }
}
