//! Provider credentials supplied by the caller's secret store.

use std::fmt;

use crate::SharefinderError;

/// Secret name for the Financial Modeling Prep API key.
pub const FMP_API_KEY: &str = "FMP_API_KEY";
/// Secret name for the Alpha Vantage API key.
pub const ALPHA_VANTAGE_API_KEY: &str = "ALPHA_VANTAGE_API_KEY";
/// Secret name for the `WhaleWisdom` shared key.
pub const WHALE_WISDOM_SHARED_KEY: &str = "WHALE_WISDOM_SHARED_KEY";
/// Secret name for the `WhaleWisdom` secret (signing) key.
pub const WHALE_WISDOM_SECRET_KEY: &str = "WHALE_WISDOM_SECRET_KEY";
/// Secret name for the `OpenAI` API key.
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// All credentials needed to build the provider connectors.
///
/// Loading is all-or-nothing: a missing secret is reported before any
/// connector exists, so a lookup can never fail halfway for lack of a key.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Financial Modeling Prep API key.
    pub fmp_api_key: String,
    /// Alpha Vantage API key.
    pub alpha_vantage_api_key: String,
    /// `WhaleWisdom` shared key identifier, sent in clear.
    pub whale_wisdom_shared_key: String,
    /// `WhaleWisdom` secret key, used only to sign requests.
    pub whale_wisdom_secret_key: String,
    /// `OpenAI` API key; `None` when the language-model fallback is disabled.
    pub openai_api_key: Option<String>,
}

impl Credentials {
    /// Load credentials from process environment variables.
    ///
    /// # Errors
    /// Returns `CredentialMissing` naming the first absent or blank variable.
    /// `OPENAI_API_KEY` is only required when `require_llm` is true.
    pub fn from_env(require_llm: bool) -> Result<Self, SharefinderError> {
        Self::from_lookup(require_llm, |name| std::env::var(name).ok())
    }

    /// Load credentials through an arbitrary lookup function.
    ///
    /// # Errors
    /// Returns `CredentialMissing` naming the first absent or blank secret.
    pub fn from_lookup<F>(require_llm: bool, lookup: F) -> Result<Self, SharefinderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fetch = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required =
            |name: &str| fetch(name).ok_or_else(|| SharefinderError::credential_missing(name));

        let fmp_api_key = required(FMP_API_KEY)?;
        let alpha_vantage_api_key = required(ALPHA_VANTAGE_API_KEY)?;
        let whale_wisdom_shared_key = required(WHALE_WISDOM_SHARED_KEY)?;
        let whale_wisdom_secret_key = required(WHALE_WISDOM_SECRET_KEY)?;
        let openai_api_key = if require_llm {
            Some(required(OPENAI_API_KEY)?)
        } else {
            None
        };

        Ok(Self {
            fmp_api_key,
            alpha_vantage_api_key,
            whale_wisdom_shared_key,
            whale_wisdom_secret_key,
            openai_api_key,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const REDACTED: &str = "<redacted>";
        f.debug_struct("Credentials")
            .field("fmp_api_key", &REDACTED)
            .field("alpha_vantage_api_key", &REDACTED)
            .field("whale_wisdom_shared_key", &REDACTED)
            .field("whale_wisdom_secret_key", &REDACTED)
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| REDACTED),
            )
            .finish()
    }
}
