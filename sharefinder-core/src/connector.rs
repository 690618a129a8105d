use async_trait::async_trait;

use crate::{ConnectorKey, FundProfile, SharefinderError, Source, Symbol};

/// Focused role trait for connectors that return a structured fund profile.
#[async_trait]
pub trait FundProfileProvider: Send + Sync {
    /// Fetch and normalize the provider's record for `symbol`.
    ///
    /// Returns `NotFound` when the provider has nothing usable for the symbol;
    /// any other error describes why the call failed.
    async fn fund_profile(&self, symbol: &Symbol) -> Result<FundProfile, SharefinderError>;
}

/// Focused role trait for connectors that return a free-text estimate.
#[async_trait]
pub trait EstimateProvider: Send + Sync {
    /// Ask for a natural-language shares-outstanding answer for `symbol`.
    ///
    /// The text is meant to be shown verbatim and is never parsed.
    async fn estimate(&self, symbol: &Symbol) -> Result<String, SharefinderError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
pub trait FundConnector: Send + Sync {
    /// A stable identifier (e.g., "sharefinder-fmp").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// The structured source this connector produces, which fixes its
    /// position in the fallback order. `None` for non-structured connectors.
    fn source(&self) -> Option<Source> {
        None
    }

    /// Advertise profile capability by returning a usable trait object reference when supported.
    fn as_profile_provider(&self) -> Option<&dyn FundProfileProvider> {
        None
    }

    /// Advertise estimate capability by returning a usable trait object reference when supported.
    fn as_estimate_provider(&self) -> Option<&dyn EstimateProvider> {
        None
    }
}
