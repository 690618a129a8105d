//! Report envelopes produced by the orchestrator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{FundProfile, SharefinderError, Source, Symbol};

/// Result of running the structured-provider fallback chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Winning profile, or the best partial one when no provider had shares.
    pub profile: Option<FundProfile>,
    /// Whether any provider returned a profile at all, with or without shares.
    pub had_structured_result: bool,
    /// Sources actually queried, in call order.
    pub attempted: Vec<Source>,
    /// Provider failures that were downgraded to "no data".
    pub warnings: Vec<SharefinderError>,
}

impl Resolution {
    /// True when the resolved profile carries a positive share count.
    #[must_use]
    pub fn has_shares(&self) -> bool {
        self.profile.as_ref().is_some_and(FundProfile::has_shares)
    }
}

/// A structured profile augmented with derived metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedFund {
    /// The provider record.
    pub profile: FundProfile,
    /// Estimated net asset value per share at full precision, when derivable.
    pub nav: Option<Decimal>,
}

/// The four mutually exclusive results of a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LookupOutcome {
    /// A structured provider supplied a positive share count.
    Resolved(ResolvedFund),
    /// Structured data exists but no provider had a share count; the language
    /// model's answer, if any, accompanies it.
    Partial {
        /// Best partial record.
        fund: ResolvedFund,
        /// Free-text answer from the language model.
        estimate: Option<String>,
    },
    /// No structured data; only the language model answered.
    Estimated {
        /// Free-text answer, displayed verbatim.
        text: String,
    },
    /// Nothing from any source.
    NotFound,
}

impl LookupOutcome {
    /// Structured fund record carried by this outcome, if any.
    #[must_use]
    pub const fn fund(&self) -> Option<&ResolvedFund> {
        match self {
            Self::Resolved(f) | Self::Partial { fund: f, .. } => Some(f),
            Self::Estimated { .. } | Self::NotFound => None,
        }
    }

    /// Language-model text carried by this outcome, if any.
    #[must_use]
    pub fn estimate(&self) -> Option<&str> {
        match self {
            Self::Partial { estimate, .. } => estimate.as_deref(),
            Self::Estimated { text } => Some(text),
            Self::Resolved(_) | Self::NotFound => None,
        }
    }

    /// True only for [`LookupOutcome::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Summary of a full lookup for one ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupReport {
    /// Requested symbol.
    pub symbol: Symbol,
    /// What was found.
    pub outcome: LookupOutcome,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<SharefinderError>,
}
