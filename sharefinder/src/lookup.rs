use sharefinder_core::{LookupOutcome, LookupReport, SharefinderError, Symbol, resolve_fund};

use crate::Sharefinder;

impl Sharefinder {
    /// Full lookup: structured fallback chain, derived NAV, then the
    /// language-model fallback when no source produced a share count.
    ///
    /// The language model is consulted both when nothing structured was found
    /// and when only a partial record was found; in the latter case its text
    /// rides along in [`LookupOutcome::Partial`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "sharefinder::lookup",
            skip(self, symbol),
            fields(symbol = %symbol),
        )
    )]
    pub async fn lookup(&self, symbol: &Symbol) -> LookupReport {
        let resolution = self.resolve(symbol).await;
        let mut warnings = resolution.warnings;

        let outcome = match resolution.profile {
            Some(profile) if profile.has_shares() => LookupOutcome::Resolved(resolve_fund(profile)),
            Some(profile) => LookupOutcome::Partial {
                fund: resolve_fund(profile),
                estimate: self.estimate(symbol, &mut warnings).await,
            },
            None => match self.estimate(symbol, &mut warnings).await {
                Some(text) => LookupOutcome::Estimated { text },
                None => LookupOutcome::NotFound,
            },
        };

        #[cfg(feature = "tracing")]
        if outcome.is_not_found() {
            tracing::warn!(symbol = %symbol, "no data found from any source");
        }

        LookupReport {
            symbol: symbol.clone(),
            outcome,
            warnings,
        }
    }

    /// Ask the estimate connector, if enabled. Failures become `None`.
    async fn estimate(
        &self,
        symbol: &Symbol,
        warnings: &mut Vec<SharefinderError>,
    ) -> Option<String> {
        if !self.cfg.llm_fallback {
            return None;
        }
        let c = self.estimator.as_ref()?;
        let ep = c.as_estimate_provider()?;
        match ep.estimate(symbol).await {
            Ok(text) if !text.trim().is_empty() => Some(text),
            Ok(_) => None,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(connector = c.name(), error = %e, "estimate fallback failed");
                if e.is_actionable() {
                    warnings.push(e);
                }
                None
            }
        }
    }
}
