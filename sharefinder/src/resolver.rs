use sharefinder_core::{FundProfile, Resolution, SharefinderError, Source, Symbol};

use crate::Sharefinder;

impl Sharefinder {
    /// Run the structured fallback chain for `symbol`.
    ///
    /// Connectors are awaited one at a time in source order. The chain stops
    /// at the first record carrying a positive share count; such a record
    /// replaces any partial record obtained earlier. If no source has shares,
    /// the first partial record (name, market cap, website) is kept.
    ///
    /// Never fails: every connector error is downgraded to "no data", logged at
    /// debug level and, if actionable, recorded in [`Resolution::warnings`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "sharefinder::resolve",
            skip(self, symbol),
            fields(symbol = %symbol, sources = self.profiles.len()),
        )
    )]
    pub async fn resolve(&self, symbol: &Symbol) -> Resolution {
        let mut best: Option<FundProfile> = None;
        let mut had_structured_result = false;
        let mut attempted: Vec<Source> = Vec::with_capacity(self.profiles.len());
        let mut warnings: Vec<SharefinderError> = Vec::new();

        for (source, c) in &self.profiles {
            let Some(p) = c.as_profile_provider() else {
                continue;
            };
            attempted.push(*source);

            match p.fund_profile(symbol).await {
                Ok(profile) if profile.has_shares() => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        source = %source,
                        shares = profile.shares_outstanding,
                        "share count found; skipping remaining sources"
                    );
                    had_structured_result = true;
                    best = Some(profile);
                    break;
                }
                Ok(profile) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(source = %source, "record without share count");
                    had_structured_result = true;
                    if best.is_none() {
                        best = Some(profile);
                    }
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        source = %source,
                        connector = c.name(),
                        error = %e,
                        "provider gave no usable record"
                    );
                    if e.is_actionable() {
                        warnings.push(e);
                    }
                }
            }
        }

        Resolution {
            profile: best,
            had_structured_result,
            attempted,
            warnings,
        }
    }
}
