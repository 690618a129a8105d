use std::collections::BTreeMap;
use std::sync::Arc;

use sharefinder_core::{FundConnector, SharefinderConfig, SharefinderError, Source};

/// Orchestrator that runs the provider fallback chain for a symbol.
pub struct Sharefinder {
    /// Structured connectors in fallback order.
    pub(crate) profiles: Vec<(Source, Arc<dyn FundConnector>)>,
    pub(crate) estimator: Option<Arc<dyn FundConnector>>,
    pub(crate) cfg: SharefinderConfig,
}

/// Builder for constructing a [`Sharefinder`].
pub struct SharefinderBuilder {
    connectors: Vec<Arc<dyn FundConnector>>,
    cfg: SharefinderConfig,
}

impl Default for SharefinderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SharefinderBuilder {
    /// Create a new builder with no connectors and the default configuration
    /// (LLM fallback enabled).
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: SharefinderConfig::default(),
        }
    }

    /// Register a connector.
    ///
    /// Registration order does not matter: structured connectors run in the
    /// order of the [`Source`] they report.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn FundConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: SharefinderConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Enable or disable the language-model fallback.
    ///
    /// When disabled, a registered estimate connector is never called.
    #[must_use]
    pub const fn llm_fallback(mut self, yes: bool) -> Self {
        self.cfg.llm_fallback = yes;
        self
    }

    /// Build the orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors were registered, if a connector
    /// advertises no capability, if a profile connector reports no source or
    /// shares its source with another, or if more than one estimate connector
    /// was registered.
    pub fn build(self) -> Result<Sharefinder, SharefinderError> {
        if self.connectors.is_empty() {
            return Err(SharefinderError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }

        let mut by_source: BTreeMap<Source, Arc<dyn FundConnector>> = BTreeMap::new();
        let mut estimator: Option<Arc<dyn FundConnector>> = None;

        for c in self.connectors {
            let is_profile = c.as_profile_provider().is_some();
            let is_estimate = c.as_estimate_provider().is_some();
            if !is_profile && !is_estimate {
                return Err(SharefinderError::InvalidArg(format!(
                    "connector {} advertises no capability",
                    c.name()
                )));
            }
            if is_profile {
                let Some(source) = c.source() else {
                    return Err(SharefinderError::InvalidArg(format!(
                        "profile connector {} does not report a source",
                        c.name()
                    )));
                };
                if let Some(prev) = by_source.get(&source) {
                    return Err(SharefinderError::InvalidArg(format!(
                        "connectors {} and {} both provide {source}",
                        prev.name(),
                        c.name()
                    )));
                }
                by_source.insert(source, Arc::clone(&c));
            }
            if is_estimate {
                if let Some(prev) = &estimator {
                    return Err(SharefinderError::InvalidArg(format!(
                        "connectors {} and {} both provide estimates",
                        prev.name(),
                        c.name()
                    )));
                }
                estimator = Some(c);
            }
        }

        Ok(Sharefinder {
            profiles: by_source.into_iter().collect(),
            estimator,
            cfg: self.cfg,
        })
    }
}

impl Sharefinder {
    /// Start building a new `Sharefinder`.
    #[must_use]
    pub fn builder() -> SharefinderBuilder {
        SharefinderBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &SharefinderConfig {
        &self.cfg
    }

    /// Structured sources that will be tried, in order.
    #[must_use]
    pub fn sources(&self) -> Vec<Source> {
        self.profiles.iter().map(|(s, _)| *s).collect()
    }

    /// Whether a lookup may end with a language-model call.
    #[must_use]
    pub const fn will_estimate(&self) -> bool {
        self.cfg.llm_fallback && self.estimator.is_some()
    }
}
