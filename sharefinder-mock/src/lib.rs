//! Scripted connectors for exercising the sharefinder orchestrator without a
//! network. Each mock answers from a per-symbol rule table (falling back to a
//! default behavior) and counts how often it was called, so tests can prove
//! that later providers were never contacted.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use sharefinder_core::connector::{EstimateProvider, FundConnector, FundProfileProvider};
use sharefinder_core::{FundProfile, SharefinderError, Source, Symbol};

/// Instruction for how a method should behave for a given input.
#[derive(Debug, Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(SharefinderError),
}

impl<T: Clone> MockBehavior<T> {
    fn play(&self) -> Result<T, SharefinderError> {
        match self {
            Self::Return(v) => Ok(v.clone()),
            Self::Fail(e) => Err(e.clone()),
        }
    }
}

impl<T> MockBehavior<T> {
    /// A `NotFound` failure, the usual "provider has nothing" answer.
    #[must_use]
    pub fn not_found() -> Self {
        Self::Fail(SharefinderError::not_found("mock"))
    }
}

struct Script<T> {
    default: MockBehavior<T>,
    rules: Mutex<HashMap<Symbol, MockBehavior<T>>>,
    calls: AtomicUsize,
}

impl<T: Clone> Script<T> {
    fn new(default: MockBehavior<T>) -> Self {
        Self {
            default,
            rules: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        }
    }

    async fn play(&self, symbol: &Symbol) -> Result<T, SharefinderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let rules = self.rules.lock().await;
        rules.get(symbol).unwrap_or(&self.default).play()
    }
}

/// Structured-source double standing in for one of the three providers.
pub struct ProfileMock {
    source: Source,
    script: Script<FundProfile>,
}

impl ProfileMock {
    /// Mock for `source` that answers every symbol with `default`.
    #[must_use]
    pub fn new(source: Source, default: MockBehavior<FundProfile>) -> Self {
        Self {
            source,
            script: Script::new(default),
        }
    }

    /// Mock for `source` that knows nothing.
    #[must_use]
    pub fn empty(source: Source) -> Self {
        Self::new(source, MockBehavior::not_found())
    }

    /// Mock for `source` returning `shares` (and optionally a market cap) for
    /// every symbol.
    #[must_use]
    pub fn with_shares(source: Source, shares: i64, market_cap: Option<i64>) -> Self {
        Self::new(source, MockBehavior::Return(profile(source, Some(shares), market_cap)))
    }

    /// Override the behavior for one symbol.
    pub async fn set_behavior(&self, symbol: Symbol, behavior: MockBehavior<FundProfile>) {
        self.script.rules.lock().await.insert(symbol, behavior);
    }

    /// Number of `fund_profile` calls so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.script.calls.load(Ordering::SeqCst)
    }
}

impl FundConnector for ProfileMock {
    fn name(&self) -> &'static str {
        self.source.key().as_str()
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn source(&self) -> Option<Source> {
        Some(self.source)
    }

    fn as_profile_provider(&self) -> Option<&dyn FundProfileProvider> {
        Some(self as &dyn FundProfileProvider)
    }
}

#[async_trait]
impl FundProfileProvider for ProfileMock {
    async fn fund_profile(&self, symbol: &Symbol) -> Result<FundProfile, SharefinderError> {
        self.script.play(symbol).await
    }
}

/// Language-model double.
pub struct EstimateMock {
    script: Script<String>,
}

impl EstimateMock {
    /// Mock answering every symbol with `default`.
    #[must_use]
    pub fn new(default: MockBehavior<String>) -> Self {
        Self {
            script: Script::new(default),
        }
    }

    /// Mock that always answers `text`.
    #[must_use]
    pub fn answering(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Return(text.into()))
    }

    /// Override the behavior for one symbol.
    pub async fn set_behavior(&self, symbol: Symbol, behavior: MockBehavior<String>) {
        self.script.rules.lock().await.insert(symbol, behavior);
    }

    /// Number of `estimate` calls so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.script.calls.load(Ordering::SeqCst)
    }
}

impl FundConnector for EstimateMock {
    fn name(&self) -> &'static str {
        "sharefinder-mock-llm"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_estimate_provider(&self) -> Option<&dyn EstimateProvider> {
        Some(self as &dyn EstimateProvider)
    }
}

#[async_trait]
impl EstimateProvider for EstimateMock {
    async fn estimate(&self, symbol: &Symbol) -> Result<String, SharefinderError> {
        self.script.play(symbol).await
    }
}

/// Fixture profile named "Mock Fund" attributed to `source`.
///
/// `shares` and `market_cap` go through the same positivity rules as real
/// connectors, so `Some(0)` yields a record without shares.
#[must_use]
pub fn profile(source: Source, shares: Option<i64>, market_cap: Option<i64>) -> FundProfile {
    FundProfile {
        name: "Mock Fund".to_string(),
        shares_outstanding: None,
        market_cap: None,
        price_per_share: None,
        website: None,
        source,
    }
    .with_shares(shares)
    .with_market_cap(market_cap)
}
