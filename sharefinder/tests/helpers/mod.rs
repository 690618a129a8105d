#![allow(dead_code)]

use std::sync::Arc;

use sharefinder::Sharefinder;
use sharefinder_core::{FundProfile, SharefinderError, Source, Symbol};
use sharefinder_mock::{EstimateMock, MockBehavior, ProfileMock, profile};

pub const SPY: &str = "SPY";
pub const ARKK: &str = "ARKK";

pub fn sym(s: &str) -> Symbol {
    Symbol::new(s).expect("valid test symbol")
}

/// The three structured doubles plus the language model, kept as `Arc`s so
/// tests can read call counters after the orchestrator is built.
pub struct Chain {
    pub a: Arc<ProfileMock>,
    pub b: Arc<ProfileMock>,
    pub c: Arc<ProfileMock>,
    pub llm: Arc<EstimateMock>,
}

impl Chain {
    pub fn new(
        a: MockBehavior<FundProfile>,
        b: MockBehavior<FundProfile>,
        c: MockBehavior<FundProfile>,
        llm: MockBehavior<String>,
    ) -> Self {
        Self {
            a: Arc::new(ProfileMock::new(Source::ProviderA, a)),
            b: Arc::new(ProfileMock::new(Source::ProviderB, b)),
            c: Arc::new(ProfileMock::new(Source::ProviderC, c)),
            llm: Arc::new(EstimateMock::new(llm)),
        }
    }

    pub fn finder(&self) -> Sharefinder {
        self.finder_with_llm(true)
    }

    pub fn finder_with_llm(&self, llm_fallback: bool) -> Sharefinder {
        // Registered out of order on purpose: sources fix the order.
        Sharefinder::builder()
            .with_connector(self.c.clone())
            .with_connector(self.llm.clone())
            .with_connector(self.a.clone())
            .with_connector(self.b.clone())
            .llm_fallback(llm_fallback)
            .build()
            .expect("valid chain")
    }

    pub fn calls(&self) -> [usize; 4] {
        [self.a.calls(), self.b.calls(), self.c.calls(), self.llm.calls()]
    }
}

pub fn shares(source: Source, n: i64) -> MockBehavior<FundProfile> {
    MockBehavior::Return(profile(source, Some(n), None))
}

pub fn partial(source: Source, name: &str, market_cap: Option<i64>) -> MockBehavior<FundProfile> {
    MockBehavior::Return(profile(source, None, market_cap).with_name(Some(name)))
}

pub fn none<T>() -> MockBehavior<T> {
    MockBehavior::not_found()
}

pub fn http_error<T>(connector: &str, status: u16) -> MockBehavior<T> {
    MockBehavior::Fail(SharefinderError::status(connector, status))
}

pub fn answer(text: &str) -> MockBehavior<String> {
    MockBehavior::Return(text.to_string())
}
