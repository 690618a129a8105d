use sharefinder_core::Source;

use crate::helpers::{Chain, SPY, answer, shares, sym};

#[tokio::test]
async fn first_source_with_shares_stops_the_chain() {
    let chain = Chain::new(
        shares(Source::ProviderA, 500),
        shares(Source::ProviderB, 1000),
        shares(Source::ProviderC, 2000),
        answer("unused"),
    );

    let res = chain.finder().resolve(&sym(SPY)).await;

    let p = res.profile.as_ref().unwrap();
    assert_eq!(p.shares_outstanding, Some(500));
    assert_eq!(p.source, Source::ProviderA);
    assert_eq!(res.attempted, vec![Source::ProviderA]);
    assert!(res.had_structured_result);
    assert_eq!(chain.calls(), [1, 0, 0, 0]);
}

#[tokio::test]
async fn lookup_with_shares_never_asks_the_model() {
    let chain = Chain::new(
        shares(Source::ProviderA, 500),
        shares(Source::ProviderB, 1000),
        shares(Source::ProviderC, 2000),
        answer("unused"),
    );

    let report = chain.finder().lookup(&sym(SPY)).await;
    assert!(report.outcome.fund().is_some());
    assert_eq!(report.outcome.estimate(), None);
    assert_eq!(chain.calls(), [1, 0, 0, 0]);
}

#[tokio::test]
async fn holdings_source_is_reached_only_after_two_misses() {
    let chain = Chain::new(
        crate::helpers::none(),
        crate::helpers::none(),
        shares(Source::ProviderC, 7),
        answer("unused"),
    );

    let res = chain.finder().resolve(&sym(SPY)).await;
    assert_eq!(res.profile.unwrap().source, Source::ProviderC);
    assert_eq!(
        res.attempted,
        vec![Source::ProviderA, Source::ProviderB, Source::ProviderC]
    );
    assert_eq!(chain.calls(), [1, 1, 1, 0]);
}
