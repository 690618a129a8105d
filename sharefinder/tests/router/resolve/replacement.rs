use sharefinder_core::Source;

use crate::helpers::{ARKK, Chain, answer, none, partial, shares, sym};

#[tokio::test]
async fn overview_shares_when_profile_has_nothing() {
    let chain = Chain::new(none(), shares(Source::ProviderB, 1000), none(), answer("unused"));

    let res = chain.finder().resolve(&sym(ARKK)).await;
    let p = res.profile.unwrap();
    assert_eq!(p.source, Source::ProviderB);
    assert_eq!(p.shares_outstanding, Some(1000));
    assert_eq!(chain.calls(), [1, 1, 0, 0]);
}

#[tokio::test]
async fn later_record_with_shares_replaces_partial() {
    let chain = Chain::new(
        partial(Source::ProviderA, "ARK Innovation ETF", Some(6_000_000_000)),
        shares(Source::ProviderB, 1000),
        none(),
        answer("unused"),
    );

    let res = chain.finder().resolve(&sym(ARKK)).await;
    let p = res.profile.unwrap();
    assert_eq!(p.source, Source::ProviderB);
    assert_eq!(p.shares_outstanding, Some(1000));
    // The replacing record is taken whole, not merged.
    assert_eq!(p.market_cap, None);
    assert_eq!(p.name, "Mock Fund");
}

#[tokio::test]
async fn first_partial_is_kept_when_nobody_has_shares() {
    let chain = Chain::new(
        partial(Source::ProviderA, "From FMP", Some(10)),
        partial(Source::ProviderB, "From Alpha Vantage", Some(20)),
        none(),
        answer("unused"),
    );

    let res = chain.finder().resolve(&sym(ARKK)).await;
    assert!(res.had_structured_result);
    assert!(!res.has_shares());
    let p = res.profile.unwrap();
    assert_eq!(p.name, "From FMP");
    assert_eq!(p.source, Source::ProviderA);
    assert_eq!(chain.calls(), [1, 1, 1, 0]);
}

#[tokio::test]
async fn partial_from_a_later_source_is_still_reported() {
    let chain = Chain::new(
        none(),
        partial(Source::ProviderB, "Overview only", None),
        none(),
        answer("unused"),
    );

    let res = chain.finder().resolve(&sym(ARKK)).await;
    assert_eq!(res.profile.unwrap().name, "Overview only");
}
