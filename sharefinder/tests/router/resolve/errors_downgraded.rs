use sharefinder_core::{SharefinderError, Source};

use crate::helpers::{Chain, SPY, answer, http_error, none, shares, sym};

#[tokio::test]
async fn failures_become_absence_and_warnings() {
    let chain = Chain::new(
        http_error("sharefinder-fmp", 500),
        none(),
        shares(Source::ProviderC, 42),
        answer("unused"),
    );

    let res = chain.finder().resolve(&sym(SPY)).await;
    assert_eq!(res.profile.unwrap().shares_outstanding, Some(42));
    // NotFound from the overview source is expected and not reported.
    assert_eq!(
        res.warnings,
        vec![SharefinderError::status("sharefinder-fmp", 500)]
    );
}

#[tokio::test]
async fn all_failing_yields_nothing_structured() {
    let chain = Chain::new(
        http_error("sharefinder-fmp", 500),
        http_error("sharefinder-alphavantage", 429),
        http_error("sharefinder-whalewisdom", 401),
        answer("unused"),
    );

    let res = chain.finder().resolve(&sym(SPY)).await;
    assert!(res.profile.is_none());
    assert!(!res.had_structured_result);
    assert_eq!(res.warnings.len(), 3);
    assert_eq!(chain.calls(), [1, 1, 1, 0]);
}
