use sharefinder_core::{LookupOutcome, Source};

use crate::helpers::{ARKK, Chain, answer, none, partial, sym};

#[tokio::test]
async fn disabled_fallback_never_calls_the_model() {
    let chain = Chain::new(none(), none(), none(), answer("should not appear"));

    let report = chain.finder_with_llm(false).lookup(&sym(ARKK)).await;
    assert_eq!(report.outcome, LookupOutcome::NotFound);
    assert_eq!(chain.llm.calls(), 0);
}

#[tokio::test]
async fn disabled_fallback_still_returns_partial() {
    let chain = Chain::new(
        partial(Source::ProviderA, "ARK Innovation ETF", None),
        none(),
        none(),
        answer("should not appear"),
    );

    let report = chain.finder_with_llm(false).lookup(&sym(ARKK)).await;
    assert!(matches!(
        report.outcome,
        LookupOutcome::Partial { estimate: None, .. }
    ));
    assert_eq!(chain.llm.calls(), 0);
}
