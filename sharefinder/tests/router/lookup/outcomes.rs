use sharefinder_core::{LookupOutcome, SharefinderError, Source};
use sharefinder_mock::MockBehavior;

use crate::helpers::{ARKK, Chain, SPY, answer, http_error, none, partial, shares, sym};

#[tokio::test]
async fn model_text_when_no_structured_source_answers() {
    let chain = Chain::new(none(), none(), none(), answer("Roughly 150M shares per ARK."));

    let report = chain.finder().lookup(&sym(ARKK)).await;
    assert_eq!(
        report.outcome,
        LookupOutcome::Estimated {
            text: "Roughly 150M shares per ARK.".to_string()
        }
    );
    assert!(report.outcome.fund().is_none());
    assert_eq!(chain.calls(), [1, 1, 1, 1]);
}

#[tokio::test]
async fn partial_record_carries_model_text() {
    let chain = Chain::new(
        partial(Source::ProviderA, "ARK Innovation ETF", Some(6_000_000_000)),
        none(),
        none(),
        answer("About 150 million."),
    );

    let report = chain.finder().lookup(&sym(ARKK)).await;
    match &report.outcome {
        LookupOutcome::Partial { fund, estimate } => {
            assert_eq!(fund.profile.name, "ARK Innovation ETF");
            assert_eq!(fund.nav, None);
            assert_eq!(estimate.as_deref(), Some("About 150 million."));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn partial_record_without_model_answer() {
    let chain = Chain::new(
        partial(Source::ProviderA, "ARK Innovation ETF", None),
        none(),
        none(),
        http_error("sharefinder-openai", 503),
    );

    let report = chain.finder().lookup(&sym(ARKK)).await;
    assert!(matches!(
        report.outcome,
        LookupOutcome::Partial { estimate: None, .. }
    ));
    assert_eq!(
        report.warnings,
        vec![SharefinderError::status("sharefinder-openai", 503)]
    );
}

#[tokio::test]
async fn everything_failing_is_not_found() {
    let chain = Chain::new(
        http_error("sharefinder-fmp", 500),
        none(),
        http_error("sharefinder-whalewisdom", 500),
        http_error("sharefinder-openai", 500),
    );

    let report = chain.finder().lookup(&sym(SPY)).await;
    assert_eq!(report.outcome, LookupOutcome::NotFound);
    assert!(report.outcome.is_not_found());
    assert_eq!(report.symbol, sym(SPY));
    assert_eq!(report.warnings.len(), 3);
}

#[tokio::test]
async fn blank_model_answer_counts_as_none() {
    let chain = Chain::new(none(), none(), none(), MockBehavior::Return("   ".to_string()));
    let report = chain.finder().lookup(&sym(SPY)).await;
    assert_eq!(report.outcome, LookupOutcome::NotFound);
}

#[tokio::test]
async fn resolved_outcome_has_no_estimate() {
    let chain = Chain::new(none(), shares(Source::ProviderB, 1000), none(), answer("unused"));
    let report = chain.finder().lookup(&sym(SPY)).await;
    assert!(matches!(report.outcome, LookupOutcome::Resolved(_)));
    assert_eq!(chain.llm.calls(), 0);
}
