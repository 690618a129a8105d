use rust_decimal::Decimal;
use sharefinder_core::{LookupOutcome, Source, nav_for_display};
use sharefinder_mock::{MockBehavior, profile};

use crate::helpers::{Chain, SPY, answer, none, sym};

#[tokio::test]
async fn nav_is_derived_for_the_winning_record() {
    let chain = Chain::new(
        MockBehavior::Return(profile(Source::ProviderA, Some(200_000), Some(1_000_000))),
        none(),
        none(),
        answer("unused"),
    );

    let report = chain.finder().lookup(&sym(SPY)).await;
    let LookupOutcome::Resolved(fund) = report.outcome else {
        panic!("expected a resolved outcome");
    };
    let nav = fund.nav.unwrap();
    assert_eq!(nav, Decimal::from(5));
    assert_eq!(nav_for_display(nav).to_string(), "5.0000");
}

#[tokio::test]
async fn nav_unavailable_without_market_cap() {
    let chain = Chain::new(
        MockBehavior::Return(profile(Source::ProviderA, Some(200_000), None)),
        none(),
        none(),
        answer("unused"),
    );

    let report = chain.finder().lookup(&sym(SPY)).await;
    assert_eq!(report.outcome.fund().unwrap().nav, None);
}
