use proptest::prelude::*;
use sharefinder_core::{FundProfile, LookupOutcome, Source};
use sharefinder_mock::MockBehavior;

use crate::helpers::{Chain, SPY, http_error, none, partial, shares, sym};

#[derive(Debug, Clone, Copy)]
enum Step {
    Shares(i64),
    Partial,
    Missing,
    Broken,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (1_i64..1_000_000).prop_map(Step::Shares),
        Just(Step::Partial),
        Just(Step::Missing),
        Just(Step::Broken),
    ]
}

fn behavior(source: Source, s: Step) -> MockBehavior<FundProfile> {
    match s {
        Step::Shares(n) => shares(source, n),
        Step::Partial => partial(source, "partial", Some(10)),
        Step::Missing => none(),
        Step::Broken => http_error("mock", 500),
    }
}

fn run(steps: [Step; 3], llm: Option<bool>) -> (LookupOutcome, [usize; 4]) {
    let llm_behavior = match llm {
        Some(true) => MockBehavior::Return("text".to_string()),
        Some(false) => http_error("sharefinder-openai", 500),
        None => none(),
    };
    let chain = Chain::new(
        behavior(Source::ProviderA, steps[0]),
        behavior(Source::ProviderB, steps[1]),
        behavior(Source::ProviderC, steps[2]),
        llm_behavior,
    );
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let report = rt.block_on(chain.finder().lookup(&sym(SPY)));
    (report.outcome, chain.calls())
}

proptest! {
    #[test]
    fn exactly_one_outcome(
        a in step(),
        b in step(),
        c in step(),
        llm in prop::option::of(any::<bool>()),
    ) {
        let steps = [a, b, c];
        let (outcome, calls) = run(steps, llm);

        let first_with_shares = steps.iter().position(|s| matches!(s, Step::Shares(_)));
        let any_partial = steps.iter().any(|s| matches!(s, Step::Partial));
        let model_answers = llm == Some(true);

        match first_with_shares {
            Some(i) => {
                prop_assert!(matches!(outcome, LookupOutcome::Resolved(_)));
                let fund = outcome.fund().unwrap();
                prop_assert_eq!(fund.profile.source, Source::ALL[i]);
                // Nothing after the winner was contacted.
                for (j, n) in calls.iter().take(3).enumerate() {
                    prop_assert_eq!(*n, usize::from(j <= i));
                }
                prop_assert_eq!(calls[3], 0);
            }
            None if any_partial => {
                let is_partial = matches!(outcome, LookupOutcome::Partial { .. });
                prop_assert!(is_partial);
                prop_assert_eq!(outcome.estimate().is_some(), model_answers);
            }
            None if model_answers => {
                let is_estimated = matches!(outcome, LookupOutcome::Estimated { .. });
                prop_assert!(is_estimated);
            }
            None => prop_assert_eq!(outcome, LookupOutcome::NotFound),
        }
    }
}
