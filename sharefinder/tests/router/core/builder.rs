use std::sync::Arc;

use sharefinder::Sharefinder;
use sharefinder_core::{SharefinderError, Source};
use sharefinder_mock::{EstimateMock, ProfileMock};

use crate::helpers::{Chain, answer, none};

#[test]
fn empty_builder_is_rejected() {
    let err = Sharefinder::builder().build().err().unwrap();
    assert!(matches!(err, SharefinderError::InvalidArg(_)));
}

#[test]
fn sources_follow_priority_not_registration() {
    let chain = Chain::new(none(), none(), none(), answer("x"));
    let finder = chain.finder();
    assert_eq!(
        finder.sources(),
        vec![Source::ProviderA, Source::ProviderB, Source::ProviderC]
    );
    assert!(finder.will_estimate());
    assert!(!chain.finder_with_llm(false).will_estimate());
}

#[test]
fn duplicate_source_is_rejected() {
    let err = Sharefinder::builder()
        .with_connector(Arc::new(ProfileMock::empty(Source::ProviderB)))
        .with_connector(Arc::new(ProfileMock::empty(Source::ProviderB)))
        .build()
        .err()
        .unwrap();
    match err {
        SharefinderError::InvalidArg(msg) => assert!(msg.contains("Alpha Vantage"), "{msg}"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn second_estimator_is_rejected() {
    let err = Sharefinder::builder()
        .with_connector(Arc::new(EstimateMock::answering("a")))
        .with_connector(Arc::new(EstimateMock::answering("b")))
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, SharefinderError::InvalidArg(_)));
}

#[test]
fn partial_chains_are_allowed() {
    let finder = Sharefinder::builder()
        .with_connector(Arc::new(ProfileMock::empty(Source::ProviderC)))
        .build()
        .unwrap();
    assert_eq!(finder.sources(), vec![Source::ProviderC]);
    assert!(!finder.will_estimate());
}
