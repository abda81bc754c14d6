//! Unit tests for error construction and aggregation behaviour.

use rstest::rstest;
use std::sync::Arc;

use super::DocnoteError;

fn duplicate(name: &str) -> DocnoteError {
    DocnoteError::DuplicateGroup { name: name.into() }
}

#[rstest]
fn try_aggregate_none_on_empty() {
    assert!(DocnoteError::try_aggregate(Vec::<Arc<DocnoteError>>::new()).is_none());
}

#[rstest]
fn single_owned_error_is_unwrapped() {
    let outcome =
        DocnoteError::try_aggregate(vec![duplicate("api")]).expect("one error was supplied");
    assert!(
        matches!(&outcome, DocnoteError::DuplicateGroup { name } if name == "api"),
        "expected DuplicateGroup, got {outcome:?}"
    );
}

#[rstest]
fn single_shared_error_stays_aggregated() {
    let shared = Arc::new(duplicate("api"));
    match DocnoteError::try_aggregate(vec![Arc::clone(&shared)]) {
        Some(DocnoteError::Aggregate(aggregate)) => assert_eq!(aggregate.len(), 1),
        other => panic!("expected Aggregate, got {other:?}"),
    }
}

#[rstest]
fn multiple_errors_are_numbered() {
    let outcome = DocnoteError::try_aggregate(vec![
        duplicate("api"),
        DocnoteError::invalid_field("tags", "must be a scalar"),
    ]);
    match outcome {
        Some(DocnoteError::Aggregate(aggregate)) => {
            assert_eq!(aggregate.len(), 2);
            assert_eq!(aggregate.iter().count(), 2);
            let display = aggregate.to_string();
            assert!(display.starts_with("1: duplicate group name 'api'"));
            assert!(display.contains("\n2: Invalid value for 'tags'"));
        }
        other => panic!("expected Aggregate, got {other:?}"),
    }
}

#[rstest]
fn figment_errors_become_gathering() {
    let err = DocnoteError::from(figment::Error::from("boom"));
    assert!(matches!(err, DocnoteError::Gathering(_)));
    assert!(err.to_string().contains("boom"));
}
