//! Unit tests for error aggregation and display behaviour.

use std::sync::Arc;

use rstest::rstest;

use super::SettingsError;

fn violation(field: &str) -> SettingsError {
    SettingsError::Constraint {
        field: field.into(),
        message: "must be greater than 0".into(),
    }
}

#[test]
fn try_aggregate_empty_is_none() {
    let errors: Vec<Arc<SettingsError>> = Vec::new();
    assert!(SettingsError::try_aggregate(errors).is_none());
}

#[test]
fn single_owned_error_is_unwrapped() {
    let outcome = SettingsError::aggregate(vec![Arc::new(violation("basic.num_workers"))]);
    assert!(matches!(outcome, SettingsError::Constraint { .. }));
}

#[test]
fn single_shared_error_stays_aggregated() {
    let shared = Arc::new(violation("basic.num_workers"));
    let keep_alive = Arc::clone(&shared);
    let outcome = SettingsError::aggregate(vec![shared]);
    match outcome {
        SettingsError::Aggregate(agg) => assert_eq!(agg.len(), 1),
        other => panic!("expected Aggregate, got {other:?}"),
    }
    drop(keep_alive);
}

#[rstest]
#[case(2)]
#[case(5)]
fn multiple_errors_aggregate(#[case] count: usize) {
    let errors: Vec<Arc<SettingsError>> = (0..count)
        .map(|i| Arc::new(violation(&format!("basic.field_{i}"))))
        .collect();
    match SettingsError::aggregate(errors) {
        SettingsError::Aggregate(agg) => assert_eq!(agg.len(), count),
        other => panic!("expected Aggregate, got {other:?}"),
    }
}

#[test]
fn aggregate_display_numbers_entries() {
    let err = SettingsError::aggregate(vec![
        Arc::new(violation("basic.num_workers")),
        Arc::new(SettingsError::unknown_field("basic.typo_field")),
    ]);
    let rendered = err.to_string();
    assert!(rendered.contains("1: constraint violated for 'basic.num_workers'"));
    assert!(rendered.contains("2: unknown settings field 'basic.typo_field'"));
}

#[test]
fn enum_violation_names_field_value_and_set() {
    let err = SettingsError::EnumViolation {
        field: "basic.video_quality".into(),
        value: "999".into(),
        allowed: "{127, 126, 125, 120, 116, 112, 100, 80, 74, 64, 32, 16}".into(),
    };
    let rendered = err.to_string();
    assert!(rendered.contains("basic.video_quality"));
    assert!(rendered.contains("999"));
    assert!(rendered.contains("127"));
    assert!(rendered.contains("16"));
}
