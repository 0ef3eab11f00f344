//! Validation failures: enum membership, constraints, unknown fields, and
//! aggregation of every violation into one report.

mod util;

use serde_json::json;
use vget_settings::{SettingsError, SettingsLoader, UnknownFieldPolicy};

use util::{document_file, overlay};

#[test]
fn enum_rejection_names_the_allowed_set() {
    let err = SettingsLoader::new()
        .overrides(overlay(json!({"basic": {"video_quality": 999}})))
        .load()
        .expect_err("999 is not a legal quality code");
    let rendered = err.to_string();
    assert!(rendered.contains("basic.video_quality"));
    assert!(rendered.contains("999"));
    assert!(rendered.contains("{127, 126, 125, 120, 116, 112, 100, 80, 74, 64, 32, 16}"));
}

#[test]
fn num_workers_zero_is_rejected_and_one_accepted() {
    let err = SettingsLoader::new()
        .overrides(overlay(json!({"basic": {"num_workers": 0}})))
        .load()
        .expect_err("exclusive minimum");
    assert!(matches!(&*err, SettingsError::Constraint { field, .. }
        if field == "basic.num_workers"));

    let settings = SettingsLoader::new()
        .overrides(overlay(json!({"basic": {"num_workers": 1}})))
        .load()
        .expect("1 worker is legal");
    assert_eq!(settings.basic.num_workers, 1);
}

#[test]
fn unknown_field_is_rejected_by_default() {
    let err = SettingsLoader::new()
        .overrides(overlay(json!({"basic": {"typo_field": true}})))
        .load()
        .expect_err("unknown key");
    assert!(matches!(&*err, SettingsError::UnknownField { field }
        if field == "basic.typo_field"));
}

#[test]
fn unknown_field_can_be_warned_and_dropped() {
    let settings = SettingsLoader::new()
        .overrides(overlay(json!({"basic": {"typo_field": true, "num_workers": 4}})))
        .unknown_fields(UnknownFieldPolicy::WarnAndDrop)
        .load()
        .expect("unknown key is dropped, the rest validates");
    assert_eq!(settings.basic.num_workers, 4);
}

#[test]
fn every_violation_is_reported_in_one_pass() {
    let doc = document_file(
        "[basic]\nnum_workers = 0\nvideo_quality = 999\nproxy = false\n",
    );
    let err = SettingsLoader::new()
        .document_path(doc.path())
        .load()
        .expect_err("three violations");
    match &*err {
        SettingsError::Aggregate(agg) => {
            assert_eq!(agg.len(), 3);
            let rendered = agg.to_string();
            assert!(rendered.contains("basic.num_workers"));
            assert!(rendered.contains("basic.video_quality"));
            assert!(rendered.contains("basic.proxy"));
        }
        other => panic!("expected Aggregate, got {other:?}"),
    }
}

#[test]
fn screening_and_merge_violations_aggregate_together() {
    let err = SettingsLoader::new()
        .overrides(overlay(json!({
            "basic": {"typo_field": true, "num_workers": 0}
        })))
        .load()
        .expect_err("unknown key plus constraint violation");
    match &*err {
        SettingsError::Aggregate(agg) => assert_eq!(agg.len(), 2),
        other => panic!("expected Aggregate, got {other:?}"),
    }
}

#[test]
fn out_of_range_integers_join_the_one_pass_report() {
    // A negative interval must be named in the same aggregate as any other
    // violation, not deferred to a deserialization failure on a later run.
    let err = SettingsLoader::new()
        .overrides(overlay(json!({
            "basic": {"download_interval": -1, "num_workers": 0}
        })))
        .load()
        .expect_err("both violations reported together");
    match &*err {
        SettingsError::Aggregate(agg) => {
            assert_eq!(agg.len(), 2);
            let messages: Vec<String> = agg.iter().map(ToString::to_string).collect();
            assert!(messages.iter().any(|m| m.contains("basic.download_interval")));
            assert!(messages.iter().any(|m| m.contains("basic.num_workers")));
        }
        other => panic!("expected Aggregate, got {other:?}"),
    }
}

#[test]
fn worker_counts_beyond_the_typed_range_are_rejected() {
    let err = SettingsLoader::new()
        .overrides(overlay(json!({"basic": {"num_workers": 4_294_967_296_i64}})))
        .load()
        .expect_err("exceeds the typed range");
    assert!(matches!(&*err, SettingsError::Constraint { field, .. }
        if field == "basic.num_workers"));
}

#[test]
fn type_mismatch_reports_expected_kind() {
    let err = SettingsLoader::new()
        .overrides(overlay(json!({"basic": {"num_workers": "eight"}})))
        .load()
        .expect_err("string is not an integer");
    let rendered = err.to_string();
    assert!(rendered.contains("basic.num_workers"));
    assert!(rendered.contains("expected integer"));
    assert!(rendered.contains("eight"));
}

#[test]
fn unparseable_document_aborts_before_merge() {
    let doc = document_file("[basic\nnum_workers = 4\n");
    let err = SettingsLoader::new()
        .document_path(doc.path())
        .load()
        .expect_err("syntax error is terminal");
    assert!(matches!(&*err, SettingsError::Document { .. }));
}

#[test]
fn no_coercion_between_types() {
    // The string "127" is not the quality code 127.
    let err = SettingsLoader::new()
        .overrides(overlay(json!({"basic": {"video_quality": "127"}})))
        .load()
        .expect_err("strings are not coerced to integers");
    assert!(matches!(&*err, SettingsError::TypeMismatch { .. }));
}
