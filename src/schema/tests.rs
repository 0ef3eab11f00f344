//! Unit tests for the schema registry and field descriptors.

use rstest::rstest;
use serde_json::{Value, json};

use super::{Constraint, EnumValues, FieldKind, Group, MergeStrategy, registry};

#[rstest]
#[case(Group::Basic, 25)]
#[case(Group::Resource, 8)]
#[case(Group::Danmaku, 13)]
#[case(Group::Batch, 3)]
fn group_field_counts(#[case] group: Group, #[case] expected: usize) {
    assert_eq!(registry().group(group).len(), expected);
}

#[test]
fn default_document_covers_every_field() {
    let doc = registry().default_document();
    for group in Group::ALL {
        let record = doc
            .get(group.key())
            .and_then(Value::as_object)
            .expect("group record present");
        for spec in registry().group(group) {
            assert!(
                record.contains_key(spec.name),
                "missing default for {group}.{}",
                spec.name
            );
        }
    }
}

#[rstest]
#[case("num_workers", json!(8))]
#[case("video_quality", json!(127))]
#[case("audio_quality", json!(30251))]
#[case("vcodec", json!("avc:copy"))]
#[case("danmaku_format", json!("ass"))]
#[case("download_vcodec_priority", Value::Null)]
#[case("aliases", json!({}))]
#[case("dir", json!("./download"))]
fn basic_defaults_match_catalogue(#[case] name: &str, #[case] expected: Value) {
    let spec = registry().field(Group::Basic, name).expect("known field");
    assert_eq!(spec.default_value(), expected);
}

#[test]
fn unknown_field_lookup_is_none() {
    assert!(registry().field(Group::Basic, "typo_field").is_none());
}

#[test]
fn aliases_is_the_only_key_union_field() {
    for group in Group::ALL {
        for spec in registry().group(group) {
            let expected = if spec.name == "aliases" {
                MergeStrategy::KeyUnion
            } else {
                MergeStrategy::Replace
            };
            assert_eq!(spec.merge, expected, "{group}.{}", spec.name);
        }
    }
}

#[rstest]
#[case(FieldKind::Integer, json!(8), true)]
#[case(FieldKind::Integer, json!(0.5), false)]
#[case(FieldKind::Integer, json!("8"), false)]
#[case(FieldKind::Number, json!(1), true)]
#[case(FieldKind::Number, json!(0.5), true)]
#[case(FieldKind::Boolean, json!(true), true)]
#[case(FieldKind::Boolean, json!("true"), false)]
#[case(FieldKind::StringSequence, json!(["a", "b"]), true)]
#[case(FieldKind::StringSequence, json!(["a", 1]), false)]
#[case(FieldKind::StringMap, json!({"hd": "127"}), true)]
#[case(FieldKind::StringMap, json!({"hd": 127}), false)]
#[case(FieldKind::NullableString, Value::Null, true)]
#[case(FieldKind::NullableString, json!("x"), true)]
#[case(FieldKind::NullableInteger, json!(12), true)]
#[case(FieldKind::NullableInteger, json!("12"), false)]
#[case(FieldKind::NullableStringSequence, Value::Null, true)]
#[case(FieldKind::NullableStringSequence, json!(["hevc"]), true)]
fn kind_admission(#[case] kind: FieldKind, #[case] value: Value, #[case] admitted: bool) {
    assert_eq!(kind.admits(&value), admitted);
}

#[test]
fn enum_membership_is_exact() {
    let spec = registry()
        .field(Group::Basic, "video_quality")
        .expect("known field");
    let values = spec.enum_values.expect("enumerated");
    assert!(values.contains(&json!(127)));
    assert!(!values.contains(&json!(999)));
    // No coercion: the string "127" is not the code 127.
    assert!(!values.contains(&json!("127")));
}

#[test]
fn enum_display_lists_full_set() {
    let rendered = EnumValues::Strings(&["xml", "ass", "protobuf"]).to_string();
    assert_eq!(rendered, "{xml, ass, protobuf}");
}

#[rstest]
#[case(Constraint::ExclusiveMin(0), json!(1), true)]
#[case(Constraint::ExclusiveMin(0), json!(0), false)]
#[case(Constraint::ExclusiveMin(0), json!(-3), false)]
#[case(Constraint::Min(0), json!(0), true)]
#[case(Constraint::Min(0), json!(-1), false)]
#[case(Constraint::Max(10), json!(10), true)]
#[case(Constraint::Max(10), json!(11), false)]
#[case(Constraint::Max(10), Value::Null, true)]
fn numeric_constraints(#[case] constraint: Constraint, #[case] value: Value, #[case] holds: bool) {
    assert_eq!(constraint.holds(&value), holds);
}

#[rstest]
#[case(Group::Basic, "num_workers")]
#[case(Group::Basic, "download_interval")]
#[case(Group::Danmaku, "font_size")]
fn unsigned_fields_are_bounded_above(#[case] group: Group, #[case] name: &str) {
    let spec = registry().field(group, name).expect("known field");
    assert!(
        spec.constraints
            .iter()
            .any(|c| matches!(c, Constraint::Max(bound) if *bound == i64::from(u32::MAX))),
        "{group}.{name} lacks an upper bound"
    );
}
