//! The field catalogue for the four settings groups.
//!
//! Quality selector codes are the opaque tiers offered by the upstream
//! provider; they are carried verbatim rather than given symbolic meaning
//! here. The typed layer in [`crate::model`] names them.

use serde_json::{Map, Value, json};

use super::{Constraint, EnumValues, FieldKind, FieldSpec};

/// Legal video quality selector codes, best first.
pub const VIDEO_QUALITY_CODES: &[i64] =
    &[127, 126, 125, 120, 116, 112, 100, 80, 74, 64, 32, 16];

/// Legal audio quality selector codes, best first.
pub const AUDIO_QUALITY_CODES: &[i64] = &[30251, 30255, 30250, 30280, 30232, 30216];

const OUTPUT_FORMATS: &[&str] = &["infer", "mp4", "mkv", "mov"];
const AUDIO_ONLY_OUTPUT_FORMATS: &[&str] =
    &["infer", "m4a", "aac", "mp3", "flac", "mp4", "mkv", "mov"];
const DANMAKU_FORMATS: &[&str] = &["xml", "ass", "protobuf"];

fn field(name: &'static str, kind: FieldKind, default: Value) -> FieldSpec {
    FieldSpec::new(name, kind, default)
}

fn flag(name: &'static str, default: bool) -> FieldSpec {
    field(name, FieldKind::Boolean, Value::Bool(default))
}

// Upper bound for fields the typed settings hold as u32.
const UNSIGNED_MAX: i64 = u32::MAX as i64;

pub(super) fn basic() -> Vec<FieldSpec> {
    vec![
        field("num_workers", FieldKind::Integer, json!(8))
            .with_constraint(Constraint::ExclusiveMin(0))
            .with_constraint(Constraint::Max(UNSIGNED_MAX)),
        field("video_quality", FieldKind::Integer, json!(127))
            .with_enum(EnumValues::Integers(VIDEO_QUALITY_CODES))
            .alias_expandable(),
        field("audio_quality", FieldKind::Integer, json!(30251))
            .with_enum(EnumValues::Integers(AUDIO_QUALITY_CODES))
            .alias_expandable(),
        field("vcodec", FieldKind::String, json!("avc:copy")).alias_expandable(),
        field("acodec", FieldKind::String, json!("mp4a:copy")).alias_expandable(),
        field(
            "download_vcodec_priority",
            FieldKind::NullableStringSequence,
            Value::Null,
        )
        .alias_expandable(),
        field("output_format", FieldKind::String, json!("infer"))
            .with_enum(EnumValues::Strings(OUTPUT_FORMATS))
            .alias_expandable(),
        field("output_format_audio_only", FieldKind::String, json!("infer"))
            .with_enum(EnumValues::Strings(AUDIO_ONLY_OUTPUT_FORMATS))
            .alias_expandable(),
        field("danmaku_format", FieldKind::String, json!("ass"))
            .with_enum(EnumValues::Strings(DANMAKU_FORMATS))
            .alias_expandable(),
        field("block_size", FieldKind::Number, json!(0.5)),
        flag("overwrite", false),
        field("proxy", FieldKind::String, json!("auto")),
        field("dir", FieldKind::String, json!("./download")),
        field("tmp_dir", FieldKind::NullableString, Value::Null),
        field("sessdata", FieldKind::String, json!("")),
        field("subpath_template", FieldKind::String, json!("{auto}")),
        field("aliases", FieldKind::StringMap, Value::Object(Map::new())).key_union(),
        field("metadata_format_premiered", FieldKind::String, json!("%Y-%m-%d")),
        field("download_interval", FieldKind::Integer, json!(0))
            .with_constraint(Constraint::Min(0))
            .with_constraint(Constraint::Max(UNSIGNED_MAX)),
        field("banned_mirrors_pattern", FieldKind::NullableString, Value::Null),
        flag("no_color", false),
        flag("no_progress", false),
        flag("debug", false),
        flag("vip_strict", false),
        flag("login_strict", false),
    ]
}

pub(super) fn resource() -> Vec<FieldSpec> {
    vec![
        flag("require_video", true),
        flag("require_audio", true),
        flag("require_subtitle", true),
        flag("require_metadata", false),
        flag("require_danmaku", true),
        flag("require_cover", true),
        flag("require_chapter_info", true),
        flag("save_cover", false),
    ]
}

pub(super) fn danmaku() -> Vec<FieldSpec> {
    vec![
        field("font_size", FieldKind::NullableInteger, Value::Null)
            .with_constraint(Constraint::Min(0))
            .with_constraint(Constraint::Max(UNSIGNED_MAX)),
        field("font", FieldKind::String, json!("SimHei")),
        field("opacity", FieldKind::Number, json!(0.8)),
        field("display_region_ratio", FieldKind::Number, json!(1.0)),
        field("speed", FieldKind::Number, json!(1.0)),
        flag("block_top", false),
        flag("block_bottom", false),
        flag("block_scroll", false),
        flag("block_reverse", false),
        flag("block_fixed", false),
        flag("block_special", false),
        flag("block_colorful", false),
        field(
            "block_keyword_patterns",
            FieldKind::StringSequence,
            Value::Array(Vec::new()),
        ),
    ]
}

pub(super) fn batch() -> Vec<FieldSpec> {
    vec![
        flag("with_section", false),
        field("batch_filter_start_time", FieldKind::NullableString, Value::Null),
        field("batch_filter_end_time", FieldKind::NullableString, Value::Null),
    ]
}
