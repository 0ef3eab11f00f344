//! Closed, versioned schema describing every settings group and field.
//!
//! The registry is the static input to both the merger and the validator: it
//! fixes each field's kind, default, merge strategy, and (for enumerated
//! fields) the closed set of legal values. It is built once per process and
//! never mutated.

mod catalogue;

/// Raw quality selector code sets, re-exported for error reporting and the
/// typed quality enums.
pub mod quality_codes {
    pub use super::catalogue::{AUDIO_QUALITY_CODES as AUDIO, VIDEO_QUALITY_CODES as VIDEO};
}

use std::fmt;
use std::sync::OnceLock;

use serde_json::{Map, Value};

/// Named settings group.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Group {
    /// Download mechanics: workers, quality, codecs, paths, credentials.
    Basic,
    /// Switches selecting which artifact kinds a download must produce.
    Resource,
    /// Danmaku rendering parameters and block filters.
    Danmaku,
    /// Controls for multi-item acquisition.
    Batch,
}

impl Group {
    /// Every group, in document order.
    pub const ALL: [Self; 4] = [Self::Basic, Self::Resource, Self::Danmaku, Self::Batch];

    /// Key under which the group appears in a settings document.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Resource => "resource",
            Self::Danmaku => "danmaku",
            Self::Batch => "batch",
        }
    }

    /// Parse a document key back into a group.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.key() == key)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Semantic kind of a field value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKind {
    /// Whole number.
    Integer,
    /// Any JSON number.
    Number,
    /// `true` or `false`.
    Boolean,
    /// UTF-8 string.
    String,
    /// Ordered sequence of strings.
    StringSequence,
    /// Mapping from string keys to string values.
    StringMap,
    /// String or null.
    NullableString,
    /// Whole number or null.
    NullableInteger,
    /// Ordered sequence of strings, or null.
    NullableStringSequence,
}

impl FieldKind {
    /// Human-readable name used in type-mismatch reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::StringSequence => "sequence of strings",
            Self::StringMap => "mapping of strings",
            Self::NullableString => "string or null",
            Self::NullableInteger => "integer or null",
            Self::NullableStringSequence => "sequence of strings or null",
        }
    }

    /// Whether `value` conforms to this kind. No coercion is applied.
    #[must_use]
    pub fn admits(self, value: &Value) -> bool {
        match self {
            Self::Integer => value.as_i64().is_some(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
            Self::String => value.is_string(),
            Self::StringSequence => Self::is_string_sequence(value),
            Self::StringMap => value
                .as_object()
                .is_some_and(|map| map.values().all(Value::is_string)),
            Self::NullableString => value.is_null() || value.is_string(),
            Self::NullableInteger => value.is_null() || value.as_i64().is_some(),
            Self::NullableStringSequence => value.is_null() || Self::is_string_sequence(value),
        }
    }

    fn is_string_sequence(value: &Value) -> bool {
        value
            .as_array()
            .is_some_and(|items| items.iter().all(Value::is_string))
    }
}

/// Closed set of legal values for an enumerated field.
#[derive(Clone, Copy, Debug)]
pub enum EnumValues {
    /// Opaque numeric codes, e.g. quality selectors.
    Integers(&'static [i64]),
    /// String tokens, e.g. output formats.
    Strings(&'static [&'static str]),
}

impl EnumValues {
    /// Exact membership test; no coercion, no case folding.
    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        match self {
            Self::Integers(codes) => value.as_i64().is_some_and(|v| codes.contains(&v)),
            Self::Strings(tokens) => value.as_str().is_some_and(|v| tokens.contains(&v)),
        }
    }
}

impl fmt::Display for EnumValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        match self {
            Self::Integers(codes) => {
                for (i, c) in codes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{c}")?;
                }
            }
            Self::Strings(tokens) => {
                for (i, t) in tokens.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(t)?;
                }
            }
        }
        f.write_str("}")
    }
}

/// Numeric constraint attached to a field.
///
/// Fields whose typed counterpart narrows the raw integer range carry the
/// matching bounds here, so an out-of-range value is reported in the
/// aggregated validation pass with its field named instead of surfacing as a
/// late deserialization failure.
#[derive(Clone, Copy, Debug)]
pub enum Constraint {
    /// Value must be strictly greater than the bound.
    ExclusiveMin(i64),
    /// Value must be at least the bound.
    Min(i64),
    /// Value must be at most the bound.
    Max(i64),
}

impl Constraint {
    /// Whether `value` satisfies the constraint. Non-integer values are the
    /// type checker's problem and pass here.
    #[must_use]
    pub fn holds(&self, value: &Value) -> bool {
        let Some(v) = value.as_i64() else {
            return true;
        };
        match self {
            Self::ExclusiveMin(bound) => v > *bound,
            Self::Min(bound) => v >= *bound,
            Self::Max(bound) => v <= *bound,
        }
    }

    /// Human-readable description used in constraint reports.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::ExclusiveMin(bound) => format!("must be greater than {bound}"),
            Self::Min(bound) => format!("must be at least {bound}"),
            Self::Max(bound) => format!("must be at most {bound}"),
        }
    }
}

/// How a field combines across layers during the merge fold.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MergeStrategy {
    /// A higher layer replaces the whole value.
    #[default]
    Replace,
    /// Higher layers override individual keys of a mapping; all layers'
    /// entries accumulate. Used for additive declarations such as `aliases`.
    KeyUnion,
}

/// Static descriptor of a single settings field.
#[derive(Debug)]
pub struct FieldSpec {
    /// Field name as it appears in documents and overlays.
    pub name: &'static str,
    /// Semantic kind checked by the validator.
    pub kind: FieldKind,
    /// Closed value set for enumerated fields.
    pub enum_values: Option<EnumValues>,
    /// Numeric constraints, checked in order; the first violation is reported.
    pub constraints: Vec<Constraint>,
    /// Cross-layer merge behaviour.
    pub merge: MergeStrategy,
    /// Whether tokens of this field are expanded through `basic.aliases`.
    pub alias_expandable: bool,
    default: Value,
}

impl FieldSpec {
    pub(crate) fn new(name: &'static str, kind: FieldKind, default: Value) -> Self {
        Self {
            name,
            kind,
            enum_values: None,
            constraints: Vec::new(),
            merge: MergeStrategy::Replace,
            alias_expandable: false,
            default,
        }
    }

    pub(crate) fn with_enum(mut self, values: EnumValues) -> Self {
        self.enum_values = Some(values);
        self
    }

    pub(crate) fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub(crate) fn key_union(mut self) -> Self {
        self.merge = MergeStrategy::KeyUnion;
        self
    }

    pub(crate) fn alias_expandable(mut self) -> Self {
        self.alias_expandable = true;
        self
    }

    /// The field's built-in default value.
    #[must_use]
    pub fn default_value(&self) -> Value {
        self.default.clone()
    }
}

/// Process-wide registry of every settings group and field.
#[derive(Debug)]
pub struct SchemaRegistry {
    basic: Vec<FieldSpec>,
    resource: Vec<FieldSpec>,
    danmaku: Vec<FieldSpec>,
    batch: Vec<FieldSpec>,
}

impl SchemaRegistry {
    fn build() -> Self {
        Self {
            basic: catalogue::basic(),
            resource: catalogue::resource(),
            danmaku: catalogue::danmaku(),
            batch: catalogue::batch(),
        }
    }

    /// Ordered field descriptors for `group`.
    #[must_use]
    pub fn group(&self, group: Group) -> &[FieldSpec] {
        match group {
            Group::Basic => &self.basic,
            Group::Resource => &self.resource,
            Group::Danmaku => &self.danmaku,
            Group::Batch => &self.batch,
        }
    }

    /// Look up a field descriptor by name within `group`.
    ///
    /// Returns `None` for unknown names so callers can classify overlay keys;
    /// internal code asking for a field it knows exists is a programming
    /// error and should not reach for this accessor's `None` arm.
    #[must_use]
    pub fn field(&self, group: Group, name: &str) -> Option<&FieldSpec> {
        self.group(group).iter().find(|spec| spec.name == name)
    }

    /// Fully-populated default record for `group`.
    #[must_use]
    pub fn default_record(&self, group: Group) -> Map<String, Value> {
        self.group(group)
            .iter()
            .map(|spec| (spec.name.to_owned(), spec.default_value()))
            .collect()
    }

    /// Fully-populated default document covering all four groups.
    #[must_use]
    pub fn default_document(&self) -> Map<String, Value> {
        Group::ALL
            .into_iter()
            .map(|group| (group.key().to_owned(), Value::Object(self.default_record(group))))
            .collect()
    }
}

/// Access the process-wide schema registry, building it on first use.
#[must_use]
pub fn registry() -> &'static SchemaRegistry {
    static REGISTRY: OnceLock<SchemaRegistry> = OnceLock::new();
    REGISTRY.get_or_init(SchemaRegistry::build)
}

#[cfg(test)]
mod tests;
