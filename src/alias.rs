//! Single-pass expansion of user-defined alias tokens.
//!
//! Aliases are shorthand identifiers declared under `basic.aliases` that
//! expand to canonical field values before validation, e.g.
//! `aliases = { hd = "127" }` lets `video_quality = "hd"` stand in for the
//! quality code 127. Resolution is deliberately single-pass and
//! non-recursive: a token resolving to another alias name stays as the
//! substituted literal, so chains and cycles cannot loop. Aliases are visible
//! to the layer that declares them and to every later layer, never
//! retroactively.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::schema::{FieldKind, Group, registry};
use crate::source::RawOverlay;

/// Alias table accumulated across layers, in layer order.
pub(crate) type AliasTable = BTreeMap<String, String>;

/// Extend `accumulated` with the alias declarations of `overlay`, if any.
///
/// Entries declared in the overlay override earlier declarations of the same
/// key, mirroring the key-union merge of the `aliases` field itself.
/// Non-string entries are skipped; the type checker reports them after merge.
pub(crate) fn accumulate(accumulated: &mut AliasTable, overlay: &RawOverlay) {
    let Some(declared) = overlay
        .group(Group::Basic.key())
        .and_then(|basic| basic.get("aliases"))
        .and_then(Value::as_object)
    else {
        return;
    };
    for (key, value) in declared {
        if let Some(target) = value.as_str() {
            accumulated.insert(key.clone(), target.to_owned());
        }
    }
}

/// Expand alias tokens in `overlay` for every alias-expandable field.
///
/// Exactly one substitution pass is applied per token. Tokens matching no
/// alias pass through unchanged to be validated as literals.
pub(crate) fn resolve_overlay(overlay: &mut RawOverlay, aliases: &AliasTable) {
    if aliases.is_empty() {
        return;
    }
    let Some(basic) = overlay.group_mut(Group::Basic.key()) else {
        return;
    };
    for spec in registry().group(Group::Basic) {
        if !spec.alias_expandable {
            continue;
        }
        if let Some(value) = basic.get_mut(spec.name) {
            substitute(spec.kind, value, aliases);
        }
    }
}

/// Substitute one token, or each element of a sequence of tokens.
fn substitute(kind: FieldKind, value: &mut Value, aliases: &AliasTable) {
    match value {
        Value::String(token) => {
            if let Some(target) = aliases.get(token.as_str()) {
                *value = canonicalise(kind, target);
            }
        }
        Value::Array(items) => {
            for item in items {
                if let Value::String(token) = item
                    && let Some(target) = aliases.get(token.as_str())
                {
                    *item = Value::String(target.clone());
                }
            }
        }
        _ => {}
    }
}

/// Convert a substituted token into the canonical value for `kind`.
///
/// An alias maps to a canonical value, so a target destined for a numeric
/// field is parsed into that primitive when it parses cleanly. Anything else
/// stays a string literal for the validator to judge.
fn canonicalise(kind: FieldKind, target: &str) -> Value {
    match kind {
        FieldKind::Integer | FieldKind::NullableInteger => target
            .parse::<i64>()
            .map_or_else(|_| Value::String(target.to_owned()), Value::from),
        FieldKind::Number => target
            .parse::<f64>()
            .ok()
            .and_then(|n| serde_json::Number::from_f64(n).map(Value::Number))
            .unwrap_or_else(|| Value::String(target.to_owned())),
        _ => Value::String(target.to_owned()),
    }
}
