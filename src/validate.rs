//! Type, enum, and constraint validation of the merged record.
//!
//! Validation happens in two phases. Before the merge fold, each overlay is
//! screened for keys the schema does not know; afterwards, the merged record
//! is checked field by field against the registry. A field fails on its
//! first violated check, but violations are collected across all fields so
//! the user sees every problem in one report.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::{SettingsError, SettingsResult};
use crate::model::SettingsDocument;
use crate::schema::{Group, registry};
use crate::source::RawOverlay;

/// Policy for overlay keys that match no schema field.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum UnknownFieldPolicy {
    /// Reject the run with an [`SettingsError::UnknownField`]. The default:
    /// a typoed key silently falling back to its default is worse than a
    /// hard stop.
    #[default]
    Reject,
    /// Log a warning and drop the key.
    WarnAndDrop,
}

/// Screen `overlay` for unknown groups and fields under `policy`.
///
/// Unknown keys are always removed from the overlay so the merge fold only
/// ever sees schema fields; under [`UnknownFieldPolicy::Reject`] each removal
/// also records an error in `errors`. Group entries that are not tables are
/// recorded as type mismatches and dropped likewise.
pub(crate) fn screen_overlay(
    overlay: &mut RawOverlay,
    policy: UnknownFieldPolicy,
    errors: &mut Vec<Arc<SettingsError>>,
) {
    let mut dropped_groups = Vec::new();
    let mut dropped_fields = Vec::new();

    for (group_key, record) in overlay.entries() {
        let Some(group) = Group::from_key(group_key) else {
            report_unknown(group_key, policy, errors);
            dropped_groups.push(group_key.clone());
            continue;
        };
        let Some(record) = record.as_object() else {
            errors.push(Arc::new(SettingsError::TypeMismatch {
                field: group_key.clone(),
                expected: "table of settings",
                found: render(record),
            }));
            dropped_groups.push(group_key.clone());
            continue;
        };
        for name in record.keys() {
            if registry().field(group, name).is_none() {
                report_unknown(&format!("{group}.{name}"), policy, errors);
                dropped_fields.push((group_key.clone(), name.clone()));
            }
        }
    }

    for group_key in dropped_groups {
        overlay.entries_mut().remove(&group_key);
    }
    for (group_key, name) in dropped_fields {
        if let Some(record) = overlay.group_mut(&group_key) {
            record.remove(&name);
        }
    }
}

fn report_unknown(field: &str, policy: UnknownFieldPolicy, errors: &mut Vec<Arc<SettingsError>>) {
    match policy {
        UnknownFieldPolicy::Reject => {
            errors.push(Arc::new(SettingsError::unknown_field(field)));
        }
        UnknownFieldPolicy::WarnAndDrop => {
            tracing::warn!(field, "dropping unknown settings field");
        }
    }
}

/// Check every field of the merged record, collecting violations.
///
/// Checks per field, in order, stopping at the first failure for that field:
/// kind conformance, enum membership, numeric constraints.
pub(crate) fn check_merged(merged: &Map<String, Value>, errors: &mut Vec<Arc<SettingsError>>) {
    for group in Group::ALL {
        let record = merged.get(group.key()).and_then(Value::as_object);
        for spec in registry().group(group) {
            let field = format!("{group}.{}", spec.name);
            let Some(value) = record.and_then(|r| r.get(spec.name)) else {
                // Defaults guarantee totality; a hole means the accumulator
                // was not seeded from the registry.
                errors.push(Arc::new(SettingsError::TypeMismatch {
                    field,
                    expected: spec.kind.name(),
                    found: "nothing".to_owned(),
                }));
                continue;
            };
            if !spec.kind.admits(value) {
                errors.push(Arc::new(SettingsError::TypeMismatch {
                    field,
                    expected: spec.kind.name(),
                    found: render(value),
                }));
                continue;
            }
            if let Some(enum_values) = &spec.enum_values
                && !enum_values.contains(value)
            {
                errors.push(Arc::new(SettingsError::EnumViolation {
                    field,
                    value: render(value),
                    allowed: enum_values.to_string(),
                }));
                continue;
            }
            if let Some(violated) = spec.constraints.iter().find(|c| !c.holds(value)) {
                errors.push(Arc::new(SettingsError::Constraint {
                    field,
                    message: violated.describe(),
                }));
            }
        }
    }
}

/// Materialise the validated record into the typed document.
///
/// # Errors
///
/// Returns [`SettingsError::Materialise`] when deserialization fails. The
/// schema's kinds, enum sets, and range constraints mirror the typed fields,
/// so after a clean validation pass this indicates a gap in that mirroring.
pub(crate) fn materialise(merged: Map<String, Value>) -> SettingsResult<SettingsDocument> {
    serde_json::from_value(Value::Object(merged)).map_err(|e| Arc::new(SettingsError::from(e)))
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
