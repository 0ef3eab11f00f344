//! Folding settings layers into one fully-populated record.
//!
//! Layers apply in precedence order: defaults, then the persisted document,
//! then command-line overrides. A field present in a higher layer replaces
//! the lower value wholesale; the single exception is `basic.aliases`, whose
//! entries accumulate by key-union because aliases are additive declarations
//! gathered from every source. The strategy lives on the field descriptor
//! ([`crate::schema::MergeStrategy`]) so future additive fields reuse it
//! rather than growing special cases here.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Map, Value};

use crate::schema::{Group, MergeStrategy, registry};
use crate::source::RawOverlay;

/// Provenance of a settings layer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum LayerProvenance {
    /// Built-in defaults from the schema registry.
    Defaults,
    /// Values loaded from the persisted settings document.
    Document,
    /// Values supplied on the command line.
    Cli,
}

impl LayerProvenance {
    pub(crate) const fn describe(self) -> &'static str {
        match self {
            Self::Defaults => "defaults",
            Self::Document => "document",
            Self::Cli => "cli",
        }
    }
}

/// One settings layer awaiting the merge fold.
#[derive(Clone, Debug)]
pub struct Layer {
    provenance: LayerProvenance,
    overlay: RawOverlay,
    path: Option<Utf8PathBuf>,
}

impl Layer {
    /// Construct a layer holding the persisted document's values.
    #[must_use]
    pub const fn document(overlay: RawOverlay, path: Option<Utf8PathBuf>) -> Self {
        Self {
            provenance: LayerProvenance::Document,
            overlay,
            path,
        }
    }

    /// Construct a layer holding command-line override values.
    #[must_use]
    pub const fn cli(overlay: RawOverlay) -> Self {
        Self {
            provenance: LayerProvenance::Cli,
            overlay,
            path: None,
        }
    }

    /// The layer's provenance.
    #[must_use]
    pub const fn provenance(&self) -> LayerProvenance {
        self.provenance
    }

    /// The source path when this layer came from a file.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        self.path.as_deref()
    }

    pub(crate) const fn overlay(&self) -> &RawOverlay {
        &self.overlay
    }

    pub(crate) fn overlay_mut(&mut self) -> &mut RawOverlay {
        &mut self.overlay
    }

    pub(crate) fn into_overlay(self) -> RawOverlay {
        self.overlay
    }
}

/// Apply `layer` onto the accumulated `merged` document in place.
///
/// `merged` must carry the full default record for every group, which the
/// registry's [`default_document`](crate::schema::SchemaRegistry::default_document)
/// guarantees; the fold therefore never introduces missing fields. Overlay
/// keys are assumed to be screened already: unknown groups and fields are
/// skipped silently here.
pub(crate) fn apply_layer(merged: &mut Map<String, Value>, layer: Layer) {
    tracing::debug!(layer = layer.provenance().describe(), "applying settings layer");
    let provenance = layer.provenance();
    let overlay = layer.into_overlay();
    for (group_key, record) in overlay.into_inner() {
        let Some(group) = Group::from_key(&group_key) else {
            continue;
        };
        let Value::Object(record) = record else {
            continue;
        };
        let Some(target) = merged.get_mut(&group_key).and_then(Value::as_object_mut) else {
            continue;
        };
        for (name, value) in record {
            let Some(spec) = registry().field(group, &name) else {
                tracing::debug!(
                    layer = provenance.describe(),
                    field = %format!("{group}.{name}"),
                    "skipping unscreened field"
                );
                continue;
            };
            match spec.merge {
                MergeStrategy::Replace => {
                    target.insert(name, value);
                }
                MergeStrategy::KeyUnion => union_keys(target, &name, value),
            }
        }
    }
}

/// Merge `value`'s keys into the mapping at `target[name]`, overriding
/// individual entries rather than replacing the whole mapping.
///
/// Non-object values fall back to wholesale replacement; the type checker
/// reports them afterwards.
fn union_keys(target: &mut Map<String, Value>, name: &str, value: Value) {
    let Value::Object(incoming) = value else {
        target.insert(name.to_owned(), value);
        return;
    };
    let existing = target
        .entry(name.to_owned())
        .or_insert_with(|| Value::Object(Map::new()));
    if !existing.is_object() {
        *existing = Value::Object(Map::new());
    }
    let Some(existing_map) = existing.as_object_mut() else {
        return;
    };
    for (key, entry) in incoming {
        existing_map.insert(key, entry);
    }
}
