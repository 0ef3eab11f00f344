//! Settings layer for the `vget` media downloader.
//!
//! This crate turns three layered sources — built-in defaults, a persisted
//! TOML/JSON settings document, and command-line overrides — into one fully
//! validated, strongly-typed [`SettingsDocument`] before any network or
//! file-processing work begins. Precedence is strict: overrides beat the
//! document, the document beats defaults.
//!
//! The pipeline is synchronous and runs once per invocation: load raw
//! overlays, expand alias shorthand, fold the layers, validate the merged
//! record against the closed schema, and materialise the typed document. A
//! load failure or any validation violation aborts the run; validation
//! violations are aggregated so the user sees every problem in one report.
//!
//! ```rust,no_run
//! use vget_settings::SettingsLoader;
//!
//! # fn run() -> vget_settings::SettingsResult<()> {
//! let settings = SettingsLoader::new().discover_document().load()?;
//! assert!(settings.basic.num_workers > 0);
//! # Ok(())
//! # }
//! ```

mod alias;
mod error;
mod merge;
pub mod model;
pub mod schema;
mod source;
mod validate;

pub use error::{AggregatedErrors, SettingsError, SettingsResult, SettingsResultExt};
pub use merge::{Layer, LayerProvenance};
pub use model::SettingsDocument;
pub use source::{CONFIG_PATH_ENV, RawOverlay, discover_document, load_document};
pub use validate::UnknownFieldPolicy;

use std::path::PathBuf;
use std::sync::Arc;

use camino::Utf8PathBuf;

/// Builder for the load → alias → merge → validate pipeline.
///
/// # Examples
///
/// ```rust,no_run
/// use vget_settings::{RawOverlay, SettingsLoader, UnknownFieldPolicy};
///
/// # fn run(cli_record: RawOverlay) -> vget_settings::SettingsResult<()> {
/// let settings = SettingsLoader::new()
///     .document_path("vget.toml")
///     .overrides(cli_record)
///     .unknown_fields(UnknownFieldPolicy::Reject)
///     .load()?;
/// assert!(!settings.basic.dir.as_str().is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct SettingsLoader {
    document_path: Option<PathBuf>,
    discover: bool,
    overrides: Option<RawOverlay>,
    unknown_fields: UnknownFieldPolicy,
}

impl SettingsLoader {
    /// Create a loader with no document, no overrides, and the default
    /// unknown-field policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the persisted document from an explicit path.
    ///
    /// An absent file at this path contributes an empty layer; an unreadable
    /// or unparseable file aborts the load.
    #[must_use]
    pub fn document_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.document_path = Some(path.into());
        self
    }

    /// Locate the persisted document via [`discover_document`] when no
    /// explicit path is set.
    #[must_use]
    pub const fn discover_document(mut self) -> Self {
        self.discover = true;
        self
    }

    /// Supply the command-line override record.
    #[must_use]
    pub fn overrides(mut self, overlay: RawOverlay) -> Self {
        self.overrides = Some(overlay);
        self
    }

    /// Set the policy for overlay keys the schema does not know.
    #[must_use]
    pub const fn unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
        self.unknown_fields = policy;
        self
    }

    /// Run the pipeline, producing the validated settings document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Document`] when a configured document cannot
    /// be read or parsed, and an aggregate of every screening and validation
    /// violation otherwise. No partial document is ever produced.
    pub fn load(self) -> SettingsResult<SettingsDocument> {
        let document_path = self.resolved_document_path();
        let document_overlay = match &document_path {
            Some(path) => source::load_document(path.as_std_path())?,
            None => RawOverlay::empty(),
        };

        let mut errors: Vec<Arc<SettingsError>> = Vec::new();
        let mut layers = Vec::new();
        if !document_overlay.is_empty() {
            layers.push(Layer::document(document_overlay, document_path));
        }
        if let Some(overrides) = self.overrides {
            layers.push(Layer::cli(overrides));
        }

        tracing::debug!(layer = LayerProvenance::Defaults.describe(), "seeding settings layer");
        let mut merged = schema::registry().default_document();
        let mut aliases = alias::AliasTable::new();
        for mut layer in layers {
            validate::screen_overlay(layer.overlay_mut(), self.unknown_fields, &mut errors);
            alias::accumulate(&mut aliases, layer.overlay());
            alias::resolve_overlay(layer.overlay_mut(), &aliases);
            merge::apply_layer(&mut merged, layer);
        }

        validate::check_merged(&merged, &mut errors);
        if let Some(aggregated) = SettingsError::try_aggregate(errors) {
            return Err(Arc::new(aggregated));
        }
        validate::materialise(merged)
    }

    fn resolved_document_path(&self) -> Option<Utf8PathBuf> {
        if let Some(path) = &self.document_path {
            return Utf8PathBuf::from_path_buf(path.clone())
                .map_or_else(|p| Some(Utf8PathBuf::from(p.to_string_lossy().into_owned())), Some);
        }
        if self.discover {
            return source::discover_document();
        }
        None
    }
}
