//! The fully-validated, strongly-typed settings document.
//!
//! Enumerated fields are closed enum types rather than raw primitives, so an
//! illegal quality code or format token is unrepresentable once a document
//! exists. Their serde representations round-trip to the raw codes and
//! tokens, which keeps a serialized document valid as an overlay layer.

mod basic;
mod batch;
mod danmaku;
mod format;
mod quality;
mod resource;

pub use basic::BasicSettings;
pub use batch::BatchSettings;
pub use danmaku::DanmakuSettings;
pub use format::{AudioOnlyOutputFormat, DanmakuFormat, OutputFormat};
pub use quality::{AudioQuality, VideoQuality};
pub use resource::ResourceSettings;

use serde::{Deserialize, Serialize};

use crate::error::{SettingsResult, SettingsResultExt};
use crate::source::RawOverlay;

/// The aggregate of the four validated settings groups.
///
/// Created once per run by the loader pipeline and immutable thereafter;
/// downstream collaborators consume it read-only and never re-check types or
/// enum membership.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsDocument {
    /// Download mechanics.
    pub basic: BasicSettings,
    /// Required artifact kinds.
    pub resource: ResourceSettings,
    /// Danmaku rendering.
    pub danmaku: DanmakuSettings,
    /// Multi-item acquisition.
    pub batch: BatchSettings,
}

impl SettingsDocument {
    /// The document produced by a default-only merge.
    #[must_use]
    pub fn defaults() -> Self {
        Self::default()
    }

    /// Serialize the document back into a raw overlay.
    ///
    /// Useful for re-feeding a validated document as an override layer;
    /// validation of the result is idempotent.
    ///
    /// # Errors
    ///
    /// Returns a materialise error when serialization fails, which these
    /// types do not do in practice.
    pub fn to_overlay(&self) -> SettingsResult<RawOverlay> {
        let value = serde_json::to_value(self).into_settings()?;
        RawOverlay::from_value(value)
    }
}
