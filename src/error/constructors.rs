//! Constructors and aggregation helpers for `SettingsError`.

use std::path::Path;
use std::sync::Arc;

use super::{AggregatedErrors, SettingsError};

impl SettingsError {
    /// Collapse the errors collected over a load attempt into one error.
    ///
    /// Returns `None` for an empty collection. A single uniquely-owned error
    /// is returned as itself, so callers see `Constraint` rather than an
    /// aggregate of one; a shared single error, or two or more errors, become
    /// [`Self::Aggregate`].
    #[must_use]
    pub fn try_aggregate(mut errors: Vec<Arc<Self>>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => {
                let only = errors.pop()?;
                Some(Arc::try_unwrap(only).unwrap_or_else(|shared| {
                    Self::Aggregate(Box::new(AggregatedErrors::new(vec![shared])))
                }))
            }
            _ => Some(Self::Aggregate(Box::new(AggregatedErrors::new(errors)))),
        }
    }

    /// Like [`SettingsError::try_aggregate`], for collections known to be
    /// non-empty.
    ///
    /// # Panics
    ///
    /// Panics if `errors` is empty.
    #[must_use]
    #[track_caller]
    pub fn aggregate(errors: Vec<Arc<Self>>) -> Self {
        Self::try_aggregate(errors)
            .unwrap_or_else(|| panic!("aggregate requires at least one error"))
    }

    /// Construct a document error for `path` with the given `source`.
    #[must_use]
    pub fn document<E>(path: &Path, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Document {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    /// Construct a document error already wrapped in an [`Arc`].
    #[must_use]
    pub fn document_arc<E>(path: &Path, source: E) -> Arc<Self>
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Arc::new(Self::document(path, source))
    }

    /// Construct an unknown-field error for the dotted path `field`.
    #[must_use]
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }
}
