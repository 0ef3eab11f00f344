//! Aggregation container for multiple `SettingsError` values.

use std::{error::Error, fmt, sync::Arc};

use super::SettingsError;

/// Collection of [`SettingsError`]s produced during a single load attempt.
///
/// The validator reports every violation it finds in one pass, so a document
/// with three bad fields yields one aggregate with three entries rather than
/// three consecutive failures. Displaying the aggregate numbers each entry
/// on its own line.
#[derive(Debug, Default)]
pub struct AggregatedErrors(Vec<Arc<SettingsError>>);

impl AggregatedErrors {
    pub(crate) const fn new(errors: Vec<Arc<SettingsError>>) -> Self {
        Self(errors)
    }

    /// Iterate over the contained errors.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> impl Iterator<Item = &SettingsError> {
        self.0.iter().map(Arc::as_ref)
    }

    /// Number of errors in the aggregation.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the aggregation holds no errors.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}
