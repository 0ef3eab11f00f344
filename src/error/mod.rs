//! Error types produced by the settings loader and validator.

mod aggregate;
mod constructors;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::SettingsError;

use std::sync::Arc;

/// Result alias used throughout the crate.
///
/// Errors are shared via [`Arc`] so a single failure can appear both on its
/// own and inside an [`AggregatedErrors`] report without cloning the
/// underlying error value.
pub type SettingsResult<T> = Result<T, Arc<SettingsError>>;

/// Extension for mapping external error types into [`SettingsResult`].
pub trait SettingsResultExt<T, E> {
    /// Convert `Result<T, E>` into `SettingsResult<T>` using `Into<SettingsError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<SettingsError>`.
    fn into_settings(self) -> SettingsResult<T>;
}

impl<T, E> SettingsResultExt<T, E> for Result<T, E>
where
    E: Into<SettingsError>,
{
    fn into_settings(self) -> SettingsResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}

#[cfg(test)]
mod tests;
