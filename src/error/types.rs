//! Primary error enum for settings loading and validation flows.

use std::path::PathBuf;

use thiserror::Error;

use super::aggregate::AggregatedErrors;

/// Errors that can occur while loading or validating settings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// Persisted settings document present but unreadable or unparseable.
    #[error("settings document error in '{}': {source}", path.display())]
    Document {
        /// Path of the document that failed to load.
        path: PathBuf,
        /// Underlying error reported by the reader or parser.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Overlay key that matches no field in the schema.
    #[error("unknown settings field '{field}'")]
    UnknownField {
        /// Dotted path of the offending key, e.g. `basic.typo_field`.
        field: String,
    },

    /// Merged value does not conform to the field's declared kind.
    #[error("type mismatch for '{field}': expected {expected}, found {found}")]
    TypeMismatch {
        /// Dotted path of the field.
        field: String,
        /// Name of the expected kind.
        expected: &'static str,
        /// Rendering of the offending value.
        found: String,
    },

    /// Merged value falls outside the field's closed value set.
    #[error("invalid value for '{field}': {value} is not one of {allowed}")]
    EnumViolation {
        /// Dotted path of the field.
        field: String,
        /// Rendering of the offending value.
        value: String,
        /// Rendering of the full legal set.
        allowed: String,
    },

    /// Numeric or structural constraint violated.
    #[error("constraint violated for '{field}': {message}")]
    Constraint {
        /// Dotted path of the field.
        field: String,
        /// Human-readable explanation of the violated constraint.
        message: String,
    },

    /// Failure extracting values from a parsed settings document.
    #[error("failed to gather settings document: {0}")]
    Gathering(#[from] Box<figment::Error>),

    /// Failure converting the validated record into the typed document.
    #[error("failed to materialise settings: {0}")]
    Materialise(#[from] Box<serde_json::Error>),

    /// Multiple violations reported together.
    #[error("settings validation failed:\n{0}")]
    Aggregate(Box<AggregatedErrors>),
}

impl From<figment::Error> for SettingsError {
    fn from(source: figment::Error) -> Self {
        Self::Gathering(Box::new(source))
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(source: serde_json::Error) -> Self {
        Self::Materialise(Box::new(source))
    }
}
