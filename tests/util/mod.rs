//! Shared fixtures for the integration tests.

use serde_json::Value;
use tempfile::NamedTempFile;
use vget_settings::RawOverlay;

/// Build a CLI-style override record from a JSON literal.
pub fn overlay(value: Value) -> RawOverlay {
    RawOverlay::from_value(value).expect("overlay literal is an object")
}

/// Write a TOML settings document to a temp file.
pub fn document_file(contents: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create settings document");
    std::fs::write(file.path(), contents).expect("write settings document");
    file
}
