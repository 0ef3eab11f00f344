//! Loading raw, untyped settings overlays from external sources.
//!
//! A [`RawOverlay`] is the partial key/value record produced by one source: a
//! persisted settings document or the already-parsed command-line override
//! record. No validation or type coercion happens here beyond parsing the raw
//! serialization into JSON values; the validator judges the contents later.

use std::path::{Path, PathBuf};

use camino::Utf8PathBuf;
use figment::{
    Figment,
    providers::{Format, Toml},
};
use serde_json::{Map, Value};

use crate::error::{SettingsError, SettingsResult, SettingsResultExt};

/// Ephemeral, partial, untyped record from a single source.
///
/// The top level maps group keys (`basic`, `resource`, `danmaku`, `batch`) to
/// objects of field values. Overlays exist only until the merge fold consumes
/// them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawOverlay(Map<String, Value>);

impl RawOverlay {
    /// Overlay with no entries, the result of an absent source.
    #[must_use]
    pub fn empty() -> Self {
        Self(Map::new())
    }

    /// Wrap an already-grouped record, e.g. the CLI override record.
    #[must_use]
    pub const fn new(groups: Map<String, Value>) -> Self {
        Self(groups)
    }

    /// Build an overlay from any JSON value, rejecting non-object shapes.
    ///
    /// # Errors
    ///
    /// Returns a gathering error when `value` is not an object.
    pub fn from_value(value: Value) -> SettingsResult<Self> {
        match value {
            Value::Object(groups) => Ok(Self(groups)),
            other => Err(figment::Error::from(format!(
                "settings overlay must be a table of groups, found {other}"
            )))
            .into_settings(),
        }
    }

    /// Whether the overlay carries no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the record of `group_key`, if present.
    #[must_use]
    pub fn group(&self, group_key: &str) -> Option<&Map<String, Value>> {
        self.0.get(group_key).and_then(Value::as_object)
    }

    pub(crate) fn group_mut(&mut self, group_key: &str) -> Option<&mut Map<String, Value>> {
        self.0.get_mut(group_key).and_then(Value::as_object_mut)
    }

    pub(crate) const fn entries(&self) -> &Map<String, Value> {
        &self.0
    }

    pub(crate) fn entries_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.0
    }

    /// Consume the overlay, yielding its raw record.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for RawOverlay {
    fn from(groups: Map<String, Value>) -> Self {
        Self(groups)
    }
}

/// Load a persisted settings document, selecting the parser by extension.
///
/// `.json` documents are parsed with `serde_json`; everything else is treated
/// as TOML. An absent file yields an empty overlay, not an error: "no
/// settings file" is an ordinary state. A present but unreadable or
/// unparseable file is a [`SettingsError::Document`] naming the path and the
/// underlying cause.
///
/// # Errors
///
/// Returns [`SettingsError::Document`] when reading or parsing fails.
pub fn load_document(path: &Path) -> SettingsResult<RawOverlay> {
    if !path.is_file() {
        return Ok(RawOverlay::empty());
    }
    let data =
        std::fs::read_to_string(path).map_err(|e| SettingsError::document_arc(path, e))?;
    let value = parse_document_by_format(path, &data)?;
    RawOverlay::from_value(value)
}

fn parse_document_by_format(path: &Path, data: &str) -> SettingsResult<Value> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => {
            serde_json::from_str(data).map_err(|e| SettingsError::document_arc(path, e))
        }
        _ => {
            // Validate TOML first so parse failures are reported with this
            // file's context before Figment performs its own parse pass.
            toml::from_str::<toml::Value>(data)
                .map_err(|e| SettingsError::document_arc(path, e))?;
            Figment::from(Toml::string(data)).extract().into_settings()
        }
    }
}

/// Environment variable naming an explicit settings document path.
pub const CONFIG_PATH_ENV: &str = "VGET_CONFIG";

const CONFIG_DIR_NAME: &str = "vget";
const CONFIG_FILE_NAME: &str = "vget.toml";

/// Locate the persisted settings document for this invocation.
///
/// Search order: the [`CONFIG_PATH_ENV`] environment variable (taken as-is
/// when set and non-empty), then `vget/vget.toml` under the platform
/// configuration directory when that file exists. A dangling environment
/// path behaves like any other absent document: [`load_document`] yields an
/// empty overlay and the run proceeds on defaults.
#[must_use]
pub fn discover_document() -> Option<Utf8PathBuf> {
    if let Ok(explicit) = std::env::var(CONFIG_PATH_ENV)
        && !explicit.is_empty()
    {
        return Some(Utf8PathBuf::from(explicit));
    }
    let candidate: PathBuf = dirs::config_dir()?
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        Utf8PathBuf::from_path_buf(candidate).ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::error::SettingsError;

    fn write_named(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("create fixture");
        file.write_all(contents.as_bytes()).expect("write fixture");
        path
    }

    #[test]
    fn absent_document_yields_empty_overlay() {
        let overlay = load_document(Path::new("/nonexistent/vget.toml")).expect("load");
        assert!(overlay.is_empty());
    }

    #[rstest]
    #[case("vget.toml", "[basic]\nnum_workers = 4\n")]
    #[case("vget.json", "{\"basic\": {\"num_workers\": 4}}")]
    fn document_formats_load_equivalently(#[case] name: &str, #[case] contents: &str) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_named(&dir, name, contents);
        let overlay = load_document(&path).expect("load");
        let basic = overlay.group("basic").expect("basic group");
        assert_eq!(basic.get("num_workers"), Some(&json!(4)));
    }

    #[rstest]
    #[case("broken.toml", "[basic\nnum_workers = 4\n")]
    #[case("broken.json", "{\"basic\": ")]
    fn unparseable_document_names_the_path(#[case] name: &str, #[case] contents: &str) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_named(&dir, name, contents);
        let err = load_document(&path).expect_err("parse failure");
        match &*err {
            SettingsError::Document { path: reported, .. } => assert_eq!(reported, &path),
            other => panic!("expected Document error, got {other:?}"),
        }
    }

    #[test]
    fn non_table_document_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_named(&dir, "scalar.json", "42");
        assert!(load_document(&path).is_err());
    }

    #[test]
    fn discovery_prefers_the_environment_variable() {
        figment::Jail::expect_with(|jail| {
            jail.set_env(CONFIG_PATH_ENV, "/etc/vget/custom.toml");
            assert_eq!(
                discover_document(),
                Some(Utf8PathBuf::from("/etc/vget/custom.toml"))
            );
            Ok(())
        });
    }

    #[test]
    fn dangling_environment_path_loads_as_an_absent_document() {
        figment::Jail::expect_with(|jail| {
            jail.set_env(CONFIG_PATH_ENV, "/nonexistent/vget.toml");
            let discovered = discover_document().expect("env path is taken as-is");
            let overlay = load_document(discovered.as_std_path()).expect("absent, not an error");
            assert!(overlay.is_empty());
            Ok(())
        });
    }
}
