//! Configuration file loading.
//!
//! Reads JSON, YAML, and TOML sources into the shared
//! [`ConfigValue`](confdiff_types::ConfigValue) model. The format is
//! sniffed from the file extension; callers holding raw text can name
//! the format explicitly with [`parse_config`].
//!
//! # Key Types
//!
//! - [`ConfigFormat`] — Supported on-disk formats
//! - [`load_config`] / [`parse_config`] — Entry points
//! - [`LoadError`] — Typed load and parse failures

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use confdiff_types::ConfigValue;

pub mod error;

pub use error::{LoadError, LoadResult};

/// A configuration file format the loader understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    Json,
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// Sniffs the format from a path's extension, case-insensitively.
    /// `.yml` and `.yaml` both mean YAML.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads and parses one configuration file.
pub fn load_config(path: impl AsRef<Path>) -> LoadResult<ConfigValue> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| LoadError::UnsupportedExtension(path.display().to_string()))?;
    let source = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), %format, bytes = source.len(), "loaded configuration file");
    parse_config(&source, format)
}

/// Parses raw configuration text in a known format.
pub fn parse_config(source: &str, format: ConfigFormat) -> LoadResult<ConfigValue> {
    match format {
        ConfigFormat::Json => Ok(serde_json::from_str::<serde_json::Value>(source)?.into()),
        ConfigFormat::Yaml => Ok(serde_yaml::from_str::<serde_yaml::Value>(source)?.into()),
        ConfigFormat::Toml => Ok(source.parse::<toml::Value>()?.into()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn temp_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn sniffs_formats_from_extensions() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("webpack.prod.json")),
            Some(ConfigFormat::Json)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("ci.yaml")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("ci.YML")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("Cargo.toml")),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("settings.ini")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("no_extension")), None);
    }

    #[test]
    fn loads_a_json_file() {
        let file = temp_config(".json", r#"{"mode": "production", "bail": true}"#);
        let tree = load_config(file.path()).unwrap();
        let members = tree.as_object().unwrap();
        assert_eq!(members["mode"], ConfigValue::from("production"));
        assert_eq!(members["bail"], ConfigValue::from(true));
    }

    #[test]
    fn loads_a_yaml_file() {
        let file = temp_config(
            ".yaml",
            "mode: development\nresolve:\n  extensions:\n    - .ts\n    - .js\n",
        );
        let tree = load_config(file.path()).unwrap();
        let members = tree.as_object().unwrap();
        assert_eq!(members["mode"], ConfigValue::from("development"));
        let extensions = members["resolve"].as_object().unwrap()["extensions"]
            .as_array()
            .unwrap();
        assert_eq!(extensions.len(), 2);
        assert_eq!(extensions[0], ConfigValue::from(".ts"));
    }

    #[test]
    fn loads_a_toml_file_with_datetimes() {
        let file = temp_config(
            ".toml",
            "name = \"app\"\nbuilt = 1979-05-27T07:32:00Z\n\n[output]\npath = \"./dist\"\n",
        );
        let tree = load_config(file.path()).unwrap();
        let members = tree.as_object().unwrap();
        assert_eq!(members["name"], ConfigValue::from("app"));
        assert_eq!(members["built"], ConfigValue::date(296_638_320_000));
        assert_eq!(
            members["output"].as_object().unwrap()["path"],
            ConfigValue::from("./dist")
        );
    }

    #[test]
    fn rejects_unknown_extensions() {
        let file = temp_config(".ini", "[section]\nkey = 1\n");
        match load_config(file.path()) {
            Err(LoadError::UnsupportedExtension(path)) => assert!(path.ends_with(".ini")),
            other => panic!("expected UnsupportedExtension, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_reports_the_path() {
        match load_config("/does/not/exist/webpack.json") {
            Err(LoadError::Read { path, .. }) => assert!(path.contains("webpack.json")),
            other => panic!("expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_sources_report_their_format() {
        assert!(matches!(
            parse_config("{not json", ConfigFormat::Json),
            Err(LoadError::Json(_))
        ));
        assert!(matches!(
            parse_config("a: [unclosed", ConfigFormat::Yaml),
            Err(LoadError::Yaml(_))
        ));
        assert!(matches!(
            parse_config("= no key", ConfigFormat::Toml),
            Err(LoadError::Toml(_))
        ));
    }

    #[test]
    fn parse_handles_raw_text_without_files() {
        let tree = parse_config("{\"entry\": [\"./a.js\", \"./b.js\"]}", ConfigFormat::Json)
            .unwrap();
        let entry = tree.as_object().unwrap()["entry"].as_array().unwrap();
        assert_eq!(entry.len(), 2);
    }
}
