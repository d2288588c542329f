//! Loader errors.

use thiserror::Error;

/// Failure while loading or parsing a configuration source.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path carries no extension the loader understands.
    #[error("cannot determine config format of '{0}': expected .json, .yaml, .yml, or .toml")]
    UnsupportedExtension(String),

    /// Reading the file failed.
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type LoadResult<T> = Result<T, LoadError>;
