//! Formatting errors.

use thiserror::Error;

/// Failure while encoding a diff result.
///
/// Text renderings never fail; only the JSON and YAML encoders can,
/// and only if serialization itself rejects the value.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("failed to encode result as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode result as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type FormatResult<T> = Result<T, FormatError>;
