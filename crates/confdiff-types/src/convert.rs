//! Conversions from parsed file formats into [`ConfigValue`].
//!
//! JSON, YAML, and TOML documents all funnel into the same model. YAML
//! tags are unwrapped to their inner value; non-string YAML keys render
//! through their scalar form. TOML datetimes become [`ConfigValue::Date`]
//! when they denote an unambiguous instant.

use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;
use toml::Value as TomlValue;

use crate::value::ConfigValue;

impl From<JsonValue> for ConfigValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(b),
            JsonValue::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(s) => Self::String(s),
            JsonValue::Array(items) => {
                Self::Array(items.into_iter().map(Into::into).collect())
            }
            JsonValue::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<YamlValue> for ConfigValue {
    fn from(value: YamlValue) -> Self {
        match value {
            YamlValue::Null => Self::Null,
            YamlValue::Bool(b) => Self::Bool(b),
            YamlValue::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            YamlValue::String(s) => Self::String(s),
            YamlValue::Sequence(items) => {
                Self::Array(items.into_iter().map(Into::into).collect())
            }
            YamlValue::Mapping(map) => Self::Object(
                map.into_iter()
                    .map(|(k, v)| (yaml_key_to_string(&k), v.into()))
                    .collect(),
            ),
            YamlValue::Tagged(tagged) => tagged.value.into(),
        }
    }
}

impl From<TomlValue> for ConfigValue {
    fn from(value: TomlValue) -> Self {
        match value {
            TomlValue::String(s) => Self::String(s),
            TomlValue::Integer(n) => Self::Number(n as f64),
            TomlValue::Float(n) => Self::Number(n),
            TomlValue::Boolean(b) => Self::Bool(b),
            TomlValue::Datetime(dt) => toml_datetime_to_value(&dt),
            TomlValue::Array(items) => {
                Self::Array(items.into_iter().map(Into::into).collect())
            }
            TomlValue::Table(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

fn yaml_key_to_string(key: &YamlValue) -> String {
    if let Some(s) = key.as_str() {
        return s.to_string();
    }
    serde_yaml::to_string(key)
        .map(|s| s.trim_end().to_string())
        .unwrap_or_else(|_| String::from("?"))
}

fn toml_datetime_to_value(dt: &toml::value::Datetime) -> ConfigValue {
    let text = dt.to_string();
    match parse_instant_ms(&text) {
        Some(ms) => ConfigValue::Date { epoch_ms: ms },
        // Time-only values have no instant; keep the literal text.
        None => ConfigValue::String(text),
    }
}

fn parse_instant_ms(text: &str) -> Option<i64> {
    // TOML permits a space between date and time where chrono expects `T`.
    let text = text.replacen(' ', "T", 1);
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(&text) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(&text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc().timestamp_millis());
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(&text, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|midnight| midnight.and_utc().timestamp_millis());
    }
    None
}
