//! Display snapshots: printable renderings of configuration values.
//!
//! Diff entries never carry live containers, functions, or regex handles —
//! they carry snapshots safe to print or JSON-encode. Containers report
//! their shape without inlining contents, which keeps entries small when a
//! whole subtree is added or removed.

use chrono::{DateTime, SecondsFormat};
use serde_json::Value;

use crate::value::ConfigValue;

/// Function bodies longer than this (in characters) report their length
/// instead of rendering in full.
const LONG_FUNCTION_SOURCE: usize = 200;

/// Largest float that still identifies an exact integer (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

impl ConfigValue {
    /// The display-safe snapshot of this value, as carried by diff entries.
    ///
    /// Scalars pass through as JSON scalars. Containers report shape only
    /// (`"[Array(3)]"`, `"[Object: 2 keys]"`); functions report their name
    /// and, for long bodies, source length; regexes render in
    /// `/pattern/flags` form; dates render as ISO-8601 UTC. `Undefined`
    /// snapshots as JSON null (the engine treats it as absent before
    /// snapshotting, so this only matters for direct callers).
    pub fn snapshot(&self) -> Value {
        match self {
            Self::Null | Self::Undefined => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => number_to_json(*n),
            Self::String(s) => Value::String(s.clone()),
            Self::Array(items) => Value::String(format!("[Array({})]", items.len())),
            Self::Object(map) => Value::String(format!("[Object: {} keys]", map.len())),
            Self::Function { name, source } => Value::String(function_label(name, source)),
            Self::Regex { pattern, flags } => Value::String(regex_literal(pattern, flags)),
            Self::Date { epoch_ms } => Value::String(iso_8601(*epoch_ms)),
        }
    }
}

/// Render a number as a JSON value, preferring integer form.
///
/// Integral finite values inside the safe-integer range serialize as
/// integers (`2`, not `2.0`); everything else keeps its float form.
/// Non-finite values (NaN, infinities) have no JSON representation and
/// become null, mirroring `JSON.stringify`.
pub fn number_to_json(n: f64) -> Value {
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

/// The `[Function: name]` label, with a length note for long bodies.
pub fn function_label(name: &str, source: &str) -> String {
    let display_name = if name.is_empty() { "anonymous" } else { name };
    let chars = source.chars().count();
    if chars > LONG_FUNCTION_SOURCE {
        format!("[Function: {display_name}] ({chars} chars)")
    } else {
        format!("[Function: {display_name}]")
    }
}

/// The `/pattern/flags` literal form of a regex value.
pub fn regex_literal(pattern: &str, flags: &str) -> String {
    format!("/{pattern}/{flags}")
}

/// ISO-8601 UTC rendering with millisecond precision.
///
/// Timestamps outside chrono's representable range render as a
/// placeholder instead of failing; snapshots must always produce output.
pub fn iso_8601(epoch_ms: i64) -> String {
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => format!("(invalid date: {epoch_ms}ms)"),
    }
}
