use std::collections::BTreeMap;

use crate::kind::ValueKind;

/// A single value inside a configuration tree.
///
/// This is the closed set of kinds the diff engine understands: the
/// JSON-like data model (`Null`/`Bool`/`Number`/`String`/`Array`/`Object`)
/// plus `Undefined` (an explicitly absent member, as produced by dynamic
/// config sources) and the three exotic kinds bundler configs carry:
/// functions (opaque, identified by their source text), regular
/// expressions (pattern + flags), and dates (milliseconds since epoch).
///
/// Object members are kept in a [`BTreeMap`] so key iteration is always
/// deterministic; insertion order is not significant for comparison.
#[derive(Clone, Debug)]
pub enum ConfigValue {
    /// An explicit `null`.
    Null,
    /// An explicitly absent value. Treated like a missing member by the
    /// diff engine.
    Undefined,
    /// A boolean.
    Bool(bool),
    /// A number. Configs from dynamic sources carry IEEE doubles, so all
    /// numeric values unify to `f64`.
    Number(f64),
    /// A string.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<ConfigValue>),
    /// A string-keyed mapping.
    Object(BTreeMap<String, ConfigValue>),
    /// An opaque callable, identified by its source text. The name is
    /// display metadata only.
    Function { name: String, source: String },
    /// A regular expression value, identified by pattern and flags.
    Regex { pattern: String, flags: String },
    /// A date/instant value, identified by its epoch timestamp.
    Date { epoch_ms: i64 },
}

impl ConfigValue {
    /// Build an object from key/value pairs.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ConfigValue)>,
    {
        Self::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build an array from a sequence of values.
    pub fn array<I: IntoIterator<Item = ConfigValue>>(items: I) -> Self {
        Self::Array(items.into_iter().collect())
    }

    /// Build a function value from its name and source text.
    pub fn function(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self::Function {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Build a regex value from its pattern and flags.
    pub fn regex(pattern: impl Into<String>, flags: impl Into<String>) -> Self {
        Self::Regex {
            pattern: pattern.into(),
            flags: flags.into(),
        }
    }

    /// Build a date value from milliseconds since the UNIX epoch.
    pub fn date(epoch_ms: i64) -> Self {
        Self::Date { epoch_ms }
    }

    /// The type tag for this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Undefined => ValueKind::Undefined,
            Self::Bool(_) => ValueKind::Boolean,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
            Self::Function { .. } => ValueKind::Function,
            Self::Regex { .. } => ValueKind::Regexp,
            Self::Date { .. } => ValueKind::Date,
        }
    }

    /// Returns `true` for `Undefined`.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// The object members, if this is an object.
    pub fn as_object(&self) -> Option<&BTreeMap<String, ConfigValue>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// The array items, if this is an array.
    pub fn as_array(&self) -> Option<&[ConfigValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The string content, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Total, kind-aware equality.
///
/// Same-kind values compare by content; functions compare by source text
/// only (the stored name is display metadata); regexes compare by pattern
/// and flags; dates compare by epoch timestamp. Values of different kinds
/// are never equal. Number equality is IEEE `==`, so `NaN != NaN` — a NaN
/// leaf always reports as changed rather than poisoning the comparison.
impl PartialEq for ConfigValue {
    fn eq(&self, other: &Self) -> bool {
        use ConfigValue::*;
        match (self, other) {
            (Null, Null) | (Undefined, Undefined) => true,
            (Bool(a), Bool(b)) => a == b,
            (Number(a), Number(b)) => a == b,
            (String(a), String(b)) => a == b,
            (Array(a), Array(b)) => a == b,
            (Object(a), Object(b)) => a == b,
            (Function { source: a, .. }, Function { source: b, .. }) => a == b,
            (
                Regex {
                    pattern: pa,
                    flags: fa,
                },
                Regex {
                    pattern: pb,
                    flags: fb,
                },
            ) => pa == pb && fa == fb,
            (Date { epoch_ms: a }, Date { epoch_ms: b }) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for ConfigValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<i32> for ConfigValue {
    fn from(n: i32) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}
