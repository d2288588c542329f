use std::fmt;

use serde::{Deserialize, Serialize};

/// The type tag recorded on every diff entry.
///
/// Serializes to the lowercase tag names consumers expect
/// (`"regexp"`, not `"regex"`, matching the dynamic-config vocabulary).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Undefined,
    Boolean,
    Number,
    String,
    Array,
    Object,
    Function,
    Regexp,
    Date,
}

impl ValueKind {
    /// The lowercase tag name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Function => "function",
            Self::Regexp => "regexp",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
