//! Documented-YAML export of configuration trees.
//!
//! Renders one [`ConfigValue`](confdiff_types::ConfigValue) tree as
//! YAML, writing a `#` comment block above every key the documentation
//! table knows. Output is deterministic (sorted keys, 2-space indent)
//! and hand-emitted, so comment placement is exact. Exotic leaves
//! (functions, regexes, dates) render as their display snapshots.

use std::collections::BTreeMap;

use confdiff_docs::DocSource;
use confdiff_types::display::{function_label, iso_8601, number_to_json, regex_literal};
use confdiff_types::ConfigValue;

/// Renders `tree` as YAML with documentation comments.
///
/// Keys are looked up in `docs` by their full dotted path from the
/// root; members of array elements are never looked up, since an index
/// path has no stable documentation entry.
pub fn export_documented_yaml(tree: &ConfigValue, docs: &dyn DocSource) -> String {
    let mut out = String::new();
    match tree {
        ConfigValue::Object(members) if !members.is_empty() => {
            append_members(&mut out, members, "", 0, Some(docs));
        }
        ConfigValue::Array(items) if !items.is_empty() => {
            append_items(&mut out, items, 0);
        }
        other => {
            out.push_str(&scalar_text(other));
            out.push('\n');
        }
    }
    out
}

fn append_members(
    out: &mut String,
    members: &BTreeMap<String, ConfigValue>,
    parent: &str,
    indent: usize,
    docs: Option<&dyn DocSource>,
) {
    let pad = "  ".repeat(indent);
    for (key, value) in members {
        let path = if parent.is_empty() {
            key.clone()
        } else {
            format!("{parent}.{key}")
        };
        if let Some(doc) = docs.and_then(|docs| docs.doc_for_key(&path)) {
            out.push_str(&format!("{pad}# {}\n", doc.description));
            if let Some(default) = doc.default_value {
                out.push_str(&format!("{pad}# default: {default}\n"));
            }
        }
        match value {
            ConfigValue::Object(children) if !children.is_empty() => {
                out.push_str(&format!("{pad}{}:\n", yaml_scalar(key)));
                append_members(out, children, &path, indent + 1, docs);
            }
            ConfigValue::Array(items) if !items.is_empty() => {
                out.push_str(&format!("{pad}{}:\n", yaml_scalar(key)));
                append_items(out, items, indent + 1);
            }
            other => {
                out.push_str(&format!("{pad}{}: {}\n", yaml_scalar(key), scalar_text(other)));
            }
        }
    }
}

fn append_items(out: &mut String, items: &[ConfigValue], indent: usize) {
    let pad = "  ".repeat(indent);
    for item in items {
        match item {
            ConfigValue::Object(children) if !children.is_empty() => {
                out.push_str(&format!("{pad}-\n"));
                append_members(out, children, "", indent + 1, None);
            }
            ConfigValue::Array(nested) if !nested.is_empty() => {
                out.push_str(&format!("{pad}-\n"));
                append_items(out, nested, indent + 1);
            }
            other => {
                out.push_str(&format!("{pad}- {}\n", scalar_text(other)));
            }
        }
    }
}

fn scalar_text(value: &ConfigValue) -> String {
    match value {
        ConfigValue::Null | ConfigValue::Undefined => "null".to_string(),
        ConfigValue::Bool(b) => b.to_string(),
        ConfigValue::Number(n) => number_to_json(*n).to_string(),
        ConfigValue::String(s) => yaml_scalar(s),
        ConfigValue::Function { name, source } => quote(&function_label(name, source)),
        ConfigValue::Regex { pattern, flags } => quote(&regex_literal(pattern, flags)),
        ConfigValue::Date { epoch_ms } => quote(&iso_8601(*epoch_ms)),
        ConfigValue::Array(items) if items.is_empty() => "[]".to_string(),
        ConfigValue::Object(members) if members.is_empty() => "{}".to_string(),
        // Non-empty containers are recursed by the callers; keep a
        // total fallback anyway.
        ConfigValue::Array(items) => quote(&format!("[Array({})]", items.len())),
        ConfigValue::Object(members) => quote(&format!("[Object: {} keys]", members.len())),
    }
}

/// A string scalar, bare when YAML will read it back verbatim as a
/// string, double-quoted otherwise.
fn yaml_scalar(text: &str) -> String {
    if is_plain_safe(text) {
        text.to_string()
    } else {
        quote(text)
    }
}

fn is_plain_safe(text: &str) -> bool {
    let Some(first) = text.chars().next() else {
        return false;
    };
    // Digit-led scalars would read back as numbers; quote them.
    if first.is_ascii_digit() || first == '-' {
        return false;
    }
    if !text
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '/'))
    {
        return false;
    }
    !matches!(
        text.to_ascii_lowercase().as_str(),
        "true" | "false" | "null" | "yes" | "no" | "on" | "off" | ".inf" | ".nan"
    )
}

fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for ch in text.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}
