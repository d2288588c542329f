//! Tree normalization: rewrite path-like string leaves to base-relative form.

use confdiff_types::ConfigValue;
use tracing::debug;

use crate::paths;

/// A configuration tree paired with its normalized form.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedConfig {
    /// The tree as supplied.
    pub original: ConfigValue,
    /// The tree with path-like strings rewritten.
    pub normalized: ConfigValue,
    /// The base every rewritten path is relative to.
    pub base_path: String,
}

/// Normalize every path-like string leaf in `tree` against `base_path`.
///
/// Arrays and objects are walked recursively; functions, regexes, dates,
/// and non-string scalars pass through unchanged. A path-like string is
/// resolved to absolute form, relativized against the base, and rewritten
/// as `"./relative/form"` with `/` separators — unless the relative form
/// escapes the base (starts with `..`), in which case the original value
/// is kept. Normalization never fails; unrecognized strings pass through
/// verbatim.
pub fn normalize_config(tree: &ConfigValue, base_path: &str) -> NormalizedConfig {
    let mut rewritten = 0usize;
    let normalized = normalize_value(tree, base_path, &mut rewritten);
    debug!(base_path, rewritten, "normalized configuration tree");
    NormalizedConfig {
        original: tree.clone(),
        normalized,
        base_path: base_path.to_string(),
    }
}

/// Infer a base path from the absolute path strings inside `tree`.
///
/// Returns the longest common path-segment prefix of every absolute path
/// found, or `None` when the tree contains no absolute paths (or they
/// live under incompatible roots, e.g. different drives).
pub fn detect_base_path(tree: &ConfigValue) -> Option<String> {
    let mut absolutes = Vec::new();
    collect_absolute_paths(tree, &mut absolutes);
    let mut iter = absolutes.into_iter();
    let first = iter.next()?;
    let mut prefix = paths::normalize_lexically(&first);
    for path in iter {
        prefix = paths::common_segment_prefix(&prefix, &path)?;
    }
    Some(prefix)
}

fn collect_absolute_paths(value: &ConfigValue, out: &mut Vec<String>) {
    match value {
        ConfigValue::String(s) => {
            let forward = paths::to_forward_slashes(s);
            if paths::is_absolute(&forward) {
                out.push(forward);
            }
        }
        ConfigValue::Array(items) => {
            for item in items {
                collect_absolute_paths(item, out);
            }
        }
        ConfigValue::Object(map) => {
            for value in map.values() {
                collect_absolute_paths(value, out);
            }
        }
        _ => {}
    }
}

fn normalize_value(value: &ConfigValue, base: &str, rewritten: &mut usize) -> ConfigValue {
    match value {
        ConfigValue::String(s) => {
            let out = normalize_string(s, base);
            if out != *s {
                *rewritten += 1;
            }
            ConfigValue::String(out)
        }
        ConfigValue::Array(items) => ConfigValue::Array(
            items
                .iter()
                .map(|item| normalize_value(item, base, rewritten))
                .collect(),
        ),
        ConfigValue::Object(map) => ConfigValue::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), normalize_value(v, base, rewritten)))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn normalize_string(s: &str, base: &str) -> String {
    if !paths::looks_like_path(s) {
        return s.to_string();
    }
    let absolute = paths::lexical_resolve(base, s);
    match paths::lexical_relative(base, &absolute) {
        Some(rel) if !rel.starts_with("..") => format!("./{rel}"),
        _ => s.to_string(),
    }
}
