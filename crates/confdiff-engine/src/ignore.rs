//! Ignore-path rules compiled ahead of the tree walk.

use regex::Regex;
use tracing::warn;

/// One ignore-path pattern in compiled form.
///
/// A rule matches a rendered path three ways: exact equality, prefix
/// ending at a separator boundary (so `plugins` covers `plugins.0` but
/// not `pluginsExtra`), or `*` wildcards where each star spans any run
/// of characters including separators.
#[derive(Clone, Debug)]
pub struct IgnoreRule {
    pattern: String,
    wildcard: Option<Regex>,
}

impl IgnoreRule {
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let wildcard = if pattern.contains('*') {
            compile_wildcard(&pattern)
        } else {
            None
        };
        Self { pattern, wildcard }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Tests the rule against a rendered path. `separator` is the
    /// engine's segment separator, used for the prefix boundary check.
    pub fn matches(&self, path: &str, separator: &str) -> bool {
        if path == self.pattern {
            return true;
        }
        if let Some(rest) = path.strip_prefix(&self.pattern) {
            if !self.pattern.is_empty() && rest.starts_with(separator) {
                return true;
            }
        }
        self.wildcard
            .as_ref()
            .is_some_and(|regex| regex.is_match(path))
    }
}

/// Turns a `*` pattern into an anchored regex. Every character except
/// the stars is escaped, so separators and brackets in the pattern
/// stay literal. A pattern the regex engine rejects degrades to its
/// exact and prefix forms only.
fn compile_wildcard(pattern: &str) -> Option<Regex> {
    let escaped = regex::escape(pattern).replace("\\*", ".*");
    match Regex::new(&format!("^{escaped}$")) {
        Ok(regex) => Some(regex),
        Err(error) => {
            warn!(pattern, %error, "ignore pattern did not compile, matching it literally");
            None
        }
    }
}
