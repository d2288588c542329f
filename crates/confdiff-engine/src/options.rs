//! Options controlling a diff run.

use serde::{Deserialize, Serialize};

/// Default separator between path segments in human-readable paths.
pub const DEFAULT_PATH_SEPARATOR: &str = ".";

/// Tuning knobs for [`DiffEngine`](crate::DiffEngine).
///
/// The defaults compare the whole tree, report differences only, and
/// join path segments with `.`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DiffOptions {
    /// Emit `unchanged` entries for leaves that compare equal.
    pub include_unchanged: bool,
    /// Stop descending once a path is deeper than this many segments.
    /// The root sits at depth zero; anything past the limit is silently
    /// dropped. `None` means unlimited.
    pub max_depth: Option<usize>,
    /// Object keys excluded from comparison at every depth.
    pub ignore_keys: Vec<String>,
    /// Path patterns whose entire subtree is skipped. A pattern matches
    /// exactly, as a prefix ending at a separator boundary, or through
    /// `*` wildcards.
    pub ignore_paths: Vec<String>,
    /// Separator between segments in human-readable paths.
    pub path_separator: String,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            include_unchanged: false,
            max_depth: None,
            ignore_keys: Vec::new(),
            ignore_paths: Vec::new(),
            path_separator: DEFAULT_PATH_SEPARATOR.to_string(),
        }
    }
}
