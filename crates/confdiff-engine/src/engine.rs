//! The tree comparator.

use std::collections::BTreeSet;

use tracing::debug;

use confdiff_types::ConfigValue;

use crate::entry::{CompareSources, DiffEntry, DiffMetadata, DiffOp, DiffResult, DiffSummary};
use crate::ignore::IgnoreRule;
use crate::options::DiffOptions;
use crate::path::DiffPath;

/// Recursive comparator over two [`ConfigValue`] trees.
///
/// An engine is configured once and can run any number of comparisons;
/// it never mutates its inputs and each call builds a fresh result.
/// Ignore-path patterns are compiled when the engine is constructed.
pub struct DiffEngine {
    options: DiffOptions,
    ignore_rules: Vec<IgnoreRule>,
}

impl DiffEngine {
    pub fn new(options: DiffOptions) -> Self {
        let ignore_rules = options.ignore_paths.iter().map(IgnoreRule::new).collect();
        Self {
            options,
            ignore_rules,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(DiffOptions::default())
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    /// Compares two trees and reports every difference.
    ///
    /// `sources` names the inputs in the result metadata when they came
    /// from files. Entries appear in deterministic order: array slots
    /// by index, object members by sorted key.
    pub fn compare(
        &self,
        left: &ConfigValue,
        right: &ConfigValue,
        sources: Option<CompareSources>,
    ) -> DiffResult {
        debug!(
            include_unchanged = self.options.include_unchanged,
            max_depth = ?self.options.max_depth,
            ignore_rules = self.ignore_rules.len(),
            "comparing configuration trees"
        );
        let mut entries = Vec::new();
        self.compare_values(Some(left), Some(right), &DiffPath::root(), 0, &mut entries);
        let summary = DiffSummary::tally(&entries, self.options.include_unchanged);
        debug!(
            total_changes = summary.total_changes,
            entries = entries.len(),
            "comparison complete"
        );
        DiffResult {
            summary,
            entries,
            metadata: DiffMetadata::now(sources),
        }
    }

    fn compare_values(
        &self,
        left: Option<&ConfigValue>,
        right: Option<&ConfigValue>,
        path: &DiffPath,
        depth: usize,
        entries: &mut Vec<DiffEntry>,
    ) {
        // Rule order matters: ignore rules silence a subtree before
        // anything about it can be reported, and the depth limit cuts
        // off before any presence checks.
        if self.is_ignored(path.raw()) {
            return;
        }
        if self.options.max_depth.is_some_and(|max| depth > max) {
            return;
        }

        // An explicit undefined marker counts as absent, same as a
        // missing member.
        let left = left.filter(|value| !value.is_undefined());
        let right = right.filter(|value| !value.is_undefined());

        match (left, right) {
            (None, None) => {}
            (None, Some(value)) => entries.push(DiffEntry {
                operation: DiffOp::Added,
                path: path.clone(),
                old_value: None,
                new_value: Some(value.snapshot()),
                value_type: value.kind(),
            }),
            (Some(value), None) => entries.push(DiffEntry {
                operation: DiffOp::Removed,
                path: path.clone(),
                old_value: Some(value.snapshot()),
                new_value: None,
                value_type: value.kind(),
            }),
            (Some(left), Some(right)) => {
                self.compare_present(left, right, path, depth, entries);
            }
        }
    }

    fn compare_present(
        &self,
        left: &ConfigValue,
        right: &ConfigValue,
        path: &DiffPath,
        depth: usize,
        entries: &mut Vec<DiffEntry>,
    ) {
        if is_leaf_kind(left) || is_leaf_kind(right) {
            self.record_comparison(left, right, path, entries);
            return;
        }
        match (left, right) {
            (ConfigValue::Array(left_items), ConfigValue::Array(right_items)) => {
                // Index-aligned walk; a shift near the front reports a
                // change at every following slot.
                for index in 0..left_items.len().max(right_items.len()) {
                    let child = path.child_index(index, &self.options.path_separator);
                    self.compare_values(
                        left_items.get(index),
                        right_items.get(index),
                        &child,
                        depth + 1,
                        entries,
                    );
                }
            }
            (ConfigValue::Object(left_members), ConfigValue::Object(right_members)) => {
                let keys: BTreeSet<&String> = left_members
                    .keys()
                    .chain(right_members.keys())
                    .filter(|key| !self.is_ignored_key(key))
                    .collect();
                for key in keys {
                    let child = path.child_key(key, &self.options.path_separator);
                    self.compare_values(
                        left_members.get(key.as_str()),
                        right_members.get(key.as_str()),
                        &child,
                        depth + 1,
                        entries,
                    );
                }
            }
            // Dates and mismatched container kinds compare as whole
            // values.
            _ => self.record_comparison(left, right, path, entries),
        }
    }

    fn record_comparison(
        &self,
        left: &ConfigValue,
        right: &ConfigValue,
        path: &DiffPath,
        entries: &mut Vec<DiffEntry>,
    ) {
        if left == right {
            if self.options.include_unchanged {
                entries.push(DiffEntry {
                    operation: DiffOp::Unchanged,
                    path: path.clone(),
                    old_value: Some(left.snapshot()),
                    new_value: Some(right.snapshot()),
                    value_type: right.kind(),
                });
            }
        } else {
            entries.push(DiffEntry {
                operation: DiffOp::Changed,
                path: path.clone(),
                old_value: Some(left.snapshot()),
                new_value: Some(right.snapshot()),
                value_type: right.kind(),
            });
        }
    }

    fn is_ignored(&self, raw_path: &str) -> bool {
        self.ignore_rules
            .iter()
            .any(|rule| rule.matches(raw_path, &self.options.path_separator))
    }

    fn is_ignored_key(&self, key: &str) -> bool {
        self.options.ignore_keys.iter().any(|ignored| ignored == key)
    }
}

/// Kinds compared as single values rather than descended into. Dates
/// are not listed; they reach the generic equality arm together with
/// container mismatches.
fn is_leaf_kind(value: &ConfigValue) -> bool {
    matches!(
        value,
        ConfigValue::Null
            | ConfigValue::Bool(_)
            | ConfigValue::Number(_)
            | ConfigValue::String(_)
            | ConfigValue::Function { .. }
            | ConfigValue::Regex { .. }
    )
}


#[cfg(test)]
mod props {
    use proptest::prelude::*;

    use super::*;
    use crate::entry::DiffOp;

    // Finite numbers only: a NaN leaf never equals itself and would
    // break the reflexivity law by construction.
    fn leaf() -> impl Strategy<Value = ConfigValue> {
        prop_oneof![
            Just(ConfigValue::Null),
            Just(ConfigValue::Undefined),
            any::<bool>().prop_map(ConfigValue::from),
            (-1_000_000i64..1_000_000).prop_map(ConfigValue::from),
            "[a-z0-9./]{0,12}".prop_map(ConfigValue::from),
            ("[a-z]{1,8}", "[a-z ()=>.]{0,24}")
                .prop_map(|(name, source)| ConfigValue::function(name, source)),
            (0i64..4_000_000_000_000).prop_map(ConfigValue::date),
        ]
    }

    fn tree() -> impl Strategy<Value = ConfigValue> {
        leaf().prop_recursive(3, 32, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(ConfigValue::Array),
                prop::collection::btree_map("[a-z]{1,5}", inner, 0..4)
                    .prop_map(ConfigValue::Object),
            ]
        })
    }

    proptest! {
        #[test]
        fn comparing_a_tree_with_itself_is_silent(tree in tree()) {
            let result = DiffEngine::with_defaults().compare(&tree, &tree, None);
            prop_assert_eq!(result.summary.total_changes, 0);
            prop_assert!(result.entries.is_empty());
        }

        #[test]
        fn swapping_sides_mirrors_operations(left in tree(), right in tree()) {
            let engine = DiffEngine::with_defaults();
            let forward = engine.compare(&left, &right, None);
            let backward = engine.compare(&right, &left, None);
            prop_assert_eq!(forward.entries.len(), backward.entries.len());
            prop_assert_eq!(forward.summary.added, backward.summary.removed);
            prop_assert_eq!(forward.summary.removed, backward.summary.added);
            prop_assert_eq!(forward.summary.changed, backward.summary.changed);
            for (f, b) in forward.entries.iter().zip(backward.entries.iter()) {
                prop_assert_eq!(f.human_path(), b.human_path());
                let mirrored = match f.operation {
                    DiffOp::Added => DiffOp::Removed,
                    DiffOp::Removed => DiffOp::Added,
                    other => other,
                };
                prop_assert_eq!(b.operation, mirrored);
            }
        }

        #[test]
        fn raising_the_depth_limit_never_hides_entries(
            left in tree(),
            right in tree(),
            limit in 0usize..4,
        ) {
            let shallow = DiffEngine::new(DiffOptions {
                max_depth: Some(limit),
                ..DiffOptions::default()
            });
            let deeper = DiffEngine::new(DiffOptions {
                max_depth: Some(limit + 1),
                ..DiffOptions::default()
            });
            let few = shallow.compare(&left, &right, None).entries.len();
            let more = deeper.compare(&left, &right, None).entries.len();
            prop_assert!(few <= more);
        }

        #[test]
        fn summary_always_adds_up(left in tree(), right in tree()) {
            let result = DiffEngine::with_defaults().compare(&left, &right, None);
            prop_assert_eq!(
                result.summary.total_changes,
                result.summary.added + result.summary.removed + result.summary.changed
            );
        }
    }
}
