//! Diff entries, summaries, and result assembly.

use std::fmt;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use confdiff_types::ValueKind;

use crate::path::DiffPath;

/// The kind of difference recorded by one entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffOp {
    /// Present on the right side only.
    Added,
    /// Present on the left side only.
    Removed,
    /// Present on both sides with differing values.
    Changed,
    /// Present on both sides with equal values. Only reported when
    /// [`DiffOptions::include_unchanged`](crate::DiffOptions) is set.
    Unchanged,
}

impl DiffOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffOp::Added => "added",
            DiffOp::Removed => "removed",
            DiffOp::Changed => "changed",
            DiffOp::Unchanged => "unchanged",
        }
    }
}

impl fmt::Display for DiffOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported difference between the two trees.
///
/// Values are carried as display snapshots: containers collapse to
/// placeholders such as `[Object: 3 keys]`, exotic leaves render to
/// strings, plain scalars stay themselves.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffEntry {
    pub operation: DiffOp,
    pub path: DiffPath,
    /// Snapshot of the left-side value; absent for additions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<serde_json::Value>,
    /// Snapshot of the right-side value; absent for removals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<serde_json::Value>,
    /// Kind of the value at this path, taken from the right side when
    /// both are present.
    pub value_type: ValueKind,
}

impl DiffEntry {
    /// Human-readable location of this entry.
    pub fn human_path(&self) -> &str {
        self.path.human()
    }
}

/// Operation counts for one comparison.
///
/// `total_changes` counts added, removed, and changed entries;
/// unchanged entries never contribute to it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffSummary {
    pub total_changes: usize,
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unchanged: Option<usize>,
}

impl DiffSummary {
    /// Tallies `entries`, reporting the unchanged count only when the
    /// run collected unchanged entries.
    pub fn tally(entries: &[DiffEntry], include_unchanged: bool) -> Self {
        let mut added = 0;
        let mut removed = 0;
        let mut changed = 0;
        let mut unchanged = 0;
        for entry in entries {
            match entry.operation {
                DiffOp::Added => added += 1,
                DiffOp::Removed => removed += 1,
                DiffOp::Changed => changed += 1,
                DiffOp::Unchanged => unchanged += 1,
            }
        }
        Self {
            total_changes: added + removed + changed,
            added,
            removed,
            changed,
            unchanged: include_unchanged.then_some(unchanged),
        }
    }
}

/// Names of the two compared inputs, when they came from files.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompareSources {
    pub left_file: Option<String>,
    pub right_file: Option<String>,
}

impl CompareSources {
    pub fn files(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left_file: Some(left.into()),
            right_file: Some(right.into()),
        }
    }
}

/// Provenance block attached to every [`DiffResult`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_file: Option<String>,
    /// UTC timestamp of the comparison, RFC 3339 with millisecond
    /// precision.
    pub compared_at: String,
}

impl DiffMetadata {
    /// Stamps the current time and carries over source names verbatim.
    pub fn now(sources: Option<CompareSources>) -> Self {
        let sources = sources.unwrap_or_default();
        Self {
            left_file: sources.left_file,
            right_file: sources.right_file,
            compared_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Complete outcome of one comparison run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DiffResult {
    pub summary: DiffSummary,
    pub entries: Vec<DiffEntry>,
    pub metadata: DiffMetadata,
}

impl DiffResult {
    /// True when the trees differed somewhere.
    pub fn has_changes(&self) -> bool {
        self.summary.total_changes > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(operation: DiffOp) -> DiffEntry {
        DiffEntry {
            operation,
            path: DiffPath::root().child_key("mode", "."),
            old_value: None,
            new_value: None,
            value_type: ValueKind::String,
        }
    }

    #[test]
    fn tally_counts_each_operation() {
        let entries = vec![
            entry(DiffOp::Added),
            entry(DiffOp::Added),
            entry(DiffOp::Removed),
            entry(DiffOp::Changed),
            entry(DiffOp::Unchanged),
        ];
        let summary = DiffSummary::tally(&entries, true);
        assert_eq!(summary.added, 2);
        assert_eq!(summary.removed, 1);
        assert_eq!(summary.changed, 1);
        assert_eq!(summary.unchanged, Some(1));
        assert_eq!(summary.total_changes, 4);
    }

    #[test]
    fn unchanged_count_hidden_by_default() {
        let entries = vec![entry(DiffOp::Changed)];
        let summary = DiffSummary::tally(&entries, false);
        assert_eq!(summary.unchanged, None);
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("unchanged").is_none());
        assert_eq!(json["totalChanges"], 1);
    }

    #[test]
    fn entry_serializes_camel_case_and_skips_absent_sides() {
        let entry = DiffEntry {
            operation: DiffOp::Added,
            path: DiffPath::root().child_key("devtool", "."),
            old_value: None,
            new_value: Some(serde_json::json!("source-map")),
            value_type: ValueKind::String,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["operation"], "added");
        assert_eq!(json["path"]["humanPath"], "devtool");
        assert_eq!(json["newValue"], "source-map");
        assert_eq!(json["valueType"], "string");
        assert!(json.get("oldValue").is_none());
    }

    #[test]
    fn metadata_carries_sources_and_stamps_utc() {
        let metadata = DiffMetadata::now(Some(CompareSources::files("a.json", "b.json")));
        assert_eq!(metadata.left_file.as_deref(), Some("a.json"));
        assert_eq!(metadata.right_file.as_deref(), Some("b.json"));
        assert!(metadata.compared_at.ends_with('Z'));
        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json["leftFile"], "a.json");
        assert!(json.get("comparedAt").is_some());
    }

    #[test]
    fn metadata_without_sources_omits_file_names() {
        let json = serde_json::to_value(DiffMetadata::now(None)).unwrap();
        assert!(json.get("leftFile").is_none());
        assert!(json.get("rightFile").is_none());
    }
}
