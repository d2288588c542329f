//! Machine encodings: structural JSON and operation-grouped YAML.

use serde::Serialize;
use serde_json::Value;

use confdiff_engine::{DiffEntry, DiffMetadata, DiffOp, DiffResult, DiffSummary};
use confdiff_types::ValueKind;

use crate::error::FormatResult;

/// Encodes the full result as pretty-printed JSON.
///
/// Field order is stable and the surface uses camelCase names, so the
/// output is safe to snapshot or feed to other tools.
pub fn format_json(result: &DiffResult) -> FormatResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Encodes the result as YAML with entries grouped by operation.
///
/// The `changes` mapping always carries the four operation buckets;
/// buckets with no entries serialize as empty lists.
pub fn format_yaml(result: &DiffResult) -> FormatResult<String> {
    Ok(serde_yaml::to_string(&YamlReport::from_result(result))?)
}

#[derive(Serialize)]
struct YamlReport<'a> {
    metadata: &'a DiffMetadata,
    summary: &'a DiffSummary,
    changes: ChangeBuckets<'a>,
}

#[derive(Serialize)]
struct ChangeBuckets<'a> {
    added: Vec<BucketEntry<'a>>,
    removed: Vec<BucketEntry<'a>>,
    changed: Vec<BucketEntry<'a>>,
    unchanged: Vec<BucketEntry<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BucketEntry<'a> {
    path: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    old_value: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_value: Option<&'a Value>,
    value_type: ValueKind,
}

impl<'a> YamlReport<'a> {
    fn from_result(result: &'a DiffResult) -> Self {
        let mut changes = ChangeBuckets {
            added: Vec::new(),
            removed: Vec::new(),
            changed: Vec::new(),
            unchanged: Vec::new(),
        };
        for entry in &result.entries {
            let bucket = match entry.operation {
                DiffOp::Added => &mut changes.added,
                DiffOp::Removed => &mut changes.removed,
                DiffOp::Changed => &mut changes.changed,
                DiffOp::Unchanged => &mut changes.unchanged,
            };
            bucket.push(BucketEntry::from_entry(entry));
        }
        Self {
            metadata: &result.metadata,
            summary: &result.summary,
            changes,
        }
    }
}

impl<'a> BucketEntry<'a> {
    fn from_entry(entry: &'a DiffEntry) -> Self {
        Self {
            path: entry.human_path(),
            old_value: entry.old_value.as_ref(),
            new_value: entry.new_value.as_ref(),
            value_type: entry.value_type,
        }
    }
}
