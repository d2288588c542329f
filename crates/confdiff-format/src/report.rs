//! Text renderings: the one-line summary and the annotated report.

use serde_json::Value;

use confdiff_docs::DocSource;
use confdiff_engine::{DiffEntry, DiffOp, DiffResult};

/// Longest string rendered in full; anything past this is cut with an
/// ellipsis.
const MAX_VALUE_CHARS: usize = 100;

/// One line: `"No differences found"` or `"<N> changes: +<a> -<r> ~<c>"`.
pub fn format_summary(result: &DiffResult) -> String {
    let summary = &result.summary;
    if summary.total_changes == 0 {
        "No differences found".to_string()
    } else {
        format!(
            "{} changes: +{} -{} ~{}",
            summary.total_changes, summary.added, summary.removed, summary.changed
        )
    }
}

/// Annotated human-readable report.
///
/// Entries appear sorted by path depth, then path; unchanged entries
/// are never shown. Each entry carries its documentation blurb when the
/// path is a known key, its old/new values, and a note when the change
/// has a well-known operational impact.
pub fn format_detailed(result: &DiffResult, docs: &dyn DocSource) -> String {
    let mut out = String::new();
    if let (Some(left), Some(right)) = (
        result.metadata.left_file.as_deref(),
        result.metadata.right_file.as_deref(),
    ) {
        out.push_str(&format!("Comparing {left} -> {right}\n"));
    }
    out.push_str(&format!("Compared at: {}\n", result.metadata.compared_at));
    out.push_str(&format_summary(result));
    out.push('\n');

    let mut visible: Vec<&DiffEntry> = result
        .entries
        .iter()
        .filter(|entry| entry.operation != DiffOp::Unchanged)
        .collect();
    if visible.is_empty() {
        return out;
    }
    visible.sort_by(|a, b| {
        a.path
            .depth()
            .cmp(&b.path.depth())
            .then_with(|| a.human_path().cmp(b.human_path()))
    });

    for (position, entry) in visible.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!(
            "{:>3}. {} {}\n",
            position + 1,
            glyph(entry.operation),
            entry.human_path()
        ));
        let doc = docs.doc_for_key(entry.human_path());
        if let Some(doc) = doc {
            match doc.default_value {
                Some(default) => out.push_str(&format!(
                    "     {} (default: {default})\n",
                    doc.description
                )),
                None => out.push_str(&format!("     {}\n", doc.description)),
            }
            if let Some(affects) = doc.affects {
                out.push_str(&format!("     affects: {affects}\n"));
            }
        }
        if let Some(old_value) = &entry.old_value {
            out.push_str(&format!("     - {}\n", display_value(old_value)));
        }
        if let Some(new_value) = &entry.new_value {
            out.push_str(&format!("     + {}\n", display_value(new_value)));
        }
        if let Some(note) = impact_note(entry) {
            out.push_str(&format!("     note: {note}\n"));
        }
        if let Some(url) = doc.and_then(|doc| doc.documentation_url) {
            out.push_str(&format!("     docs: {url}\n"));
        }
    }

    out.push_str("\nLegend: [+] added   [-] removed   [~] changed\n");
    out
}

/// Alias kept for callers that know this view by its older name.
pub fn format_contextual(result: &DiffResult, docs: &dyn DocSource) -> String {
    format_detailed(result, docs)
}

fn glyph(operation: DiffOp) -> &'static str {
    match operation {
        DiffOp::Added => "[+]",
        DiffOp::Removed => "[-]",
        DiffOp::Changed => "[~]",
        DiffOp::Unchanged => "[=]",
    }
}

/// Display form of a snapshot value: strings quoted (and truncated when
/// very long), numbers and booleans bare, everything else compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => {
            if text.chars().count() > MAX_VALUE_CHARS {
                let head: String = text.chars().take(MAX_VALUE_CHARS).collect();
                format!("\"{head}...\"")
            } else {
                format!("\"{text}\"")
            }
        }
        other => other.to_string(),
    }
}

fn as_text(value: &Option<Value>) -> Option<&str> {
    value.as_ref().and_then(Value::as_str)
}

/// One-line note for changes with well-known operational consequences.
fn impact_note(entry: &DiffEntry) -> Option<&'static str> {
    let path = entry.human_path();
    let old_text = as_text(&entry.old_value);
    let new_text = as_text(&entry.new_value);

    if path == "mode" {
        return match new_text {
            Some("production") => {
                Some("production mode enables minification and strips development helpers")
            }
            Some("development") => {
                Some("development mode favors rebuild speed over output size")
            }
            _ => None,
        };
    }

    if path == "optimization.minimize" {
        return match entry.new_value.as_ref().and_then(Value::as_bool) {
            Some(true) => Some("minification shrinks output at the cost of build time"),
            Some(false) => Some("unminified output ships readable, much larger bundles"),
            None => None,
        };
    }

    if path == "devtool" {
        if entry.operation == DiffOp::Removed || new_text.is_none() {
            return Some("without devtool no source maps are emitted");
        }
        return match new_text {
            Some(value) if value.starts_with("eval") => {
                Some("eval-style source maps rebuild fast but must not ship to production")
            }
            Some(value) if value.contains("source-map") => {
                Some("full source maps slow builds but give exact stack traces")
            }
            _ => None,
        };
    }

    let has_hash = |text: Option<&str>| text.is_some_and(|t| t.contains("[contenthash]"));
    if path.ends_with("ilename") {
        if has_hash(new_text) && !has_hash(old_text) {
            return Some("content hashing enables long-term caching of emitted files");
        }
        if has_hash(old_text) && !has_hash(new_text) {
            return Some("dropping the content hash risks serving stale cached bundles");
        }
    }

    None
}
