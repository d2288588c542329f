//! Structural paths pointing into a configuration tree.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Rendering of the empty path in human-readable output.
const ROOT_LABEL: &str = "(root)";

/// One step in a [`DiffPath`]: an object key or an array index.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object member key, rendered verbatim.
    Key(String),
    /// Array position, rendered in bracket form (`[3]`).
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

impl Serialize for PathSegment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Joins rendered segments with `separator`. The empty slice joins to
/// the empty string.
pub fn join_segments(segments: &[PathSegment], separator: &str) -> String {
    let rendered: Vec<String> = segments.iter().map(PathSegment::to_string).collect();
    rendered.join(separator)
}

/// Location of a value within the compared trees.
///
/// Carries the raw segments plus their joined rendering. The joined
/// form is fixed at construction time, so every path built by one
/// engine uses that engine's separator consistently.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DiffPath {
    segments: Vec<PathSegment>,
    joined: String,
}

impl DiffPath {
    /// The empty path addressing the tree root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Extends the path with an object key.
    pub fn child_key(&self, key: &str, separator: &str) -> Self {
        self.child(PathSegment::Key(key.to_string()), separator)
    }

    /// Extends the path with an array index.
    pub fn child_index(&self, index: usize, separator: &str) -> Self {
        self.child(PathSegment::Index(index), separator)
    }

    fn child(&self, segment: PathSegment, separator: &str) -> Self {
        let joined = if self.joined.is_empty() && self.segments.is_empty() {
            segment.to_string()
        } else {
            format!("{}{}{}", self.joined, separator, segment)
        };
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments, joined }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Number of segments; the root has depth zero.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The joined rendering as matched by ignore rules. Empty at the
    /// root.
    pub fn raw(&self) -> &str {
        &self.joined
    }

    /// The joined rendering for display, with the root shown as
    /// `(root)`.
    pub fn human(&self) -> &str {
        if self.is_root() {
            ROOT_LABEL
        } else {
            &self.joined
        }
    }
}

impl fmt::Display for DiffPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.human())
    }
}

impl Serialize for DiffPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DiffPath", 2)?;
        state.serialize_field("segments", &self.segments)?;
        state.serialize_field("humanPath", self.human())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_renders_as_sentinel() {
        let root = DiffPath::root();
        assert_eq!(root.raw(), "");
        assert_eq!(root.human(), "(root)");
        assert_eq!(root.depth(), 0);
        assert!(root.is_root());
    }

    #[test]
    fn keys_join_with_separator() {
        let path = DiffPath::root()
            .child_key("resolve", ".")
            .child_key("alias", ".");
        assert_eq!(path.human(), "resolve.alias");
        assert_eq!(path.depth(), 2);
    }

    #[test]
    fn indices_render_in_brackets() {
        let path = DiffPath::root()
            .child_key("rules", ".")
            .child_index(2, ".")
            .child_key("use", ".");
        assert_eq!(path.human(), "rules.[2].use");
    }

    #[test]
    fn index_at_root_has_no_leading_separator() {
        let path = DiffPath::root().child_index(0, ".");
        assert_eq!(path.human(), "[0]");
        assert_eq!(path.raw(), "[0]");
    }

    #[test]
    fn custom_separator_applies_to_every_join() {
        let path = DiffPath::root()
            .child_key("a", "/")
            .child_key("b", "/")
            .child_index(1, "/");
        assert_eq!(path.human(), "a/b/[1]");
    }

    #[test]
    fn joined_form_matches_pure_join() {
        let path = DiffPath::root()
            .child_key("module", ".")
            .child_index(0, ".")
            .child_key("test", ".");
        assert_eq!(join_segments(path.segments(), "."), path.raw());
    }

    #[test]
    fn serializes_segments_and_human_path() {
        let path = DiffPath::root().child_key("output", ".").child_key("path", ".");
        let json = serde_json::to_value(&path).unwrap();
        assert_eq!(json["humanPath"], "output.path");
        assert_eq!(json["segments"][0], "output");
        assert_eq!(json["segments"][1], "path");
    }

    #[test]
    fn root_serializes_with_sentinel_human_path() {
        let json = serde_json::to_value(DiffPath::root()).unwrap();
        assert_eq!(json["humanPath"], "(root)");
        assert_eq!(json["segments"].as_array().unwrap().len(), 0);
    }
}
