//! Lexical path arithmetic.
//!
//! These helpers operate on path *strings*, not on [`std::path::Path`]:
//! the values being normalized are data from someone else's machine and
//! may use another OS's conventions, so host path semantics must not
//! leak in. Separators normalize to `/`, Windows drive prefixes (`C:`)
//! are treated as roots, and `.`/`..` collapse lexically.

/// Substrings that mark a string as "looks like a filesystem path".
///
/// This is a heuristic: a string like `"16/9"` is misclassified as a
/// path, and nothing here attempts to fix that. Strings matching none of
/// the indicators (and lacking a drive prefix) pass through untouched.
const PATH_INDICATORS: &[&str] = &["/", "\\", "./", "../", "~/"];

/// Returns `true` if the string carries any path indicator.
pub fn looks_like_path(s: &str) -> bool {
    PATH_INDICATORS.iter().any(|ind| s.contains(ind)) || has_drive_prefix(s)
}

/// Returns `true` for absolute paths: `/...`, `\...`, or a drive prefix.
pub fn is_absolute(s: &str) -> bool {
    s.starts_with('/') || s.starts_with('\\') || has_drive_prefix(s)
}

fn has_drive_prefix(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 2 && b[0].is_ascii_alphabetic() && b[1] == b':'
}

/// Normalize all separators to `/`.
pub fn to_forward_slashes(s: &str) -> String {
    s.replace('\\', "/")
}

/// Split a forward-slashed path into its root (`""`, `"/"`, or `"C:"`)
/// and the remainder.
fn split_root(path: &str) -> (&str, &str) {
    if has_drive_prefix(path) {
        let (drive, rest) = path.split_at(2);
        (drive, rest.trim_start_matches('/'))
    } else if let Some(rest) = path.strip_prefix('/') {
        ("/", rest)
    } else {
        ("", path)
    }
}

fn same_root(a: &str, b: &str) -> bool {
    // Drive letters compare case-insensitively; everything else exactly.
    a.eq_ignore_ascii_case(b)
}

fn join_root(root: &str, segments: &[&str]) -> String {
    let body = segments.join("/");
    match root {
        "" => {
            if body.is_empty() {
                ".".to_string()
            } else {
                body
            }
        }
        "/" => format!("/{body}"),
        drive => {
            if body.is_empty() {
                format!("{drive}/")
            } else {
                format!("{drive}/{body}")
            }
        }
    }
}

/// Collapse `.`, `..`, and repeated separators lexically.
pub fn normalize_lexically(path: &str) -> String {
    let path = to_forward_slashes(path);
    let (root, rest) = split_root(&path);
    let mut segments: Vec<&str> = Vec::new();
    for seg in rest.split('/') {
        match seg {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|s| *s != "..") {
                    segments.pop();
                } else if root.is_empty() {
                    // Relative paths may climb above their origin.
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }
    join_root(root, &segments)
}

/// Resolve `path` against `base`: absolute paths collapse in place,
/// relative paths are joined onto the base first.
pub fn lexical_resolve(base: &str, path: &str) -> String {
    let path = to_forward_slashes(path);
    if is_absolute(&path) || base.is_empty() {
        return normalize_lexically(&path);
    }
    let base = to_forward_slashes(base);
    normalize_lexically(&format!("{}/{}", base.trim_end_matches('/'), path))
}

/// The relative path from `base` to `target`, or `None` when the two
/// live under different roots (e.g. different drives) and no relative
/// path exists.
pub fn lexical_relative(base: &str, target: &str) -> Option<String> {
    let base = normalize_lexically(base);
    let target = normalize_lexically(target);
    let (base_root, base_rest) = split_root(&base);
    let (target_root, target_rest) = split_root(&target);
    if !same_root(base_root, target_root) {
        return None;
    }

    let base_segs: Vec<&str> = base_rest.split('/').filter(|s| !s.is_empty()).collect();
    let target_segs: Vec<&str> = target_rest.split('/').filter(|s| !s.is_empty()).collect();

    let common = base_segs
        .iter()
        .zip(&target_segs)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = vec![".."; base_segs.len() - common];
    parts.extend(&target_segs[common..]);
    Some(parts.join("/"))
}

/// The longest common path-segment prefix of two absolute paths, or
/// `None` when they share no root.
pub fn common_segment_prefix(a: &str, b: &str) -> Option<String> {
    let a = normalize_lexically(a);
    let b = normalize_lexically(b);
    let (a_root, a_rest) = split_root(&a);
    let (b_root, b_rest) = split_root(&b);
    if !same_root(a_root, b_root) {
        return None;
    }

    let a_segs: Vec<&str> = a_rest.split('/').filter(|s| !s.is_empty()).collect();
    let b_segs: Vec<&str> = b_rest.split('/').filter(|s| !s.is_empty()).collect();
    let common: Vec<&str> = a_segs
        .iter()
        .zip(&b_segs)
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| *x)
        .collect();
    Some(join_root(a_root, &common))
}
