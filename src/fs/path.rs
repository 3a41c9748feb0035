//! Path normalization and splitting.

/// Normalize a path: leading `/`, no trailing `/` (except the root itself),
/// no empty segments.
pub fn normalize(path: &str) -> String {
    let mut result = String::with_capacity(path.len() + 1);
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        result.push('/');
        result.push_str(segment);
    }
    if result.is_empty() {
        result.push('/');
    }
    result
}

/// Split a normalized, non-root path at its last `/`.
///
/// Returns `("", leaf)` for direct children of the root.
pub(crate) fn split_parent(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(idx) => (&path[..idx], &path[idx + 1..]),
        None => ("", path),
    }
}

/// Join a normalized parent path and a single name.
pub(crate) fn join(parent: &str, name: &str) -> String {
    if parent == "/" || parent.is_empty() {
        format!("/{}", name)
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Human-readable parent of a normalized path (`/` for top-level entries).
pub(crate) fn display_parent(parent: &str) -> &str {
    if parent.is_empty() { "/" } else { parent }
}
