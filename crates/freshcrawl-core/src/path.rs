//! Helpers for server-relative remote paths.
//!
//! Remote paths are `/`-separated strings such as
//! `/sites/axion/Shared Documents/Reports`. They are never touched by
//! `std::path`, which would apply platform separators.

/// Strip trailing separators. `"/"` normalizes to the empty string.
pub fn normalize(path: &str) -> &str {
    path.trim_end_matches('/')
}

/// Last segment of a path, ignoring trailing separators.
pub fn last_segment(path: &str) -> &str {
    let path = normalize(path);
    match path.rsplit_once('/') {
        Some((_, last)) => last,
        None => path,
    }
}

/// Parent of a path with its last segment removed.
///
/// Returns `None` when nothing would remain, e.g. for `"/sites"` or `""`.
pub fn parent(path: &str) -> Option<&str> {
    let path = normalize(path);
    match path.rsplit_once('/') {
        Some((head, _)) if !head.is_empty() => Some(head),
        _ => None,
    }
}

/// Append a segment (or relative path) to a folder path.
pub fn join(folder: &str, child: &str) -> String {
    let child = child.trim_start_matches('/');
    if child.is_empty() {
        return normalize(folder).to_string();
    }
    format!("{}/{}", normalize(folder), child)
}

/// Check whether `path` is `root` itself or lies underneath it.
pub fn is_within(path: &str, root: &str) -> bool {
    let path = normalize(path);
    let root = normalize(root);
    if root.is_empty() {
        return !path.is_empty();
    }
    path == root
        || path
            .strip_prefix(root)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/sites/a/Shared Documents/"), "/sites/a/Shared Documents");
        assert_eq!(normalize("/sites/a"), "/sites/a");
        assert_eq!(normalize("/"), "");
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("/root/sub/file.txt"), "file.txt");
        assert_eq!(last_segment("/root/sub/"), "sub");
        assert_eq!(last_segment("plain"), "plain");
    }

    #[test]
    fn test_parent() {
        assert_eq!(parent("/root/sub"), Some("/root"));
        assert_eq!(parent("/root/sub/"), Some("/root"));
        assert_eq!(parent("/root"), None);
        assert_eq!(parent(""), None);
        assert_eq!(parent("relative"), None);
    }

    #[test]
    fn test_join() {
        assert_eq!(join("/sites/a/", "/Shared Documents/"), "/sites/a/Shared Documents/");
        assert_eq!(join("/sites/a", "Reports"), "/sites/a/Reports");
        assert_eq!(join("/sites/a/", ""), "/sites/a");
    }

    #[test]
    fn test_is_within() {
        assert!(is_within("/root/sub/a.txt", "/root"));
        assert!(is_within("/root", "/root/"));
        assert!(!is_within("/rooted/a.txt", "/root"));
        assert!(!is_within("/other", "/root"));
    }
}
