//! Lexical path utilities
//!
//! Everything here works on the path text alone and never touches the
//! filesystem, so results are the same for locations that do not exist yet
//! and for providers that are not the local disk.

use std::path::{Component, Path, PathBuf};

/// Remove redundant `.` and `..` segments from a path.
///
/// `name/..` pairs cancel out, `..` directly under the root is dropped
/// (there is nothing above `/`), and leading `..` segments of a relative path
/// are kept because they cannot be resolved without a base.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use resource_io::path_utils::normalize;
///
/// assert_eq!(normalize(Path::new("a/./b/../c")), Path::new("a/c"));
/// assert_eq!(normalize(Path::new("/../x")), Path::new("/x"));
/// assert_eq!(normalize(Path::new("../a/../../b")), Path::new("../../b"));
/// ```
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) => {}
                _ => parts.push(component),
            },
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                parts.push(component);
            }
        }
    }

    parts.iter().collect()
}

/// Resolve `relative` underneath `base` and normalize the result.
///
/// The base is treated as a directory even when it names a file, so
/// `resolve("a/b", "c")` is `a/b/c`, never the sibling `a/c`. An absolute
/// `relative` replaces the base entirely, and an empty one yields the base.
pub fn resolve(base: &Path, relative: &str) -> PathBuf {
    normalize(&base.join(relative))
}

/// Last segment of a path, if it has one.
///
/// Empty paths and bare roots have no segment.
pub fn file_name(path: &Path) -> Option<String> {
    match path.components().next_back()? {
        Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
        Component::ParentDir => Some("..".to_string()),
        Component::CurDir => Some(".".to_string()),
        Component::Prefix(_) | Component::RootDir => None,
    }
}

/// Convert a path to a string with forward slashes
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use resource_io::path_utils::to_forward_slashes;
///
/// assert_eq!(to_forward_slashes(Path::new("a/b/c")), "a/b/c");
/// ```
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_normalize {
        ($test_name:ident, $input:expr, $expected:expr) => {
            #[test]
            fn $test_name() {
                assert_eq!(normalize(Path::new($input)), PathBuf::from($expected));
            }
        };
    }

    test_normalize!(test_normalize_plain, "a/b/c", "a/b/c");
    test_normalize!(test_normalize_current_dir, "a/./b/.", "a/b");
    test_normalize!(test_normalize_parent_dir, "a/./b/../c", "a/c");
    test_normalize!(test_normalize_collapses_to_empty, "a/..", "");
    test_normalize!(test_normalize_keeps_leading_parent, "../a", "../a");
    test_normalize!(test_normalize_stacks_leading_parents, "../a/../../b", "../../b");
    test_normalize!(test_normalize_root_ceiling, "/../../x", "/x");
    test_normalize!(test_normalize_absolute, "/tmp/./data/../file.txt", "/tmp/file.txt");
    test_normalize!(test_normalize_trailing_slash, "a/b/", "a/b");
    test_normalize!(test_normalize_repeated_separators, "a//b///c", "a/b/c");
    test_normalize!(test_normalize_only_current_dir, ".", "");

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize(Path::new("x/./y/../../z/./w"));
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_resolve_goes_underneath_base() {
        assert_eq!(resolve(Path::new("a/b"), "child"), PathBuf::from("a/b/child"));
    }

    #[test]
    fn test_resolve_normalizes_result() {
        assert_eq!(resolve(Path::new("a/b"), "./c/../d"), PathBuf::from("a/b/d"));
        assert_eq!(resolve(Path::new("a/b"), "../e"), PathBuf::from("a/e"));
    }

    #[test]
    fn test_resolve_absolute_replaces_base() {
        assert_eq!(resolve(Path::new("a/b"), "/etc/x"), PathBuf::from("/etc/x"));
    }

    #[test]
    fn test_resolve_empty_is_base() {
        assert_eq!(resolve(Path::new("a/b"), ""), PathBuf::from("a/b"));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(Path::new("a/b/c.txt")), Some("c.txt".to_string()));
        assert_eq!(file_name(Path::new("../..")), Some("..".to_string()));
        assert_eq!(file_name(Path::new("/")), None);
        assert_eq!(file_name(Path::new("")), None);
    }

    #[test]
    fn test_to_forward_slashes() {
        assert_eq!(to_forward_slashes(Path::new("a/b/c")), "a/b/c");
        assert_eq!(to_forward_slashes(Path::new("a\\b\\c")), "a/b/c");
    }
}
