//! Lexical path helpers.
//!
//! None of these touch the filesystem.

use std::path::{Component, Path, PathBuf};

/// Lexically clean `path`: drop `.` components and fold `..` into the
/// preceding component. `..` never climbs above the root.
pub fn clean(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            _ => out.push(component),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Make `path` absolute against `cwd` and clean it.
pub fn absolute(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        clean(path)
    } else {
        clean(&cwd.join(path))
    }
}

/// The directory `levels` steps above `path`.
///
/// Running out of components yields the root for absolute paths and `.`
/// for relative ones.
pub fn strip_levels(path: &Path, levels: usize) -> PathBuf {
    let cleaned = clean(path);
    let mut current = cleaned.as_path();

    for _ in 0..levels {
        match current.parent() {
            Some(parent) if parent.as_os_str().is_empty() => return PathBuf::from("."),
            Some(parent) => current = parent,
            None => break,
        }
    }
    current.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_drops_cur_dir() {
        assert_eq!(clean(Path::new("/a/./b/./c")), PathBuf::from("/a/b/c"));
    }

    #[test]
    fn test_clean_folds_parent_dir() {
        assert_eq!(clean(Path::new("/a/b/../c")), PathBuf::from("/a/c"));
        assert_eq!(clean(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(clean(Path::new("../a")), PathBuf::from("../a"));
    }

    #[test]
    fn test_clean_empty_is_dot() {
        assert_eq!(clean(Path::new("a/..")), PathBuf::from("."));
    }

    #[test]
    fn test_absolute_joins_relative() {
        let cwd = Path::new("/opt/platform");
        assert_eq!(
            absolute(Path::new("./bin/tool"), cwd),
            PathBuf::from("/opt/platform/bin/tool")
        );
        assert_eq!(
            absolute(Path::new("../bin/tool"), cwd),
            PathBuf::from("/opt/bin/tool")
        );
    }

    #[test]
    fn test_absolute_keeps_absolute() {
        assert_eq!(
            absolute(Path::new("/usr/bin/tool"), Path::new("/ignored")),
            PathBuf::from("/usr/bin/tool")
        );
    }

    #[test]
    fn test_strip_levels_two() {
        assert_eq!(
            strip_levels(Path::new("/a/b/sbin/mysqld"), 2),
            PathBuf::from("/a/b")
        );
        assert_eq!(
            strip_levels(Path::new("/a/./sbin/mysqld"), 2),
            PathBuf::from("/a")
        );
    }

    #[test]
    fn test_strip_levels_runs_out() {
        assert_eq!(strip_levels(Path::new("/mysqld"), 2), PathBuf::from("/"));
        assert_eq!(strip_levels(Path::new("sbin/mysqld"), 2), PathBuf::from("."));
    }
}
