//! Output directory management.
//!
//! Two operations on the output root:
//!
//! - [`ensure_dir`]: create an asset's output directory (and parents) if absent.
//! - [`clear_output_root`]: remove everything directly under the root, once per
//!   run, before any config is processed.

use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Create `dir` and its parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

/// Empty the output root, leaving the root itself in place.
///
/// Files are removed directly and subdirectories recursively. Symlinks are
/// unlinked, never followed, so nothing outside the root is touched. A
/// missing root is created. Returns the number of top-level entries removed.
pub fn clear_output_root(root: &Path) -> io::Result<usize> {
    if !root.exists() {
        fs::create_dir_all(root)?;
        return Ok(0);
    }

    let mut removed = 0;
    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(io::Error::other)?;
        if entry.file_type().is_dir() {
            fs::remove_dir_all(entry.path())?;
        } else {
            fs::remove_file(entry.path())?;
        }
        removed += 1;
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn ensure_dir_creates_parents() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("images/blog/post");
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("images/hero");
        ensure_dir(&dir).unwrap();
        fs::write(dir.join("keep.webp"), "x").unwrap();

        ensure_dir(&dir).unwrap();
        assert!(dir.join("keep.webp").exists());
    }

    #[test]
    fn clear_removes_files_and_nested_dirs() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("images");
        fs::create_dir_all(root.join("a/b/c")).unwrap();
        fs::write(root.join("top.webp"), "x").unwrap();
        fs::write(root.join("a/mid.jpg"), "x").unwrap();
        fs::write(root.join("a/b/c/deep.webp"), "x").unwrap();
        fs::create_dir_all(root.join("empty")).unwrap();

        let removed = clear_output_root(&root).unwrap();

        assert_eq!(removed, 3);
        assert!(root.is_dir());
        assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
    }

    #[test]
    fn clear_empty_root_is_noop() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("images");
        fs::create_dir_all(&root).unwrap();

        assert_eq!(clear_output_root(&root).unwrap(), 0);
        assert!(root.is_dir());
    }

    #[test]
    fn clear_missing_root_creates_it() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("images");

        assert_eq!(clear_output_root(&root).unwrap(), 0);
        assert!(root.is_dir());
    }

    #[test]
    fn clear_leaves_siblings_alone() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("images");
        let sibling = tmp.path().join("sources/photo.png");
        fs::create_dir_all(sibling.parent().unwrap()).unwrap();
        fs::write(&sibling, "x").unwrap();
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("old.webp"), "x").unwrap();

        clear_output_root(&root).unwrap();

        assert!(sibling.exists());
    }

    #[cfg(unix)]
    #[test]
    fn clear_unlinks_symlinks_without_following() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("images");
        let outside = tmp.path().join("outside");
        fs::create_dir_all(&root).unwrap();
        fs::create_dir_all(&outside).unwrap();
        fs::write(outside.join("precious.txt"), "x").unwrap();
        std::os::unix::fs::symlink(&outside, root.join("link")).unwrap();

        clear_output_root(&root).unwrap();

        assert!(!root.join("link").exists());
        assert!(outside.join("precious.txt").exists());
    }
}
