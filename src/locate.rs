//! Config file discovery.
//!
//! Expands the `configs` glob from [`Settings`](crate::settings::Settings) into
//! the list of config files to process. `**` matches any number of directories
//! (including none), so `configs/**/*.json` also picks up `configs/hero.json`.
//!
//! Zero matches is a valid outcome; the run simply has nothing to do.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocateError {
    #[error("Invalid config pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// Result of expanding the config glob.
#[derive(Debug, Default)]
pub struct Located {
    /// Matching files, in the order the walk yields them.
    pub files: Vec<PathBuf>,
    /// Entries the walk could not read, with the reason.
    pub unreadable: Vec<(PathBuf, String)>,
}

/// Expand `pattern` into config file paths.
///
/// Directories that happen to match the pattern are ignored.
pub fn locate_configs(pattern: &str) -> Result<Located, LocateError> {
    let entries = glob::glob(pattern).map_err(|source| LocateError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut located = Located::default();
    for entry in entries {
        match entry {
            Ok(path) if path.is_dir() => {}
            Ok(path) => located.files.push(path),
            Err(e) => located
                .unreadable
                .push((e.path().to_path_buf(), e.error().to_string())),
        }
    }
    Ok(located)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "{}").unwrap();
    }

    fn pattern(tmp: &TempDir, rest: &str) -> String {
        tmp.path().join(rest).to_string_lossy().into_owned()
    }

    #[test]
    fn no_matches_is_empty() {
        let tmp = TempDir::new().unwrap();
        let located = locate_configs(&pattern(&tmp, "configs/**/*.json")).unwrap();
        assert!(located.files.is_empty());
        assert!(located.unreadable.is_empty());
    }

    #[test]
    fn flat_pattern_does_not_recurse() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("configs/a.json"));
        touch(&tmp.path().join("configs/nested/b.json"));

        let located = locate_configs(&pattern(&tmp, "configs/*.json")).unwrap();
        assert_eq!(located.files, vec![tmp.path().join("configs/a.json")]);
    }

    #[test]
    fn recursive_pattern_includes_top_level_and_nested() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("configs/a.json"));
        touch(&tmp.path().join("configs/nested/b.json"));
        touch(&tmp.path().join("configs/nested/deeper/c.json"));
        touch(&tmp.path().join("configs/notes.txt"));

        let located = locate_configs(&pattern(&tmp, "configs/**/*.json")).unwrap();
        let mut files = located.files.clone();
        files.sort();
        assert_eq!(
            files,
            vec![
                tmp.path().join("configs/a.json"),
                tmp.path().join("configs/nested/b.json"),
                tmp.path().join("configs/nested/deeper/c.json"),
            ]
        );
    }

    #[test]
    fn matching_directories_are_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("configs/odd.json")).unwrap();
        touch(&tmp.path().join("configs/real.json"));

        let located = locate_configs(&pattern(&tmp, "configs/*.json")).unwrap();
        assert_eq!(located.files, vec![tmp.path().join("configs/real.json")]);
    }

    #[test]
    fn invalid_pattern_is_error() {
        assert!(matches!(
            locate_configs("configs/***/x.json"),
            Err(LocateError::Pattern { .. })
        ));
    }
}
