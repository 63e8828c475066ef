//! Run settings.
//!
//! Where sources live, where images go, which config files to read, and
//! whether to wipe the output first. Settings come from an optional
//! `respimg.toml` in the working directory; CLI flags override individual keys.
//!
//! ## Settings File
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! sources = "sources"            # Root that config source paths are relative to
//! images = "images"              # Output root for generated images
//! configs = "configs/**/*.json"  # Glob for breakpoint config files
//! clear_output = true            # Empty the output root before building
//!
//! [legacy]
//! quality = 25                   # Quality for `sizes`-style configs
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Settings file read when `--settings` is not given.
pub const DEFAULT_SETTINGS_FILE: &str = "respimg.toml";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Settings validation error: {0}")]
    Validation(String),
}

/// Settings for one run. Every root is explicit so tests can point a run at
/// temporary directories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Root directory source image paths are resolved against.
    pub sources: PathBuf,
    /// Output root; generated images are written below it.
    pub images: PathBuf,
    /// Glob pattern for config files. `**` recurses.
    pub configs: String,
    /// Remove everything under `images` before building.
    pub clear_output: bool,
    /// Settings for `sizes`-style configs.
    pub legacy: LegacySettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sources: PathBuf::from("sources"),
            images: PathBuf::from("images"),
            configs: "configs/**/*.json".to_string(),
            clear_output: true,
            legacy: LegacySettings::default(),
        }
    }
}

/// Legacy configs carry no quality of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LegacySettings {
    /// Encoding quality (0-100) applied to every legacy breakpoint.
    pub quality: u32,
}

impl Default for LegacySettings {
    fn default() -> Self {
        Self { quality: 25 }
    }
}

impl Settings {
    /// Build settings rooted at `base`: `<base>/sources`, `<base>/images`,
    /// `<base>/configs/**/*.json`.
    pub fn rooted_at(base: &Path) -> Self {
        Self {
            sources: base.join("sources"),
            images: base.join("images"),
            configs: base.join("configs/**/*.json").to_string_lossy().into_owned(),
            ..Self::default()
        }
    }

    /// Validate values are within acceptable ranges.
    ///
    /// The output root is cleared recursively, so it must be a real,
    /// dedicated directory.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.legacy.quality > 100 {
            return Err(SettingsError::Validation(
                "legacy.quality must be 0-100".into(),
            ));
        }
        if self.configs.trim().is_empty() {
            return Err(SettingsError::Validation("configs must not be empty".into()));
        }
        if self.images.as_os_str().is_empty() {
            return Err(SettingsError::Validation("images must not be empty".into()));
        }
        if self.images.components().all(|c| c == Component::CurDir) {
            return Err(SettingsError::Validation(
                "images must not be the working directory".into(),
            ));
        }
        let images = normalized(&self.images);
        let filesystem_root = images
            .components()
            .all(|c| matches!(c, Component::RootDir | Component::Prefix(_)));
        if filesystem_root {
            return Err(SettingsError::Validation(
                "images must not be a filesystem root".into(),
            ));
        }
        if normalized(&self.sources).starts_with(&images) {
            return Err(SettingsError::Validation(
                "images must not contain the sources directory".into(),
            ));
        }
        if normalized(&glob_base(&self.configs)).starts_with(&images) {
            return Err(SettingsError::Validation(
                "images must not contain the configs directory".into(),
            ));
        }
        Ok(())
    }
}

/// Absolute, lexically cleaned path (`.` dropped, `..` folded). Nothing is
/// read from disk, so the path need not exist.
fn normalized(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut out = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

/// Leading directories of a glob pattern, up to the first wildcard component.
fn glob_base(pattern: &str) -> PathBuf {
    let base: PathBuf = Path::new(pattern)
        .components()
        .take_while(|c| !c.as_os_str().to_string_lossy().contains(['*', '?', '[']))
        .collect();
    if base.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        base
    }
}

/// Load settings from a TOML file.
///
/// A missing file yields stock defaults. Present keys override defaults,
/// unknown keys are rejected, and the result is validated.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&content)?;
    settings.validate()?;
    Ok(settings)
}

/// A fully-commented stock `respimg.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_settings_toml() -> &'static str {
    r##"# respimg settings
# ================
#
# Every key is optional; the values below are the defaults.
# CLI flags (--sources, --images, --configs, --no-clear) override this file.

# Root that config `source` paths (and legacy `path` directories) resolve against.
sources = "sources"

# Output root. Generated images land in <images>/<images-path>/<name>-<breakpoint>.<ext>.
images = "images"

# Glob for config files. `**` matches any number of directories, including none.
configs = "configs/**/*.json"

# Delete everything under `images` before building, so stale variants never linger.
clear_output = true

[legacy]
# Configs using the `sizes` shape have no per-breakpoint quality; this applies to all of them.
quality = 25
"##
}
