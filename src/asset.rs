//! Asset configs: parsing JSON config files and planning their breakpoints.
//!
//! A config file holds one config object or an array of them. Each object is
//! one logical image asset in one of two shapes, told apart by its keys:
//!
//! ```json
//! {
//!   "name": "hero",
//!   "images-path": "home/hero",
//!   "breakpoints": {
//!     "default": { "width": 1200, "source": "home/hero.jpg", "quality": 80 },
//!     "sm":      { "width": 640,  "source": "home/hero-crop.jpg", "quality": 70 }
//!   }
//! }
//! ```
//!
//! ```json
//! [{ "path": "/hero", "name": "hero", "format": "webp",
//!    "sizes": { "sm": [640, 360], "lg": [1280, 720] } }]
//! ```
//!
//! The second (legacy) shape shares one source image per config: the first
//! file in `<sources>/<path>`. Its `[width, height]` pairs only contribute the
//! width; height always follows the source aspect ratio.
//!
//! Planning turns a parsed config into [`BreakpointJob`]s with resolved source
//! and output paths, without touching any pixels.

use crate::imaging::{OutputFormat, Quality, VariantSpec};
use crate::naming::{format_for_breakpoint, output_file_name};
use crate::settings::Settings;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unrecognized config: expected an object with `breakpoints` or `sizes`")]
    UnknownShape,
    #[error("Unsupported format {0:?} (expected webp or jpeg)")]
    UnsupportedFormat(String),
    #[error("Invalid {field} {value:?}: must be a relative path without `..`")]
    UnsafePath { field: &'static str, value: String },
    #[error("Invalid {field} {value:?}: must be a non-empty name without path separators")]
    InvalidName { field: &'static str, value: String },
    #[error("Breakpoint {0:?} has no width")]
    MissingWidth(String),
    #[error("No source image found in {0}")]
    NoSourceImage(PathBuf),
}

/// A config with per-breakpoint sources and quality.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BreakpointConfig {
    pub name: String,
    #[serde(rename = "images-path")]
    pub images_path: String,
    pub breakpoints: BTreeMap<String, BreakpointSpec>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BreakpointSpec {
    pub width: u32,
    /// Source image, relative to the sources root.
    pub source: String,
    /// 0-100. Truncated to an integer and clamped when planned; JPEG writes 0 as 1.
    pub quality: f64,
    /// Overrides the breakpoint-identifier format rule.
    #[serde(default)]
    pub format: Option<String>,
}

/// A config sharing one source image across all sizes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LegacyConfig {
    pub path: String,
    pub name: String,
    #[serde(default)]
    pub format: Option<String>,
    /// Breakpoint → `[width, height]`; only the width is used.
    pub sizes: BTreeMap<String, Vec<u32>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssetConfig {
    Breakpoints(BreakpointConfig),
    Legacy(LegacyConfig),
}

impl AssetConfig {
    pub fn name(&self) -> &str {
        match self {
            AssetConfig::Breakpoints(c) => &c.name,
            AssetConfig::Legacy(c) => &c.name,
        }
    }
}

/// One breakpoint ready to build.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakpointJob {
    pub breakpoint: String,
    pub source: PathBuf,
    pub output: PathBuf,
    pub spec: VariantSpec,
}

/// Everything needed to build one asset.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetPlan {
    pub name: String,
    pub output_dir: PathBuf,
    pub jobs: Vec<BreakpointJob>,
}

fn classify(value: Value) -> Result<AssetConfig, AssetError> {
    if value.get("breakpoints").is_some() {
        Ok(AssetConfig::Breakpoints(serde_json::from_value(value)?))
    } else if value.get("sizes").is_some() {
        Ok(AssetConfig::Legacy(serde_json::from_value(value)?))
    } else {
        Err(AssetError::UnknownShape)
    }
}

/// Parse config JSON: a single object or an array of objects.
///
/// Any invalid entry fails the whole document.
pub fn parse_config_str(json: &str) -> Result<Vec<AssetConfig>, AssetError> {
    let value: Value = serde_json::from_str(json)?;
    match value {
        Value::Array(items) => items.into_iter().map(classify).collect(),
        other => Ok(vec![classify(other)?]),
    }
}

/// Read and parse a config file.
pub fn load_config_file(path: &Path) -> Result<Vec<AssetConfig>, AssetError> {
    let content = fs::read_to_string(path)?;
    parse_config_str(&content)
}

/// Normalize a config path: leading slashes are dropped (`"/hero"` → `hero`)
/// and anything that could escape its root is rejected.
fn relative_path(field: &'static str, value: &str) -> Result<PathBuf, AssetError> {
    let rel = Path::new(value.trim_start_matches(['/', '\\']));
    let escapes = rel
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(AssetError::UnsafePath {
            field,
            value: value.to_string(),
        });
    }
    Ok(rel.to_path_buf())
}

/// Names and breakpoint ids become part of a file name.
fn name_part<'a>(field: &'static str, value: &'a str) -> Result<&'a str, AssetError> {
    if value.is_empty() || value == "." || value == ".." || value.contains(['/', '\\']) {
        return Err(AssetError::InvalidName {
            field,
            value: value.to_string(),
        });
    }
    Ok(value)
}

fn explicit_format(format: Option<&str>) -> Result<Option<OutputFormat>, AssetError> {
    match format {
        None => Ok(None),
        Some(f) => OutputFormat::parse(f)
            .map(Some)
            .ok_or_else(|| AssetError::UnsupportedFormat(f.to_string())),
    }
}

/// First regular, non-hidden file in `dir`, by name.
pub fn first_source_file(dir: &Path) -> Result<PathBuf, AssetError> {
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if !hidden && entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    files
        .into_iter()
        .next()
        .ok_or_else(|| AssetError::NoSourceImage(dir.to_path_buf()))
}

/// Resolve paths, formats and qualities for every breakpoint of a config.
pub fn plan_asset(asset: &AssetConfig, settings: &Settings) -> Result<AssetPlan, AssetError> {
    match asset {
        AssetConfig::Breakpoints(config) => plan_breakpoints(config, settings),
        AssetConfig::Legacy(config) => plan_legacy(config, settings),
    }
}

fn plan_breakpoints(
    config: &BreakpointConfig,
    settings: &Settings,
) -> Result<AssetPlan, AssetError> {
    let name = name_part("name", &config.name)?;
    let output_dir = settings
        .images
        .join(relative_path("images-path", &config.images_path)?);

    let mut jobs = Vec::with_capacity(config.breakpoints.len());
    for (breakpoint, bp) in &config.breakpoints {
        let breakpoint = name_part("breakpoint", breakpoint)?;
        let format = format_for_breakpoint(breakpoint, explicit_format(bp.format.as_deref())?);
        jobs.push(BreakpointJob {
            breakpoint: breakpoint.to_string(),
            source: settings.sources.join(relative_path("source", &bp.source)?),
            output: output_dir.join(output_file_name(name, breakpoint, format)),
            spec: VariantSpec {
                width: bp.width,
                format,
                quality: Quality::from_f64(bp.quality),
            },
        });
    }

    Ok(AssetPlan {
        name: name.to_string(),
        output_dir,
        jobs,
    })
}

fn plan_legacy(config: &LegacyConfig, settings: &Settings) -> Result<AssetPlan, AssetError> {
    let name = name_part("name", &config.name)?;
    let rel = relative_path("path", &config.path)?;
    let output_dir = settings.images.join(&rel);
    let source = first_source_file(&settings.sources.join(&rel))?;
    let explicit = explicit_format(config.format.as_deref())?.unwrap_or(OutputFormat::WebP);
    let quality = Quality::new(settings.legacy.quality);

    let mut jobs = Vec::with_capacity(config.sizes.len());
    for (breakpoint, size) in &config.sizes {
        let breakpoint = name_part("breakpoint", breakpoint)?;
        let width = *size
            .first()
            .ok_or_else(|| AssetError::MissingWidth(breakpoint.to_string()))?;
        jobs.push(BreakpointJob {
            breakpoint: breakpoint.to_string(),
            source: source.clone(),
            output: output_dir.join(output_file_name(name, breakpoint, explicit)),
            spec: VariantSpec {
                width,
                format: explicit,
                quality,
            },
        });
    }

    Ok(AssetPlan {
        name: name.to_string(),
        output_dir,
        jobs,
    })
}
