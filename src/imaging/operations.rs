//! High-level image operations.
//!
//! These functions combine calculations with backend execution.
//! They take a variant description, compute parameters, and call the backend.

use super::backend::{BackendError, ImageBackend};
use super::calculations::proportional_height;
use super::params::{OutputFormat, Quality, ResizeParams};
use std::path::{Path, PathBuf};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<(u32, u32)> {
    let dims = backend.identify(path)?;
    Ok((dims.width, dims.height))
}

/// What to produce for one breakpoint: width is fixed, height follows the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantSpec {
    pub width: u32,
    pub format: OutputFormat,
    pub quality: Quality,
}

/// A variant written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedVariant {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub format: OutputFormat,
}

/// Plan a resize without executing it.
///
/// Fails when the computed size would be empty in either direction.
pub fn plan_resize(
    source: &Path,
    output: &Path,
    source_dims: (u32, u32),
    spec: &VariantSpec,
) -> Result<ResizeParams> {
    let height = proportional_height(source_dims, spec.width).ok_or_else(|| {
        BackendError::ProcessingFailed(format!(
            "Source {} has zero size {}x{}",
            source.display(),
            source_dims.0,
            source_dims.1
        ))
    })?;
    if spec.width == 0 || height == 0 {
        return Err(BackendError::InvalidDimensions {
            width: spec.width,
            height,
        });
    }

    Ok(ResizeParams {
        source: source.to_path_buf(),
        output: output.to_path_buf(),
        width: spec.width,
        height,
        format: spec.format,
        quality: spec.quality,
    })
}

/// Identify the source, resize it to the variant width and write `output`.
pub fn create_variant(
    backend: &impl ImageBackend,
    source: &Path,
    output: &Path,
    spec: &VariantSpec,
) -> Result<GeneratedVariant> {
    let dims = get_dimensions(backend, source)?;
    let params = plan_resize(source, output, dims, spec)?;
    backend.resize(&params)?;

    Ok(GeneratedVariant {
        output: params.output,
        width: params.width,
        height: params.height,
        format: params.format,
    })
}
