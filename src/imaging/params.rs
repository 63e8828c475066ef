//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They sit between
//! [`operations`](super::operations), which decides what to write, and the
//! [`backend`](super::backend), which does the pixel work.
//!
//! ## Types
//!
//! - [`Quality`] — Lossy encoding quality (0–100). Clamped on construction.
//! - [`OutputFormat`] — Encoder to use for an output file (JPEG or WebP).
//! - [`ResizeParams`] — Source, output path, exact target dimensions, format, quality.

use std::fmt;
use std::path::PathBuf;

/// Quality setting for lossy image encoding (0-100).
///
/// WebP uses the value as is. The JPEG encoder has no quality 0, so it
/// writes 0 as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.min(100))
    }

    /// Truncate a JSON number to an integer quality (`80.9` → 80, negatives → 0).
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() || value <= 0.0 {
            return Self::new(0);
        }
        Self::new(value.min(u32::MAX as f64) as u32)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

/// Output encoders this tool writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Jpeg,
    WebP,
}

impl OutputFormat {
    /// File extension written for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::WebP => "webp",
        }
    }

    /// Parse an explicit `format` value from a config (`"webp"`, `"jpeg"`, `"jpg"`).
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "webp" => Some(OutputFormat::WebP),
            "jpeg" | "jpg" => Some(OutputFormat::Jpeg),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Jpeg => f.write_str("JPEG"),
            OutputFormat::WebP => f.write_str("WebP"),
        }
    }
}

/// Parameters for an exact resize-and-encode.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub format: OutputFormat,
    pub quality: Quality,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_clamps_to_valid_range() {
        assert_eq!(Quality::new(0).value(), 0);
        assert_eq!(Quality::new(50).value(), 50);
        assert_eq!(Quality::new(150).value(), 100);
    }

    #[test]
    fn quality_from_f64_truncates() {
        assert_eq!(Quality::from_f64(80.9).value(), 80);
        assert_eq!(Quality::from_f64(75.0).value(), 75);
        assert_eq!(Quality::from_f64(-3.0).value(), 0);
        assert_eq!(Quality::from_f64(f64::NAN).value(), 0);
        assert_eq!(Quality::from_f64(1e12).value(), 100);
    }

    #[test]
    fn format_extensions() {
        assert_eq!(OutputFormat::Jpeg.extension(), "jpg");
        assert_eq!(OutputFormat::WebP.extension(), "webp");
    }

    #[test]
    fn format_parse_accepts_aliases() {
        assert_eq!(OutputFormat::parse("webp"), Some(OutputFormat::WebP));
        assert_eq!(OutputFormat::parse("WebP"), Some(OutputFormat::WebP));
        assert_eq!(OutputFormat::parse("jpeg"), Some(OutputFormat::Jpeg));
        assert_eq!(OutputFormat::parse("jpg"), Some(OutputFormat::Jpeg));
        assert_eq!(OutputFormat::parse("avif"), None);
    }
}
