//! Output naming convention and the breakpoint → format policy.
//!
//! Every generated file is named `<name>-<breakpoint>.<ext>` and lives in the
//! config's output directory:
//!
//! ```text
//! images/hero/hero-default.jpg
//! images/hero/hero-sm.webp
//! images/hero/hero-lg.webp
//! ```
//!
//! ## Format Policy
//!
//! The encoder is picked from a lookup table keyed by breakpoint identifier.
//! `default` is the `<img>` fallback inside a `<picture>` element, so it is
//! written as JPEG; every other breakpoint becomes a WebP `<source>`. An
//! explicit `format` in the config always wins over the table.

use crate::imaging::OutputFormat;

/// Breakpoint identifiers with a fixed encoder.
pub const FORMAT_RULES: &[(&str, OutputFormat)] = &[("default", OutputFormat::Jpeg)];

/// Encoder for identifiers not listed in [`FORMAT_RULES`].
pub const FALLBACK_FORMAT: OutputFormat = OutputFormat::WebP;

/// Resolve the encoder for a breakpoint.
pub fn format_for_breakpoint(breakpoint: &str, explicit: Option<OutputFormat>) -> OutputFormat {
    if let Some(format) = explicit {
        return format;
    }
    FORMAT_RULES
        .iter()
        .find(|(id, _)| *id == breakpoint)
        .map(|(_, format)| *format)
        .unwrap_or(FALLBACK_FORMAT)
}

/// File name for one generated variant: `<name>-<breakpoint>.<ext>`.
pub fn output_file_name(name: &str, breakpoint: &str, format: OutputFormat) -> String {
    format!("{}-{}.{}", name, breakpoint, format.extension())
}
