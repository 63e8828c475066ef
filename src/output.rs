//! CLI output formatting.
//!
//! Each kind of output has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.
//!
//! # Build
//!
//! ```text
//! Cleared images (2 entries)
//! Found 2 config files matching configs/**/*.json
//! hero → images/home/hero (3 breakpoints)
//!     default: images/home/hero/hero-default.jpg (1200x675 JPEG)
//!     lg: images/home/hero/hero-lg.webp (960x540 WebP)
//!     sm: Error: Failed to read dimensions of sources/home/hero-sm.jpg: No such file or directory
//! Error: configs/broken.json: JSON error: EOF while parsing an object at line 1 column 9
//!
//! Generated 2 images, skipped 1 breakpoint, skipped 1 config
//! ```
//!
//! # Check
//!
//! ```text
//! configs/hero.json
//!     hero → images/home/hero
//!         default: sources/home/hero.jpg → hero-default.jpg (1200px JPEG q80)
//! ```

use crate::builder::{BreakpointOutcome, BreakpointStatus};
use crate::pipeline::{PlannedAsset, PlannedConfig, RunEvent, RunReport};

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{} {}", count, one)
    } else {
        format!("{} {}", count, many)
    }
}

fn breakpoint_line(outcome: &BreakpointOutcome) -> String {
    match &outcome.status {
        BreakpointStatus::Generated(v) => format!(
            "{}{}: {} ({}x{} {})",
            indent(1),
            outcome.breakpoint,
            v.output.display(),
            v.width,
            v.height,
            v.format
        ),
        BreakpointStatus::Skipped { reason } => {
            format!("{}{}: Error: {}", indent(1), outcome.breakpoint, reason)
        }
    }
}

/// Format one progress event.
pub fn format_run_event(event: &RunEvent<'_>) -> Vec<String> {
    match event {
        RunEvent::Cleared { root, removed } => vec![format!(
            "Cleared {} ({})",
            root.display(),
            plural(*removed, "entry", "entries")
        )],
        RunEvent::ConfigsFound { pattern, count } => vec![format!(
            "Found {} matching {}",
            plural(*count, "config file", "config files"),
            pattern
        )],
        RunEvent::Unreadable { path, reason } => {
            vec![format!("Error: cannot read {}: {}", path.display(), reason)]
        }
        RunEvent::ConfigSkipped { path, reason } => {
            vec![format!("Error: {}: {}", path.display(), reason)]
        }
        RunEvent::AssetStarted { plan } => vec![format!(
            "{} → {} ({})",
            plan.name,
            plan.output_dir.display(),
            plural(plan.jobs.len(), "breakpoint", "breakpoints")
        )],
        RunEvent::AssetSkipped { name, reason } => vec![format!("Error: {}: {}", name, reason)],
        RunEvent::Breakpoint(outcome) => vec![breakpoint_line(outcome)],
    }
}

/// One-line totals for a finished run.
pub fn format_summary(report: &RunReport) -> String {
    let mut parts = vec![format!(
        "Generated {}",
        plural(report.generated_count(), "image", "images")
    )];
    let skipped_breakpoints = report.skipped_breakpoints();
    if skipped_breakpoints > 0 {
        parts.push(format!(
            "skipped {}",
            plural(skipped_breakpoints, "breakpoint", "breakpoints")
        ));
    }
    let skipped_configs = report.skipped_configs();
    if skipped_configs > 0 {
        parts.push(format!(
            "skipped {}",
            plural(skipped_configs, "config", "configs")
        ));
    }
    parts.join(", ")
}

/// Format the dry-run plan produced by `check`.
pub fn format_plan(planned: &[PlannedConfig]) -> Vec<String> {
    let mut lines = Vec::new();
    for config in planned {
        lines.push(config.path.display().to_string());
        let assets = match &config.assets {
            Ok(assets) => assets,
            Err(reason) => {
                lines.push(format!("{}Error: {}", indent(1), reason));
                continue;
            }
        };
        for asset in assets {
            match asset {
                PlannedAsset::Invalid { name, reason } => {
                    lines.push(format!("{}{}: Error: {}", indent(1), name, reason));
                }
                PlannedAsset::Ready(plan) => {
                    lines.push(format!(
                        "{}{} → {}",
                        indent(1),
                        plan.name,
                        plan.output_dir.display()
                    ));
                    for job in &plan.jobs {
                        let file_name = job
                            .output
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_default();
                        lines.push(format!(
                            "{}{}: {} → {} ({}px {} q{})",
                            indent(2),
                            job.breakpoint,
                            job.source.display(),
                            file_name,
                            job.spec.width,
                            job.spec.format,
                            job.spec.quality.value()
                        ));
                    }
                }
            }
        }
    }
    lines
}

pub fn print_run_event(event: &RunEvent<'_>) {
    for line in format_run_event(event) {
        println!("{}", line);
    }
}

pub fn print_summary(report: &RunReport) {
    println!();
    println!("{}", format_summary(report));
}

pub fn print_plan(planned: &[PlannedConfig]) {
    for line in format_plan(planned) {
        println!("{}", line);
    }
}
