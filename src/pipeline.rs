//! The driver: one full run from settings to files on disk.
//!
//! ```text
//! clear output root (optional)
//!   → locate config files
//!     → for each file: parse → plan
//!       → for each asset: ensure output dir → build breakpoints
//! ```
//!
//! Everything is sequential. Failures below the run level never abort it:
//! a bad file skips that file, a bad asset skips that asset, a bad breakpoint
//! skips that breakpoint. Only setup failures (invalid settings, a bad glob,
//! an output root that cannot be cleared) return [`RunError`].
//!
//! Progress is reported through a callback receiving [`RunEvent`]s as work
//! happens; the returned [`RunReport`] holds the same information for callers
//! that want to inspect outcomes afterwards.

use crate::asset::{AssetPlan, load_config_file, plan_asset};
use crate::builder::{BreakpointOutcome, build_asset};
use crate::imaging::{ImageBackend, RustBackend};
use crate::locate::{LocateError, locate_configs};
use crate::output_root::{clear_output_root, ensure_dir};
use crate::settings::{Settings, SettingsError};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunError {
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Locate(#[from] LocateError),
    #[error("Failed to clear output root {path}: {source}")]
    Clear {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Progress notifications, emitted in run order.
#[derive(Debug)]
pub enum RunEvent<'a> {
    Cleared { root: &'a Path, removed: usize },
    ConfigsFound { pattern: &'a str, count: usize },
    Unreadable { path: &'a Path, reason: &'a str },
    ConfigSkipped { path: &'a Path, reason: &'a str },
    AssetStarted { plan: &'a AssetPlan },
    AssetSkipped { name: &'a str, reason: &'a str },
    Breakpoint(&'a BreakpointOutcome),
}

/// A config file after parsing and planning, before any pixels are touched.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedConfig {
    pub path: PathBuf,
    /// `Err` when the file could not be read or parsed.
    pub assets: Result<Vec<PlannedAsset>, String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlannedAsset {
    Ready(AssetPlan),
    Invalid { name: String, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssetStatus {
    Built(Vec<BreakpointOutcome>),
    Skipped { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssetReport {
    pub name: String,
    pub status: AssetStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigReport {
    pub path: PathBuf,
    /// `Err` when the file was skipped as a whole.
    pub assets: Result<Vec<AssetReport>, String>,
}

/// Summary of a finished run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    /// Entries removed from the output root, if it was cleared.
    pub cleared: Option<usize>,
    pub unreadable: Vec<(PathBuf, String)>,
    pub configs: Vec<ConfigReport>,
}

impl RunReport {
    /// Every breakpoint outcome, in run order.
    pub fn outcomes(&self) -> impl Iterator<Item = &BreakpointOutcome> {
        self.configs
            .iter()
            .filter_map(|c| c.assets.as_ref().ok())
            .flatten()
            .filter_map(|a| match &a.status {
                AssetStatus::Built(outcomes) => Some(outcomes),
                AssetStatus::Skipped { .. } => None,
            })
            .flatten()
    }

    pub fn generated_count(&self) -> usize {
        self.outcomes().filter(|o| o.is_generated()).count()
    }

    pub fn skipped_breakpoints(&self) -> usize {
        self.outcomes().filter(|o| !o.is_generated()).count()
    }

    /// Config files skipped outright plus individual assets skipped.
    pub fn skipped_configs(&self) -> usize {
        self.configs
            .iter()
            .map(|c| match &c.assets {
                Err(_) => 1,
                Ok(assets) => assets
                    .iter()
                    .filter(|a| matches!(a.status, AssetStatus::Skipped { .. }))
                    .count(),
            })
            .sum()
    }
}

/// Parse and plan one config file.
pub fn plan_config_file(path: &Path, settings: &Settings) -> PlannedConfig {
    let assets = load_config_file(path)
        .map(|assets| {
            assets
                .iter()
                .map(|asset| match plan_asset(asset, settings) {
                    Ok(plan) => PlannedAsset::Ready(plan),
                    Err(e) => PlannedAsset::Invalid {
                        name: asset.name().to_string(),
                        reason: e.to_string(),
                    },
                })
                .collect()
        })
        .map_err(|e| e.to_string());

    PlannedConfig {
        path: path.to_path_buf(),
        assets,
    }
}

/// Locate, parse and plan every config without writing anything.
pub fn plan_run(settings: &Settings) -> Result<Vec<PlannedConfig>, RunError> {
    settings.validate()?;
    let located = locate_configs(&settings.configs)?;
    Ok(located
        .files
        .iter()
        .map(|path| plan_config_file(path, settings))
        .collect())
}

/// Run the whole pipeline with the production backend.
pub fn run(
    settings: &Settings,
    on_event: impl FnMut(&RunEvent<'_>),
) -> Result<RunReport, RunError> {
    run_with_backend(&RustBackend::new(), settings, on_event)
}

/// Run the whole pipeline with a specific backend (allows testing with mock).
pub fn run_with_backend(
    backend: &impl ImageBackend,
    settings: &Settings,
    mut on_event: impl FnMut(&RunEvent<'_>),
) -> Result<RunReport, RunError> {
    settings.validate()?;
    let mut report = RunReport::default();

    if settings.clear_output {
        let removed = clear_output_root(&settings.images).map_err(|source| RunError::Clear {
            path: settings.images.clone(),
            source,
        })?;
        on_event(&RunEvent::Cleared {
            root: &settings.images,
            removed,
        });
        report.cleared = Some(removed);
    }

    let located = locate_configs(&settings.configs)?;
    on_event(&RunEvent::ConfigsFound {
        pattern: &settings.configs,
        count: located.files.len(),
    });
    for (path, reason) in &located.unreadable {
        on_event(&RunEvent::Unreadable { path, reason });
    }
    report.unreadable = located.unreadable.clone();

    for path in &located.files {
        let planned = plan_config_file(path, settings);
        let assets = match planned.assets {
            Err(reason) => {
                on_event(&RunEvent::ConfigSkipped {
                    path,
                    reason: &reason,
                });
                report.configs.push(ConfigReport {
                    path: path.clone(),
                    assets: Err(reason),
                });
                continue;
            }
            Ok(assets) => assets,
        };

        let mut asset_reports = Vec::with_capacity(assets.len());
        for asset in assets {
            asset_reports.push(build_planned_asset(backend, asset, &mut on_event));
        }
        report.configs.push(ConfigReport {
            path: path.clone(),
            assets: Ok(asset_reports),
        });
    }

    Ok(report)
}

fn build_planned_asset(
    backend: &impl ImageBackend,
    asset: PlannedAsset,
    on_event: &mut impl FnMut(&RunEvent<'_>),
) -> AssetReport {
    let plan = match asset {
        PlannedAsset::Ready(plan) => plan,
        PlannedAsset::Invalid { name, reason } => {
            on_event(&RunEvent::AssetSkipped {
                name: &name,
                reason: &reason,
            });
            return AssetReport {
                name,
                status: AssetStatus::Skipped { reason },
            };
        }
    };

    if let Err(e) = ensure_dir(&plan.output_dir) {
        let reason = format!(
            "Failed to create output directory {}: {}",
            plan.output_dir.display(),
            e
        );
        on_event(&RunEvent::AssetSkipped {
            name: &plan.name,
            reason: &reason,
        });
        return AssetReport {
            name: plan.name,
            status: AssetStatus::Skipped { reason },
        };
    }

    on_event(&RunEvent::AssetStarted { plan: &plan });
    let outcomes = build_asset(backend, &plan, |outcome| {
        on_event(&RunEvent::Breakpoint(outcome))
    });
    AssetReport {
        name: plan.name,
        status: AssetStatus::Built(outcomes),
    }
}
