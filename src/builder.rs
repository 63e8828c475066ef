//! Image builder: turns one planned asset into files on disk.
//!
//! Every breakpoint is independent. A failure (missing source, undecodable
//! image, encoder error) becomes a [`BreakpointStatus::Skipped`] outcome and
//! the loop moves on to the next breakpoint. The decoded image lives only for
//! the duration of one breakpoint.

use crate::asset::{AssetPlan, BreakpointJob};
use crate::imaging::{GeneratedVariant, ImageBackend, create_variant};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum BreakpointStatus {
    Generated(GeneratedVariant),
    Skipped { reason: String },
}

/// What happened to one breakpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakpointOutcome {
    pub breakpoint: String,
    pub output: PathBuf,
    pub status: BreakpointStatus,
}

impl BreakpointOutcome {
    pub fn is_generated(&self) -> bool {
        matches!(self.status, BreakpointStatus::Generated(_))
    }
}

/// Build a single breakpoint.
pub fn build_breakpoint(backend: &impl ImageBackend, job: &BreakpointJob) -> BreakpointOutcome {
    let status = match create_variant(backend, &job.source, &job.output, &job.spec) {
        Ok(variant) => BreakpointStatus::Generated(variant),
        Err(e) => BreakpointStatus::Skipped {
            reason: e.to_string(),
        },
    };
    BreakpointOutcome {
        breakpoint: job.breakpoint.clone(),
        output: job.output.clone(),
        status,
    }
}

/// Build every breakpoint of `plan` in order, reporting each outcome as it
/// completes.
pub fn build_asset(
    backend: &impl ImageBackend,
    plan: &AssetPlan,
    mut on_outcome: impl FnMut(&BreakpointOutcome),
) -> Vec<BreakpointOutcome> {
    let mut outcomes = Vec::with_capacity(plan.jobs.len());
    for job in &plan.jobs {
        let outcome = build_breakpoint(backend, job);
        on_outcome(&outcome);
        outcomes.push(outcome);
    }
    outcomes
}
