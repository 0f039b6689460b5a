//! Review and merge workflows
//!
//! Each entry point runs one linear pass:
//! 1. Pre-flight - environment checks and a single PR fetch
//! 2. Guard - the PR must be open
//! 3. Act - approve and/or merge, with confirmations unless automatic
//!
//! Any failure aborts the pass. A declined confirmation ends it early with
//! [`WorkflowOutcome::Cancelled`].

mod merge;
pub mod preflight;
mod review;

pub use merge::MergePrompt;

use crate::error::Result;
use crate::output::Printer;
use crate::platform::PlatformService;
use crate::types::{PullRequestRecord, ReviewOutcome, WorkflowOptions, WorkflowOutcome};
use preflight::{ensure_open, fetch_pr, validate_environment};
use tracing::instrument;

/// Shared context for the three workflows
///
/// Holds the platform service, the printer and the invocation options.
/// None of them are mutated during a run.
pub struct Workflow<'a> {
    platform: &'a dyn PlatformService,
    printer: &'a dyn Printer,
    options: &'a WorkflowOptions,
}

impl<'a> Workflow<'a> {
    /// Create a workflow over the given collaborators
    pub const fn new(
        platform: &'a dyn PlatformService,
        printer: &'a dyn Printer,
        options: &'a WorkflowOptions,
    ) -> Self {
        Self {
            platform,
            printer,
            options,
        }
    }

    /// Environment checks, fetch, and the open-state guard shared by every entry point
    fn prepare(&self, number: u64) -> Result<PullRequestRecord> {
        validate_environment(self.platform)?;
        let pr = fetch_pr(self.platform, self.printer, number)?;
        ensure_open(&pr)?;
        Ok(pr)
    }

    /// Approve a PR (review-only workflow)
    #[instrument(skip(self))]
    pub fn review(&self, number: u64) -> Result<WorkflowOutcome> {
        self.printer.header("PR Review");

        let pr = self.prepare(number)?;
        let outcome = self.approve_phase(&pr)?;

        Ok(outcome.into())
    }

    /// Merge a PR (merge-only workflow)
    #[instrument(skip(self))]
    pub fn merge(&self, number: u64) -> Result<WorkflowOutcome> {
        self.printer.header("PR Merge");

        let pr = self.prepare(number)?;
        let outcome = self.merge_phase(&pr, MergePrompt::Ask)?;

        Ok(outcome.into())
    }

    /// Approve then merge a PR (full workflow)
    ///
    /// The PR is fetched once; the merge phase reuses the snapshot taken
    /// before approval and does not re-check it.
    #[instrument(skip(self))]
    pub fn full(&self, number: u64) -> Result<WorkflowOutcome> {
        self.printer.header("Full PR Workflow (review + merge)");

        let pr = self.prepare(number)?;

        if self.approve_phase(&pr)? == ReviewOutcome::Cancelled {
            return Ok(WorkflowOutcome::Cancelled);
        }

        if !self.options.auto
            && !self
                .printer
                .confirm(&format!("Proceed with merge for PR #{number}?"))
        {
            self.printer.info("Merge cancelled by user");
            return Ok(WorkflowOutcome::Cancelled);
        }

        self.merge_phase(&pr, MergePrompt::Skip)?;

        self.printer.success(&format!(
            "Full workflow complete: PR #{number} reviewed and merged"
        ));
        Ok(WorkflowOutcome::Completed)
    }
}
