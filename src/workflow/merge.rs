//! Merge phase - guard PR state, confirm, then merge

use super::Workflow;
use super::preflight::{ensure_no_conflicts, ensure_open};
use crate::error::Result;
use crate::types::{MergeOutcome, PullRequestRecord};

/// Whether the merge phase asks for its own confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePrompt {
    /// Ask before merging (unless in automatic mode)
    Ask,
    /// The caller already confirmed
    Skip,
}

impl Workflow<'_> {
    /// Merge `pr` with the configured method.
    ///
    /// Fails with `NotOpen` or `Conflict` before any mutating call.
    pub fn merge_phase(&self, pr: &PullRequestRecord, prompt: MergePrompt) -> Result<MergeOutcome> {
        ensure_open(pr)?;
        ensure_no_conflicts(pr)?;

        let method = self.options.merge_method;

        if prompt == MergePrompt::Ask
            && !self.options.auto
            && !self.printer.confirm(&format!(
                "Merge PR #{} ({:?}) using {:?} method?",
                pr.number,
                pr.title,
                method.to_string()
            ))
        {
            self.printer.info("Merge cancelled by user");
            return Ok(MergeOutcome::Cancelled);
        }

        self.printer.info(&format!(
            "Merging PR #{} using {:?} method...",
            pr.number,
            method.to_string()
        ));
        self.platform.merge_pr(pr.number, method)?;
        self.printer
            .success(&format!("PR #{} merged successfully", pr.number));

        Ok(MergeOutcome::Merged)
    }
}
