//! Review phase - approve a PR unless it is already approved

use super::Workflow;
use crate::error::Result;
use crate::types::{PullRequestRecord, ReviewOutcome};
use tracing::warn;

impl Workflow<'_> {
    /// Approve `pr`, skipping if an approving review already exists.
    ///
    /// The caller is responsible for checking that the PR is open. A failed
    /// review query is downgraded to a warning and treated as "not approved".
    pub fn approve_phase(&self, pr: &PullRequestRecord) -> Result<ReviewOutcome> {
        let approved = match self.platform.is_approved(pr.number) {
            Ok(approved) => approved,
            Err(e) => {
                warn!(number = pr.number, error = %e, "review query failed");
                self.printer
                    .warning(&format!("Could not check existing reviews: {e}"));
                false
            }
        };

        if approved {
            self.printer.warning(&format!(
                "PR #{} is already approved - skipping approval",
                pr.number
            ));
            return Ok(ReviewOutcome::AlreadyApproved);
        }

        if !self.options.auto
            && !self
                .printer
                .confirm(&format!("Approve PR #{} ({:?})?", pr.number, pr.title))
        {
            self.printer.info("Review cancelled by user");
            return Ok(ReviewOutcome::Cancelled);
        }

        self.printer.info(&format!("Approving PR #{}...", pr.number));
        self.platform.approve_pr(pr.number)?;
        self.printer
            .success(&format!("PR #{} approved successfully", pr.number));

        Ok(ReviewOutcome::Approved)
    }
}
