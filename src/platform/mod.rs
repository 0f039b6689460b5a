//! Platform services for PR operations
//!
//! Provides the interface the workflow uses to talk to the hosting service.
//! The only implementation shells out to the GitHub CLI.

mod github;

pub use github::{GhCliService, PR_FIELDS};

use crate::error::Result;
use crate::types::{MergeMethod, PullRequestRecord, Review, has_approval};

/// Platform service trait for PR operations
///
/// Environment checks, state queries and the two mutating actions
/// (approve, merge) the workflow needs.
pub trait PlatformService {
    // =========================================================================
    // Environment checks
    // =========================================================================

    /// Fail with `ToolNotInstalled` if the hosting CLI cannot be run
    fn check_installed(&self) -> Result<()>;

    /// Fail with `NotARepository` if the working directory is not a git checkout
    fn check_repository(&self) -> Result<()>;

    /// Fail with `NotAuthenticated` if the hosting CLI has no valid login
    fn check_authenticated(&self) -> Result<()>;

    // =========================================================================
    // Queries
    // =========================================================================

    /// Fetch the PR snapshot used by every later phase
    fn get_pr(&self, number: u64) -> Result<PullRequestRecord>;

    /// List the reviews currently on a PR
    fn list_reviews(&self, number: u64) -> Result<Vec<Review>>;

    /// Whether any review on the PR is an approval
    fn is_approved(&self, number: u64) -> Result<bool> {
        Ok(has_approval(&self.list_reviews(number)?))
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Submit an approving review
    fn approve_pr(&self, number: u64) -> Result<()>;

    /// Merge the PR with the given method, keeping the source branch
    fn merge_pr(&self, number: u64, method: MergeMethod) -> Result<()>;
}
