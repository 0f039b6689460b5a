//! Core types for pr-manager

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// PR lifecycle state (open, closed, merged)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PrState {
    /// PR is open and can be reviewed or merged
    Open,
    /// PR was closed without merging
    Closed,
    /// PR was merged
    Merged,
}

impl std::fmt::Display for PrState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::Closed => write!(f, "CLOSED"),
            Self::Merged => write!(f, "MERGED"),
        }
    }
}

impl FromStr for PrState {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "OPEN" => Ok(Self::Open),
            "CLOSED" => Ok(Self::Closed),
            "MERGED" => Ok(Self::Merged),
            other => Err(format!("unrecognized PR state {other:?}")),
        }
    }
}

/// Whether GitHub considers the PR mergeable without conflicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mergeability {
    /// Can be merged cleanly
    Mergeable,
    /// Has merge conflicts
    Conflicting,
    /// GitHub has not computed it yet
    Unknown,
}

impl std::fmt::Display for Mergeability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mergeable => write!(f, "MERGEABLE"),
            Self::Conflicting => write!(f, "CONFLICTING"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

impl FromStr for Mergeability {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "MERGEABLE" => Ok(Self::Mergeable),
            "CONFLICTING" => Ok(Self::Conflicting),
            "UNKNOWN" => Ok(Self::Unknown),
            other => Err(format!("unrecognized mergeable value {other:?}")),
        }
    }
}

/// State of a single review on a PR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewState {
    /// Reviewer approved the changes
    Approved,
    /// Reviewer requested changes
    ChangesRequested,
    /// Review with comments only
    Commented,
    /// Review was dismissed
    Dismissed,
    /// Review started but not submitted
    Pending,
    /// Any state this tool does not know about
    #[serde(other)]
    Other,
}

/// A review left on a PR
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Reviewer login
    pub author: String,
    /// Review state
    pub state: ReviewState,
}

/// Snapshot of a pull request, fetched once per invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequestRecord {
    /// PR number (always positive)
    pub number: u64,
    /// PR title
    pub title: String,
    /// Lifecycle state
    pub state: PrState,
    /// Web URL for the PR
    pub url: String,
    /// Author login
    pub author: String,
    /// Conflict status
    pub mergeable: Mergeability,
    /// Reviews present at fetch time
    pub reviews: Vec<Review>,
}

impl PullRequestRecord {
    /// Whether the PR is open
    pub fn is_open(&self) -> bool {
        self.state == PrState::Open
    }

    /// Whether the PR has merge conflicts
    pub fn has_conflicts(&self) -> bool {
        self.mergeable == Mergeability::Conflicting
    }
}

/// Whether any review in the list is an approval
pub fn has_approval(reviews: &[Review]) -> bool {
    reviews.iter().any(|r| r.state == ReviewState::Approved)
}

/// Merge strategy/method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeMethod {
    /// Create a merge commit
    #[default]
    Merge,
    /// Squash all commits into one
    Squash,
    /// Rebase commits onto base branch
    Rebase,
    /// Let GitHub merge once requirements are met
    Auto,
}

impl MergeMethod {
    /// All supported methods, in display order
    pub const ALL: [Self; 4] = [Self::Merge, Self::Squash, Self::Rebase, Self::Auto];

    /// Flag passed to `gh pr merge` for this method
    pub const fn gh_flag(self) -> &'static str {
        match self {
            Self::Merge => "--merge",
            Self::Squash => "--squash",
            Self::Rebase => "--rebase",
            Self::Auto => "--auto",
        }
    }
}

impl std::fmt::Display for MergeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Merge => write!(f, "merge"),
            Self::Squash => write!(f, "squash"),
            Self::Rebase => write!(f, "rebase"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

impl FromStr for MergeMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "merge" => Ok(Self::Merge),
            "squash" => Ok(Self::Squash),
            "rebase" => Ok(Self::Rebase),
            "auto" => Ok(Self::Auto),
            other => Err(Error::InvalidMergeMethod(other.to_string())),
        }
    }
}

/// Caller-supplied options for one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowOptions {
    /// Skip all interactive confirmations
    pub auto: bool,
    /// Print diagnostic detail
    pub verbose: bool,
    /// Strategy used by the merge phase
    pub merge_method: MergeMethod,
}

/// Parse a PR number argument.
///
/// Accepts only positive decimal integers: no sign, no zero, no whitespace.
pub fn parse_pr_number(input: &str) -> Result<u64> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidPrNumber(input.to_string()));
    }
    match input.parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::InvalidPrNumber(input.to_string())),
    }
}

/// Result of the review phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// An approving review was submitted
    Approved,
    /// An approval already existed; nothing was submitted
    AlreadyApproved,
    /// User declined the approval prompt
    Cancelled,
}

/// Result of the merge phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The merge action was invoked successfully
    Merged,
    /// User declined the merge prompt
    Cancelled,
}

/// Result of a whole workflow invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// Every phase ran to completion
    Completed,
    /// User declined a confirmation; later phases were not run
    Cancelled,
}

impl From<ReviewOutcome> for WorkflowOutcome {
    fn from(outcome: ReviewOutcome) -> Self {
        match outcome {
            ReviewOutcome::Approved | ReviewOutcome::AlreadyApproved => Self::Completed,
            ReviewOutcome::Cancelled => Self::Cancelled,
        }
    }
}

impl From<MergeOutcome> for WorkflowOutcome {
    fn from(outcome: MergeOutcome) -> Self {
        match outcome {
            MergeOutcome::Merged => Self::Completed,
            MergeOutcome::Cancelled => Self::Cancelled,
        }
    }
}
