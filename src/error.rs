//! Error types for pr-manager

use thiserror::Error;

/// Main error type for pr-manager operations
#[derive(Error, Debug)]
pub enum Error {
    /// An external program exited non-zero or could not be started
    #[error("`{command}` failed: {message}")]
    ExternalTool {
        /// The command line that was run
        command: String,
        /// Trimmed stderr (or stdout when stderr was empty)
        message: String,
    },

    /// The hosting CLI is missing from PATH
    #[error("GitHub CLI (gh) is not installed or not in PATH\nInstall from: https://cli.github.com/")]
    ToolNotInstalled,

    /// Current directory is not inside a git working copy
    #[error("not inside a git repository - please run from your project root")]
    NotARepository,

    /// The hosting CLI has no valid login
    #[error("not authenticated with GitHub CLI\nRun: gh auth login")]
    NotAuthenticated,

    /// PR lookup failed (nonexistent PR or no access)
    #[error("PR #{number} not found or inaccessible: {message}")]
    PrNotFound {
        /// PR number that was requested
        number: u64,
        /// Diagnostic text from the hosting CLI
        message: String,
    },

    /// PR payload could not be mapped to a record
    #[error("failed to parse response for PR #{number}: {message}")]
    PrDecode {
        /// PR number that was requested
        number: u64,
        /// Decoder diagnostic
        message: String,
    },

    /// PR is closed or already merged
    #[error("PR #{number} is not open (current state: {state})")]
    NotOpen {
        /// PR number
        number: u64,
        /// Observed lifecycle state
        state: crate::types::PrState,
    },

    /// PR has merge conflicts
    #[error("PR #{0} has merge conflicts - resolve them before merging")]
    Conflict(u64),

    /// Submitting the approving review failed
    #[error("failed to approve PR #{number}: {message}")]
    Approval {
        /// PR number
        number: u64,
        /// Diagnostic text from the hosting CLI
        message: String,
    },

    /// The merge action failed
    #[error("failed to merge PR #{number}: {message}")]
    Merge {
        /// PR number
        number: u64,
        /// Diagnostic text from the hosting CLI
        message: String,
    },

    /// PR number argument is not a positive integer
    #[error("invalid PR number {0:?} - must be a positive integer")]
    InvalidPrNumber(String),

    /// Merge method argument is not one of the supported strategies
    #[error("unknown merge method {0:?} - choose one of: merge, squash, rebase, auto")]
    InvalidMergeMethod(String),

    /// Settings file could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for pr-manager operations
pub type Result<T> = std::result::Result<T, Error>;
