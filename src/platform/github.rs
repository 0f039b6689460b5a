//! GitHub platform service backed by the `gh` CLI

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::runner::CommandRunner;
use crate::types::{Mergeability, MergeMethod, PrState, PullRequestRecord, Review, ReviewState};
use serde::Deserialize;
use tracing::debug;

/// Fields requested from `gh pr view --json`
pub const PR_FIELDS: &str = "number,title,state,url,mergeable,author,reviews";

const DEFAULT_GH: &str = "gh";

// JSON response types for `gh pr view`

#[derive(Deserialize)]
struct GhAuthor {
    #[serde(default)]
    login: String,
}

#[derive(Deserialize)]
struct GhReview {
    author: Option<GhAuthor>,
    state: ReviewState,
}

impl From<GhReview> for Review {
    fn from(review: GhReview) -> Self {
        Self {
            author: review.author.map(|a| a.login).unwrap_or_default(),
            state: review.state,
        }
    }
}

#[derive(Deserialize)]
struct GhPullRequest {
    number: u64,
    title: String,
    state: String,
    url: String,
    mergeable: String,
    author: Option<GhAuthor>,
    #[serde(default)]
    reviews: Vec<GhReview>,
}

#[derive(Deserialize)]
struct GhReviews {
    #[serde(default)]
    reviews: Vec<GhReview>,
}

impl TryFrom<GhPullRequest> for PullRequestRecord {
    type Error = String;

    fn try_from(pr: GhPullRequest) -> std::result::Result<Self, Self::Error> {
        if pr.number == 0 {
            return Err("PR number must be positive".to_string());
        }
        Ok(Self {
            number: pr.number,
            title: pr.title,
            state: pr.state.parse::<PrState>()?,
            url: pr.url,
            author: pr.author.map(|a| a.login).unwrap_or_default(),
            mergeable: pr.mergeable.parse::<Mergeability>()?,
            reviews: pr.reviews.into_iter().map(Review::from).collect(),
        })
    }
}

/// GitHub service using the `gh` CLI through a [`CommandRunner`]
pub struct GhCliService<R> {
    runner: R,
    gh: String,
}

impl<R: CommandRunner> GhCliService<R> {
    /// Create a service that invokes `gh` from PATH
    pub fn new(runner: R) -> Self {
        Self::with_binary(runner, DEFAULT_GH)
    }

    /// Create a service that invokes the given program instead of `gh`
    pub fn with_binary(runner: R, gh: impl Into<String>) -> Self {
        Self {
            runner,
            gh: gh.into(),
        }
    }

    fn gh(&self, args: &[&str]) -> Result<String> {
        self.runner.run(&self.gh, args)
    }
}

/// Extract the tool's own diagnostic text from a runner error
fn tool_output(err: Error) -> String {
    match err {
        Error::ExternalTool { message, .. } => message,
        other => other.to_string(),
    }
}

impl<R: CommandRunner> PlatformService for GhCliService<R> {
    fn check_installed(&self) -> Result<()> {
        self.gh(&["version"]).map_err(|e| {
            debug!(error = %e, "gh version failed");
            Error::ToolNotInstalled
        })?;
        Ok(())
    }

    fn check_repository(&self) -> Result<()> {
        self.runner
            .run("git", &["rev-parse", "--git-dir"])
            .map_err(|e| {
                debug!(error = %e, "git rev-parse failed");
                Error::NotARepository
            })?;
        Ok(())
    }

    fn check_authenticated(&self) -> Result<()> {
        self.gh(&["auth", "status"]).map_err(|e| {
            debug!(error = %e, "gh auth status failed");
            Error::NotAuthenticated
        })?;
        Ok(())
    }

    fn get_pr(&self, number: u64) -> Result<PullRequestRecord> {
        debug!(number, "fetching PR");
        let id = number.to_string();

        let out = self
            .gh(&["pr", "view", &id, "--json", PR_FIELDS])
            .map_err(|e| Error::PrNotFound {
                number,
                message: tool_output(e),
            })?;

        let raw: GhPullRequest = serde_json::from_str(&out).map_err(|e| Error::PrDecode {
            number,
            message: e.to_string(),
        })?;

        let pr = PullRequestRecord::try_from(raw)
            .map_err(|message| Error::PrDecode { number, message })?;

        debug!(number, state = %pr.state, mergeable = %pr.mergeable, "fetched PR");
        Ok(pr)
    }

    fn list_reviews(&self, number: u64) -> Result<Vec<Review>> {
        let id = number.to_string();
        let out = self.gh(&["pr", "view", &id, "--json", "reviews"])?;

        let raw: GhReviews = serde_json::from_str(&out).map_err(|e| Error::PrDecode {
            number,
            message: e.to_string(),
        })?;

        Ok(raw.reviews.into_iter().map(Review::from).collect())
    }

    fn approve_pr(&self, number: u64) -> Result<()> {
        debug!(number, "approving PR");
        let id = number.to_string();

        self.gh(&["pr", "review", &id, "--approve"])
            .map_err(|e| Error::Approval {
                number,
                message: tool_output(e),
            })?;
        Ok(())
    }

    fn merge_pr(&self, number: u64, method: MergeMethod) -> Result<()> {
        debug!(number, %method, "merging PR");
        let id = number.to_string();

        self.gh(&["pr", "merge", &id, "--delete-branch=false", method.gh_flag()])
            .map_err(|e| Error::Merge {
                number,
                message: tool_output(e),
            })?;
        Ok(())
    }
}
