//! Shared pre-flight steps: environment checks, PR fetch, state guards

use crate::error::{Error, Result};
use crate::output::Printer;
use crate::output::style::hyperlink;
use crate::platform::PlatformService;
use crate::types::PullRequestRecord;
use tracing::debug;

/// Run the three environment checks in fixed order: installed, repository, authenticated.
///
/// Stops at the first failure.
pub fn validate_environment(platform: &dyn PlatformService) -> Result<()> {
    platform.check_installed()?;
    platform.check_repository()?;
    platform.check_authenticated()?;
    debug!("environment checks passed");
    Ok(())
}

/// Fetch the PR snapshot and print its details in verbose mode
pub fn fetch_pr(
    platform: &dyn PlatformService,
    printer: &dyn Printer,
    number: u64,
) -> Result<PullRequestRecord> {
    printer.info(&format!("Fetching PR #{number}..."));
    let pr = platform.get_pr(number)?;

    printer.verbose(&format!("Title:     {}", pr.title));
    printer.verbose(&format!("State:     {}", pr.state));
    printer.verbose(&format!("Author:    {}", pr.author));
    printer.verbose(&format!("URL:       {}", hyperlink(&pr.url)));
    printer.verbose(&format!("Mergeable: {}", pr.mergeable));
    printer.verbose(&format!("Reviews:   {}", pr.reviews.len()));

    Ok(pr)
}

/// Fail with `NotOpen` unless the PR is open
pub fn ensure_open(pr: &PullRequestRecord) -> Result<()> {
    if pr.is_open() {
        Ok(())
    } else {
        Err(Error::NotOpen {
            number: pr.number,
            state: pr.state,
        })
    }
}

/// Fail with `Conflict` if the PR has merge conflicts
pub fn ensure_no_conflicts(pr: &PullRequestRecord) -> Result<()> {
    if pr.has_conflicts() {
        Err(Error::Conflict(pr.number))
    } else {
        Ok(())
    }
}
