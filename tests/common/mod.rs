//! Shared test fixtures

#![allow(dead_code)]

mod mock_runner;
mod recording_printer;

pub use mock_runner::{Call, MockRunner};
pub use recording_printer::{Level, RecordingPrinter};

use pr_manager::platform::{GhCliService, PR_FIELDS};
use serde_json::json;

/// JSON payload `gh pr view --json` returns for a PR
pub fn pr_json(number: u64, state: &str, mergeable: &str, approved: bool) -> String {
    let reviews = if approved {
        json!([{ "author": { "login": "reviewer" }, "state": "APPROVED" }])
    } else {
        json!([{ "author": { "login": "reviewer" }, "state": "COMMENTED" }])
    };
    json!({
        "number": number,
        "title": format!("Feature {number}"),
        "state": state,
        "url": format!("https://github.com/test/repo/pull/{number}"),
        "mergeable": mergeable,
        "author": { "login": "octocat", "is_bot": false },
        "reviews": reviews,
    })
    .to_string()
}

/// JSON payload for `gh pr view --json reviews`
pub fn reviews_json(approved: bool) -> String {
    let state = if approved { "APPROVED" } else { "CHANGES_REQUESTED" };
    json!({ "reviews": [{ "author": { "login": "reviewer" }, "state": state }] }).to_string()
}

/// Runner with a healthy environment and the given PR scripted
pub fn runner_with_pr(number: u64, state: &str, mergeable: &str, approved: bool) -> MockRunner {
    let runner = MockRunner::new();
    let id = number.to_string();
    runner.respond("gh", &["version"], "gh version 2.62.0");
    runner.respond("git", &["rev-parse", "--git-dir"], ".git");
    runner.respond("gh", &["auth", "status"], "Logged in to github.com");
    runner.respond(
        "gh",
        &["pr", "view", &id, "--json", PR_FIELDS],
        &pr_json(number, state, mergeable, approved),
    );
    runner.respond(
        "gh",
        &["pr", "view", &id, "--json", "reviews"],
        &reviews_json(approved),
    );
    runner
}

/// `GhCliService` over a scripted runner
pub fn service(runner: MockRunner) -> GhCliService<MockRunner> {
    GhCliService::new(runner)
}
