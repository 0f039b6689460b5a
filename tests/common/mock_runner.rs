//! Scripted command runner for testing

#![allow(dead_code)]

use pr_manager::error::{Error, Result};
use pr_manager::runner::{CommandRunner, command_line};
use std::sync::{Arc, Mutex};

/// One recorded invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub program: String,
    pub args: Vec<String>,
}

impl Call {
    /// Whether this call is `program` with arguments starting with `prefix`
    pub fn matches(&self, program: &str, prefix: &[&str]) -> bool {
        self.program == program
            && self.args.len() >= prefix.len()
            && self.args.iter().zip(prefix).all(|(a, p)| a == p)
    }
}

struct Rule {
    program: String,
    prefix: Vec<String>,
    response: std::result::Result<String, String>,
}

/// Simple mock runner for testing
///
/// Features:
/// - Responses scripted by program and argument prefix (first match wins)
/// - Unscripted calls succeed with empty output
/// - Call tracking for verification
/// - Clones share state, so a test keeps a handle after giving one to the service
#[derive(Clone)]
pub struct MockRunner {
    rules: Arc<Mutex<Vec<Rule>>>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRunner {
    pub fn new() -> Self {
        Self {
            rules: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Script a successful response
    pub fn respond(&self, program: &str, prefix: &[&str], stdout: &str) {
        self.push_rule(program, prefix, Ok(stdout.to_string()));
    }

    /// Script a failure carrying `stderr`
    pub fn fail(&self, program: &str, prefix: &[&str], stderr: &str) {
        self.push_rule(program, prefix, Err(stderr.to_string()));
    }

    fn push_rule(
        &self,
        program: &str,
        prefix: &[&str],
        response: std::result::Result<String, String>,
    ) {
        self.rules.lock().unwrap().push(Rule {
            program: program.to_string(),
            prefix: prefix.iter().map(ToString::to_string).collect(),
            response,
        });
    }

    // === Call verification methods ===

    /// All recorded calls in order
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Recorded calls matching `program` and argument prefix
    pub fn calls_matching(&self, program: &str, prefix: &[&str]) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| c.matches(program, prefix))
            .collect()
    }

    /// `gh pr review ... --approve` calls
    pub fn approve_calls(&self) -> Vec<Call> {
        self.calls_matching("gh", &["pr", "review"])
    }

    /// `gh pr merge ...` calls
    pub fn merge_calls(&self) -> Vec<Call> {
        self.calls_matching("gh", &["pr", "merge"])
    }

    /// Number of calls that change state on GitHub
    pub fn mutating_call_count(&self) -> usize {
        self.approve_calls().len() + self.merge_calls().len()
    }

    /// Assert that nothing was approved or merged
    pub fn assert_no_mutations(&self) {
        let calls = self.calls();
        assert_eq!(
            self.mutating_call_count(),
            0,
            "Expected no approve/merge calls but got: {calls:?}"
        );
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        self.calls.lock().unwrap().push(Call {
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
        });

        let rules = self.rules.lock().unwrap();
        let rule = rules.iter().find(|r| {
            r.program == program
                && args.len() >= r.prefix.len()
                && args.iter().zip(&r.prefix).all(|(a, p)| a == p)
        });

        match rule.map(|r| r.response.clone()) {
            Some(Ok(stdout)) => Ok(stdout),
            Some(Err(stderr)) => Err(Error::ExternalTool {
                command: command_line(program, args),
                message: stderr,
            }),
            None => Ok(String::new()),
        }
    }
}
