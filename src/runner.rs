//! External process gateway
//!
//! Every call to `gh` or `git` goes through [`CommandRunner`], so the
//! workflow can be exercised with scripted responses instead of real tools.

use crate::error::{Error, Result};
use std::process::Command;
use tracing::{debug, instrument};

/// Runs an external program and returns its trimmed stdout
pub trait CommandRunner {
    /// Run `program` with `args`, waiting for it to finish.
    ///
    /// A non-zero exit yields [`Error::ExternalTool`] carrying the trimmed
    /// stderr, or the trimmed stdout when stderr is empty.
    fn run(&self, program: &str, args: &[&str]) -> Result<String>;
}

/// Production runner backed by `std::process::Command`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    /// Create a new process runner
    pub const fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    #[instrument(skip(self), level = "debug")]
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let command = command_line(program, args);

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| Error::ExternalTool {
                command: command.clone(),
                message: format!("failed to start: {e}"),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();

        if output.status.success() {
            debug!(bytes = stdout.len(), "command succeeded");
            return Ok(stdout);
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let message = failure_message(stderr, stdout, output.status.code());
        debug!(exit_code = ?output.status.code(), %message, "command failed");

        Err(Error::ExternalTool { command, message })
    }
}

/// Render a program and its arguments as a single line for messages
pub fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

fn failure_message(stderr: String, stdout: String, code: Option<i32>) -> String {
    if !stderr.is_empty() {
        stderr
    } else if !stdout.is_empty() {
        stdout
    } else {
        code.map_or_else(
            || "terminated by signal".to_string(),
            |c| format!("exited with status {c}"),
        )
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_success_returns_trimmed_stdout() {
        let out = ProcessRunner::new()
            .run("sh", &["-c", "printf '  hello\\n\\n'"])
            .unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn test_failure_prefers_stderr() {
        let err = ProcessRunner::new()
            .run("sh", &["-c", "echo out; echo ' boom ' >&2; exit 3"])
            .unwrap_err();
        match err {
            Error::ExternalTool { command, message } => {
                assert!(command.starts_with("sh -c"));
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_failure_falls_back_to_stdout() {
        let err = ProcessRunner::new()
            .run("sh", &["-c", "echo only-stdout; exit 1"])
            .unwrap_err();
        assert!(
            matches!(&err, Error::ExternalTool { message, .. } if message == "only-stdout"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_silent_failure_reports_exit_status() {
        let err = ProcessRunner::new()
            .run("sh", &["-c", "exit 4"])
            .unwrap_err();
        assert!(
            matches!(&err, Error::ExternalTool { message, .. } if message == "exited with status 4"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_missing_program_is_external_tool_error() {
        let err = ProcessRunner::new()
            .run("pr-manager-definitely-missing-binary", &[])
            .unwrap_err();
        assert!(matches!(err, Error::ExternalTool { .. }));
        assert!(err.to_string().contains("failed to start"));
    }

    #[test]
    fn test_command_line_joins_args() {
        assert_eq!(
            command_line("gh", &["pr", "view", "42"]),
            "gh pr view 42"
        );
        assert_eq!(command_line("gh", &[]), "gh");
    }
}
