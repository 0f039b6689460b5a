//! Command-line surface: argument parsing and dispatch

mod logging;

use anstream::eprintln;
use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand};
use pr_manager::config::{CliOverrides, load_settings_from};
use pr_manager::output::{ConsolePrinter, Printer};
use pr_manager::platform::GhCliService;
use pr_manager::runner::ProcessRunner;
use pr_manager::workflow::Workflow;
use pr_manager::{MergeMethod, WorkflowOutcome, parse_pr_number};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

/// Automate GitHub PR review and merge workflows
#[derive(Parser, Debug)]
#[command(name = "pr-manager", version, long_about = None)]
#[command(after_help = "Examples:\n  pr-manager 42\n  pr-manager review 42 --auto\n  pr-manager full 42 -a -m squash")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// PR number (runs the full workflow when no command is given)
    #[arg(value_name = "PR_NUMBER", value_parser = pr_number)]
    pr: Option<u64>,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Skip all interactive prompts (useful for CI)
    #[arg(short, long, global = true)]
    auto: bool,

    /// Print extra diagnostic information
    #[arg(short, long, global = true, alias = "quiet", short_alias = 'q')]
    verbose: bool,

    /// Merge strategy: merge, squash, rebase or auto [default: merge]
    #[arg(short = 'm', long, global = true, value_parser = merge_method, value_name = "METHOD")]
    merge_method: Option<MergeMethod>,

    /// Settings file (defaults to <config dir>/pr-manager/config.toml)
    #[arg(long, global = true, env = "PR_MANAGER_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,
}

impl GlobalArgs {
    const fn overrides(&self) -> CliOverrides {
        CliOverrides {
            auto: self.auto,
            verbose: self.verbose,
            merge_method: self.merge_method,
        }
    }
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Commands {
    /// Review (approve) a pull request
    ///
    /// Skips approval if the PR is already approved.
    Review {
        /// PR number
        #[arg(value_name = "PR_NUMBER", value_parser = pr_number)]
        pr: u64,
    },

    /// Merge a pull request
    ///
    /// The PR must be open and free of merge conflicts.
    Merge {
        /// PR number
        #[arg(value_name = "PR_NUMBER", value_parser = pr_number)]
        pr: u64,
    },

    /// Review and merge a pull request (default workflow)
    Full {
        /// PR number
        #[arg(value_name = "PR_NUMBER", value_parser = pr_number)]
        pr: u64,
    },
}

fn pr_number(input: &str) -> Result<u64, String> {
    parse_pr_number(input).map_err(|e| e.to_string())
}

fn merge_method(input: &str) -> Result<MergeMethod, String> {
    input.parse::<MergeMethod>().map_err(|e| e.to_string())
}

impl Cli {
    /// The command to run; a bare PR number means `full`.
    ///
    /// A bare number combined with a subcommand is rejected.
    fn action(&self) -> Result<Commands, clap::Error> {
        match (self.command, self.pr) {
            (Some(command), None) => Ok(command),
            (None, Some(pr)) => Ok(Commands::Full { pr }),
            (Some(_), Some(pr)) => Err(Cli::command().error(
                ErrorKind::ArgumentConflict,
                format!(
                    "PR number {pr} cannot be combined with a subcommand\nExample: pr-manager review {pr}"
                ),
            )),
            (None, None) => Err(Cli::command().error(
                ErrorKind::MissingRequiredArgument,
                "PR number is required\nExample: pr-manager review 42",
            )),
        }
    }
}

/// Parse arguments, run the selected workflow, and map the result to an exit code
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let action = match cli.action() {
        Ok(action) => action,
        Err(e) => e.exit(),
    };

    match execute(&cli.global, action) {
        Ok(outcome) => {
            debug!(?outcome, "workflow finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!();
            ConsolePrinter::new(false).error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn execute(global: &GlobalArgs, action: Commands) -> anyhow::Result<WorkflowOutcome> {
    let settings = load_settings_from(global.config.as_deref())?;
    let options = settings.resolve(global.overrides());
    logging::init(options.verbose);
    debug!(?options, gh = settings.gh_binary(), "resolved options");

    let platform = GhCliService::with_binary(ProcessRunner::new(), settings.gh_binary());
    let printer = ConsolePrinter::new(options.verbose);
    let workflow = Workflow::new(&platform, &printer, &options);

    let outcome = match action {
        Commands::Review { pr } => workflow.review(pr)?,
        Commands::Merge { pr } => workflow.merge(pr)?,
        Commands::Full { pr } => workflow.full(pr)?,
    };
    Ok(outcome)
}
