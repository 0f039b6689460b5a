//! User-facing terminal output
//!
//! The workflow never prints directly. It talks to a [`Printer`], so tests
//! can substitute a recording implementation and scripted answers.

pub mod style;

use anstream::{eprintln, print, println};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use style::Stylize;

/// Leveled messages plus a yes/no confirmation prompt
pub trait Printer {
    /// General progress message
    fn info(&self, msg: &str);

    /// A step finished successfully
    fn success(&self, msg: &str);

    /// Non-fatal problem or notable skip
    fn warning(&self, msg: &str);

    /// Fatal problem
    fn error(&self, msg: &str);

    /// Diagnostic detail, shown only in verbose mode
    fn verbose(&self, msg: &str);

    /// Section header
    fn header(&self, title: &str);

    /// Ask a yes/no question.
    ///
    /// Returns `true` only for `y`/`yes` (case-insensitive). Empty input,
    /// anything else, end of input, and read errors all count as "no".
    fn confirm(&self, question: &str) -> bool;
}

/// Whether a line typed at a confirmation prompt means "yes"
pub fn is_affirmative(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Colored printer writing to stdout/stderr
pub struct ConsolePrinter {
    verbose: bool,
    input: RefCell<Box<dyn BufRead>>,
}

impl ConsolePrinter {
    /// Printer reading confirmations from stdin
    pub fn new(verbose: bool) -> Self {
        Self::with_input(verbose, Box::new(io::BufReader::new(io::stdin())))
    }

    /// Printer reading confirmations from the given source
    pub fn with_input(verbose: bool, input: Box<dyn BufRead>) -> Self {
        Self {
            verbose,
            input: RefCell::new(input),
        }
    }

    fn read_answer(&self) -> bool {
        let mut line = String::new();
        match self.input.borrow_mut().read_line(&mut line) {
            Ok(0) => false,
            Ok(_) => is_affirmative(&line),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read confirmation");
                false
            }
        }
    }
}

impl Printer for ConsolePrinter {
    fn info(&self, msg: &str) {
        println!("{}    {msg}", "[INFO]".info());
    }

    fn success(&self, msg: &str) {
        println!("{} {msg}", "[SUCCESS]".success());
    }

    fn warning(&self, msg: &str) {
        println!("{} {msg}", "[WARNING]".warn());
    }

    fn error(&self, msg: &str) {
        eprintln!("{}   {msg}", "[ERROR]".failure());
    }

    fn verbose(&self, msg: &str) {
        if self.verbose {
            println!("{}   {msg}", "[DEBUG]".muted());
        }
    }

    fn header(&self, title: &str) {
        println!();
        println!("{}", format!("=== {title} ===").emphasis());
        println!();
    }

    /// Reads a whole line rather than using `dialoguer::Confirm`: only a typed
    /// `y`/`yes` counts, and end of input (piped or closed stdin) means no.
    fn confirm(&self, question: &str) -> bool {
        print!("{} [y/N]: ", question.warn());
        let _ = io::stdout().flush();
        self.read_answer()
    }
}
