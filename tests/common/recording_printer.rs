//! Printer that records messages and answers prompts from a script

#![allow(dead_code)]

use pr_manager::output::Printer;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Message level as seen by the printer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
    Verbose,
    Header,
}

/// Records everything printed; confirmations pop scripted answers.
///
/// Running out of answers counts as "no", like end of input on a terminal.
#[derive(Default)]
pub struct RecordingPrinter {
    messages: Mutex<Vec<(Level, String)>>,
    answers: Mutex<VecDeque<bool>>,
    prompts: Mutex<Vec<String>>,
}

impl RecordingPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Printer that answers the given confirmations in order
    pub fn answering(answers: &[bool]) -> Self {
        let printer = Self::new();
        printer.answers.lock().unwrap().extend(answers);
        printer
    }

    /// Questions asked so far
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Messages recorded at `level`
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Whether any message at `level` contains `needle`
    pub fn has_message(&self, level: Level, needle: &str) -> bool {
        self.messages_at(level).iter().any(|m| m.contains(needle))
    }

    fn record(&self, level: Level, msg: &str) {
        self.messages.lock().unwrap().push((level, msg.to_string()));
    }
}

impl Printer for RecordingPrinter {
    fn info(&self, msg: &str) {
        self.record(Level::Info, msg);
    }

    fn success(&self, msg: &str) {
        self.record(Level::Success, msg);
    }

    fn warning(&self, msg: &str) {
        self.record(Level::Warning, msg);
    }

    fn error(&self, msg: &str) {
        self.record(Level::Error, msg);
    }

    fn verbose(&self, msg: &str) {
        self.record(Level::Verbose, msg);
    }

    fn header(&self, title: &str) {
        self.record(Level::Header, title);
    }

    fn confirm(&self, question: &str) -> bool {
        self.prompts.lock().unwrap().push(question.to_string());
        self.answers.lock().unwrap().pop_front().unwrap_or(false)
    }
}
