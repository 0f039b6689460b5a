//! Terminal styling helpers

use owo_colors::{OwoColorize, Style, Styled};
use std::fmt::Display;

/// Semantic styles for terminal text
pub trait Stylize: Display + Sized {
    /// Informational label
    fn info(&self) -> Styled<&Self> {
        self.style(Style::new().blue())
    }

    /// Something went right
    fn success(&self) -> Styled<&Self> {
        self.style(Style::new().green())
    }

    /// Needs attention
    fn warn(&self) -> Styled<&Self> {
        self.style(Style::new().yellow())
    }

    /// Something failed
    fn failure(&self) -> Styled<&Self> {
        self.style(Style::new().red())
    }

    /// Debug detail
    fn muted(&self) -> Styled<&Self> {
        self.style(Style::new().cyan())
    }

    /// Section headings
    fn emphasis(&self) -> Styled<&Self> {
        self.style(Style::new().bold().blue())
    }
}

impl<T: Display> Stylize for T {}

/// Render `url` as a terminal hyperlink when stdout supports it.
///
/// Falls back to the plain URL.
pub fn hyperlink(url: &str) -> String {
    if supports_hyperlinks::on(supports_hyperlinks::Stream::Stdout) {
        terminal_link::Link::new(url, url).to_string()
    } else {
        url.to_string()
    }
}
