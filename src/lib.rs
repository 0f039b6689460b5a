//! pr-manager - approve and merge GitHub pull requests from the terminal
//!
//! The library drives the GitHub CLI (`gh`) through a small set of seams:
//! - [`runner::CommandRunner`] runs external programs
//! - [`platform::PlatformService`] maps PR operations onto those programs
//! - [`output::Printer`] handles messages and confirmation prompts
//!
//! [`workflow::Workflow`] sequences them into the review, merge and full
//! workflows. Every run is a single synchronous pass that fails fast.

pub mod config;
pub mod error;
pub mod output;
pub mod platform;
pub mod runner;
pub mod types;
pub mod workflow;

pub use error::{Error, Result};
pub use types::*;
