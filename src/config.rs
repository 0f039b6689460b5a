//! Settings file for default workflow options.
//!
//! Settings live in `<config_dir>/pr-manager/config.toml` unless another
//! path is given. Command-line flags always take precedence.

use crate::error::{Error, Result};
use crate::types::{MergeMethod, WorkflowOptions};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the platform config directory
const APP_DIR: &str = "pr-manager";

/// Settings filename
const CONFIG_FILE: &str = "config.toml";

/// Program used when no `gh_binary` is configured
pub const DEFAULT_GH_BINARY: &str = "gh";

/// Contents of the settings file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Skip confirmations by default
    pub auto: Option<bool>,
    /// Verbose output by default
    pub verbose: Option<bool>,
    /// Default merge strategy
    pub merge_method: Option<MergeMethod>,
    /// Program to run instead of `gh`
    pub gh_binary: Option<String>,
}

/// Flags as given on the command line, before merging with settings
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    /// `--auto` was passed
    pub auto: bool,
    /// `--verbose` was passed
    pub verbose: bool,
    /// `--merge-method` value, if passed
    pub merge_method: Option<MergeMethod>,
}

impl Settings {
    /// Build the options for one invocation.
    ///
    /// Flags can only switch boolean settings on.
    pub fn resolve(&self, cli: CliOverrides) -> WorkflowOptions {
        WorkflowOptions {
            auto: cli.auto || self.auto.unwrap_or(false),
            verbose: cli.verbose || self.verbose.unwrap_or(false),
            merge_method: cli
                .merge_method
                .or(self.merge_method)
                .unwrap_or_default(),
        }
    }

    /// Program used for the hosting CLI
    pub fn gh_binary(&self) -> &str {
        self.gh_binary.as_deref().unwrap_or(DEFAULT_GH_BINARY)
    }
}

/// Default location of the settings file, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Load settings from `path`.
///
/// Returns default settings if the file doesn't exist.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))
}

/// Load settings from `path`, or from the default location when `None`.
///
/// Only the default location may be absent; an explicitly named file must exist.
pub fn load_settings_from(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(p) if !p.exists() => Err(Error::Config(format!(
            "settings file {} does not exist",
            p.display()
        ))),
        Some(p) => load_settings(p),
        None => default_config_path().map_or_else(|| Ok(Settings::default()), |p| load_settings(&p)),
    }
}
