//! Shell configuration via an optional TOML file.
//!
//! Nothing is read unless `--config <FILE>` is given. Flags given on the
//! command line override values from the file.

use serde::{Deserialize, Serialize};
use simpledb_core::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

/// History file name placed in `$HOME` when none is configured.
pub const HISTORY_FILE_NAME: &str = ".simpledb_history";

/// Shell configuration.
///
/// # Example
///
/// ```toml
/// log_level = "warn"
/// history = true
/// # history_file = "/tmp/simpledb_history"
/// json = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShellConfig {
    /// Diagnostics level for stderr: `off`, `error`, `warn`, `info`, `debug`, `trace`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Load and save REPL history.
    #[serde(default = "default_history")]
    pub history: bool,
    /// History file; `$HOME/.simpledb_history` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_file: Option<PathBuf>,
    /// Emit JSON responses instead of the text protocol.
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_history() -> bool {
    true
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            history: default_history(),
            history_file: None,
            json: false,
        }
    }
}

impl ShellConfig {
    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or names an
    /// unknown log level.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: ShellConfig = toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.level_filter()?;
        Ok(config)
    }

    /// Apply command-line flags on top of this config.
    pub fn apply_flags(&mut self, matches: &clap::ArgMatches) {
        if let Some(level) = matches.get_one::<String>("log-level") {
            self.log_level = level.clone();
        }
        if matches.get_flag("json") {
            self.json = true;
        }
        if matches.get_flag("no-history") {
            self.history = false;
        }
    }

    /// Parse `log_level` into a tracing filter.
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level.parse::<LevelFilter>().map_err(|_| {
            Error::invalid_input(format!(
                "Invalid log level '{}'. Expected off, error, warn, info, debug or trace.",
                self.log_level
            ))
        })
    }

    /// Where REPL history lives, if history is enabled.
    pub fn history_path(&self) -> Option<PathBuf> {
        if !self.history {
            return None;
        }
        self.history_file.clone().or_else(|| {
            std::env::var_os("HOME").map(|home| PathBuf::from(home).join(HISTORY_FILE_NAME))
        })
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# SimpleDB shell configuration
#
# Diagnostics written to stderr (default: "warn")
#   one of "off", "error", "warn", "info", "debug", "trace"
log_level = "warn"

# Keep REPL history between interactive sessions (default: true)
history = true
# history_file = "/home/me/.simpledb_history"

# One JSON object per response instead of the text protocol (default: false)
json = false
"#
    }
}
