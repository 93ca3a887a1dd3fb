//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::output::OutputFormat;

/// Separator width used when the config file doesn't set one.
pub const DEFAULT_SEPARATOR_WIDTH: usize = 40;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default output format for listings and search results
    pub format: Option<OutputFormat>,

    /// Width of the dashed line printed between notes
    pub separator_width: Option<usize>,
}

impl Config {
    /// Load configuration from `path`, or the default location if `None`.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))?;
        tracing::debug!(path = %config_path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/smart-notes/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("smart-notes")
            .join("config.toml")
    }

    /// Resolve the output format, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--format` argument
    /// 2. Config file `format` setting
    /// 3. Human
    pub fn format(&self, cli_format: Option<OutputFormat>) -> OutputFormat {
        cli_format.or(self.format).unwrap_or_default()
    }

    /// Resolve the separator width.
    pub fn separator_width(&self) -> usize {
        self.separator_width.unwrap_or(DEFAULT_SEPARATOR_WIDTH)
    }
}
