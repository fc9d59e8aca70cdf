//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`. Every key has a default, and
//! command-line flags take precedence over file values.
//!
//! ```yaml
//! format: json
//! skip_comments: true
//! generate_seed: 42
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One human-readable line (or block) per identifier.
    #[default]
    Text,
    /// A single pretty-printed JSON document.
    Json,
}

/// Settings loaded from the `--config` file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub format: OutputFormat,
    /// Skip lines starting with `#` in `--input` files.
    pub skip_comments: bool,
    /// Seed for `generate` when `--seed` is not given.
    pub generate_seed: Option<u64>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            skip_comments: true,
            generate_seed: None,
        }
    }
}

impl CliConfig {
    /// Parse a configuration document. An empty document yields the defaults.
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).context("invalid configuration")
    }

    /// Read and parse the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_yaml(&text)
            .with_context(|| format!("failed to load config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Load `path` if given, otherwise use the defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply a `--format` flag on top of the file value.
    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}
