//! Configuration for the search host
//!
//! Settings come from environment variables, with CLI flags layered on top
//! by the binary:
//! - `EDITORIAL_DATA`: path to the JSON collection (default `data/editorials.json`)
//! - `EDITORIAL_FORMAT`: `text | html | markdown | json` (default `text`)
//! - `EDITORIAL_CATEGORY`: default category selector value (default `all`)

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::render::{HtmlFormatter, JsonFormatter, MarkdownFormatter, RenderOutcome, TextFormatter};

pub const DATA_ENV: &str = "EDITORIAL_DATA";
pub const FORMAT_ENV: &str = "EDITORIAL_FORMAT";
pub const CATEGORY_ENV: &str = "EDITORIAL_CATEGORY";

pub const DEFAULT_DATA_PATH: &str = "data/editorials.json";
pub const DEFAULT_CATEGORY: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown output format '{0}' (expected text, html, markdown or json)")]
    UnknownFormat(String),
}

/// How the host materializes a `RenderOutcome`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    #[value(alias = "md")]
    Markdown,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
        }
    }

    /// Materialize an outcome in this format
    pub fn format(&self, outcome: &RenderOutcome) -> Result<String, serde_json::Error> {
        Ok(match self {
            OutputFormat::Text => TextFormatter::format(outcome),
            OutputFormat::Html => HtmlFormatter::format(outcome),
            OutputFormat::Markdown => MarkdownFormatter::format(outcome),
            OutputFormat::Json => JsonFormatter::format(outcome)?,
        })
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Same value names and aliases as the `--format` flag
        let raw = s.trim();
        <OutputFormat as clap::ValueEnum>::from_str(raw, true)
            .map_err(|_| ConfigError::UnknownFormat(raw.to_string()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub data_path: PathBuf,
    pub format: OutputFormat,
    pub category: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            format: OutputFormat::default(),
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

impl SearchConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a variable lookup (unset -> `None`)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(DATA_ENV).filter(|v| !v.is_empty()) {
            config.data_path = PathBuf::from(path);
        }
        if let Some(format) = lookup(FORMAT_ENV).filter(|v| !v.is_empty()) {
            config.format = format.parse()?;
        }
        if let Some(category) = lookup(CATEGORY_ENV).filter(|v| !v.is_empty()) {
            config.category = category;
        }

        Ok(config)
    }

    /// Layer explicit (CLI) values over this configuration
    pub fn with_overrides(
        mut self,
        data_path: Option<PathBuf>,
        format: Option<OutputFormat>,
        category: Option<String>,
    ) -> Self {
        if let Some(path) = data_path {
            self.data_path = path;
        }
        if let Some(format) = format {
            self.format = format;
        }
        if let Some(category) = category {
            self.category = category;
        }
        self
    }
}
