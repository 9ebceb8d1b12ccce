//! Configuration handling for the job aid extractor.
//!
//! Values come from environment variables with defaults suited to a
//! local run. The binary layers command-line flags on top of this.

use std::env;
use std::str::FromStr;

use thiserror::Error;

use crate::analyzer::AnalyzerOptions;
use crate::source::DEFAULT_MAX_FILE_BYTES;
use crate::structure::StructureOptions;

/// Environment variable names.
pub const ENV_TITLE: &str = "JOBAID_TITLE";
pub const ENV_AUTHOR: &str = "JOBAID_AUTHOR";
pub const ENV_READ_CONCURRENCY: &str = "JOBAID_READ_CONCURRENCY";
pub const ENV_MAX_FILE_BYTES: &str = "JOBAID_MAX_FILE_BYTES";
pub const ENV_LOG_FORMAT: &str = "JOBAID_LOG_FORMAT";

const DEFAULT_READ_CONCURRENCY: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidValue {
                field: ENV_LOG_FORMAT,
                reason: format!("expected 'pretty' or 'json', got '{}'", other),
            }),
        }
    }
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    title: Option<String>,
    author: Option<String>,
    read_concurrency: usize,
    max_file_bytes: u64,
    log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: None,
            author: None,
            read_concurrency: DEFAULT_READ_CONCURRENCY,
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let title = optional_text(ENV_TITLE)?;
        let author = optional_text(ENV_AUTHOR)?;

        let read_concurrency =
            parse_var(ENV_READ_CONCURRENCY)?.unwrap_or(DEFAULT_READ_CONCURRENCY);
        if read_concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                field: ENV_READ_CONCURRENCY,
                reason: "must be at least 1".to_string(),
            });
        }

        let max_file_bytes = parse_var(ENV_MAX_FILE_BYTES)?.unwrap_or(DEFAULT_MAX_FILE_BYTES);

        let log_format = match env::var(ENV_LOG_FORMAT) {
            Ok(value) => value.parse()?,
            Err(_) => LogFormat::default(),
        };

        Ok(Self {
            title,
            author,
            read_concurrency,
            max_file_bytes,
            log_format,
        })
    }

    /// Blank titles are rejected, as they are from the environment.
    pub fn with_title(mut self, title: impl Into<String>) -> Result<Self, ConfigError> {
        self.title = Some(non_blank("title", title.into())?);
        Ok(self)
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Result<Self, ConfigError> {
        self.author = Some(non_blank("author", author.into())?);
        Ok(self)
    }

    /// Zero is treated as one.
    pub fn with_read_concurrency(mut self, read_concurrency: usize) -> Self {
        self.read_concurrency = read_concurrency.max(1);
        self
    }

    pub fn max_file_bytes(&self) -> u64 {
        self.max_file_bytes
    }

    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }

    pub fn analyzer_options(&self) -> AnalyzerOptions {
        AnalyzerOptions {
            read_concurrency: self.read_concurrency,
        }
    }

    pub fn structure_options(&self) -> StructureOptions {
        StructureOptions {
            title: self.title.clone(),
            author: self.author.clone(),
        }
    }
}

/// Errors that can occur while building a configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

fn optional_text(key: &'static str) -> Result<Option<String>, ConfigError> {
    env::var(key).ok().map(|value| non_blank(key, value)).transpose()
}

fn non_blank(field: &'static str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "must not be blank".to_string(),
        });
    }
    Ok(value)
}

fn parse_var<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                field: key,
                reason: format!("'{}' is not a valid number", value),
            }),
        Err(_) => Ok(None),
    }
}
