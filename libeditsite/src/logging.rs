//! Centralized logging configuration for the Edit Site binaries
//!
//! Provides consistent logging setup with support for:
//! - Text, JSON, and pretty-printed output
//! - Environment variable configuration
//! - Writing to a file instead of stderr (the TUI owns the terminal)
//!
//! # Examples
//!
//! ```no_run
//! use libeditsite::logging::{LoggingConfig, LogFormat};
//!
//! // Initialize with JSON format
//! let config = LoggingConfig::new(LogFormat::Json, "info".to_string(), false);
//! config.init().unwrap();
//!
//! // Or use default settings (respects env vars)
//! libeditsite::logging::init_default().unwrap();
//! ```

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text output (no colors, for piping)
    Text,
    /// Machine-parseable JSON (one JSON object per line)
    Json,
    /// Pretty-printed with colors (for development)
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json, pretty",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Configuration for logging initialization
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
    pub verbose: bool,
    /// Append log lines to this file instead of stderr
    pub log_file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Create a new logging configuration
    ///
    /// # Arguments
    ///
    /// * `format` - Log output format (text, json, or pretty)
    /// * `level` - Minimum log level (error, warn, info, debug, trace)
    /// * `verbose` - If true, defaults to debug level
    pub fn new(format: LogFormat, level: String, verbose: bool) -> Self {
        Self {
            format,
            level,
            verbose,
            log_file: None,
        }
    }

    /// Send output to `path` (appending) instead of stderr
    pub fn with_log_file(mut self, path: PathBuf) -> Self {
        self.log_file = Some(path);
        self
    }

    fn writer(&self) -> Result<BoxMakeWriter> {
        match &self.log_file {
            Some(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                Ok(BoxMakeWriter::new(Mutex::new(file)))
            }
            None => Ok(BoxMakeWriter::new(std::io::stderr)),
        }
    }

    /// Initialize logging with the configured settings
    ///
    /// This should be called once at the start of your program.
    ///
    /// # Panics
    ///
    /// Panics if the logging subscriber has already been initialized
    pub fn init(&self) -> Result<()> {
        use tracing_subscriber::EnvFilter;

        let filter = if self.verbose {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
        };
        let writer = self.writer()?;
        let ansi = self.log_file.is_none();

        match self.format {
            LogFormat::Json => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_current_span(true)
                    .with_span_list(true)
                    .flatten_event(true)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .init();
            }
            LogFormat::Pretty => {
                tracing_subscriber::fmt()
                    .pretty()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_ansi(ansi)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .init();
            }
            LogFormat::Text => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_target(false)
                    .with_level(true)
                    .init();
            }
        }

        Ok(())
    }
}

/// Initialize logging with default settings
///
/// Respects `EDITSITE_LOG_FORMAT`, `EDITSITE_LOG_LEVEL` and
/// `EDITSITE_LOG_FILE`. Falls back to text format with info level on stderr.
///
/// # Examples
///
/// ```bash
/// export EDITSITE_LOG_FORMAT=json
/// export EDITSITE_LOG_LEVEL=debug
/// editsite-replay actions.jsonl
/// ```
pub fn init_default() -> Result<()> {
    config_from_env(LogFormat::Text).init()
}

/// Build a [`LoggingConfig`] from the `EDITSITE_LOG_*` variables
pub fn config_from_env(fallback: LogFormat) -> LoggingConfig {
    let format = std::env::var("EDITSITE_LOG_FORMAT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(fallback);

    let level = std::env::var("EDITSITE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let config = LoggingConfig::new(format, level, false);
    match log_file_from_env() {
        Some(path) => config.with_log_file(path),
        None => config,
    }
}

/// Log file named by `EDITSITE_LOG_FILE`, tilde-expanded
///
/// Unset and empty both mean "no file".
pub fn log_file_from_env() -> Option<PathBuf> {
    match std::env::var("EDITSITE_LOG_FILE") {
        Ok(path) if !path.trim().is_empty() => {
            Some(PathBuf::from(shellexpand::tilde(path.trim()).to_string()))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);

        // Case insensitive
        assert_eq!("TEXT".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("Json".parse::<LogFormat>().unwrap(), LogFormat::Json);
    }

    #[test]
    fn test_log_format_from_str_invalid() {
        let result = "xml".parse::<LogFormat>();
        assert!(result.unwrap_err().contains("Invalid log format: 'xml'"));
    }

    #[test]
    fn test_log_format_display() {
        assert_eq!(LogFormat::Text.to_string(), "text");
        assert_eq!(LogFormat::Json.to_string(), "json");
        assert_eq!(LogFormat::Pretty.to_string(), "pretty");
    }

    #[test]
    fn test_logging_config_new() {
        let config = LoggingConfig::new(LogFormat::Json, "debug".to_string(), true);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "debug");
        assert!(config.verbose);
        assert!(config.log_file.is_none());
    }

    #[test]
    #[serial]
    fn test_config_from_env() {
        std::env::set_var("EDITSITE_LOG_FORMAT", "json");
        std::env::set_var("EDITSITE_LOG_LEVEL", "trace");
        std::env::set_var("EDITSITE_LOG_FILE", "/tmp/editsite.log");
        let config = config_from_env(LogFormat::Pretty);
        std::env::remove_var("EDITSITE_LOG_FORMAT");
        std::env::remove_var("EDITSITE_LOG_LEVEL");
        std::env::remove_var("EDITSITE_LOG_FILE");

        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "trace");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/editsite.log")));
    }

    #[test]
    #[serial]
    fn test_config_from_env_fallback() {
        std::env::remove_var("EDITSITE_LOG_FORMAT");
        std::env::remove_var("EDITSITE_LOG_LEVEL");
        std::env::remove_var("EDITSITE_LOG_FILE");
        let config = config_from_env(LogFormat::Pretty);

        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.level, "info");
        assert!(config.log_file.is_none());
    }

    #[test]
    #[serial]
    fn test_empty_log_file_means_no_file() {
        std::env::set_var("EDITSITE_LOG_FILE", "");
        let empty = log_file_from_env();
        std::env::set_var("EDITSITE_LOG_FILE", "   ");
        let blank = log_file_from_env();
        let config = config_from_env(LogFormat::Text);
        std::env::remove_var("EDITSITE_LOG_FILE");

        assert!(empty.is_none());
        assert!(blank.is_none());
        assert!(config.log_file.is_none());
        assert!(log_file_from_env().is_none());
    }
}
