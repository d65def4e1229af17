//! Error types for Edit Site
//!
//! The reducers and the store never fail. Errors only come from the edges:
//! loading configuration and reading input.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EditSiteError>;

#[derive(Error, Debug)]
pub enum EditSiteError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl EditSiteError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            EditSiteError::InvalidInput(_) => 3,
            EditSiteError::Config(_) => 2,
            EditSiteError::Io(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}
