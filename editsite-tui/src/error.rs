//! Error types for editsite-tui
//!
//! Wraps state-core errors (configuration, logging setup) and terminal I/O
//! errors so the binary can pick an exit code from one type.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// State core error
    #[error("Editor error: {0}")]
    Core(#[from] libeditsite::EditSiteError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;

impl TuiError {
    /// Process exit code: core errors keep their own, terminal failures are 1
    pub fn exit_code(&self) -> i32 {
        match self {
            TuiError::Core(err) => err.exit_code(),
            TuiError::Terminal(_) => 1,
        }
    }
}
