//! editsite-tui library
//!
//! Exports types and modules for testing and potential reuse.

pub mod app;
pub mod catalog;
pub mod error;
pub mod terminal;
pub mod ui;

// Re-export commonly used types
pub use app::{App, Command, Overlay};
pub use catalog::Catalog;
pub use error::{Result, TuiError};
