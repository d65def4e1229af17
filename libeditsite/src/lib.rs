//! Edit Site - editing-surface state for the visual site editor
//!
//! This library holds the state core of the site editor: the action
//! protocol, the pure slice reducers, the root reducer that combines them,
//! and the store that owns the current snapshot. Presentation lives in
//! `editsite-tui`; this crate has no rendering, persistence, or network code.

pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod template;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{EditSiteError, Result};
pub use store::{reduce, Action, EditSiteState, NavigationPanel, Preferences, Store, SubscriptionId};
pub use template::{template_info, Template, TemplateInfo};
pub use types::{DeviceType, EntityId, Page, Settings, TemplateType};
