//! Editing-surface state
//!
//! One immutable snapshot per dispatched action. Heap-backed slices sit
//! behind `Arc` so an untouched slice is carried into the next snapshot
//! without copying and can be compared by pointer.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::defaults::preferences_defaults;
use crate::types::{DeviceType, EntityId, Page, Settings, TemplateType};

/// Feature name -> enabled
pub type Features = BTreeMap<String, bool>;

/// Root editor state
///
/// Field names serialize as the slice keys the editor has always used
/// (`deviceType`, `blockInserterPanel`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditSiteState {
    pub preferences: Preferences,
    pub device_type: DeviceType,
    pub settings: Arc<Settings>,
    pub template_id: Option<EntityId>,
    pub template_part_id: Option<EntityId>,
    pub template_type: TemplateType,
    pub page: Option<Arc<Page>>,
    pub home_template_id: Option<EntityId>,
    pub navigation_panel: NavigationPanel,
    pub block_inserter_panel: bool,
}

/// User preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub features: Arc<Features>,
}

/// Navigation sidebar: which menu it shows and whether it is visible
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationPanel {
    pub menu: String,
    pub is_open: bool,
}

/// Menu the navigation panel starts on
pub const ROOT_MENU: &str = "root";

impl Default for NavigationPanel {
    fn default() -> Self {
        Self {
            menu: ROOT_MENU.to_string(),
            is_open: false,
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        preferences_defaults()
    }
}

impl Default for EditSiteState {
    fn default() -> Self {
        Self {
            preferences: Preferences::default(),
            device_type: DeviceType::default(),
            settings: Arc::new(Settings::new()),
            template_id: None,
            template_part_id: None,
            template_type: TemplateType::default(),
            page: None,
            home_template_id: None,
            navigation_panel: NavigationPanel::default(),
            block_inserter_panel: false,
        }
    }
}

impl EditSiteState {
    /// Create state with every slice at its default
    pub fn new() -> Self {
        Self::default()
    }
}
