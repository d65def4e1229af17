//! Actions for the reducer pattern
//!
//! Every state transition is triggered by an [`Action`]. The enum is closed,
//! so each reducer matches it exhaustively; records arriving from outside the
//! process (JSON lines, tests) decode through [`Action::from_value`], which
//! turns anything it does not recognize into [`Action::Unknown`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{DeviceType, EntityId, Page, Settings};

/// Actions that trigger state transitions
///
/// The wire form is a record tagged by `type`, with camelCase payload
/// fields, e.g. `{"type":"SET_INSERTER_OPEN","isOpen":true}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Action {
    // === Preferences ===
    /// Flip a feature flag
    ToggleFeature { feature: String },

    // === Editing canvas ===
    /// Switch the preview viewport
    SetPreviewDeviceType { device_type: DeviceType },

    /// Shallow-merge editor settings
    UpdateSettings {
        #[serde(default)]
        settings: Settings,
    },

    // === Edited entity ===
    /// Edit a template
    SetTemplate {
        #[serde(default)]
        template_id: Option<EntityId>,
    },

    /// Edit a page, rendered through the given template
    SetPage {
        #[serde(default)]
        page: Option<Page>,
        #[serde(default)]
        template_id: Option<EntityId>,
    },

    /// Edit a template part
    SetTemplatePart {
        #[serde(default)]
        template_part_id: Option<EntityId>,
    },

    /// Record the template serving the site front page
    SetHomeTemplate {
        #[serde(default)]
        home_template_id: Option<EntityId>,
    },

    // === Panels ===
    /// Change the navigation panel's menu without opening or closing it
    SetNavigationPanelActiveMenu { menu: String },

    /// Open the navigation panel on a menu
    OpenNavigationPanelToMenu { menu: String },

    /// Open or close the navigation panel
    SetNavigationPanelOpen {
        #[serde(default)]
        is_open: bool,
    },

    /// Open or close the block inserter panel
    SetInserterOpen {
        #[serde(default)]
        is_open: bool,
    },

    /// Any action type this store does not handle
    #[serde(other)]
    Unknown,
}

impl Action {
    pub fn toggle_feature(feature: impl Into<String>) -> Self {
        Action::ToggleFeature {
            feature: feature.into(),
        }
    }

    pub fn set_preview_device_type(device_type: DeviceType) -> Self {
        Action::SetPreviewDeviceType { device_type }
    }

    pub fn update_settings(settings: Settings) -> Self {
        Action::UpdateSettings { settings }
    }

    pub fn set_template(template_id: impl Into<EntityId>) -> Self {
        Action::SetTemplate {
            template_id: Some(template_id.into()),
        }
    }

    pub fn set_page(page: Page, template_id: Option<EntityId>) -> Self {
        Action::SetPage {
            page: Some(page),
            template_id,
        }
    }

    pub fn set_template_part(template_part_id: impl Into<EntityId>) -> Self {
        Action::SetTemplatePart {
            template_part_id: Some(template_part_id.into()),
        }
    }

    pub fn set_home_template(home_template_id: impl Into<EntityId>) -> Self {
        Action::SetHomeTemplate {
            home_template_id: Some(home_template_id.into()),
        }
    }

    pub fn set_navigation_panel_active_menu(menu: impl Into<String>) -> Self {
        Action::SetNavigationPanelActiveMenu { menu: menu.into() }
    }

    pub fn open_navigation_panel_to_menu(menu: impl Into<String>) -> Self {
        Action::OpenNavigationPanelToMenu { menu: menu.into() }
    }

    pub fn set_is_navigation_panel_opened(is_open: bool) -> Self {
        Action::SetNavigationPanelOpen { is_open }
    }

    pub fn set_is_inserter_opened(is_open: bool) -> Self {
        Action::SetInserterOpen { is_open }
    }

    /// Decode an action record, falling back to [`Action::Unknown`]
    ///
    /// A record with a known `type` but a payload that does not decode
    /// (missing `menu`, `feature` of the wrong type, ...) is also treated as
    /// unknown so it cannot disturb any slice.
    pub fn from_value(value: Value) -> Self {
        match serde_json::from_value(value) {
            Ok(action) => action,
            Err(err) => {
                tracing::debug!(error = %err, "Ignoring undecodable action record");
                Action::Unknown
            }
        }
    }

    /// Decode one JSON action record from text
    pub fn from_json(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Self::from_value(value),
            Err(err) => {
                tracing::debug!(error = %err, "Ignoring malformed action JSON");
                Action::Unknown
            }
        }
    }

    /// Wire name of the action type
    pub fn kind(&self) -> &'static str {
        match self {
            Action::ToggleFeature { .. } => "TOGGLE_FEATURE",
            Action::SetPreviewDeviceType { .. } => "SET_PREVIEW_DEVICE_TYPE",
            Action::UpdateSettings { .. } => "UPDATE_SETTINGS",
            Action::SetTemplate { .. } => "SET_TEMPLATE",
            Action::SetPage { .. } => "SET_PAGE",
            Action::SetTemplatePart { .. } => "SET_TEMPLATE_PART",
            Action::SetHomeTemplate { .. } => "SET_HOME_TEMPLATE",
            Action::SetNavigationPanelActiveMenu { .. } => "SET_NAVIGATION_PANEL_ACTIVE_MENU",
            Action::OpenNavigationPanelToMenu { .. } => "OPEN_NAVIGATION_PANEL_TO_MENU",
            Action::SetNavigationPanelOpen { .. } => "SET_NAVIGATION_PANEL_OPEN",
            Action::SetInserterOpen { .. } => "SET_INSERTER_OPEN",
            Action::Unknown => "UNKNOWN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_tagged_records() {
        let action = Action::from_value(json!({
            "type": "OPEN_NAVIGATION_PANEL_TO_MENU",
            "menu": "templates"
        }));
        assert_eq!(action, Action::open_navigation_panel_to_menu("templates"));

        let action = Action::from_value(json!({ "type": "SET_INSERTER_OPEN", "isOpen": true }));
        assert_eq!(action, Action::set_is_inserter_opened(true));
    }

    #[test]
    fn test_decodes_set_page_payload() {
        let action = Action::from_json(
            r#"{"type":"SET_PAGE","page":{"path":"/","context":{"postId":2}},"templateId":"tt1//front-page"}"#,
        );

        match action {
            Action::SetPage { page, template_id } => {
                let page = page.unwrap();
                assert_eq!(page.path.as_deref(), Some("/"));
                assert_eq!(page.context["postId"], json!(2));
                assert_eq!(template_id, Some(EntityId::from("tt1//front-page")));
            }
            other => panic!("Expected SetPage, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_optional_payload_decodes_to_none() {
        let action = Action::from_value(json!({ "type": "SET_TEMPLATE" }));
        assert_eq!(action, Action::SetTemplate { template_id: None });

        let action = Action::from_value(json!({ "type": "SET_NAVIGATION_PANEL_OPEN" }));
        assert_eq!(action, Action::set_is_navigation_panel_opened(false));
    }

    #[test]
    fn test_unrecognized_type_is_unknown() {
        assert_eq!(Action::from_value(json!({ "type": "SET_EDITED_POST" })), Action::Unknown);
        assert_eq!(Action::from_value(json!({ "menu": "root" })), Action::Unknown);
        assert_eq!(Action::from_json("not json"), Action::Unknown);
    }

    #[test]
    fn test_missing_required_payload_is_unknown() {
        assert_eq!(
            Action::from_value(json!({ "type": "SET_NAVIGATION_PANEL_ACTIVE_MENU" })),
            Action::Unknown
        );
        assert_eq!(
            Action::from_value(json!({ "type": "TOGGLE_FEATURE", "feature": 7 })),
            Action::Unknown
        );
    }

    #[test]
    fn test_wire_name_matches_serialized_tag() {
        let action = Action::set_preview_device_type(DeviceType::Tablet);
        let value = serde_json::to_value(&action).unwrap();

        assert_eq!(value["type"], json!(action.kind()));
        assert_eq!(value["deviceType"], json!("Tablet"));
    }
}
