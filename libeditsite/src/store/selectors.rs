//! Read API over a state snapshot
//!
//! Every selector is plain field access (plus at most one branch), so views
//! can call them on each frame.

use super::state::EditSiteState;
use crate::types::{DeviceType, EntityId, Page, Settings, TemplateType};

/// Whether a feature flag is on; unknown features are off
pub fn is_feature_active(state: &EditSiteState, feature: &str) -> bool {
    state.preferences.features.get(feature).copied().unwrap_or(false)
}

pub fn get_preview_device_type(state: &EditSiteState) -> &DeviceType {
    &state.device_type
}

pub fn get_settings(state: &EditSiteState) -> &Settings {
    &state.settings
}

/// Post type of the entity being edited
pub fn get_edited_post_type(state: &EditSiteState) -> TemplateType {
    state.template_type
}

/// Id of the entity being edited, following [`get_edited_post_type`]
pub fn get_edited_post_id(state: &EditSiteState) -> Option<&EntityId> {
    match state.template_type {
        TemplateType::WpTemplate => state.template_id.as_ref(),
        TemplateType::WpTemplatePart => state.template_part_id.as_ref(),
    }
}

pub fn get_page(state: &EditSiteState) -> Option<&Page> {
    state.page.as_deref()
}

pub fn get_home_template_id(state: &EditSiteState) -> Option<&EntityId> {
    state.home_template_id.as_ref()
}

pub fn get_navigation_panel_active_menu(state: &EditSiteState) -> &str {
    &state.navigation_panel.menu
}

pub fn get_navigation_is_open(state: &EditSiteState) -> bool {
    state.navigation_panel.is_open
}

pub fn get_inserter_is_open(state: &EditSiteState) -> bool {
    state.block_inserter_panel
}
