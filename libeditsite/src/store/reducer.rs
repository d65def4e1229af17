//! Pure reducer functions for state transitions
//!
//! Every slice reducer is `(State, &Action) -> State`: it either hands back
//! the state it was given or builds a new value. No I/O, no logging, no
//! panics. [`reduce`] fans one action out to every slice and reassembles
//! the snapshot.

use std::sync::Arc;

use super::actions::Action;
use super::combine::{with_initial_state, SliceIdentity};
use super::defaults::preferences_defaults;
use super::state::{EditSiteState, Features, NavigationPanel, Preferences};
use crate::types::{DeviceType, EntityId, Page, Settings, TemplateType};

/// Root reducer
///
/// `None` stands for a store that has not been initialized yet: every slice
/// starts from its declared default. When no slice changes, the input `Arc`
/// is returned as-is.
pub fn reduce(state: Option<Arc<EditSiteState>>, action: &Action) -> Arc<EditSiteState> {
    let preferences_slice = with_initial_state(preferences_defaults(), preferences);
    let device_type_slice = with_initial_state(DeviceType::default(), device_type);
    let settings_slice = with_initial_state(Arc::new(Settings::new()), settings);
    let template_id_slice = with_initial_state(None, template_id);
    let template_part_id_slice = with_initial_state(None, template_part_id);
    let template_type_slice = with_initial_state(TemplateType::default(), template_type);
    let page_slice = with_initial_state(None, page);
    let home_template_id_slice = with_initial_state(None, home_template_id);
    let navigation_panel_slice = with_initial_state(NavigationPanel::default(), navigation_panel);
    let block_inserter_panel_slice = with_initial_state(false, block_inserter_panel);

    let prev = state.as_deref();
    let next = EditSiteState {
        preferences: preferences_slice(prev.map(|s| s.preferences.clone()), action),
        device_type: device_type_slice(prev.map(|s| s.device_type.clone()), action),
        settings: settings_slice(prev.map(|s| Arc::clone(&s.settings)), action),
        template_id: template_id_slice(prev.map(|s| s.template_id.clone()), action),
        template_part_id: template_part_id_slice(prev.map(|s| s.template_part_id.clone()), action),
        template_type: template_type_slice(prev.map(|s| s.template_type), action),
        page: page_slice(prev.map(|s| s.page.clone()), action),
        home_template_id: home_template_id_slice(prev.map(|s| s.home_template_id.clone()), action),
        navigation_panel: navigation_panel_slice(prev.map(|s| s.navigation_panel.clone()), action),
        block_inserter_panel: block_inserter_panel_slice(prev.map(|s| s.block_inserter_panel), action),
    };

    match state {
        Some(prev) if prev.as_ref().is_same(&next) => prev,
        _ => Arc::new(next),
    }
}

impl SliceIdentity for EditSiteState {
    fn is_same(&self, other: &Self) -> bool {
        self.preferences.is_same(&other.preferences)
            && self.device_type.is_same(&other.device_type)
            && self.settings.is_same(&other.settings)
            && self.template_id.is_same(&other.template_id)
            && self.template_part_id.is_same(&other.template_part_id)
            && self.template_type.is_same(&other.template_type)
            && self.page.is_same(&other.page)
            && self.home_template_id.is_same(&other.home_template_id)
            && self.navigation_panel.is_same(&other.navigation_panel)
            && self.block_inserter_panel.is_same(&other.block_inserter_panel)
    }
}

/// User preferences: a record of sub-slices, currently just `features`
pub fn preferences(state: Preferences, action: &Action) -> Preferences {
    let next = features(Arc::clone(&state.features), action);
    if next.is_same(&state.features) {
        state
    } else {
        Preferences { features: next }
    }
}

/// Feature flags
///
/// Toggling a name the table does not have yet adds it as `true`.
pub fn features(state: Arc<Features>, action: &Action) -> Arc<Features> {
    match action {
        Action::ToggleFeature { feature } => {
            let mut next = (*state).clone();
            let enabled = next.get(feature).copied().unwrap_or(false);
            next.insert(feature.clone(), !enabled);
            Arc::new(next)
        }
        _ => state,
    }
}

/// Editing canvas preview viewport
pub fn device_type(state: DeviceType, action: &Action) -> DeviceType {
    match action {
        Action::SetPreviewDeviceType { device_type } => device_type.clone(),
        _ => state,
    }
}

/// Editor settings, shallow-merged; incoming keys win
pub fn settings(state: Arc<Settings>, action: &Action) -> Arc<Settings> {
    match action {
        Action::UpdateSettings { settings } if !settings.is_empty() => {
            let mut next = (*state).clone();
            next.extend(settings.iter().map(|(key, value)| (key.clone(), value.clone())));
            Arc::new(next)
        }
        _ => state,
    }
}

/// Id of the template being edited
pub fn template_id(state: Option<EntityId>, action: &Action) -> Option<EntityId> {
    match action {
        Action::SetTemplate { template_id } | Action::SetPage { template_id, .. } => {
            template_id.clone()
        }
        _ => state,
    }
}

/// Id of the template part being edited
pub fn template_part_id(state: Option<EntityId>, action: &Action) -> Option<EntityId> {
    match action {
        Action::SetTemplatePart { template_part_id } => template_part_id.clone(),
        _ => state,
    }
}

/// Which of the two ids above is authoritative
pub fn template_type(state: TemplateType, action: &Action) -> TemplateType {
    match action {
        Action::SetTemplate { .. } | Action::SetPage { .. } => TemplateType::WpTemplate,
        Action::SetTemplatePart { .. } => TemplateType::WpTemplatePart,
        _ => state,
    }
}

/// Page being edited
pub fn page(state: Option<Arc<Page>>, action: &Action) -> Option<Arc<Page>> {
    match action {
        Action::SetPage { page, .. } => page.clone().map(Arc::new),
        _ => state,
    }
}

/// Template serving the site front page
pub fn home_template_id(state: Option<EntityId>, action: &Action) -> Option<EntityId> {
    match action {
        Action::SetHomeTemplate { home_template_id } => home_template_id.clone(),
        _ => state,
    }
}

/// Navigation sidebar
///
/// Opening the inserter closes it; closing the inserter leaves it alone.
pub fn navigation_panel(state: NavigationPanel, action: &Action) -> NavigationPanel {
    match action {
        Action::SetNavigationPanelActiveMenu { menu } => NavigationPanel {
            menu: menu.clone(),
            ..state
        },
        Action::OpenNavigationPanelToMenu { menu } => NavigationPanel {
            menu: menu.clone(),
            is_open: true,
        },
        Action::SetNavigationPanelOpen { is_open } => NavigationPanel {
            is_open: *is_open,
            ..state
        },
        Action::SetInserterOpen { is_open: true } if state.is_open => NavigationPanel {
            is_open: false,
            ..state
        },
        _ => state,
    }
}

/// Block inserter sidebar
///
/// Any navigation-panel action closes it.
pub fn block_inserter_panel(state: bool, action: &Action) -> bool {
    match action {
        Action::OpenNavigationPanelToMenu { .. } => false,
        // NOTE: the closing branch (`isOpen: false`) historically read
        // `isOpen` off this boolean slice, which is never set, so it closes
        // the inserter as well. Kept as-is until the intended behavior
        // (leave the inserter untouched) is confirmed.
        Action::SetNavigationPanelOpen { .. } => false,
        Action::SetInserterOpen { is_open } => *is_open,
        _ => state,
    }
}
