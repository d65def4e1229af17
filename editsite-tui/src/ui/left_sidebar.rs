//! Left sidebar container
//!
//! Shows the navigation panel when it is open, otherwise the inserter when
//! that is open, otherwise nothing.

use libeditsite::store::selectors::{get_inserter_is_open, get_navigation_is_open};
use libeditsite::{Action, EditSiteState, Store};
use ratatui::{layout::Rect, Frame};

use super::{inserter_panel, navigation_panel};
use crate::app::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarContent {
    Navigation,
    Inserter,
}

pub fn sidebar_content(state: &EditSiteState) -> Option<SidebarContent> {
    if get_navigation_is_open(state) {
        Some(SidebarContent::Navigation)
    } else if get_inserter_is_open(state) {
        Some(SidebarContent::Inserter)
    } else {
        None
    }
}

/// The inserter panel's close control
pub fn close_inserter(store: &mut Store) -> bool {
    store.dispatch(Action::set_is_inserter_opened(false))
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    match sidebar_content(app.store.state()) {
        Some(SidebarContent::Navigation) => navigation_panel::render(frame, area, app),
        Some(SidebarContent::Inserter) => inserter_panel::render(frame, area, app),
        None => {}
    }
}
