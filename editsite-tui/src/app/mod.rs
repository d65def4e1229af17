//! Application module
//!
//! Contains the terminal application around the editor store:
//! - Event: terminal input and ticks
//! - Keymap: key presses to [`Command`]s
//! - App: the store plus view-local state (overlay, cursor, status line)
//!
//! Editor state lives in the [`Store`] and only changes through dispatched
//! actions. View-local state never leaves this module.

pub mod event;
pub mod keymap;

use libeditsite::store::selectors;
use libeditsite::store::state::ROOT_MENU;
use libeditsite::{Action, Config, EditSiteState, Store, Template};

pub use keymap::Command;

use crate::catalog::Catalog;
use crate::ui::inserter_panel::BLOCKS;
use crate::ui::left_sidebar::{self, SidebarContent};
use crate::ui::navigation_panel::{self, NavRow};
use crate::ui::template_details;

/// Popovers drawn above the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    TemplateDetails,
}

pub struct App {
    pub store: Store,
    pub catalog: Catalog,
    pub overlay: Option<Overlay>,
    /// Highlighted row in the open sidebar panel
    pub cursor: usize,
    pub status: Option<String>,
    pub should_quit: bool,
    pub tick_rate_ms: u64,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let state = config.initial_state();
        let catalog = Catalog::from_settings(&state.settings);
        Self::with_store(Store::with_state(state), catalog, config.editor.tick_rate_ms)
    }

    pub fn with_store(store: Store, catalog: Catalog, tick_rate_ms: u64) -> Self {
        Self {
            store,
            catalog,
            overlay: None,
            cursor: 0,
            status: None,
            should_quit: false,
            tick_rate_ms,
        }
    }

    pub fn state(&self) -> &EditSiteState {
        self.store.state()
    }

    /// Catalog entry for the entity being edited
    pub fn edited_template(&self) -> Option<&Template> {
        let state = self.store.state();
        let id = selectors::get_edited_post_id(state)?;
        self.catalog.find(selectors::get_edited_post_type(state), id)
    }

    /// Rows of the navigation panel's active menu
    pub fn navigation_rows(&self) -> Vec<NavRow<'_>> {
        let menu = selectors::get_navigation_panel_active_menu(self.store.state());
        navigation_panel::rows(menu, &self.catalog)
    }

    fn row_count(&self) -> usize {
        match left_sidebar::sidebar_content(self.store.state()) {
            Some(SidebarContent::Navigation) => self.navigation_rows().len(),
            Some(SidebarContent::Inserter) => BLOCKS.len(),
            None => 0,
        }
    }

    fn panel_position(&self) -> (Option<SidebarContent>, String) {
        let state = self.store.state();
        (
            left_sidebar::sidebar_content(state),
            selectors::get_navigation_panel_active_menu(state).to_string(),
        )
    }

    /// Reset the cursor when the visible list changed underneath it
    fn sync_cursor(&mut self, before: (Option<SidebarContent>, String)) {
        if self.panel_position() != before {
            self.cursor = 0;
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        let before = self.panel_position();
        self.store.dispatch(action);
        self.sync_cursor(before);
    }

    pub fn handle(&mut self, command: Command) {
        self.status = None;

        match command {
            Command::Quit => self.should_quit = true,

            Command::ToggleNavigation => {
                let open = selectors::get_navigation_is_open(self.state());
                self.dispatch(Action::set_is_navigation_panel_opened(!open));
            }

            Command::ToggleInserter => {
                let open = selectors::get_inserter_is_open(self.state());
                self.dispatch(Action::set_is_inserter_opened(!open));
            }

            Command::ShowTemplateDetails => {
                if self.edited_template().is_some() {
                    self.overlay = Some(Overlay::TemplateDetails);
                } else {
                    self.status = Some("No template is being edited".to_string());
                }
            }

            Command::Activate => self.activate(),

            Command::Back => {
                let state = self.state();
                if selectors::get_navigation_is_open(state)
                    && selectors::get_navigation_panel_active_menu(state) != ROOT_MENU
                {
                    self.dispatch(Action::set_navigation_panel_active_menu(ROOT_MENU));
                }
            }

            Command::Up => self.cursor = self.cursor.saturating_sub(1),

            Command::Down => {
                let count = self.row_count();
                if self.cursor + 1 < count {
                    self.cursor += 1;
                }
            }

            Command::CycleDevice => {
                let next = selectors::get_preview_device_type(self.state()).next();
                self.status = Some(format!("Previewing {}", next));
                self.dispatch(Action::set_preview_device_type(next));
            }

            Command::ToggleFeature(feature) => self.dispatch(Action::toggle_feature(feature)),

            Command::Escape => {
                if self.overlay.take().is_some() {
                    return;
                }
                let before = self.panel_position();
                match left_sidebar::sidebar_content(self.state()) {
                    Some(SidebarContent::Inserter) => {
                        left_sidebar::close_inserter(&mut self.store);
                    }
                    Some(SidebarContent::Navigation) => {
                        self.store.dispatch(Action::set_is_navigation_panel_opened(false));
                    }
                    None => {}
                }
                self.sync_cursor(before);
            }
        }
    }

    fn activate(&mut self) {
        if self.overlay == Some(Overlay::TemplateDetails) {
            let before = self.panel_position();
            template_details::show_template_in_sidebar(&mut self.store, || self.overlay = None);
            self.sync_cursor(before);
            return;
        }

        match left_sidebar::sidebar_content(self.state()) {
            Some(SidebarContent::Navigation) => {
                let selected = self
                    .navigation_rows()
                    .get(self.cursor)
                    .map(|row| (navigation_panel::action_for(row), row.label()));
                if let Some((action, label)) = selected {
                    if !matches!(action, Action::SetNavigationPanelActiveMenu { .. }) {
                        self.status = Some(format!("Editing {}", label));
                    }
                    self.dispatch(action);
                }
            }
            Some(SidebarContent::Inserter) => {
                if let Some(block) = BLOCKS.get(self.cursor) {
                    self.status = Some(format!("Selected block {}", block));
                }
            }
            None => {}
        }
    }
}
