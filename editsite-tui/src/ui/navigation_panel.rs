//! Navigation sidebar
//!
//! The root menu links to the template and template-part menus; those list
//! the catalog entries of their type. Activating an entry edits it.

use libeditsite::{Action, Template, TemplateType};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::app::App;
use crate::catalog::Catalog;

pub const TEMPLATES_MENU: &str = "templates";
pub const TEMPLATE_PARTS_MENU: &str = "template-parts";

/// One selectable row of the panel
#[derive(Debug, Clone, PartialEq)]
pub enum NavRow<'a> {
    /// Link to another menu
    Menu {
        label: &'static str,
        menu: &'static str,
    },
    Template(&'a Template),
}

impl NavRow<'_> {
    pub fn label(&self) -> String {
        match self {
            NavRow::Menu { label, .. } => format!("{} ›", label),
            NavRow::Template(template) => template
                .title
                .clone()
                .unwrap_or_else(|| template.slug.clone()),
        }
    }
}

/// Rows shown for `menu`; unknown menus show the root menu
pub fn rows<'a>(menu: &str, catalog: &'a Catalog) -> Vec<NavRow<'a>> {
    let templates_of = |template_type: TemplateType| -> Vec<NavRow<'a>> {
        catalog
            .of_type(template_type)
            .into_iter()
            .map(NavRow::Template)
            .collect()
    };

    match menu {
        TEMPLATES_MENU => templates_of(TemplateType::WpTemplate),
        TEMPLATE_PARTS_MENU => templates_of(TemplateType::WpTemplatePart),
        _ => vec![
            NavRow::Menu {
                label: "Templates",
                menu: TEMPLATES_MENU,
            },
            NavRow::Menu {
                label: "Template parts",
                menu: TEMPLATE_PARTS_MENU,
            },
        ],
    }
}

/// Action dispatched when `row` is activated
pub fn action_for(row: &NavRow<'_>) -> Action {
    match row {
        NavRow::Menu { menu, .. } => Action::set_navigation_panel_active_menu(*menu),
        NavRow::Template(template) => match template.template_type {
            TemplateType::WpTemplate => Action::set_template(template.id.clone()),
            TemplateType::WpTemplatePart => Action::set_template_part(template.id.clone()),
        },
    }
}

fn menu_title(menu: &str) -> &'static str {
    match menu {
        TEMPLATES_MENU => " Templates ",
        TEMPLATE_PARTS_MENU => " Template parts ",
        _ => " Navigation ",
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.store.state();
    let menu = libeditsite::store::selectors::get_navigation_panel_active_menu(state);
    let edited = app.edited_template().map(|template| &template.id);

    let items: Vec<ListItem> = app
        .navigation_rows()
        .iter()
        .map(|row| {
            let marker = match row {
                NavRow::Template(template) if Some(&template.id) == edited => "● ",
                _ => "  ",
            };
            ListItem::new(Line::from(vec![Span::raw(marker), Span::raw(row.label())]))
        })
        .collect();

    let hint = if menu == libeditsite::store::state::ROOT_MENU {
        " Esc: close "
    } else {
        " ⌫: back | Esc: close "
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(menu_title(menu))
                .title_bottom(hint)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut list_state = ListState::default().with_selected(Some(app.cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}
