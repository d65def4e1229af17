//! Template details popover
//!
//! Shows the edited template's name and description with a button that
//! jumps to the template list in the navigation panel.

use libeditsite::{template_info, Action, Settings, Store, Template, TemplateInfo};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Menu the "View in navigation." button opens
pub const VIEW_IN_NAVIGATION_MENU: &str = "templates";

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateDetails {
    info: TemplateInfo,
}

impl TemplateDetails {
    /// Details for `template`; nothing to show without one
    pub fn new(template: Option<&Template>, settings: &Settings) -> Option<Self> {
        let template = template?;
        Some(Self {
            info: template_info(template, settings),
        })
    }

    pub fn info(&self) -> &TemplateInfo {
        &self.info
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::styled("Template details", Style::default().add_modifier(Modifier::BOLD)),
            Line::styled("[ View in navigation. ]", Style::default().fg(Color::Cyan)),
        ];
        if let Some(title) = &self.info.title {
            lines.push(Line::raw(format!("Name: {}", title)));
        }
        if let Some(description) = &self.info.description {
            lines.push(Line::raw(format!("Description: {}", description)));
        }
        lines
    }
}

impl Widget for TemplateDetails {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title_bottom(" Enter: view in navigation | Esc: close "),
            )
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

/// The "View in navigation." button: close the popover, then open the
/// navigation panel on the template list
pub fn show_template_in_sidebar(store: &mut Store, on_close: impl FnOnce()) {
    on_close();
    store.dispatch(Action::open_navigation_panel_to_menu(VIEW_IN_NAVIGATION_MENU));
}
