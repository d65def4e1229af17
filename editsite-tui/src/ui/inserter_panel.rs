//! Block inserter sidebar

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::app::App;

/// Blocks offered by the inserter
pub const BLOCKS: &[&str] = &[
    "core/paragraph",
    "core/heading",
    "core/image",
    "core/group",
    "core/columns",
    "core/navigation",
    "core/site-title",
    "core/template-part",
];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = BLOCKS.iter().map(|name| ListItem::new(*name)).collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Inserter ")
                .title_bottom(" Esc: close ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut list_state = ListState::default().with_selected(Some(app.cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}
