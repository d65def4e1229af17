//! UI rendering
//!
//! Render functions read the store through selectors and draw; they never
//! dispatch. Input goes through [`crate::app::App::handle`].

pub mod inserter_panel;
pub mod left_sidebar;
pub mod navigation_panel;
pub mod template_details;

use libeditsite::store::selectors;
use libeditsite::{DeviceType, EditSiteState};
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{keymap, App, Overlay};
use left_sidebar::sidebar_content;
use template_details::TemplateDetails;

const SIDEBAR_WIDTH: u16 = 34;

/// Render the application UI
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let state = app.store.state();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let canvas_area = if sidebar_content(state).is_some() {
        let columns = Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(10)])
            .split(rows[0]);
        left_sidebar::render(frame, columns[0], app);
        columns[1]
    } else {
        rows[0]
    };

    render_canvas(frame, canvas_area, app, state);
    render_status_bar(frame, rows[1], app);

    if app.overlay == Some(Overlay::TemplateDetails) {
        if let Some(details) = TemplateDetails::new(app.edited_template(), &state.settings) {
            let popup = centered(area, 56, 8);
            frame.render_widget(Clear, popup);
            frame.render_widget(details, popup);
        }
    }
}

/// Width share of the canvas for each preview device
fn canvas_percent(device: &DeviceType) -> u16 {
    match device {
        DeviceType::Desktop | DeviceType::Other(_) => 100,
        DeviceType::Tablet => 70,
        DeviceType::Mobile => 45,
    }
}

fn render_canvas(frame: &mut Frame, area: Rect, app: &App, state: &EditSiteState) {
    let device = selectors::get_preview_device_type(state);
    let [preview] = Layout::horizontal([Constraint::Percentage(canvas_percent(device))])
        .flex(Flex::Center)
        .areas(area);

    let editing = match app.edited_template() {
        Some(template) => template.title.clone().unwrap_or_else(|| template.slug.clone()),
        None => match selectors::get_edited_post_id(state) {
            Some(id) => id.to_string(),
            None => "nothing".to_string(),
        },
    };

    let mut lines = vec![Line::from(vec![
        Span::styled("Editing: ", Style::default().fg(Color::DarkGray)),
        Span::raw(editing),
        Span::styled(
            format!(" ({})", selectors::get_edited_post_type(state)),
            Style::default().fg(Color::DarkGray),
        ),
    ])];

    if let Some(path) = selectors::get_page(state).and_then(|page| page.path.as_deref()) {
        lines.push(Line::raw(format!("Page: {}", path)));
    }
    if let Some(home) = selectors::get_home_template_id(state) {
        lines.push(Line::raw(format!("Home template: {}", home)));
    }

    let features: Vec<String> = state
        .preferences
        .features
        .iter()
        .map(|(name, enabled)| format!("{} {}", if *enabled { "✓" } else { "✗" }, name))
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::raw(format!("Features: {}", features.join("  "))));

    let canvas = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" Canvas ({}) ", device))
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(canvas, preview);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = match &app.status {
        Some(message) => message.as_str(),
        None => keymap::HINTS,
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));

    frame.render_widget(status, area);
}

/// Rect of at most `width` x `height`, centered in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
