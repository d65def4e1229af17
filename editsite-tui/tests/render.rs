//! Drawing against an in-memory backend

use editsite_tui::{ui, App, Command};
use libeditsite::Config;
use ratatui::{backend::TestBackend, Terminal};

fn draw(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_closed_sidebar_shows_hints() {
    let app = App::new(&Config::default());
    let screen = draw(&app);

    assert!(screen.contains("n: Navigation"));
    assert!(!screen.contains("Template parts"));
}

#[test]
fn test_navigation_panel_lists_menus() {
    let mut app = App::new(&Config::default());
    app.handle(Command::ToggleNavigation);
    let screen = draw(&app);

    assert!(screen.contains("Navigation"));
    assert!(screen.contains("Templates"));
    assert!(screen.contains("Template parts"));
}

#[test]
fn test_inserter_panel_lists_blocks() {
    let mut app = App::new(&Config::default());
    app.handle(Command::ToggleInserter);
    let screen = draw(&app);

    assert!(screen.contains("core/paragraph"));
}

#[test]
fn test_template_details_popover() {
    let mut app = App::new(&Config::default());
    app.handle(Command::ToggleNavigation);
    app.handle(Command::Activate);
    app.handle(Command::Activate);
    app.handle(Command::ShowTemplateDetails);
    let screen = draw(&app);

    assert!(screen.contains("Template details"));
    assert!(screen.contains("Name: Index"));
}
