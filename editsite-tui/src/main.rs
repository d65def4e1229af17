//! editsite-tui - Terminal UI for the site editor
//!
//! Opens the editing surface with its navigation and inserter sidebars.
//! Logs go to `EDITSITE_LOG_FILE` when it names a file; the terminal itself is
//! never written to by the logger.

use editsite_tui::{
    app::{event::EventHandler, event::TuiEvent, keymap::command_for},
    error::Result,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui, App,
};
use libeditsite::logging::{config_from_env, log_file_from_env, LogFormat};
use libeditsite::Config;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    if log_file_from_env().is_some() {
        config_from_env(LogFormat::Text).init()?;
    }

    let config = Config::load()?;
    let app = App::new(&config);
    tracing::info!(templates = app.catalog.len(), "Starting editor");

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, app);
    restore_terminal(terminal)?;

    result
}

fn run_app(terminal: &mut Tui, mut app: App) -> Result<()> {
    let event_handler = EventHandler::new(app.tick_rate_ms);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, &app))?;

        match event_handler.next()? {
            TuiEvent::Key(key) => {
                if let Some(command) = command_for(key) {
                    tracing::debug!(?command, "Handling command");
                    app.handle(command);
                }
            }
            TuiEvent::Resize(_, _) | TuiEvent::Tick => {}
        }
    }

    Ok(())
}
