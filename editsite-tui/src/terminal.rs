//! Terminal management
//!
//! The editor draws on the alternate screen in raw mode with the cursor
//! hidden. It only reads the keyboard, so mouse capture stays off and the
//! user's terminal selection keeps working. Leaving, whether normally or
//! from the panic hook, undoes all three.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::Result;

/// Terminal type alias
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen with the cursor hidden
pub fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen, Hide) {
        let _ = disable_raw_mode();
        return Err(err.into());
    }

    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Put the terminal back the way the shell expects it
pub fn restore_terminal(mut terminal: Tui) -> Result<()> {
    leave(terminal.backend_mut())?;
    Ok(())
}

fn leave(out: &mut impl Write) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)?;
    disable_raw_mode()
}

/// Restore the terminal before the default panic message is printed
///
/// Otherwise the message lands on the alternate screen and vanishes.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = leave(&mut io::stdout());
        original_hook(panic_info);
    }));
}
