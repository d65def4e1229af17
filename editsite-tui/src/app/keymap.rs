//! Key bindings
//!
//! Maps key presses to high-level [`Command`]s. Bindings are global; what a
//! command does depends on which panel or overlay is showing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Things the user can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    ToggleNavigation,
    ToggleInserter,
    ShowTemplateDetails,
    /// Enter: activate the highlighted row or button
    Activate,
    /// Backspace: go up one navigation menu
    Back,
    Up,
    Down,
    CycleDevice,
    ToggleFeature(&'static str),
    /// Esc: close the topmost overlay or panel
    Escape,
}

pub fn command_for(key: KeyEvent) -> Option<Command> {
    let command = match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Command::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Command::Quit,
        (KeyCode::Char('n'), KeyModifiers::NONE) => Command::ToggleNavigation,
        (KeyCode::Char('i'), KeyModifiers::NONE) => Command::ToggleInserter,
        (KeyCode::Char('t'), KeyModifiers::NONE) => Command::ShowTemplateDetails,
        (KeyCode::Char('d'), KeyModifiers::NONE) => Command::CycleDevice,
        (KeyCode::Char('f'), KeyModifiers::NONE) => Command::ToggleFeature("fixedToolbar"),
        (KeyCode::Char('z'), KeyModifiers::NONE) => Command::ToggleFeature("focusMode"),
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => Command::Up,
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => Command::Down,
        (KeyCode::Enter, _) => Command::Activate,
        (KeyCode::Backspace, _) => Command::Back,
        (KeyCode::Esc, _) => Command::Escape,
        _ => return None,
    };
    Some(command)
}

/// One-line help shown in the status bar
pub const HINTS: &str =
    "n: Navigation | i: Inserter | t: Template details | d: Device | f: Fixed toolbar | q: Quit";

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_panel_keys() {
        assert_eq!(command_for(key(KeyCode::Char('n'))), Some(Command::ToggleNavigation));
        assert_eq!(command_for(key(KeyCode::Char('i'))), Some(Command::ToggleInserter));
        assert_eq!(command_for(key(KeyCode::Esc)), Some(Command::Escape));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for(ctrl_c), Some(Command::Quit));
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(command_for(key(KeyCode::Char('x'))), None);
        assert_eq!(command_for(key(KeyCode::F(5))), None);
    }
}
