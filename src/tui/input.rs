//! Keyboard input for the interactive window.

use std::io;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use super::state::Action;
use crate::pass::CharacterClass;
use crate::terminal::RawModeGuard;

/// Block until a key maps to an action. Raw mode is held only while reading.
pub fn read_action() -> io::Result<Action> {
    let _guard = RawModeGuard::new()?;

    loop {
        match read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if let Some(action) = action_for(key) {
                    return Ok(action);
                }
            }
            _ => {}
        }
    }
}

/// Map a key press to an action. Unbound keys give `None`.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            // Raw mode swallows SIGINT
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Right | KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => Action::LengthUp,
        KeyCode::Left | KeyCode::Down | KeyCode::Char('-') => Action::LengthDown,
        KeyCode::Char(c @ '1'..='4') => {
            let idx = c as usize - '1' as usize;
            Action::Toggle(CharacterClass::ALL[idx])
        }
        KeyCode::Enter | KeyCode::Char('g') | KeyCode::Char(' ') => Action::Generate,
        KeyCode::Char('c') | KeyCode::Char('y') => Action::Copy,
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        _ => return None,
    };
    Some(action)
}
