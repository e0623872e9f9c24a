// Keyboard handling for the form screen

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{App, AppFlags};

/// Returns Ok(false) when the app should exit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    // Ctrl+C / Esc - quit
    if key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    {
        app.flags.insert(AppFlags::EXIT);
        return Ok(false);
    }

    // Ctrl+O - browse for the focused field
    if key.code == KeyCode::Char('o') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.open_picker = true;
        return Ok(true);
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = app.focus.next();
            app.flags.insert(AppFlags::REDRAW);
        }
        KeyCode::Enter => {
            app.run_requested = true;
        }
        KeyCode::Backspace => {
            app.focused_field_mut().pop();
            app.flags.insert(AppFlags::REDRAW);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.focused_field_mut().push(c);
            app.flags.insert(AppFlags::REDRAW);
        }
        _ => {}
    }

    Ok(true)
}
