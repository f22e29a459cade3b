use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::UiState;
use crate::catalog;
use crate::presentation::{Event, Mode, ViewState};

/// Translate one key press into presentation events.
///
/// Text editing updates the local input and mirrors it into the state as
/// `EditText`, so the override is live while typing.
pub(super) fn handle_key(ui: &mut UiState, state: &ViewState, key: KeyEvent) -> Vec<Event> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        ui.should_quit = true;
        return Vec::new();
    }

    if ui.editing {
        handle_editing_key(ui, key.code)
    } else {
        handle_browse_key(ui, state, key.code)
    }
}

fn handle_browse_key(ui: &mut UiState, state: &ViewState, key: KeyCode) -> Vec<Event> {
    match key {
        KeyCode::Char('q') => {
            ui.should_quit = true;
            Vec::new()
        }
        KeyCode::Char(digit @ '1'..='9') => {
            let idx = digit as usize - '1' as usize;
            catalog::all()
                .get(idx)
                .map(|scenario| vec![Event::SelectScenario(scenario.id.to_string())])
                .unwrap_or_default()
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('m') => vec![Event::ToggleMode],
        KeyCode::Char('s') => vec![Event::SetMode(Mode::Survival)],
        KeyCode::Char('c') => vec![Event::SetMode(Mode::Creative)],
        KeyCode::Char('r') => vec![Event::Reanalyze],
        KeyCode::Char('e') | KeyCode::Enter => {
            ui.editing = true;
            ui.input.replace(state.current_text());
            Vec::new()
        }
        _ => Vec::new(),
    }
}

fn handle_editing_key(ui: &mut UiState, key: KeyCode) -> Vec<Event> {
    let changed = match key {
        KeyCode::Esc => {
            ui.editing = false;
            return Vec::new();
        }
        KeyCode::Enter => {
            ui.editing = false;
            return vec![Event::Reanalyze];
        }
        KeyCode::Char(ch) => {
            ui.input.insert(ch);
            true
        }
        KeyCode::Backspace => ui.input.backspace(),
        KeyCode::Delete => ui.input.delete(),
        KeyCode::Left => {
            ui.input.move_left();
            false
        }
        KeyCode::Right => {
            ui.input.move_right();
            false
        }
        KeyCode::Home => {
            ui.input.home();
            false
        }
        KeyCode::End => {
            ui.input.end();
            false
        }
        _ => false,
    };

    if changed {
        vec![Event::EditText(ui.input.value.clone())]
    } else {
        Vec::new()
    }
}
