//! Setup screen input handler: editing the player name slots.

use anyhow::Result;
use crossterm::event::{self, KeyCode, KeyModifiers};

use crate::tui::AppState;

/// Handle input for the roster editor
pub fn handle_roster_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => return Ok(true),
        KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.roster_cursor = state.draft.add_slot();
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.draft.remove_slot(state.roster_cursor);
            state.roster_cursor = state
                .roster_cursor
                .min(state.draft.len().saturating_sub(1));
        }
        KeyCode::Up => state.roster_cursor = state.roster_cursor.saturating_sub(1),
        KeyCode::Down => {
            if state.roster_cursor + 1 < state.draft.len() {
                state.roster_cursor += 1;
            }
        }
        KeyCode::Enter => state.request_start(),
        KeyCode::Backspace => state.draft.pop_char(state.roster_cursor),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.draft.push_char(state.roster_cursor, c);
        }
        _ => {}
    }
    Ok(false)
}
