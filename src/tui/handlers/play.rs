//! Play screen input: cursor movement, reveals, and the restart key.

use anyhow::Result;
use crossterm::event::{self, KeyCode};
use ratatui::layout::Rect;

use crate::models::{CellRef, Game};
use crate::tui::{board, play_chunks, AppState};

/// Handle input for the board while playing
pub fn handle_play_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
        KeyCode::Char('?') => state.open_help_overlay(),
        KeyCode::Char('r') => state.restart_same_players(),
        KeyCode::Left | KeyCode::Char('h') => move_cursor(state, -1, 0),
        KeyCode::Right | KeyCode::Char('l') => move_cursor(state, 1, 0),
        KeyCode::Up | KeyCode::Char('k') => move_cursor(state, 0, -1),
        KeyCode::Down | KeyCode::Char('j') => move_cursor(state, 0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => state.reveal_cell(state.cursor),
        _ => {}
    }
    Ok(false)
}

/// Handle input between rounds, before the next board is dealt
pub fn handle_between_rounds_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
        KeyCode::Enter | KeyCode::Char('r') => state.request_new_round(),
        KeyCode::Char('?') => state.open_help_overlay(),
        _ => {}
    }
    Ok(false)
}

/// Resolve a left click on the play screen to a cell reveal.
///
/// The click is hit-tested against the same board area the renderer used,
/// so a click lands on exactly the cell drawn under it. Clicks on borders,
/// headers, or outside the grid do nothing.
pub fn handle_play_click(state: &mut AppState, x: u16, y: u16, screen: Rect) {
    let board_area = play_chunks(screen)[1];
    let dimensions = state
        .game
        .as_ref()
        .and_then(Game::board)
        .map(|board| (board.category_count(), board.row_count()));
    let Some((columns, rows)) = dimensions else {
        return;
    };

    if let Some(cell) = board::cell_at(board_area, columns, rows, x, y) {
        state.cursor = cell;
        state.reveal_cell(cell);
    }
}

fn move_cursor(state: &mut AppState, dx: i64, dy: i64) {
    let dimensions = state
        .game
        .as_ref()
        .and_then(Game::board)
        .map(|board| (board.category_count(), board.row_count()));
    let Some((columns, rows)) = dimensions else {
        return;
    };

    let column = (state.cursor.column as i64 + dx).clamp(0, columns as i64 - 1);
    let row = (state.cursor.row as i64 + dy).clamp(0, rows as i64 - 1);
    state.cursor = CellRef::new(column as usize, row as usize);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GamePhase, Showing};
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn playing_state() -> AppState {
        let mut state = AppState::for_tests();
        state.request_start();
        state.run_pending_deal();
        assert!(state.error_message.is_none());
        state
    }

    #[test]
    fn test_cursor_moves_and_clamps() {
        let mut state = playing_state();

        handle_play_input(&mut state, key(KeyCode::Left)).unwrap();
        handle_play_input(&mut state, key(KeyCode::Up)).unwrap();
        assert_eq!(state.cursor, CellRef::new(0, 0));

        for _ in 0..10 {
            handle_play_input(&mut state, key(KeyCode::Right)).unwrap();
            handle_play_input(&mut state, key(KeyCode::Char('j'))).unwrap();
        }
        assert_eq!(state.cursor, CellRef::new(2, 4));
    }

    #[test]
    fn test_enter_reveals_under_cursor() {
        let mut state = playing_state();

        handle_play_input(&mut state, key(KeyCode::Enter)).unwrap();

        let board = state.game.as_ref().unwrap().board().unwrap();
        assert_eq!(
            board.clue_at(state.cursor).unwrap().showing(),
            Showing::Question
        );
    }

    #[test]
    fn test_q_and_esc_quit() {
        let mut state = playing_state();
        assert!(handle_play_input(&mut state, key(KeyCode::Char('q'))).unwrap());
        assert!(handle_play_input(&mut state, key(KeyCode::Esc)).unwrap());
    }

    #[test]
    fn test_click_reveals_the_clicked_cell() {
        let mut state = playing_state();
        let screen = Rect::new(0, 0, 80, 30);
        let board_area = play_chunks(screen)[1];

        let target = CellRef::new(1, 2);
        let rect = board::cell_rect(board_area, 3, 5, target).unwrap();
        handle_play_click(&mut state, rect.x, rect.y, screen);

        assert_eq!(state.cursor, target);
        let board = state.game.as_ref().unwrap().board().unwrap();
        assert_eq!(board.clue_at(target).unwrap().showing(), Showing::Question);
    }

    #[test]
    fn test_click_outside_the_grid_is_ignored() {
        let mut state = playing_state();
        let screen = Rect::new(0, 0, 80, 30);
        let before = state.cursor;

        // Top border of the board widget
        let board_area = play_chunks(screen)[1];
        handle_play_click(&mut state, board_area.x, board_area.y, screen);

        assert_eq!(state.cursor, before);
        let board = state.game.as_ref().unwrap().board().unwrap();
        assert!(board
            .categories()
            .flat_map(crate::models::Category::clues)
            .all(|clue| clue.showing() == Showing::Hidden));
    }

    #[test]
    fn test_between_rounds_enter_deals_again() {
        let mut state = playing_state();
        state.game.as_mut().unwrap().clear_same_players();

        handle_between_rounds_input(&mut state, key(KeyCode::Enter)).unwrap();
        state.run_pending_deal();

        assert_eq!(
            state.game.as_ref().map(Game::phase),
            Some(GamePhase::Playing)
        );
    }
}
