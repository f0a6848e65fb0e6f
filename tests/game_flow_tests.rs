//! Integration tests for a full game round driven through the input handlers.
//!
//! Covers the loop a table of players actually runs:
//! - The setup screen builds a roster and deals a board
//! - Reveals step a clue from hidden to question to answer
//! - Verdicts move scores or pass the turn
//! - Restart deals a fresh board for the same players

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use cluegrid::api::ClueSource;
use cluegrid::config::{ApiConfig, Config};
use cluegrid::models::{Board, Category, CellRef, Clue, GamePhase, RosterDraft, Showing};
use cluegrid::tui::handlers::{handle_play_input, handle_popup_input, handle_roster_input};
use cluegrid::tui::{AppState, PopupType};

/// Creates three fully-populated categories for pack play.
fn test_categories() -> Vec<Category> {
    ["Math", "Rivers", "Opera"]
        .iter()
        .map(|title| {
            let clues = (0..5)
                .map(|row| {
                    Clue::new(
                        format!("{title} question {row}"),
                        format!("{title} answer {row}"),
                    )
                    .expect("test clue should be valid")
                })
                .collect();
            Category::new(*title, clues).expect("test category should be valid")
        })
        .collect()
}

/// Creates an `AppState` playing a three-category pack with the given draft.
fn app_state_with_draft(category_count: usize, draft: RosterDraft) -> AppState {
    let config = Config {
        api: ApiConfig {
            category_count,
            ..ApiConfig::default()
        },
        ..Config::default()
    };
    AppState::new(
        config,
        ClueSource::Pack(test_categories()),
        ChaCha8Rng::seed_from_u64(42),
        draft,
    )
}

/// Creates an `AppState` with Alice and Bob seated, still on the setup screen.
fn test_app_state() -> AppState {
    app_state_with_draft(3, RosterDraft::with_names(["Alice", "Bob"]))
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Presses Enter on the setup screen to deal the board and start playing.
///
/// Enter queues the deal behind a notice frame; the event loop would run
/// it after drawing, so tests run it explicitly.
fn start(state: &mut AppState) {
    let quit = handle_roster_input(state, key(KeyCode::Enter)).expect("start should not error");
    assert!(!quit, "Starting the game should not quit");
    state.run_pending_deal();
    assert!(state.error_message.is_none(), "Start should not raise an error");
}

/// Reveals the clue under the cursor through to its answer, then judges it.
fn play_cell(state: &mut AppState, cell: CellRef, verdict_key: char) {
    state.cursor = cell;
    handle_play_input(state, key(KeyCode::Enter)).expect("reveal should not error");
    handle_play_input(state, key(KeyCode::Enter)).expect("reveal should not error");
    assert_eq!(
        state.active_popup,
        Some(PopupType::JudgePrompt),
        "Answer reveal should open the judge prompt"
    );
    handle_popup_input(state, key(KeyCode::Char(verdict_key))).expect("verdict should not error");
}

#[test]
fn test_setup_enter_deals_board_and_seats_players() {
    let mut state = test_app_state();
    assert!(state.game.is_none(), "No game should exist before setup ends");

    start(&mut state);

    let game = state.game.as_ref().expect("Game should exist after start");
    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(game.roster().len(), 2, "Both players should be seated");
    assert_eq!(game.current_player().name, "Alice", "First seat starts");

    let board = game.board().expect("A board should be dealt");
    assert_eq!(board.category_count(), 3);
    assert_eq!(board.row_count(), 5);

    let status = state.status_message.as_deref().unwrap_or("");
    assert!(
        status.contains("Alice"),
        "Status should announce the starter, got: {status}"
    );
}

#[test]
fn test_typed_name_joins_the_game() {
    let mut state = app_state_with_draft(3, RosterDraft::new());

    for c in "Zoe".chars() {
        handle_roster_input(&mut state, key(KeyCode::Char(c))).expect("typing should not error");
    }
    start(&mut state);

    let game = state.game.as_ref().expect("Game should exist after start");
    assert_eq!(game.roster().len(), 1);
    assert_eq!(game.current_player().name, "Zoe");
}

#[test]
fn test_correct_verdict_scores_and_keeps_the_turn() {
    let mut state = test_app_state();
    start(&mut state);

    // Navigate to column 1, row 1 with the arrow keys
    handle_play_input(&mut state, key(KeyCode::Right)).expect("move should not error");
    handle_play_input(&mut state, key(KeyCode::Down)).expect("move should not error");
    assert_eq!(state.cursor, CellRef::new(1, 1));

    handle_play_input(&mut state, key(KeyCode::Enter)).expect("reveal should not error");
    {
        let game = state.game.as_ref().unwrap();
        let clue = game.board().unwrap().clue_at(CellRef::new(1, 1)).unwrap();
        assert_eq!(clue.showing(), Showing::Question, "First Enter shows the question");
        assert!(state.active_popup.is_none(), "No judging before the answer is up");
    }

    handle_play_input(&mut state, key(KeyCode::Enter)).expect("reveal should not error");
    assert_eq!(state.active_popup, Some(PopupType::JudgePrompt));

    handle_popup_input(&mut state, key(KeyCode::Char('c'))).expect("verdict should not error");

    let game = state.game.as_ref().unwrap();
    assert_eq!(
        game.roster().get(0).unwrap().score,
        Board::row_value(1),
        "A correct answer banks the row value"
    );
    assert_eq!(game.current_player().name, "Alice", "Correct answers keep the turn");
    assert!(state.active_popup.is_none(), "Judging closes the prompt");
    assert!(game.pending_judgment().is_none(), "Nothing left to judge");
}

#[test]
fn test_incorrect_verdict_passes_the_turn_without_scoring() {
    let mut state = test_app_state();
    start(&mut state);

    play_cell(&mut state, CellRef::new(0, 0), 'i');

    let game = state.game.as_ref().unwrap();
    assert_eq!(game.roster().get(0).unwrap().score, 0, "Misses cost nothing");
    assert_eq!(game.current_player().name, "Bob", "The turn passes on a miss");
}

#[test]
fn test_playing_out_the_board_then_restarting() {
    let mut state = test_app_state();
    start(&mut state);

    for column in 0..3 {
        for row in 0..5 {
            play_cell(&mut state, CellRef::new(column, row), 'c');
        }
    }

    {
        let game = state.game.as_ref().unwrap();
        let board = game.board().unwrap();
        assert!(board.is_exhausted(), "Every clue should be played");
        assert_eq!(board.remaining(), 0);

        let total: i64 = (0..5).map(Board::row_value).sum::<i64>() * 3;
        assert_eq!(
            game.roster().get(0).unwrap().score,
            total,
            "Running the table banks every clue on the board"
        );

        let status = state.status_message.as_deref().unwrap_or("");
        assert!(
            status.contains("Board complete"),
            "Status should call out the finished board, got: {status}"
        );
    }

    // r deals a fresh board for the same table
    handle_play_input(&mut state, key(KeyCode::Char('r'))).expect("restart should not error");
    state.run_pending_deal();

    let game = state.game.as_ref().unwrap();
    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(game.roster().len(), 2, "Restart keeps the players");
    assert_eq!(game.roster().get(0).unwrap().score, 0, "Restart resets scores");
    assert_eq!(game.current_player().name, "Alice", "Restart returns to the first seat");
    assert_eq!(
        game.board().unwrap().remaining(),
        15,
        "Restart deals a full board"
    );
}

#[test]
fn test_deal_failure_keeps_the_setup_screen_editable() {
    // Ask for more categories than the pack holds
    let mut state = app_state_with_draft(6, RosterDraft::with_names(["Alice", "Bob"]));

    let quit =
        handle_roster_input(&mut state, key(KeyCode::Enter)).expect("start should not error");
    assert!(!quit);
    state.run_pending_deal();

    assert!(state.game.is_none(), "A failed deal should not start a game");
    let error = state.error_message.as_deref().unwrap_or("");
    assert!(
        error.contains("fewer categories"),
        "The error should explain the short pack, got: {error}"
    );
}

#[test]
fn test_help_overlay_opens_and_closes() {
    let mut state = test_app_state();
    start(&mut state);

    handle_play_input(&mut state, key(KeyCode::Char('?'))).expect("help should not error");
    assert_eq!(state.active_popup, Some(PopupType::HelpOverlay));

    handle_popup_input(&mut state, key(KeyCode::Esc)).expect("close should not error");
    assert!(state.active_popup.is_none(), "Esc should close the help overlay");
}
