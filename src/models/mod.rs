//! Data models for the board, its clues, and the players at the table.
//!
//! This module contains all the core data structures used throughout the
//! application. Models are independent of the UI and of clue acquisition;
//! they hold the rules of the game and nothing else.

pub mod board;
pub mod category;
pub mod clue;
pub mod game;
pub mod player;

// Re-export all model types
pub use board::{Board, CellRef};
pub use category::Category;
pub use clue::{Clue, RevealStep, Showing};
pub use game::{Game, GamePhase, Judgment, RevealOutcome, Verdict};
pub use player::{Player, Roster, RosterDraft};

/// Fully-populated categories for unit tests in other modules.
#[cfg(test)]
pub(crate) fn test_categories() -> Vec<Category> {
    ["Math", "Literature", "History"]
        .iter()
        .map(|title| {
            let clues = (0..5)
                .map(|i| Clue::new(format!("{title} q{i}"), format!("{title} a{i}")).unwrap())
                .collect();
            Category::new(*title, clues).unwrap()
        })
        .collect()
}

/// A small fully-populated board for unit tests in other modules.
#[cfg(test)]
pub(crate) fn test_board() -> Board {
    Board::new(test_categories()).unwrap()
}
