//! Cluegrid Library
//!
//! This library provides the core functionality for the Cluegrid trivia
//! game: board acquisition from a jservice-compatible API or a local clue
//! pack, the game state machine, and the terminal user interface.

// Module declarations
pub mod api;
pub mod config;
pub mod constants;
pub mod models;
pub mod tui;
