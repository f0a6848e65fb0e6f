//! Input handler modules for different TUI contexts.

pub mod play;
pub mod popups;
pub mod roster;

// Re-export handler functions
pub use play::{handle_between_rounds_input, handle_play_click, handle_play_input};
pub use popups::handle_popup_input;
pub use roster::handle_roster_input;
