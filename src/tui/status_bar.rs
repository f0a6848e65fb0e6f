//! Status bar: contextual key hints and the latest status message.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, PopupType};
use crate::models::{Game, GamePhase};

/// The key hints for whatever currently has input focus.
#[must_use]
pub fn hints_for(state: &AppState) -> &'static str {
    match state.active_popup {
        Some(PopupType::JudgePrompt) => "c correct | i incorrect",
        Some(PopupType::HelpOverlay) => "Esc close",
        None => match state.game.as_ref().map(Game::phase) {
            Some(GamePhase::Playing) => {
                "arrows/hjkl move | Enter reveal | r restart | ? help | q quit"
            }
            Some(GamePhase::Setup) => "Enter deal | ? help | q quit",
            None => {
                "type a name | Up/Down select | Ctrl+A add | Ctrl+D remove | Enter start | Esc quit"
            }
        },
    }
}

/// Status bar widget renders at the bottom of every screen.
pub struct StatusBar;

impl StatusBar {
    /// Render the status message when one is set, key hints otherwise.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;

        let block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(theme.primary).bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let line = match &state.status_message {
            Some(message) => Line::styled(message.clone(), Style::default().fg(theme.text)),
            None => Line::styled(hints_for(state), Style::default().fg(theme.text_muted)),
        };
        f.render_widget(Paragraph::new(line), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Roster, RosterDraft};
    use crate::tui::AppState;

    #[test]
    fn test_hints_follow_focus() {
        let mut state = AppState::for_tests();
        assert!(hints_for(&state).contains("Enter start"));

        let roster = Roster::from_names(["Alice".to_string()]).unwrap();
        state.game = Some(crate::models::Game::new(roster));
        state
            .game
            .as_mut()
            .unwrap()
            .start(crate::models::test_board());
        assert!(hints_for(&state).contains("Enter reveal"));

        state.active_popup = Some(PopupType::JudgePrompt);
        assert!(hints_for(&state).contains("correct"));
    }

    #[test]
    fn test_setup_draft_shows_roster_hints() {
        let mut state = AppState::for_tests();
        state.draft = RosterDraft::new();
        assert!(hints_for(&state).contains("Ctrl+A add"));
    }

    #[test]
    fn test_between_rounds_shows_deal_hints() {
        let mut state = AppState::for_tests();
        state.request_start();
        state.run_pending_deal();
        state.game.as_mut().unwrap().clear_same_players();

        assert!(hints_for(&state).contains("Enter deal"));
    }
}
