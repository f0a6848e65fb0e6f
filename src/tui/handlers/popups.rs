//! Popup input routing: the judge prompt and the help overlay.

use anyhow::Result;
use crossterm::event;

use crate::tui::{ActiveComponent, AppState, Component, PopupType};

/// Route input to whichever popup is active
pub fn handle_popup_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match state.active_popup {
        Some(PopupType::JudgePrompt) => handle_judge_prompt_input(state, key),
        Some(PopupType::HelpOverlay) => handle_help_overlay_input(state, key),
        None => Ok(false),
    }
}

/// Handle input for the judge prompt
fn handle_judge_prompt_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let verdict = match state.active_component {
        Some(ActiveComponent::JudgePrompt(ref mut prompt)) => prompt.handle_input(key),
        _ => None,
    };

    if let Some(verdict) = verdict {
        state.apply_judgment(verdict);
    }
    Ok(false)
}

/// Handle input for the help overlay
fn handle_help_overlay_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let close = match state.active_component {
        Some(ActiveComponent::HelpOverlay(ref mut help)) => help.handle_input(key).is_some(),
        _ => false,
    };

    if close {
        state.close_component();
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state_with_open_prompt() -> AppState {
        let mut state = AppState::for_tests();
        state.request_start();
        state.run_pending_deal();
        let cell = state.cursor;
        state.reveal_cell(cell);
        state.reveal_cell(cell);
        assert_eq!(state.active_popup, Some(PopupType::JudgePrompt));
        state
    }

    #[test]
    fn test_judge_keys_resolve_through_the_router() {
        let mut state = state_with_open_prompt();

        handle_popup_input(&mut state, key(KeyCode::Char('c'))).unwrap();

        assert!(state.active_popup.is_none());
        let game = state.game.as_ref().unwrap();
        assert_eq!(game.roster().get(0).unwrap().score, 100);
    }

    #[test]
    fn test_prompt_swallows_unrelated_keys() {
        let mut state = state_with_open_prompt();

        handle_popup_input(&mut state, key(KeyCode::Esc)).unwrap();
        handle_popup_input(&mut state, key(KeyCode::Char('q'))).unwrap();

        // Still open and still pending
        assert_eq!(state.active_popup, Some(PopupType::JudgePrompt));
        assert!(state
            .game
            .as_ref()
            .unwrap()
            .pending_judgment()
            .is_some());
    }

    #[test]
    fn test_help_overlay_closes_on_esc() {
        let mut state = AppState::for_tests();
        state.open_help_overlay();

        handle_popup_input(&mut state, key(KeyCode::Esc)).unwrap();

        assert!(state.active_popup.is_none());
        assert!(state.active_component.is_none());
    }
}
