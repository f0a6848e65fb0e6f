//! Scoreboard widget: every player's score with the turn marker.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::AppState;
use crate::models::GamePhase;

/// Formats a score with a dollar sign, keeping the minus sign in front.
#[must_use]
pub fn format_score(score: i64) -> String {
    if score < 0 {
        format!("-${}", -score)
    } else {
        format!("${score}")
    }
}

/// Scoreboard widget renders one column per player.
pub struct Scoreboard;

impl Scoreboard {
    /// Render the roster with scores, marking the current player.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;

        let block = Block::default()
            .title(" Players ")
            .borders(Borders::ALL)
            .style(Style::default().fg(theme.primary).bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let Some(game) = state.game.as_ref() else {
            return;
        };
        let count = game.roster().len();
        if count == 0 || inner.width == 0 || inner.height == 0 {
            return;
        }

        let chunks =
            Layout::horizontal(vec![Constraint::Ratio(1, count as u32); count]).split(inner);

        for (index, player) in game.roster().iter().enumerate() {
            let has_turn = game.phase() == GamePhase::Playing && index == game.current_index();
            let marker = if has_turn { "\u{25b6} " } else { "" };

            let name_style = if has_turn {
                Style::default()
                    .fg(theme.accent)
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            let score_style = if player.score < 0 {
                Style::default().fg(theme.error)
            } else {
                Style::default().fg(theme.gold)
            };

            let lines = vec![
                Line::styled(format!("{marker}{}", player.name), name_style),
                Line::styled(format_score(player.score), score_style),
            ];
            let column = Paragraph::new(lines).alignment(Alignment::Center);
            f.render_widget(column, chunks[index]);
        }
    }
}
