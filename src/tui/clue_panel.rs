//! Clue panel: the text of the clue under the cursor.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::AppState;
use crate::models::{Board, Showing};

/// Clue panel renders the cursor cell's category, value, and reveal state.
pub struct CluePanel;

impl CluePanel {
    /// Render the clue text for the cell under the cursor.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;

        let block = Block::default()
            .title(" Clue ")
            .borders(Borders::ALL)
            .style(Style::default().fg(theme.primary).bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let Some(board) = state.game.as_ref().and_then(|game| game.board()) else {
            return;
        };
        let cell = state.cursor;
        let (Some(category), Some(clue)) = (board.category(cell.column), board.clue_at(cell))
        else {
            return;
        };

        let heading = Line::from(vec![
            Span::styled(
                category.title().to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  for ${}", Board::row_value(cell.row)),
                Style::default().fg(theme.gold),
            ),
        ]);

        let mut lines = vec![heading];
        match clue.showing() {
            Showing::Hidden => {
                lines.push(Line::styled(
                    "Enter reveals the question",
                    Style::default().fg(theme.text_muted),
                ));
            }
            Showing::Question => {
                lines.push(Line::styled(
                    clue.question().to_string(),
                    Style::default().fg(theme.text),
                ));
                lines.push(Line::styled(
                    "Enter reveals the answer",
                    Style::default().fg(theme.text_muted),
                ));
            }
            Showing::Answer => {
                lines.push(Line::styled(
                    clue.question().to_string(),
                    Style::default().fg(theme.text_secondary),
                ));
                lines.push(Line::styled(
                    clue.answer().to_string(),
                    Style::default()
                        .fg(theme.success)
                        .add_modifier(Modifier::BOLD),
                ));
            }
        }

        let panel = Paragraph::new(lines).wrap(Wrap { trim: true });
        f.render_widget(panel, inner);
    }
}
