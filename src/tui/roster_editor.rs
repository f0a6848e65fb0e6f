//! Roster editor: the setup screen's list of player name slots.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::AppState;

/// Roster editor renders the draft name slots with an edit cursor.
pub struct RosterEditor;

impl RosterEditor {
    /// Render the name slots, highlighting the selected one.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;

        let block = Block::default()
            .title(" Players ")
            .borders(Borders::ALL)
            .style(Style::default().fg(theme.primary).bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut lines = vec![
            Line::styled(
                "Who is playing?",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
        ];

        for (index, slot) in state.draft.slots().enumerate() {
            let selected = index == state.roster_cursor;
            let marker = if selected { "> " } else { "  " };

            let name_span = if slot.is_empty() {
                // Blank slots take this name when the game starts
                Span::styled(
                    format!("player{}", index + 1),
                    Style::default()
                        .fg(theme.text_muted)
                        .add_modifier(Modifier::ITALIC),
                )
            } else {
                let style = if selected {
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text)
                };
                Span::styled(slot.to_string(), style)
            };

            let mut spans = vec![
                Span::styled(
                    format!("{marker}{}. ", index + 1),
                    Style::default().fg(if selected { theme.accent } else { theme.text_muted }),
                ),
                name_span,
            ];
            if selected {
                spans.push(Span::styled(
                    "\u{2590}",
                    Style::default().fg(theme.accent),
                ));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(""));
        lines.push(Line::styled(
            "Enter deals a board and starts the game",
            Style::default().fg(theme.text_muted),
        ));

        let list = Paragraph::new(lines).alignment(Alignment::Left);
        f.render_widget(list, inner);
    }
}
