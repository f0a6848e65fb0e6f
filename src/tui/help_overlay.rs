//! Help overlay listing every key binding, grouped by screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::{centered_rect, Component, Theme};

/// Modal listing the key bindings; any of `?`, `q`, or Esc closes it.
pub struct HelpOverlay;

impl HelpOverlay {
    /// Creates the overlay.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn section(theme: &Theme, title: &'static str) -> Line<'static> {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn binding(theme: &Theme, key: &'static str, action: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), Style::default().fg(theme.success)),
            Span::styled(action, Style::default().fg(theme.text)),
        ])
    }
}

impl Default for HelpOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for HelpOverlay {
    type Event = ();

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') => Some(()),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup_area = centered_rect(60, 80, area);
        f.render_widget(Clear, popup_area);

        let lines = vec![
            Self::section(theme, "SETUP"),
            Self::binding(theme, "Type", "Edit the selected player name"),
            Self::binding(theme, "Up/Down", "Select a name slot"),
            Self::binding(theme, "Ctrl+A", "Add a player slot"),
            Self::binding(theme, "Ctrl+D", "Remove the selected slot"),
            Self::binding(theme, "Enter", "Deal a board and start"),
            Line::from(""),
            Self::section(theme, "PLAYING"),
            Self::binding(theme, "Arrows", "Move the cursor (h/j/k/l work too)"),
            Self::binding(theme, "Enter/Space", "Reveal the clue under the cursor"),
            Self::binding(theme, "Click", "Reveal the clicked clue"),
            Self::binding(theme, "r", "Restart with the same players"),
            Line::from(""),
            Self::section(theme, "JUDGING"),
            Self::binding(theme, "c / y", "Answer was correct"),
            Self::binding(theme, "i / n", "Answer was incorrect"),
            Line::from(""),
            Self::section(theme, "SYSTEM"),
            Self::binding(theme, "?", "Toggle this help"),
            Self::binding(theme, "q / Esc", "Quit"),
        ];

        let body = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Help ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .style(Style::default().fg(theme.text).bg(theme.surface))
            .wrap(Wrap { trim: false });
        f.render_widget(body, popup_area);
    }
}
