//! Judge prompt: modal asking whether the spoken answer was correct.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::{centered_rect, Component, Theme};
use crate::models::Verdict;

/// Modal shown while a revealed answer awaits a correct/incorrect call.
///
/// The prompt captures all input until it emits a [`Verdict`]; there is no
/// way to dismiss it without judging, which is what keeps a second clue
/// from opening mid-judgment.
pub struct JudgePrompt {
    player_name: String,
    category_title: String,
    value: i64,
    answer: String,
}

impl JudgePrompt {
    /// Creates the prompt for the player and clue being judged.
    #[must_use]
    pub fn new(
        player_name: impl Into<String>,
        category_title: impl Into<String>,
        value: i64,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            player_name: player_name.into(),
            category_title: category_title.into(),
            value,
            answer: answer.into(),
        }
    }
}

impl Component for JudgePrompt {
    type Event = Verdict;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Char('c' | 'y') => Some(Verdict::Correct),
            KeyCode::Char('i' | 'n') => Some(Verdict::Incorrect),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup_area = centered_rect(50, 40, area);
        f.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Judge ")
            .borders(Borders::ALL)
            .style(Style::default().fg(theme.accent).bg(theme.surface));
        let inner = block.inner(popup_area);
        f.render_widget(block, popup_area);

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    self.player_name.clone(),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" answers ", Style::default().fg(theme.text)),
                Span::styled(
                    self.category_title.clone(),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" for ${}", self.value),
                    Style::default().fg(theme.gold),
                ),
            ]),
            Line::from(""),
            Line::styled(
                self.answer.clone(),
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::from(vec![
                Span::styled("c", Style::default().fg(theme.success)),
                Span::styled(" correct    ", Style::default().fg(theme.text_muted)),
                Span::styled("i", Style::default().fg(theme.error)),
                Span::styled(" incorrect", Style::default().fg(theme.text_muted)),
            ]),
        ];

        let body = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(body, inner);
    }
}
